//! CrudService: explicit queries over the three tables, plus payload validation.

mod crud;
pub mod validation;
pub use crud::CrudService;
pub use validation::RequestValidator;
