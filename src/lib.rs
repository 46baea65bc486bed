//! Pizzeria API: restaurants, pizzas and the prices linking them, over SQLite.

pub mod api_docs;
pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use api_docs::ApiDoc;
pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{api_routes, app, common_routes, docs_routes};
pub use seed::seed_sample_data;
pub use service::CrudService;
pub use state::AppState;
pub use store::connect;
