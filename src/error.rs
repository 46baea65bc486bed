//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// The one message clients see for any failed create, however many checks failed.
pub const VALIDATION_ERRORS: &str = "validation errors";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config load: {0}")]
    Load(String),
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Carries the entity name, e.g. "Restaurant".
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Itemized reasons; collapsed to [`VALIDATION_ERRORS`] on the wire.
    #[error("validation: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(entity) => {
                tracing::warn!(entity, "not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorBody {
                        error: format!("{} not found", entity),
                    }),
                )
                    .into_response()
            }
            AppError::Validation(reasons) => {
                tracing::debug!(?reasons, "validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorBody {
                        errors: vec![VALIDATION_ERRORS.to_string()],
                    }),
                )
                    .into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                internal_error()
            }
            AppError::Config(e) => {
                tracing::error!(error = %e, "config error");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "internal server error".into(),
        }),
    )
        .into_response()
}
