//! Service routes that sit beside the resource API.

use crate::response::{index_page, success_ok};
use crate::state::AppState;
use crate::store;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

/// Outcome of the readiness check; the store is the only dependency.
enum Readiness {
    Ready,
    StoreUnavailable,
}

impl IntoResponse for Readiness {
    fn into_response(self) -> Response {
        let (code, status, database) = match self {
            Readiness::Ready => (StatusCode::OK, "ok", "ok"),
            Readiness::StoreUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
            }
        };
        let body = StatusBody {
            status,
            database: Some(database),
        };
        (code, Json(body)).into_response()
    }
}

async fn health() -> impl IntoResponse {
    success_ok(StatusBody {
        status: "ok",
        database: None,
    })
}

async fn ready(State(state): State<AppState>) -> Readiness {
    match store::ping(&state.pool).await {
        Ok(()) => Readiness::Ready,
        Err(e) => {
            tracing::warn!(error = %e, "store unreachable, reporting not ready");
            Readiness::StoreUnavailable
        }
    }
}

async fn version() -> impl IntoResponse {
    success_ok(VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `/` and `/health` need nothing; `/ready` checks the pool in `state`.
pub fn common_routes(state: AppState) -> Router {
    let stateless = Router::new()
        .route("/", get(|| async { index_page() }))
        .route("/health", get(health))
        .route("/version", get(version));
    let stateful = Router::new()
        .route("/ready", get(ready))
        .with_state(state);
    stateless.merge(stateful)
}
