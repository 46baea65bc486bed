//! Association create handler.

use crate::error::{AppError, ValidationErrorBody};
use crate::models::{CreateRestaurantPizzaRequest, CreatedRestaurantPizza};
use crate::response::success_created;
use crate::service::CrudService;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::Value;
use tracing::instrument;

/// The body is read raw: a missing or malformed body is treated as an empty
/// payload and fails validation like any other bad input.
#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Association created", body = CreatedRestaurantPizza),
        (
            status = 400,
            description = "Invalid price, or unknown pizza or restaurant",
            body = ValidationErrorBody
        ),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let created = CrudService::create_restaurant_pizza(&state.pool, &payload).await?;
    Ok(success_created(created))
}
