use crate::error::AppError;
use crate::models::Pizza;
use crate::response::success_ok;
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "All pizzas, without associations", body = [Pizza]),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn list_pizzas(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list_pizzas(&state.pool).await?;
    Ok(success_ok(rows))
}
