//! Response helpers. Bodies are bare JSON values, with no envelope.

use axum::{http::StatusCode, response::Html, Json};
use serde::Serialize;

pub const INDEX_HTML: &str = "<h1>Code challenge</h1>";

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn success_created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
