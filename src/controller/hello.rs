use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse};

/// Tag for grouping the demo endpoint in OpenAPI documentation
pub static HELLO_TAG: &str = "hello";

/// Unauthenticated demo endpoint that answers after a short async delay.
#[utoipa::path(
    get,
    path = "/hello",
    tag = HELLO_TAG,
    responses(
        (status = 200, description = "Greeting", body = String)
    ),
)]
pub async fn hello() -> impl IntoResponse {
    tokio::time::sleep(Duration::from_millis(200)).await;

    (StatusCode::OK, "Hello from questlog!")
}
