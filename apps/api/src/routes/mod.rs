pub mod health;
pub mod index;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::AppError;
use crate::generator::handlers as generator;
use crate::state::AppState;
use crate::validator::handlers as validator;

/// Turns a handler panic into the generic 500 body instead of a dropped connection.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        // Format check (caller-supplied credential)
        .route("/check_email", post(validator::handle_check_email))
        // Generator (server-side credential)
        .route("/generate_email", post(generator::handle_generate_email))
        .route("/analyze_existing", post(generator::handle_analyze_existing))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
