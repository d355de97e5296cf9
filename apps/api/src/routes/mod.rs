pub mod auth;
pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let prompt_routes = Router::new()
        .route("/prompt", post(handlers::handle_prompt))
        .route_layer(middleware::from_fn(auth::require_authorization));

    Router::new()
        .route("/health", get(health::health_handler))
        .merge(prompt_routes)
        .with_state(state)
}
