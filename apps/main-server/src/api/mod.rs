//! API endpoints.

pub mod register;
pub mod users;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use user_store::UserStore;

use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: UserStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/register", post(register::register_user))
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
