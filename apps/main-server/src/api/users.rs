//! User listing endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use entities::User;
use user_store::UserStore;

use crate::error::ServerResult;
use crate::state::AppState;

/// Lists every registered user in registration order.
pub async fn list_users<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<Vec<User>>> {
    tracing::info!("GET /users endpoint was accessed");

    let users = state.store.list().await?;
    Ok(Json(users))
}
