//! In-memory user store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use entities::User;
use tokio::sync::RwLock;

use crate::{UserStore, UserStoreError, UserStoreResult};

/// In-memory user store. Contents are lost when the process exits.
#[derive(Debug, Default, Clone)]
pub struct MemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserStore {
    /// Creates a new, empty in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> UserStoreResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn append(&self, user: User) -> UserStoreResult<()> {
        let mut users = self.users.write().await;
        users.push(user);
        Ok(())
    }

    async fn exists(&self, email: &str) -> UserStoreResult<bool> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.email == email))
    }

    async fn append_if_absent(&self, user: User) -> UserStoreResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserStoreError::already_exists(user.email));
        }
        tracing::trace!(count = users.len() + 1, "Appending user");
        users.push(user);
        Ok(())
    }

    async fn len(&self) -> UserStoreResult<usize> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}
