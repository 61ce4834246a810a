//! User store trait definitions.

use async_trait::async_trait;
use entities::User;

use crate::UserStoreResult;

/// Trait for user storage operations.
///
/// Users are kept in insertion order. There are no update or delete
/// operations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Lists all users in insertion order.
    async fn list(&self) -> UserStoreResult<Vec<User>>;

    /// Appends a user to the end of the store.
    ///
    /// No uniqueness check is made here; see [`UserStore::append_if_absent`].
    async fn append(&self, user: User) -> UserStoreResult<()>;

    /// Returns true if a stored user has exactly this email.
    async fn exists(&self, email: &str) -> UserStoreResult<bool>;

    /// Appends the user unless one with the same email is already stored.
    ///
    /// The lookup and the append happen atomically. Fails with
    /// [`UserStoreError::AlreadyExists`](crate::UserStoreError::AlreadyExists)
    /// when nothing was inserted.
    async fn append_if_absent(&self, user: User) -> UserStoreResult<()>;

    /// Returns the number of stored users.
    async fn len(&self) -> UserStoreResult<usize>;

    /// Returns true if no users are stored.
    async fn is_empty(&self) -> UserStoreResult<bool> {
        Ok(self.len().await? == 0)
    }
}
