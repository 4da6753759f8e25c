//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{ProfileChanges, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The addressed user does not exist.
        NotFound { user_id: String } => "user {user_id} not found",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Every user except `id`, ordered by first name ascending.
    async fn list_except(&self, id: &UserId) -> Result<Vec<User>, UserPersistenceError>;

    /// Overwrite the profile names and department of `id`.
    ///
    /// Returns [`UserPersistenceError::NotFound`] when no row was updated.
    async fn update_profile(
        &self,
        id: &UserId,
        changes: &ProfileChanges,
    ) -> Result<(), UserPersistenceError>;
}
