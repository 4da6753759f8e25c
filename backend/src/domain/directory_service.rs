//! User directory service backed by a [`UserRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersQuery};
use crate::domain::{Error, User, UserId};

/// Implements [`UsersQuery`] over a user repository.
#[derive(Clone)]
pub struct UserDirectoryService<R> {
    users: Arc<R>,
}

impl<R> UserDirectoryService<R> {
    /// Create a service reading from `users`.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

/// Translate a user persistence failure into a domain error.
pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    debug!(%error, "user repository failure");
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::NotFound { user_id } => {
            Error::not_found(format!("user {user_id} not found"))
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn other_users(&self, current: &UserId) -> Result<Vec<User>, Error> {
        self.users
            .list_except(current)
            .await
            .map_err(map_user_persistence_error)
    }

    async fn current_user(&self, current: &UserId) -> Result<Option<User>, Error> {
        self.users
            .find_by_id(current)
            .await
            .map_err(map_user_persistence_error)
    }
}
