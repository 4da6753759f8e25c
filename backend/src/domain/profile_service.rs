//! Profile update service: validation followed by a single persistence call.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::directory_service::map_user_persistence_error;
use crate::domain::ports::{ProfileCommand, UserRepository};
use crate::domain::{ProfileSubmission, ProfileUpdateError, UserId};

/// Implements [`ProfileCommand`] over a user repository.
#[derive(Clone)]
pub struct ProfileUpdateService<R> {
    users: Arc<R>,
}

impl<R> ProfileUpdateService<R> {
    /// Create a service writing to `users`.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> ProfileCommand for ProfileUpdateService<R>
where
    R: UserRepository,
{
    async fn update_profile(
        &self,
        user_id: &UserId,
        submission: ProfileSubmission,
    ) -> Result<(), ProfileUpdateError> {
        let changes = submission.validate()?;
        self.users
            .update_profile(user_id, &changes)
            .await
            .map_err(map_user_persistence_error)?;
        info!(%user_id, department = %changes.department, "profile updated");
        Ok(())
    }
}

#[cfg(test)]
#[path = "profile_service_tests.rs"]
mod tests;
