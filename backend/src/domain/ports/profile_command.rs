//! Driving port for profile edits.

use async_trait::async_trait;

use crate::domain::{ProfileSubmission, ProfileUpdateError, UserId};

/// Domain use-case port for updating the signed-in user's profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileCommand: Send + Sync {
    /// Validate `submission` and, if it passes, persist it for `user_id`.
    async fn update_profile(
        &self,
        user_id: &UserId,
        submission: ProfileSubmission,
    ) -> Result<(), ProfileUpdateError>;
}

/// Fixture command used when no database is configured.
///
/// Runs the full validation and discards the accepted changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileCommand;

#[async_trait]
impl ProfileCommand for FixtureProfileCommand {
    async fn update_profile(
        &self,
        _user_id: &UserId,
        submission: ProfileSubmission,
    ) -> Result<(), ProfileUpdateError> {
        submission.validate().map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_accepts_valid_submission() {
        let submission = ProfileSubmission::from_text("Ada", "Lovelace", "ENGINEERING");
        FixtureProfileCommand
            .update_profile(&UserId::random(), submission)
            .await
            .expect("valid submission accepted");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_still_validates() {
        let submission = ProfileSubmission::from_text("", "Lovelace", "ENGINEERING");
        let result = FixtureProfileCommand
            .update_profile(&UserId::random(), submission)
            .await;
        assert!(matches!(
            result,
            Err(ProfileUpdateError::ValidationFailed { .. })
        ));
    }
}
