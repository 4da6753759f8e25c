//! Driving port for user-facing directory queries.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch colleagues and the
//! signed-in user without importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

use super::fixture_data;

/// Domain use-case port for the user directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user except `current`, ordered by first name ascending.
    async fn other_users(&self, current: &UserId) -> Result<Vec<User>, Error>;

    /// The user record for `current`, if it still exists.
    async fn current_user(&self, current: &UserId) -> Result<Option<User>, Error>;
}

/// Fixture users query used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersQuery;

#[async_trait]
impl UsersQuery for FixtureUsersQuery {
    async fn other_users(&self, current: &UserId) -> Result<Vec<User>, Error> {
        let mut users: Vec<User> = fixture_data::users()?
            .into_iter()
            .filter(|user| user.id() != current)
            .collect();
        users.sort_by(|left, right| left.profile().first_name.cmp(&right.profile().first_name));
        Ok(users)
    }

    async fn current_user(&self, current: &UserId) -> Result<Option<User>, Error> {
        Ok(fixture_data::users()?
            .into_iter()
            .find(|user| user.id() == current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{ADA_USER_ID, GRACE_USER_ID};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_excludes_current_user_and_orders_by_first_name() {
        let ada = UserId::new(ADA_USER_ID).expect("fixture id");

        let users = FixtureUsersQuery.other_users(&ada).await.expect("users list");
        let names: Vec<&str> = users
            .iter()
            .map(|user| user.profile().first_name.as_str())
            .collect();
        assert_eq!(names, vec!["Grace", "Janet"]);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_finds_current_user() {
        let grace = UserId::new(GRACE_USER_ID).expect("fixture id");

        let user = FixtureUsersQuery
            .current_user(&grace)
            .await
            .expect("lookup")
            .expect("fixture user");
        assert_eq!(user.email(), "grace@example.com");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_returns_none_for_unknown_user() {
        let user = FixtureUsersQuery
            .current_user(&UserId::random())
            .await
            .expect("lookup");
        assert!(user.is_none());
    }
}
