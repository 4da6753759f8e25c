//! Driving port for kudo retrieval: the personal feed and the recent bar.

use async_trait::async_trait;

use crate::domain::{Error, FeedKudo, FeedQuery, RecentKudo, UserId};

use super::fixture_data;

/// Number of entries shown in the recent-kudos bar.
pub const RECENT_KUDOS_LIMIT: usize = 3;

/// Domain use-case port for reading kudos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KudosQuery: Send + Sync {
    /// Kudos received by `recipient`, shaped by `query`.
    async fn feed(&self, recipient: &UserId, query: &FeedQuery) -> Result<Vec<FeedKudo>, Error>;

    /// The newest kudos across all users, newest first.
    async fn recent(&self) -> Result<Vec<RecentKudo>, Error>;
}

/// Fixture kudos query used when no database is configured.
///
/// Evaluates the [`FeedQuery`] in memory over a fixed data set.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureKudosQuery;

#[async_trait]
impl KudosQuery for FixtureKudosQuery {
    async fn feed(&self, recipient: &UserId, query: &FeedQuery) -> Result<Vec<FeedKudo>, Error> {
        Ok(query.apply(fixture_data::received_by(recipient)?))
    }

    async fn recent(&self) -> Result<Vec<RecentKudo>, Error> {
        fixture_data::recent(RECENT_KUDOS_LIMIT)
    }
}
