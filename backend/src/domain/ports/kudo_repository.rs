//! Port for reading kudos from storage.

use async_trait::async_trait;

use crate::domain::{FeedKudo, FeedQuery, RecentKudo, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by kudo repository adapters.
    pub enum KudoPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "kudo repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "kudo repository query failed: {message}",
        /// A referenced record was missing.
        NotFound { message: String } => "kudo repository record missing: {message}",
    }
}

/// Read access to kudos.
///
/// Adapters must honour the [`FeedQuery`] exactly as
/// [`FeedQuery::apply`](crate::domain::FeedQuery::apply) evaluates it in
/// memory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KudoRepository: Send + Sync {
    /// Kudos received by `recipient`, filtered and ordered by `query`, each
    /// with its author's profile.
    async fn list_received(
        &self,
        recipient: &UserId,
        query: &FeedQuery,
    ) -> Result<Vec<FeedKudo>, KudoPersistenceError>;

    /// The `limit` newest kudos across all users, each with its recipient.
    async fn list_recent(&self, limit: usize) -> Result<Vec<RecentKudo>, KudoPersistenceError>;
}
