//! Kudos feed service backed by a [`KudoRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{KudoPersistenceError, KudoRepository, KudosQuery, RECENT_KUDOS_LIMIT};
use crate::domain::{Error, FeedKudo, FeedQuery, RecentKudo, UserId};

/// Implements [`KudosQuery`] over a kudo repository.
#[derive(Clone)]
pub struct KudosFeedService<R> {
    kudos: Arc<R>,
}

impl<R> KudosFeedService<R> {
    /// Create a service reading from `kudos`.
    pub fn new(kudos: Arc<R>) -> Self {
        Self { kudos }
    }
}

fn map_kudo_persistence_error(error: KudoPersistenceError) -> Error {
    debug!(%error, "kudo repository failure");
    match error {
        KudoPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("kudo repository unavailable: {message}"))
        }
        KudoPersistenceError::Query { message } => {
            Error::internal(format!("kudo repository error: {message}"))
        }
        KudoPersistenceError::NotFound { message } => Error::not_found(message),
    }
}

#[async_trait]
impl<R> KudosQuery for KudosFeedService<R>
where
    R: KudoRepository,
{
    async fn feed(&self, recipient: &UserId, query: &FeedQuery) -> Result<Vec<FeedKudo>, Error> {
        self.kudos
            .list_received(recipient, query)
            .await
            .map_err(map_kudo_persistence_error)
    }

    async fn recent(&self) -> Result<Vec<RecentKudo>, Error> {
        self.kudos
            .list_recent(RECENT_KUDOS_LIMIT)
            .await
            .map_err(map_kudo_persistence_error)
    }
}
