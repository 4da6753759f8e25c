//! Port wiring for [`HttpState`].

use std::sync::Arc;

use actix_web::web;

use kudos::domain::{KudosFeedService, ProfileUpdateService, UserDirectoryService};
use kudos::inbound::http::state::HttpState;
use kudos::outbound::persistence::{DbPool, DieselKudoRepository, DieselUserRepository};

use super::ServerConfig;

/// Services over the Diesel repositories.
fn persistent_state(pool: &DbPool) -> HttpState {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let kudos = Arc::new(DieselKudoRepository::new(pool.clone()));
    HttpState::new(
        Arc::new(UserDirectoryService::new(Arc::clone(&users))),
        Arc::new(KudosFeedService::new(kudos)),
        Arc::new(ProfileUpdateService::new(users)),
    )
}

/// Database-backed ports when a pool is configured, fixtures otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => persistent_state(pool),
        None => {
            tracing::warn!("no database configured; serving fixture data");
            HttpState::fixtures()
        }
    };
    web::Data::new(state)
}
