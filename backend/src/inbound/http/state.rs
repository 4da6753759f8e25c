//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureKudosQuery, FixtureProfileCommand, FixtureUsersQuery, KudosQuery, ProfileCommand,
    UsersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Colleague directory.
    pub users: Arc<dyn UsersQuery>,
    /// Feed and recent kudos.
    pub kudos: Arc<dyn KudosQuery>,
    /// Profile edits.
    pub profile: Arc<dyn ProfileCommand>,
}

impl HttpState {
    /// Bundle the given port implementations.
    pub fn new(
        users: Arc<dyn UsersQuery>,
        kudos: Arc<dyn KudosQuery>,
        profile: Arc<dyn ProfileCommand>,
    ) -> Self {
        Self {
            users,
            kudos,
            profile,
        }
    }

    /// State backed entirely by the fixture ports.
    ///
    /// # Examples
    /// ```
    /// use actix_web::web;
    /// use kudos::inbound::http::state::HttpState;
    ///
    /// let state = web::Data::new(HttpState::fixtures());
    /// ```
    pub fn fixtures() -> Self {
        Self::new(
            Arc::new(FixtureUsersQuery),
            Arc::new(FixtureKudosQuery),
            Arc::new(FixtureProfileCommand),
        )
    }
}
