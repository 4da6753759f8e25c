//! HTTP inbound adapter: the page loaders, the profile action and probes.

pub mod auth;
pub mod error;
pub mod health;
pub mod home;
pub mod index;
pub mod profile;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::ApiResult;

/// Register the page routes on an app or scope.
///
/// The caller supplies the session middleware and `web::Data<HttpState>`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use kudos::inbound::http::{configure_pages, state::HttpState};
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::fixtures()))
///     .configure(configure_pages);
/// ```
pub fn configure_pages(cfg: &mut web::ServiceConfig) {
    cfg.service(index::index)
        .service(home::home)
        .service(profile::profile)
        .service(profile::update_profile);
}
