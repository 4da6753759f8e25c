//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::{HttpResponse, test, web};

use crate::domain::{Error, UserId};

use super::session::SessionContext;

const SIGN_IN_PATH: &str = "/test/sign-in";

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Register `GET /test/sign-in/{id}`, which stores `id` in the session.
pub fn sign_in_route(cfg: &mut web::ServiceConfig) {
    cfg.route(
        &format!("{SIGN_IN_PATH}/{{id}}"),
        web::get().to(
            |session: SessionContext, id: web::Path<String>| async move {
                let user_id = UserId::new(id.into_inner())
                    .map_err(|err| Error::invalid_request(err.to_string()))?;
                session.persist_user(&user_id)?;
                Ok::<_, Error>(HttpResponse::NoContent().finish())
            },
        ),
    );
}

/// Request hitting the route installed by [`sign_in_route`].
pub fn sign_in_request(user_id: &str) -> test::TestRequest {
    test::TestRequest::get().uri(&format!("{SIGN_IN_PATH}/{user_id}"))
}

/// Extract the session cookie set on `res`.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}
