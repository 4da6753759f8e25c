//! The authentication gate shared by every route.
//!
//! Handlers take an [`AuthContext`] argument; extraction succeeds only when the
//! session names a signed-in user. Otherwise the request is answered with a
//! `303 See Other` to the login page, carrying the requested path and query
//! in `redirectTo` so the login flow can send the user back.

use std::fmt;

use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::domain::UserId;

use super::session::SessionContext;

/// Path of the login page that unauthenticated requests are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Proof that the current request belongs to a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    user_id: UserId,
}

impl AuthContext {
    /// Identifier of the signed-in user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// Rejection produced when no user is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequired {
    redirect_to: String,
}

impl LoginRequired {
    /// Reject a request for `redirect_to` (path plus optional query).
    pub fn new(redirect_to: impl Into<String>) -> Self {
        Self {
            redirect_to: redirect_to.into(),
        }
    }

    /// Login URL with the original target encoded in `redirectTo`.
    ///
    /// # Examples
    /// ```
    /// use kudos::inbound::http::auth::LoginRequired;
    ///
    /// let rejection = LoginRequired::new("/home?sort=date");
    /// assert_eq!(rejection.location(), "/login?redirectTo=%2Fhome%3Fsort%3Ddate");
    /// ```
    pub fn location(&self) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("redirectTo", &self.redirect_to)
            .finish();
        format!("{LOGIN_PATH}?{query}")
    }
}

impl fmt::Display for LoginRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "login required to access {}", self.redirect_to)
    }
}

impl ResponseError for LoginRequired {
    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, self.location()))
            .finish()
    }
}

fn requested_target(req: &HttpRequest) -> String {
    req.uri()
        .path_and_query()
        .map_or_else(|| req.path().to_owned(), |target| target.as_str().to_owned())
}

impl FromRequest for AuthContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session = SessionContext::from_request(req, payload);
        let target = requested_target(req);
        Box::pin(async move {
            match session.await?.user_id()? {
                Some(user_id) => Ok(Self { user_id }),
                None => {
                    debug!(%target, "unauthenticated request redirected to login");
                    Err(LoginRequired::new(target).into())
                }
            }
        })
    }
}
