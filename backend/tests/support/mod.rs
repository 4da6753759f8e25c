//! Shared harness for the page integration suites.
//!
//! Builds an app equivalent to the production wiring over the fixture ports,
//! plus a sign-in route so tests can obtain a session cookie.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::BoxBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, HttpResponse, test, web};
use serde_json::Value;

use kudos::Trace;
use kudos::domain::{Error, TRACE_ID_HEADER, UserId};
use kudos::inbound::http::configure_pages;
use kudos::inbound::http::session::SessionContext;
use kudos::inbound::http::state::HttpState;

const SIGN_IN_PATH: &str = "/test/sign-in";

async fn sign_in(session: SessionContext, id: web::Path<String>) -> Result<HttpResponse, Error> {
    let user_id =
        UserId::new(id.into_inner()).map_err(|err| Error::invalid_request(err.to_string()))?;
    session.persist_user(&user_id)?;
    Ok(HttpResponse::NoContent().finish())
}

fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Response fields the suites assert on.
pub struct Captured {
    pub status: StatusCode,
    pub location: Option<String>,
    pub trace_id: Option<String>,
    pub body: Vec<u8>,
}

impl Captured {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("json body")
    }
}

async fn capture(res: ServiceResponse<BoxBody>) -> Captured {
    let header_text = |name: &str| {
        res.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    let status = res.status();
    let location = header_text(header::LOCATION.as_str());
    let trace_id = header_text(TRACE_ID_HEADER);
    let body = test::read_body(res).await.to_vec();
    Captured {
        status,
        location,
        trace_id,
        body,
    }
}

/// A client holding at most one session cookie.
pub struct Client<S> {
    app: S,
    cookie: Option<Cookie<'static>>,
}

/// Initialise the app over fixture data.
pub async fn client() -> Client<
    impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
> {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::fixtures()))
            .wrap(Trace)
            .service(
                web::scope("")
                    .wrap(session_middleware())
                    .route(&format!("{SIGN_IN_PATH}/{{id}}"), web::get().to(sign_in))
                    .configure(configure_pages),
            ),
    )
    .await;
    Client { app, cookie: None }
}

impl<S> Client<S>
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    /// Store a session for `user_id`.
    pub async fn sign_in(&mut self, user_id: &str) {
        let res = test::call_service(
            &self.app,
            test::TestRequest::get()
                .uri(&format!("{SIGN_IN_PATH}/{user_id}"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        self.cookie = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .map(Cookie::into_owned);
    }

    /// Send `request`, attaching the session cookie if one is held.
    pub async fn send(&self, mut request: test::TestRequest) -> Captured {
        if let Some(cookie) = &self.cookie {
            request = request.cookie(cookie.clone());
        }
        capture(test::call_service(&self.app, request.to_request()).await).await
    }

    pub async fn get(&self, uri: &str) -> Captured {
        self.send(test::TestRequest::get().uri(uri)).await
    }
}
