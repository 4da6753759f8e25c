//! Tests for the home dashboard handler.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{
    ADA_USER_ID, FixtureKudosQuery, FixtureProfileCommand, FixtureUsersQuery, MockKudosQuery,
    MockProfileCommand, MockUsersQuery,
};
use crate::domain::{Error, UserId};
use crate::inbound::http::test_utils::{
    session_cookie, sign_in_request, sign_in_route, test_session_middleware,
};
use actix_web::http::{StatusCode, header};
use actix_web::App;
use actix_web::test as atest;
use mockall::predicate::{always, eq};
use rstest::rstest;
use serde_json::Value;

async fn get_home(state: HttpState, uri: &str, signed_in: bool) -> ServiceResponseParts {
    let app = atest::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(test_session_middleware())
            .configure(sign_in_route)
            .service(home),
    )
    .await;

    let mut request = atest::TestRequest::get().uri(uri);
    if signed_in {
        let res = atest::call_service(&app, sign_in_request(ADA_USER_ID).to_request()).await;
        request = request.cookie(session_cookie(&res));
    }
    let res = atest::call_service(&app, request.to_request()).await;
    let status = res.status();
    let location = res
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = atest::read_body(res).await;
    ServiceResponseParts {
        status,
        location,
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    }
}

struct ServiceResponseParts {
    status: StatusCode,
    location: Option<String>,
    body: Value,
}

fn messages(body: &Value) -> Vec<&str> {
    body["kudos"]
        .as_array()
        .expect("kudos array")
        .iter()
        .map(|entry| entry["message"].as_str().expect("message"))
        .collect()
}

#[rstest]
#[case("", "sort", None)]
#[case("sort=date", "sort", Some("date"))]
#[case("sort=emoji&sort=date", "sort", Some("emoji"))]
#[case("filter=Jan%20Doe", "filter", Some("Jan Doe"))]
#[case("filter=", "filter", Some(""))]
#[case("page=2", "filter", None)]
fn feed_params_parse_leniently(
    #[case] query: &str,
    #[case] key: &str,
    #[case] expected: Option<&str>,
) {
    let params = FeedParams::from_query(query);
    let actual = match key {
        "sort" => params.sort.as_deref(),
        _ => params.filter.as_deref(),
    };
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn signed_out_request_never_reaches_a_port() {
    // Mocks without expectations panic if called.
    let state = HttpState::new(
        Arc::new(MockUsersQuery::new()),
        Arc::new(MockKudosQuery::new()),
        Arc::new(MockProfileCommand::new()),
    );

    let res = get_home(state, "/home?sort=date", false).await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(
        res.location.as_deref(),
        Some("/login?redirectTo=%2Fhome%3Fsort%3Ddate")
    );
}

#[actix_web::test]
async fn dashboard_combines_all_four_retrievals() {
    let res = get_home(HttpState::fixtures(), "/home", true).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["user"]["profile"]["firstName"], "Ada");
    let colleagues: Vec<&str> = res.body["users"]
        .as_array()
        .expect("users array")
        .iter()
        .map(|user| user["profile"]["firstName"].as_str().expect("first name"))
        .collect();
    assert_eq!(colleagues, vec!["Grace", "Janet"]);
    assert_eq!(res.body["recentKudos"].as_array().map(Vec::len), Some(3));
    assert_eq!(messages(&res.body).len(), 3);
}

#[actix_web::test]
async fn sort_and_filter_shape_the_feed() {
    let res = get_home(HttpState::fixtures(), "/home?sort=date&filter=jan", true).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        messages(&res.body),
        vec![
            "Thanks for covering the demo",
            "Great jango work on the release",
            "Good work",
        ]
    );
    assert_eq!(res.body["kudos"][0]["author"]["profile"]["firstName"], "Janet");
}

#[actix_web::test]
async fn feed_port_receives_the_built_query() {
    let ada = UserId::new(ADA_USER_ID).expect("fixture id");
    let mut kudos = MockKudosQuery::new();
    kudos
        .expect_feed()
        .with(eq(ada), eq(FeedQuery::from_params(Some("emoji"), Some("Jan"))))
        .times(1)
        .return_once(|_, _| Ok(Vec::new()));
    kudos.expect_recent().times(1).return_once(|| Ok(Vec::new()));
    let state = HttpState::new(
        Arc::new(FixtureUsersQuery),
        Arc::new(kudos),
        Arc::new(FixtureProfileCommand),
    );

    let res = get_home(state, "/home?sort=emoji&filter=Jan", true).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["kudos"], Value::Array(Vec::new()));
}

#[actix_web::test]
async fn unavailable_storage_surfaces_as_503() {
    let mut users = MockUsersQuery::new();
    users
        .expect_other_users()
        .with(always())
        .returning(|_| Err(Error::service_unavailable("user repository unavailable")));
    users.expect_current_user().returning(|_| Ok(None));
    let state = HttpState::new(
        Arc::new(users),
        Arc::new(FixtureKudosQuery),
        Arc::new(FixtureProfileCommand),
    );

    let res = get_home(state, "/home", true).await;

    assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(res.body["code"], "service_unavailable");
}
