//! End-to-end behaviour of the page routes over the fixture ports.

mod support;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use kudos::domain::ports::{ADA_USER_ID, JANET_USER_ID};
use rstest::rstest;
use serde_json::{Value, json};

use support::client;

fn kudo_messages<'a>(body: &'a Value, key: &str) -> Vec<&'a str> {
    body[key]
        .as_array()
        .expect("kudo array")
        .iter()
        .map(|entry| entry["message"].as_str().expect("message"))
        .collect()
}

fn form(body: &str) -> TestRequest {
    TestRequest::post()
        .uri("/home/profile")
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload(body.to_owned())
}

#[rstest]
#[case("/", "/login?redirectTo=%2F")]
#[case("/home?filter=jan", "/login?redirectTo=%2Fhome%3Ffilter%3Djan")]
#[case("/home/profile", "/login?redirectTo=%2Fhome%2Fprofile")]
#[actix_web::test]
async fn anonymous_visitors_are_sent_to_login(#[case] uri: &str, #[case] location: &str) {
    let client = client().await;
    let res = client.get(uri).await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location.as_deref(), Some(location));
    assert!(res.body.is_empty());
    assert!(res.trace_id.is_some());
}

#[actix_web::test]
async fn anonymous_profile_submissions_are_sent_to_login() {
    let client = client().await;
    let res = client
        .send(form("firstName=Ada&lastName=Lovelace&department=SALES"))
        .await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(
        res.location.as_deref(),
        Some("/login?redirectTo=%2Fhome%2Fprofile")
    );
}

#[actix_web::test]
async fn index_redirects_signed_in_users_home() {
    let mut client = client().await;
    client.sign_in(ADA_USER_ID).await;

    let res = client.get("/").await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location.as_deref(), Some("/home"));
    assert!(res.body.is_empty());
}

#[actix_web::test]
async fn home_assembles_the_dashboard() {
    let mut client = client().await;
    client.sign_in(ADA_USER_ID).await;

    let res = client.get("/home").await;
    assert_eq!(res.status, StatusCode::OK);
    let body = res.json();

    let colleagues: Vec<&str> = body["users"]
        .as_array()
        .expect("users array")
        .iter()
        .map(|user| user["profile"]["firstName"].as_str().expect("first name"))
        .collect();
    assert_eq!(colleagues, vec!["Grace", "Janet"]);
    assert_eq!(body["user"]["id"], json!(ADA_USER_ID));
    assert_eq!(kudo_messages(&body, "kudos").len(), 3);
    assert_eq!(
        kudo_messages(&body, "recentKudos"),
        vec![
            "Lovely talk at the meetup",
            "Brilliant debugging session",
            "Thanks for covering the demo",
        ]
    );
}

#[actix_web::test]
async fn home_sorts_and_filters_the_feed() {
    let mut client = client().await;
    client.sign_in(ADA_USER_ID).await;

    let res = client.get("/home?sort=date&filter=work").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        kudo_messages(&res.json(), "kudos"),
        vec!["Great jango work on the release", "Good work"]
    );
}

#[actix_web::test]
async fn filter_matches_author_names() {
    let mut client = client().await;
    client.sign_in(ADA_USER_ID).await;

    let res = client.get("/home?filter=JAN&sort=date").await;
    assert_eq!(
        kudo_messages(&res.json(), "kudos"),
        vec!["Thanks for covering the demo", "Great jango work on the release", "Good work"]
    );
}

#[actix_web::test]
async fn profile_page_shows_the_signed_in_user() {
    let mut client = client().await;
    client.sign_in(JANET_USER_ID).await;

    let res = client.get("/home/profile").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json()["user"]["profile"],
        json!({ "firstName": "Janet", "lastName": "Doe", "department": "SALES" })
    );
}

#[actix_web::test]
async fn valid_profile_update_redirects_home() {
    let mut client = client().await;
    client.sign_in(ADA_USER_ID).await;

    let res = client
        .send(form("firstName=+Ada+&lastName=Lovelace&department=MARKETING"))
        .await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location.as_deref(), Some("/home"));
}

#[actix_web::test]
async fn invalid_profile_update_reports_field_errors() {
    let mut client = client().await;
    client.sign_in(ADA_USER_ID).await;

    let res = client
        .send(form("firstName=&lastName=Lovelace&department=HR"))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.json(),
        json!({
            "errors": {
                "firstName": "Please enter a value",
                "department": "Please select a valid department",
            },
            "fields": {
                "department": "HR",
                "firstName": "",
                "lastName": "Lovelace",
            },
        })
    );
}

#[actix_web::test]
async fn non_text_profile_fields_are_invalid_form_data() {
    let mut client = client().await;
    client.sign_in(ADA_USER_ID).await;

    let res = client
        .send(
            TestRequest::post()
                .uri("/home/profile")
                .set_json(json!({ "firstName": 123, "lastName": "", "department": "SALES" })),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json(), json!({ "error": "Invalid Form Data" }));
}

#[actix_web::test]
async fn repeated_profile_keys_submit_the_first_value() {
    let mut client = client().await;
    client.sign_in(ADA_USER_ID).await;

    let res = client
        .send(form(
            "firstName=Ada&firstName=Grace&lastName=Lovelace&department=SALES",
        ))
        .await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location.as_deref(), Some("/home"));
}

#[actix_web::test]
async fn multipart_profile_submissions_are_unsupported() {
    let mut client = client().await;
    client.sign_in(ADA_USER_ID).await;

    let res = client
        .send(
            TestRequest::post()
                .uri("/home/profile")
                .insert_header(("content-type", "multipart/form-data; boundary=kudos"))
                .set_payload("--kudos--"),
        )
        .await;
    assert_eq!(res.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
