//! Tests for HTTP error mapping.

use super::*;
use crate::domain::{FieldErrors, SubmittedFields};
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn internal_error() -> Error {
    Error::internal("connection string leaked")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": "x"}))
}

async fn body_json(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("pool"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_trace_id(internal_error: Error) {
    let response = internal_error.error_response();
    assert_eq!(
        response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some(TRACE_ID)
    );

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "code": "internal_error",
            "message": "Internal server error",
            "traceId": TRACE_ID,
        })
    );
}

#[rstest]
#[actix_web::test]
async fn not_found_keeps_message_and_details() {
    let err = Error::not_found("user 42 not found").with_details(json!({"userId": "42"}));
    let body = body_json(err.error_response()).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "user 42 not found");
    assert_eq!(body["details"], json!({"userId": "42"}));
}

#[rstest]
#[actix_web::test]
async fn malformed_profile_input_uses_error_body() {
    let response = ProfileUpdateError::MalformedInput.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": "Invalid Form Data"}));
}

#[rstest]
#[actix_web::test]
async fn validation_failure_uses_errors_and_fields_body() {
    let err = ProfileUpdateError::ValidationFailed {
        errors: FieldErrors {
            last_name: Some("Please enter a value".into()),
            ..FieldErrors::default()
        },
        fields: SubmittedFields {
            department: "SALES".into(),
            first_name: "Ada".into(),
            last_name: String::new(),
        },
    };

    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "errors": { "lastName": "Please enter a value" },
            "fields": { "department": "SALES", "firstName": "Ada", "lastName": "" },
        })
    );
}

#[rstest]
fn persistence_failure_defers_to_domain_mapping() {
    let err = ProfileUpdateError::Persistence(Error::service_unavailable("pool exhausted"));
    assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}
