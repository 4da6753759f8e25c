//! `GET`/`POST /home/profile`: view and edit the signed-in user's profile.
//!
//! ```text
//! POST /home/profile
//! Content-Type: application/x-www-form-urlencoded
//!
//! firstName=Ada&lastName=Lovelace&department=ENGINEERING
//! ```
//!
//! JSON bodies with the same keys are accepted too. A key that is missing, or
//! in JSON not a string, makes the whole submission malformed. A repeated form
//! key contributes its first value. Other media types, multipart included,
//! are answered with `415 Unsupported Media Type`.

use actix_web::error::ErrorUnsupportedMediaType;
use actix_web::http::header;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::{FormField, ProfileSubmission, ProfileUpdateError, User};

use super::ApiResult;
use super::auth::AuthContext;
use super::index::HOME_PATH;
use super::schemas::{ErrorSchema, UserSchema};
use super::state::HttpState;

const FIRST_NAME: &str = "firstName";
const LAST_NAME: &str = "lastName";
const DEPARTMENT: &str = "department";
const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Profile page view model.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileView {
    /// The signed-in user, if their record still exists.
    #[schema(value_type = Option<UserSchema>)]
    pub user: Option<User>,
}

/// Documented shape of a profile form submission.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    /// Given name, at most 64 characters after trimming.
    #[schema(example = "Ada")]
    pub first_name: String,
    /// Family name, at most 64 characters after trimming.
    #[schema(example = "Lovelace")]
    pub last_name: String,
    /// One of `MARKETING`, `SALES`, `ENGINEERING`.
    #[schema(example = "ENGINEERING")]
    pub department: String,
}

fn field_from_pairs(pairs: &[(String, String)], key: &str) -> Option<FormField> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| FormField::Text(value.clone()))
}

/// Interpret an urlencoded body.
pub fn submission_from_form(body: &[u8]) -> ProfileSubmission {
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(body).into_owned().collect();
    ProfileSubmission {
        first_name: field_from_pairs(&pairs, FIRST_NAME),
        last_name: field_from_pairs(&pairs, LAST_NAME),
        department: field_from_pairs(&pairs, DEPARTMENT),
    }
}

fn field_from_json(object: &Map<String, Value>, key: &str) -> Option<FormField> {
    object.get(key).map(|value| match value {
        Value::String(text) => FormField::Text(text.clone()),
        _ => FormField::NotText,
    })
}

/// Interpret a JSON body. Anything other than a JSON object is malformed.
pub fn submission_from_json(body: &[u8]) -> Result<ProfileSubmission, ProfileUpdateError> {
    let object: Map<String, Value> =
        serde_json::from_slice(body).map_err(|_| ProfileUpdateError::MalformedInput)?;
    Ok(ProfileSubmission {
        first_name: field_from_json(&object, FIRST_NAME),
        last_name: field_from_json(&object, LAST_NAME),
        department: field_from_json(&object, DEPARTMENT),
    })
}

/// Show the signed-in user's profile.
#[utoipa::path(
    get,
    path = "/home/profile",
    responses(
        (status = 200, description = "Profile view", body = ProfileView),
        (status = 303, description = "Not signed in; redirect to login"),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["pages"],
    operation_id = "profile"
)]
#[get("/home/profile")]
pub async fn profile(
    auth: AuthContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ProfileView>> {
    let user = state.users.current_user(auth.user_id()).await?;
    Ok(web::Json(ProfileView { user }))
}

/// Validate and save profile edits, then return to the home feed.
#[utoipa::path(
    post,
    path = "/home/profile",
    request_body(
        content(
            (ProfileForm = "application/x-www-form-urlencoded"),
            (ProfileForm = "application/json")
        )
    ),
    responses(
        (status = 303, description = "Saved; redirect to the home feed",
            headers(("Location" = String, description = "`/home`"))),
        (status = 400, description = "`{\"error\"}` for malformed input or `{\"errors\", \"fields\"}` for invalid values"),
        (status = 404, description = "User record missing", body = ErrorSchema),
        (status = 415, description = "Body is neither urlencoded nor JSON"),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["pages"],
    operation_id = "updateProfile"
)]
#[post("/home/profile")]
pub async fn update_profile(
    auth: AuthContext,
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<HttpState>,
) -> actix_web::Result<HttpResponse> {
    let submission = match req.content_type() {
        JSON_CONTENT_TYPE => submission_from_json(&body)?,
        FORM_CONTENT_TYPE | "" => submission_from_form(&body),
        other => {
            return Err(ErrorUnsupportedMediaType(format!(
                "unsupported profile form content type: {other}"
            )));
        }
    };

    state.profile.update_profile(auth.user_id(), submission).await?;

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, HOME_PATH))
        .finish())
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
