//! `GET /`: send signed-in users to their home feed.

use actix_web::http::header;
use actix_web::{HttpResponse, get};

use super::auth::AuthContext;

/// Location of the home feed.
pub const HOME_PATH: &str = "/home";

/// Redirect to the home feed.
///
/// Signed-out visitors never get here; the [`AuthContext`] gate sends them to
/// the login page instead.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 303, description = "Redirect to the home feed or to login",
            headers(("Location" = String, description = "Redirect target")))
    ),
    tags = ["pages"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index(_auth: AuthContext) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, HOME_PATH))
        .finish()
}
