//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers below mirror their wire shape and live in the inbound adapter,
//! where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// Storage is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "user not found")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "6f9619ff-8b86-d011-b42d-00cf4fc964ff")]
    trace_id: Option<String>,
    /// Supplementary error details.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Department`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Department)]
pub enum DepartmentSchema {
    /// Marketing.
    #[schema(rename = "MARKETING")]
    Marketing,
    /// Sales.
    #[schema(rename = "SALES")]
    Sales,
    /// Engineering.
    #[schema(rename = "ENGINEERING")]
    Engineering,
}

/// OpenAPI schema for [`crate::domain::Profile`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Profile)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProfileSchema {
    #[schema(example = "Ada")]
    first_name: String,
    #[schema(example = "Lovelace")]
    last_name: String,
    department: DepartmentSchema,
    /// Avatar URL, omitted when unset.
    profile_picture: Option<String>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "ada@example.com")]
    email: String,
    profile: ProfileSchema,
}

/// OpenAPI schema for [`crate::domain::Color`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Color)]
pub enum ColorSchema {
    #[schema(rename = "RED")]
    Red,
    #[schema(rename = "GREEN")]
    Green,
    #[schema(rename = "YELLOW")]
    Yellow,
    #[schema(rename = "BLUE")]
    Blue,
    #[schema(rename = "WHITE")]
    White,
}

/// OpenAPI schema for [`crate::domain::Emoji`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Emoji)]
pub enum EmojiSchema {
    #[schema(rename = "THUMBSUP")]
    Thumbsup,
    #[schema(rename = "PARTY")]
    Party,
    #[schema(rename = "HANDSUP")]
    Handsup,
}

/// OpenAPI schema for [`crate::domain::KudoStyle`].
#[derive(ToSchema)]
#[schema(as = crate::domain::KudoStyle)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct KudoStyleSchema {
    background_color: ColorSchema,
    text_color: ColorSchema,
    emoji: EmojiSchema,
}

/// OpenAPI schema for [`crate::domain::KudoAuthor`].
#[derive(ToSchema)]
#[schema(as = crate::domain::KudoAuthor)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct KudoAuthorSchema {
    profile: ProfileSchema,
}

/// OpenAPI schema for [`crate::domain::FeedKudo`]: a kudo plus its author.
#[derive(ToSchema)]
#[schema(as = crate::domain::FeedKudo)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FeedKudoSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    #[schema(example = "Great work on the release")]
    message: String,
    style: KudoStyleSchema,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    author_id: String,
    recipient_id: String,
    author: KudoAuthorSchema,
}

/// OpenAPI schema for [`crate::domain::RecentKudo`]: a kudo plus its
/// recipient.
#[derive(ToSchema)]
#[schema(as = crate::domain::RecentKudo)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RecentKudoSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    message: String,
    style: KudoStyleSchema,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    author_id: String,
    recipient_id: String,
    recipient: UserSchema,
}
