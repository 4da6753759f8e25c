//! Domain primitives, services and ports.
//!
//! Purpose: define the strongly typed entities used by the HTTP and
//! persistence adapters, the pure feed and profile logic, and the services
//! implementing the driving ports. Nothing in here knows about actix or
//! Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User / Profile / Department: colleague identity.
//! - Kudo / FeedKudo / RecentKudo: kudo read models.
//! - FeedQuery / SortSpec / FilterSpec: feed shaping.
//! - ProfileSubmission / ProfileUpdateError: profile edits.

pub mod error;
pub mod feed;
pub mod kudo;
pub mod ports;
pub mod profile_update;
pub mod trace_id;
pub mod user;
pub mod validation;

mod directory_service;
mod feed_service;
mod profile_service;

pub use self::directory_service::UserDirectoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::feed::{FeedQuery, FilterSpec, SortOption, SortSpec};
pub use self::feed_service::KudosFeedService;
pub use self::kudo::{
    Color, Emoji, FeedKudo, Kudo, KudoAuthor, KudoStyle, RecentKudo, UnknownStyleValue,
};
pub use self::profile_service::ProfileUpdateService;
pub use self::profile_update::{
    FieldErrors, FormField, INVALID_FORM_DATA_MESSAGE, ProfileChanges, ProfileSubmission,
    ProfileUpdateError, SubmittedFields, UNKNOWN_DEPARTMENT_MESSAGE,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Department, Profile, User, UserId, UserValidationError};
pub use self::validation::{EMPTY_VALUE_MESSAGE, NAME_MAX_CHARS, validate_name};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use kudos::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
