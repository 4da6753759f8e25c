//! Diesel row structs and their conversion into domain types.
//!
//! Enumerations are stored as their canonical upper-case text; a value the
//! domain does not recognise surfaces as a [`RowDecodeError`].

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Department, Kudo, KudoStyle, Profile, ProfileChanges, UnknownStyleValue, User, UserId,
    UserValidationError,
};

use super::schema::{kudos, users};

/// Stored value rejected by the domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum RowDecodeError {
    /// `users.department` is not a known department.
    #[error("stored department is invalid: {0}")]
    Department(#[from] UserValidationError),
    /// A kudo colour or emoji is not recognised.
    #[error("stored kudo style is invalid: {0}")]
    Style(#[from] UnknownStyleValue),
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub profile_picture: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = RowDecodeError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let profile = Profile {
            first_name: row.first_name,
            last_name: row.last_name,
            department: row.department.parse::<Department>()?,
            profile_picture: row.profile_picture,
        };
        Ok(User::new(UserId::from_uuid(row.id), row.email, profile))
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = kudos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct KudoRow {
    pub id: Uuid,
    pub message: String,
    pub author_id: Uuid,
    pub recipient_id: Uuid,
    pub background_color: String,
    pub text_color: String,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<KudoRow> for Kudo {
    type Error = RowDecodeError;

    fn try_from(row: KudoRow) -> Result<Self, Self::Error> {
        Ok(Kudo {
            id: row.id,
            message: row.message,
            style: KudoStyle {
                background_color: row.background_color.parse()?,
                text_color: row.text_color.parse()?,
                emoji: row.emoji.parse()?,
            },
            created_at: row.created_at,
            author_id: UserId::from_uuid(row.author_id),
            recipient_id: UserId::from_uuid(row.recipient_id),
        })
    }
}

/// Columns rewritten by a profile edit.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct ProfileUpdate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub department: &'static str,
    pub updated_at: DateTime<Utc>,
}

impl<'a> ProfileUpdate<'a> {
    pub(crate) fn new(changes: &'a ProfileChanges, updated_at: DateTime<Utc>) -> Self {
        Self {
            first_name: &changes.first_name,
            last_name: &changes.last_name,
            department: changes.department.as_str(),
            updated_at,
        }
    }
}
