//! User and profile data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised while constructing user primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// Identifier was not a canonical UUID string.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// Department name is not one of the known departments.
    #[error("unknown department: {value}")]
    UnknownDepartment {
        /// The rejected input.
        value: String,
    },
}

/// Stable user identifier stored as a UUID.
///
/// The original string form is preserved so it round-trips through sessions
/// and JSON unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    ///
    /// # Examples
    /// ```
    /// use kudos::domain::UserId;
    ///
    /// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    /// assert_eq!(id.as_ref(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert!(UserId::new(" 3fa85f64-5717-4562-b3fc-2c963f66afa6").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Wrap a UUID read from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, uuid.to_string())
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        let parsed = Uuid::parse_str(&id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Department a colleague belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    /// Marketing.
    Marketing,
    /// Sales.
    Sales,
    /// Engineering.
    Engineering,
}

impl Department {
    /// Every department, in presentation order.
    pub const ALL: [Self; 3] = [Self::Marketing, Self::Sales, Self::Engineering];

    /// Canonical upper-case name used on the wire and in storage.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marketing => "MARKETING",
            Self::Sales => "SALES",
            Self::Engineering => "ENGINEERING",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = UserValidationError;

    /// Parse a canonical department name. Matching is case-sensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|department| department.as_str() == value)
            .ok_or_else(|| UserValidationError::UnknownDepartment {
                value: value.to_owned(),
            })
    }
}

/// Public profile attached one-to-one to a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Department the user works in.
    pub department: Department,
    /// Optional avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl Profile {
    /// Build a profile without an avatar.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: Department,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            department,
            profile_picture: None,
        }
    }
}

/// Application user.
///
/// ## Invariants
/// - `id` is a valid UUID.
/// - every user has exactly one [`Profile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    email: String,
    profile: Profile,
}

impl User {
    /// Build a user from validated components.
    pub fn new(id: UserId, email: impl Into<String>, profile: Profile) -> Self {
        Self {
            id,
            email: email.into(),
            profile,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Login email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Public profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}
