//! Profile edit submissions: type-checking and validation.
//!
//! A submission arrives as three loosely-typed form fields. [`ProfileSubmission::validate`]
//! runs the pure part of the update: it rejects non-text input outright,
//! trims and validates each field, and yields the [`ProfileChanges`] to
//! persist. Persistence happens in
//! [`ProfileUpdateService`](super::ProfileUpdateService).

use serde::Serialize;

use super::{Department, Error, validate_name};

/// Message returned when the submission is not three text fields.
pub const INVALID_FORM_DATA_MESSAGE: &str = "Invalid Form Data";

/// Field error for a department outside the known set.
pub const UNKNOWN_DEPARTMENT_MESSAGE: &str = "Please select a valid department";

/// One raw form value as received by the inbound adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    /// A single text value.
    Text(String),
    /// Anything else, such as a JSON number, list or object.
    NotText,
}

impl From<&str> for FormField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Raw profile form. Missing keys are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSubmission {
    /// `firstName`
    pub first_name: Option<FormField>,
    /// `lastName`
    pub last_name: Option<FormField>,
    /// `department`
    pub department: Option<FormField>,
}

/// Validated, trimmed values ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChanges {
    /// Trimmed given name.
    pub first_name: String,
    /// Trimmed family name.
    pub last_name: String,
    /// Parsed department.
    pub department: Department,
}

/// Per-field validation messages; absent entries are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    /// Error for `firstName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Error for `lastName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Error for `department`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl FieldErrors {
    /// Whether no field reported an error.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.department.is_none()
    }
}

/// Submitted values echoed back alongside validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedFields {
    /// Trimmed `department`.
    pub department: String,
    /// Trimmed `firstName`.
    pub first_name: String,
    /// Trimmed `lastName`.
    pub last_name: String,
}

/// Ways a profile update can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileUpdateError {
    /// At least one field was missing or not text.
    #[error("Invalid Form Data")]
    MalformedInput,
    /// Fields were text but at least one failed validation.
    #[error("profile submission failed validation")]
    ValidationFailed {
        /// Messages keyed by field.
        errors: FieldErrors,
        /// Trimmed submitted values.
        fields: SubmittedFields,
    },
    /// The store rejected or could not apply the update.
    #[error(transparent)]
    Persistence(#[from] Error),
}

impl ProfileSubmission {
    /// Build a submission where every field is text.
    pub fn from_text(first_name: &str, last_name: &str, department: &str) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            department: Some(department.into()),
        }
    }

    /// Type-check, trim and validate the submission.
    ///
    /// # Examples
    /// ```
    /// use kudos::domain::{Department, ProfileSubmission};
    ///
    /// let changes = ProfileSubmission::from_text(" Ada ", "Lovelace", "ENGINEERING")
    ///     .validate()
    ///     .expect("valid submission");
    /// assert_eq!(changes.first_name, "Ada");
    /// assert_eq!(changes.department, Department::Engineering);
    /// ```
    pub fn validate(self) -> Result<ProfileChanges, ProfileUpdateError> {
        let (Some(FormField::Text(first)), Some(FormField::Text(last)), Some(FormField::Text(dept))) =
            (self.first_name, self.last_name, self.department)
        else {
            return Err(ProfileUpdateError::MalformedInput);
        };

        let fields = SubmittedFields {
            department: dept.trim().to_owned(),
            first_name: first.trim().to_owned(),
            last_name: last.trim().to_owned(),
        };

        let department = fields.department.parse::<Department>();
        let errors = FieldErrors {
            first_name: validate_name(&fields.first_name),
            last_name: validate_name(&fields.last_name),
            department: validate_name(&fields.department).or_else(|| {
                department
                    .is_err()
                    .then(|| UNKNOWN_DEPARTMENT_MESSAGE.to_owned())
            }),
        };

        match department {
            Ok(department) if errors.is_empty() => Ok(ProfileChanges {
                first_name: fields.first_name,
                last_name: fields.last_name,
                department,
            }),
            _ => Err(ProfileUpdateError::ValidationFailed { errors, fields }),
        }
    }
}
