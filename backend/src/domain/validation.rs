//! Field validators shared by profile forms.

/// Longest accepted value for a name-like field, in characters.
pub const NAME_MAX_CHARS: usize = 64;

/// Message reported for an empty field.
pub const EMPTY_VALUE_MESSAGE: &str = "Please enter a value";

/// Check a name-like value, returning a user-facing message when it is
/// unacceptable.
///
/// The value is expected to be trimmed already.
///
/// # Examples
/// ```
/// use kudos::domain::validate_name;
///
/// assert_eq!(validate_name("Ada"), None);
/// assert_eq!(validate_name("").as_deref(), Some("Please enter a value"));
/// ```
pub fn validate_name(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(EMPTY_VALUE_MESSAGE.to_owned());
    }
    if value.chars().count() > NAME_MAX_CHARS {
        return Some(format!("Please enter at most {NAME_MAX_CHARS} characters"));
    }
    None
}
