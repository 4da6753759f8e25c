//! Feed query building: turns the `sort` and `filter` query parameters into
//! an ordering and a text predicate for kudo retrieval.
//!
//! Building a [`FeedQuery`] never fails. Unknown sort values fall back to the
//! store's natural order and an empty filter admits every record.
//!
//! The in-memory helpers ([`SortSpec::compare`], [`FilterSpec::admits`]) define
//! the semantics; persistence adapters translate the same specs into SQL.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{FeedKudo, Profile};

/// Recognised values of the `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    /// `sort=date`
    Date,
    /// `sort=sender`
    Sender,
    /// `sort=emoji`
    Emoji,
}

impl SortOption {
    /// Parse a raw query value. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "date" => Some(Self::Date),
            "sender" => Some(Self::Sender),
            "emoji" => Some(Self::Emoji),
            _ => None,
        }
    }
}

/// Ordering applied to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortSpec {
    /// No explicit ordering; the store decides.
    #[default]
    Unspecified,
    /// Newest first.
    CreatedAtDesc,
    /// Author first name, A to Z.
    AuthorFirstNameAsc,
    /// Emoji name, ascending.
    EmojiAsc,
}

impl From<SortOption> for SortSpec {
    fn from(option: SortOption) -> Self {
        match option {
            SortOption::Date => Self::CreatedAtDesc,
            SortOption::Sender => Self::AuthorFirstNameAsc,
            SortOption::Emoji => Self::EmojiAsc,
        }
    }
}

impl SortSpec {
    /// Map the optional `sort` parameter onto an ordering.
    ///
    /// # Examples
    /// ```
    /// use kudos::domain::SortSpec;
    ///
    /// assert_eq!(SortSpec::from_param(Some("date")), SortSpec::CreatedAtDesc);
    /// assert_eq!(SortSpec::from_param(Some("Date")), SortSpec::Unspecified);
    /// assert_eq!(SortSpec::from_param(None), SortSpec::Unspecified);
    /// ```
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(SortOption::parse)
            .map_or(Self::Unspecified, Self::from)
    }

    /// Compare two feed entries under this ordering.
    ///
    /// `Unspecified` treats every pair as equal so a stable sort keeps the
    /// retrieval order.
    pub fn compare(self, left: &FeedKudo, right: &FeedKudo) -> Ordering {
        match self {
            Self::Unspecified => Ordering::Equal,
            Self::CreatedAtDesc => right.kudo.created_at.cmp(&left.kudo.created_at),
            Self::AuthorFirstNameAsc => left
                .author_profile()
                .first_name
                .cmp(&right.author_profile().first_name),
            Self::EmojiAsc => left
                .kudo
                .style
                .emoji
                .as_str()
                .cmp(right.kudo.style.emoji.as_str()),
        }
    }

    /// Stable-sort `entries` in place.
    pub fn sort(self, entries: &mut [FeedKudo]) {
        if self != Self::Unspecified {
            entries.sort_by(|left, right| self.compare(left, right));
        }
    }
}

/// Text predicate applied to the feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterSpec {
    /// Every record is eligible.
    #[default]
    Unfiltered,
    /// Case-insensitive substring of the message, the author's first name or
    /// the author's last name.
    Contains(String),
}

impl FilterSpec {
    /// Map the optional `filter` parameter onto a predicate.
    ///
    /// The text is kept verbatim; it is not trimmed and carries no wildcard
    /// meaning.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some(text) if !text.is_empty() => Self::Contains(text.to_owned()),
            _ => Self::Unfiltered,
        }
    }

    /// Whether a kudo with `message` written by `author` passes the filter.
    ///
    /// # Examples
    /// ```
    /// use kudos::domain::{Department, FilterSpec, Profile};
    ///
    /// let filter = FilterSpec::from_param(Some("jan"));
    /// let janet = Profile::new("Janet", "Doe", Department::Sales);
    /// let bob = Profile::new("Bob", "Smith", Department::Sales);
    ///
    /// assert!(filter.admits("Good work", &janet));
    /// assert!(filter.admits("Great jango work", &bob));
    /// assert!(!filter.admits("Good work", &bob));
    /// ```
    pub fn admits(&self, message: &str, author: &Profile) -> bool {
        match self {
            Self::Unfiltered => true,
            Self::Contains(text) => {
                let needle = text.to_lowercase();
                [
                    message,
                    author.first_name.as_str(),
                    author.last_name.as_str(),
                ]
                .into_iter()
                .any(|haystack| haystack.to_lowercase().contains(&needle))
            }
        }
    }

    /// Filter text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Unfiltered => None,
            Self::Contains(text) => Some(text.as_str()),
        }
    }
}

/// Ordering plus predicate handed opaquely to feed retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    /// Ordering.
    pub sort: SortSpec,
    /// Text predicate.
    pub filter: FilterSpec,
}

impl FeedQuery {
    /// Build a query from the raw `sort` and `filter` parameters.
    pub fn from_params(sort: Option<&str>, filter: Option<&str>) -> Self {
        Self {
            sort: SortSpec::from_param(sort),
            filter: FilterSpec::from_param(filter),
        }
    }

    /// Apply the query to already-loaded entries: filter, then stable-sort.
    pub fn apply(&self, entries: impl IntoIterator<Item = FeedKudo>) -> Vec<FeedKudo> {
        let mut admitted: Vec<FeedKudo> = entries
            .into_iter()
            .filter(|entry| self.filter.admits(&entry.kudo.message, entry.author_profile()))
            .collect();
        self.sort.sort(&mut admitted);
        admitted
    }
}

#[cfg(test)]
mod tests;
