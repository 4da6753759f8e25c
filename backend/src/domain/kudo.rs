//! Kudo records and the read models built around them.
//!
//! Kudos are created elsewhere; this service only reads them, either with the
//! author's profile attached (the feed) or with the recipient attached (the
//! recent-kudos bar).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Profile, User, UserId};

/// Error returned when a stored style value is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownStyleValue {
    kind: &'static str,
    value: String,
}

macro_rules! style_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $(
                #[doc = $text]
                $variant,
            )+
        }

        impl $name {
            /// Canonical upper-case name used on the wire and in storage.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownStyleValue;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($text => Ok(Self::$variant),)+
                    other => Err(UnknownStyleValue {
                        kind: $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

style_enum! {
    /// Background or text colour of a kudo card.
    Color, "color" {
        Red => "RED",
        Green => "GREEN",
        Yellow => "YELLOW",
        Blue => "BLUE",
        White => "WHITE",
    }
}

style_enum! {
    /// Emoji shown on a kudo card.
    Emoji, "emoji" {
        Thumbsup => "THUMBSUP",
        Party => "PARTY",
        Handsup => "HANDSUP",
    }
}

/// Visual style of a kudo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KudoStyle {
    /// Card background colour.
    pub background_color: Color,
    /// Card text colour.
    pub text_color: Color,
    /// Card emoji.
    pub emoji: Emoji,
}

impl Default for KudoStyle {
    fn default() -> Self {
        Self {
            background_color: Color::Red,
            text_color: Color::White,
            emoji: Emoji::Thumbsup,
        }
    }
}

/// A message of appreciation sent from one user to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kudo {
    /// Record identifier.
    pub id: Uuid,
    /// Free-text message.
    pub message: String,
    /// Card style.
    pub style: KudoStyle,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Sender.
    pub author_id: UserId,
    /// Receiver.
    pub recipient_id: UserId,
}

/// A feed entry: a kudo plus its author's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedKudo {
    /// The kudo itself.
    #[serde(flatten)]
    pub kudo: Kudo,
    /// Author profile used for display, filtering and sorting.
    pub author: KudoAuthor,
}

/// Author projection carried by [`FeedKudo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KudoAuthor {
    /// The author's public profile.
    pub profile: Profile,
}

impl FeedKudo {
    /// Attach an author profile to a kudo.
    pub fn new(kudo: Kudo, author_profile: Profile) -> Self {
        Self {
            kudo,
            author: KudoAuthor {
                profile: author_profile,
            },
        }
    }

    /// Author profile shortcut.
    pub fn author_profile(&self) -> &Profile {
        &self.author.profile
    }
}

/// A recent-kudos entry: a kudo plus its recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentKudo {
    /// The kudo itself.
    #[serde(flatten)]
    pub kudo: Kudo,
    /// The user who received it.
    pub recipient: User,
}
