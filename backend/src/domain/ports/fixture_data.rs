//! Deterministic colleagues and kudos served when no database is configured.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    Color, Department, Emoji, Error, FeedKudo, Kudo, KudoStyle, Profile, RecentKudo, User, UserId,
};

/// Identifier of the fixture user "Ada Lovelace".
pub const ADA_USER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
/// Identifier of the fixture user "Grace Hopper".
pub const GRACE_USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";
/// Identifier of the fixture user "Janet Doe".
pub const JANET_USER_ID: &str = "9b2f0c1e-8d4a-4f6b-a1c3-5e7d9f0b2a4c";

const USERS: [(&str, &str, &str, &str, Department); 3] = [
    (
        ADA_USER_ID,
        "ada@example.com",
        "Ada",
        "Lovelace",
        Department::Engineering,
    ),
    (
        GRACE_USER_ID,
        "grace@example.com",
        "Grace",
        "Hopper",
        Department::Engineering,
    ),
    (JANET_USER_ID, "janet@example.com", "Janet", "Doe", Department::Sales),
];

struct KudoRow {
    id: u128,
    message: &'static str,
    author: &'static str,
    recipient: &'static str,
    background: Color,
    emoji: Emoji,
    created_at: i64,
}

// 2024-05-01T09:00:00Z
const BASE_TIMESTAMP: i64 = 1_714_554_000;

const KUDOS: [KudoRow; 5] = [
    KudoRow {
        id: 1,
        message: "Great jango work on the release",
        author: GRACE_USER_ID,
        recipient: ADA_USER_ID,
        background: Color::Blue,
        emoji: Emoji::Party,
        created_at: BASE_TIMESTAMP,
    },
    KudoRow {
        id: 2,
        message: "Thanks for covering the demo",
        author: JANET_USER_ID,
        recipient: ADA_USER_ID,
        background: Color::Green,
        emoji: Emoji::Thumbsup,
        created_at: BASE_TIMESTAMP + 1_800,
    },
    KudoRow {
        id: 3,
        message: "Brilliant debugging session",
        author: GRACE_USER_ID,
        recipient: JANET_USER_ID,
        background: Color::Yellow,
        emoji: Emoji::Handsup,
        created_at: BASE_TIMESTAMP + 3_600,
    },
    KudoRow {
        id: 4,
        message: "Good work",
        author: JANET_USER_ID,
        recipient: ADA_USER_ID,
        background: Color::Red,
        emoji: Emoji::Handsup,
        created_at: BASE_TIMESTAMP - 3_600,
    },
    KudoRow {
        id: 5,
        message: "Lovely talk at the meetup",
        author: ADA_USER_ID,
        recipient: GRACE_USER_ID,
        background: Color::Blue,
        emoji: Emoji::Thumbsup,
        created_at: BASE_TIMESTAMP + 7_200,
    },
];

fn fixture_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
}

/// All fixture users in declaration order.
pub(crate) fn users() -> Result<Vec<User>, Error> {
    USERS
        .iter()
        .map(|(id, email, first, last, department)| {
            Ok(User::new(
                fixture_id(id)?,
                *email,
                Profile::new(*first, *last, *department),
            ))
        })
        .collect()
}

fn find_user(users: &[User], id: &UserId) -> Result<User, Error> {
    users
        .iter()
        .find(|user| user.id() == id)
        .cloned()
        .ok_or_else(|| Error::internal(format!("fixture kudo references unknown user {id}")))
}

/// All fixture kudos in declaration order.
pub(crate) fn kudos() -> Result<Vec<Kudo>, Error> {
    KUDOS
        .iter()
        .map(|row| {
            let created_at = DateTime::<Utc>::from_timestamp(row.created_at, 0)
                .ok_or_else(|| Error::internal("invalid fixture kudo timestamp"))?;
            Ok(Kudo {
                id: Uuid::from_u128(row.id),
                message: row.message.to_owned(),
                style: KudoStyle {
                    background_color: row.background,
                    text_color: Color::White,
                    emoji: row.emoji,
                },
                created_at,
                author_id: fixture_id(row.author)?,
                recipient_id: fixture_id(row.recipient)?,
            })
        })
        .collect()
}

/// Fixture kudos received by `recipient`, each joined with its author.
pub(crate) fn received_by(recipient: &UserId) -> Result<Vec<FeedKudo>, Error> {
    let users = users()?;
    kudos()?
        .into_iter()
        .filter(|kudo| &kudo.recipient_id == recipient)
        .map(|kudo| {
            let author = find_user(&users, &kudo.author_id)?;
            Ok(FeedKudo::new(kudo, author.profile().clone()))
        })
        .collect()
}

/// The `limit` newest fixture kudos, each joined with its recipient.
pub(crate) fn recent(limit: usize) -> Result<Vec<RecentKudo>, Error> {
    let users = users()?;
    let mut all = kudos()?;
    all.sort_by(|left, right| right.created_at.cmp(&left.created_at));
    all.into_iter()
        .take(limit)
        .map(|kudo| {
            let recipient = find_user(&users, &kudo.recipient_id)?;
            Ok(RecentKudo { kudo, recipient })
        })
        .collect()
}
