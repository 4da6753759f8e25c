//! PostgreSQL-backed [`KudoRepository`].
//!
//! The feed query is built as a boxed statement: the recipient predicate is
//! always present, the text filter and ordering are added when the
//! [`FeedQuery`] asks for them. The text filter is a case-insensitive
//! `ILIKE` over the message and the author's names with the user's input
//! escaped, so `%` and `_` match themselves. Author names sort byte-wise and
//! ties fall back to the kudo id.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{KudoPersistenceError, KudoRepository};
use crate::domain::{FeedKudo, FeedQuery, Kudo, RecentKudo, SortSpec, User, UserId};

use super::error_mapping::StoreFailure;
use super::models::{KudoRow, UserRow};
use super::pool::DbPool;
use super::schema::{first_name_bytewise, kudos, users};

/// Diesel adapter for the `kudos` table.
#[derive(Clone)]
pub struct DieselKudoRepository {
    pool: DbPool,
}

impl DieselKudoRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Escape `LIKE` metacharacters (PostgreSQL's default escape is `\`).
pub(crate) fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// `ILIKE` pattern matching `text` anywhere in a column.
pub(crate) fn contains_pattern(text: &str) -> String {
    format!("%{}%", escape_like(text))
}

fn decode_pair<T>(
    (kudo, user): (KudoRow, UserRow),
    build: impl FnOnce(Kudo, User) -> T,
) -> Result<T, StoreFailure> {
    Ok(build(Kudo::try_from(kudo)?, User::try_from(user)?))
}

#[async_trait]
impl KudoRepository for DieselKudoRepository {
    async fn list_received(
        &self,
        recipient: &UserId,
        query: &FeedQuery,
    ) -> Result<Vec<FeedKudo>, KudoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from_pool)?;

        let mut statement = kudos::table
            .inner_join(users::table.on(users::id.eq(kudos::author_id)))
            .filter(kudos::recipient_id.eq(*recipient.as_uuid()))
            .select((KudoRow::as_select(), UserRow::as_select()))
            .into_boxed();

        if let Some(text) = query.filter.text() {
            let pattern = contains_pattern(text);
            statement = statement.filter(
                kudos::message
                    .ilike(pattern.clone())
                    .or(users::first_name.ilike(pattern.clone()))
                    .or(users::last_name.ilike(pattern)),
            );
        }

        statement = match query.sort {
            SortSpec::Unspecified => statement,
            SortSpec::CreatedAtDesc => statement.order(kudos::created_at.desc()),
            SortSpec::AuthorFirstNameAsc => statement.order(first_name_bytewise().asc()),
            SortSpec::EmojiAsc => statement.order(kudos::emoji.asc()),
        };
        statement = statement.then_order_by(kudos::id.asc());

        let rows: Vec<(KudoRow, UserRow)> = statement
            .load(&mut conn)
            .await
            .map_err(|err| StoreFailure::from_diesel(err, "list received kudos"))?;

        let feed = rows
            .into_iter()
            .map(|pair| {
                decode_pair(pair, |kudo, author| {
                    FeedKudo::new(kudo, author.profile().clone())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(feed)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<RecentKudo>, KudoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from_pool)?;
        let rows: Vec<(KudoRow, UserRow)> = kudos::table
            .inner_join(users::table.on(users::id.eq(kudos::recipient_id)))
            .order((kudos::created_at.desc(), kudos::id.asc()))
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .select((KudoRow::as_select(), UserRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(|err| StoreFailure::from_diesel(err, "list recent kudos"))?;

        let recent = rows
            .into_iter()
            .map(|pair| decode_pair(pair, |kudo, recipient| RecentKudo { kudo, recipient }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(recent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("jan", "jan")]
    #[case("100%", "100\\%")]
    #[case("snake_case", "snake\\_case")]
    #[case("C:\\temp", "C:\\\\temp")]
    #[case("", "")]
    fn escapes_like_metacharacters(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_like(input), expected);
    }

    #[rstest]
    fn contains_pattern_wraps_the_escaped_text() {
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[rstest]
    fn filter_whitespace_is_preserved() {
        assert_eq!(contains_pattern(" Jan "), "% Jan %");
    }
}
