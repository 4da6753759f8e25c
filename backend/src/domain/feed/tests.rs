//! Tests for feed query building and in-memory evaluation.

use super::*;
use crate::domain::{Color, Department, Emoji, Kudo, KudoStyle, UserId};
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};
use uuid::Uuid;

fn entry(message: &str, first: &str, last: &str, emoji: Emoji, minute: u32) -> FeedKudo {
    let kudo = Kudo {
        id: Uuid::new_v4(),
        message: message.to_owned(),
        style: KudoStyle {
            background_color: Color::Blue,
            text_color: Color::White,
            emoji,
        },
        created_at: Utc
            .with_ymd_and_hms(2024, 5, 1, 9, minute, 0)
            .single()
            .expect("valid timestamp"),
        author_id: UserId::random(),
        recipient_id: UserId::random(),
    };
    FeedKudo::new(kudo, Profile::new(first, last, Department::Engineering))
}

#[fixture]
fn feed() -> Vec<FeedKudo> {
    vec![
        entry("Great jango work", "Bob", "Smith", Emoji::Thumbsup, 10),
        entry("Thanks for the review", "Janet", "Doe", Emoji::Party, 30),
        entry("Good work", "Bob", "Smith", Emoji::Handsup, 20),
        entry("Shipped it", "Carl", "Jansen", Emoji::Party, 0),
    ]
}

fn messages(entries: &[FeedKudo]) -> Vec<&str> {
    entries.iter().map(|e| e.kudo.message.as_str()).collect()
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("Date"))]
#[case(Some("newest"))]
#[case(Some(" date"))]
fn unknown_or_absent_sort_is_unspecified(#[case] raw: Option<&str>) {
    assert_eq!(SortSpec::from_param(raw), SortSpec::Unspecified);
}

#[rstest]
#[case("date", SortSpec::CreatedAtDesc)]
#[case("sender", SortSpec::AuthorFirstNameAsc)]
#[case("emoji", SortSpec::EmojiAsc)]
fn known_sort_values_map_to_specs(#[case] raw: &str, #[case] expected: SortSpec) {
    assert_eq!(SortSpec::from_param(Some(raw)), expected);
}

#[rstest]
#[case(None)]
#[case(Some(""))]
fn empty_filter_admits_everything(#[case] raw: Option<&str>, feed: Vec<FeedKudo>) {
    let query = FeedQuery::from_params(None, raw);
    assert_eq!(query.filter, FilterSpec::Unfiltered);
    assert_eq!(query.apply(feed.clone()), feed);
}

#[rstest]
fn filter_text_is_kept_verbatim() {
    assert_eq!(
        FilterSpec::from_param(Some(" Jan ")),
        FilterSpec::Contains(" Jan ".to_owned())
    );
}

#[rstest]
fn filter_matches_message_or_author_names(feed: Vec<FeedKudo>) {
    let query = FeedQuery::from_params(None, Some("jan"));
    assert_eq!(
        messages(&query.apply(feed)),
        vec!["Great jango work", "Thanks for the review", "Shipped it"]
    );
}

#[rstest]
fn filter_ignores_case(feed: Vec<FeedKudo>) {
    let query = FeedQuery::from_params(None, Some("SMITH"));
    assert_eq!(
        messages(&query.apply(feed)),
        vec!["Great jango work", "Good work"]
    );
}

#[rstest]
fn filter_treats_wildcards_literally(feed: Vec<FeedKudo>) {
    let query = FeedQuery::from_params(None, Some("%"));
    assert!(query.apply(feed).is_empty());
}

#[rstest]
fn date_sort_is_newest_first(feed: Vec<FeedKudo>) {
    let query = FeedQuery::from_params(Some("date"), None);
    assert_eq!(
        messages(&query.apply(feed)),
        vec!["Thanks for the review", "Good work", "Great jango work", "Shipped it"]
    );
}

#[rstest]
fn sender_sort_orders_by_author_first_name_and_is_stable(feed: Vec<FeedKudo>) {
    let query = FeedQuery::from_params(Some("sender"), None);
    assert_eq!(
        messages(&query.apply(feed)),
        vec!["Great jango work", "Good work", "Shipped it", "Thanks for the review"]
    );
}

#[rstest]
fn emoji_sort_orders_by_emoji_name(feed: Vec<FeedKudo>) {
    let query = FeedQuery::from_params(Some("emoji"), None);
    assert_eq!(
        messages(&query.apply(feed)),
        vec!["Good work", "Thanks for the review", "Shipped it", "Great jango work"]
    );
}

#[rstest]
fn unspecified_sort_keeps_retrieval_order(feed: Vec<FeedKudo>) {
    let query = FeedQuery::from_params(Some("bogus"), None);
    assert_eq!(query.apply(feed.clone()), feed);
}

#[rstest]
fn sort_and_filter_combine(feed: Vec<FeedKudo>) {
    let query = FeedQuery::from_params(Some("date"), Some("work"));
    assert_eq!(
        messages(&query.apply(feed)),
        vec!["Good work", "Great jango work"]
    );
}
