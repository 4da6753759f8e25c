//! Diesel table definitions. Must match `migrations/` exactly.

diesel::table! {
    /// Colleagues and their one-to-one profile.
    users (id) {
        id -> Uuid,
        email -> Text,
        first_name -> Text,
        last_name -> Text,
        /// `MARKETING`, `SALES` or `ENGINEERING`.
        department -> Text,
        profile_picture -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Kudos. Both `author_id` and `recipient_id` reference `users.id`.
    kudos (id) {
        id -> Uuid,
        message -> Text,
        author_id -> Uuid,
        recipient_id -> Uuid,
        background_color -> Text,
        text_color -> Text,
        emoji -> Text,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(kudos, users);

/// `users.first_name` compared byte-wise, as `str::cmp` does, whatever the
/// database's default collation.
pub(crate) fn first_name_bytewise() -> diesel::expression::SqlLiteral<diesel::sql_types::Text> {
    diesel::dsl::sql::<diesel::sql_types::Text>(r#"users.first_name COLLATE "C""#)
}
