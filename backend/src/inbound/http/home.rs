//! `GET /home`: the signed-in user's dashboard.
//!
//! ```text
//! GET /home?sort=date&filter=jan
//! ```

use actix_web::{HttpRequest, get, web};
use futures_util::try_join;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{FeedKudo, FeedQuery, RecentKudo, User};

use super::ApiResult;
use super::auth::AuthContext;
use super::schemas::{ErrorSchema, FeedKudoSchema, RecentKudoSchema, UserSchema};
use super::state::HttpState;

/// Raw `sort` and `filter` query parameters.
///
/// Parsing never fails: unknown keys are ignored and, for repeated keys, the
/// first value wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FeedParams {
    /// Raw `sort` value.
    pub sort: Option<String>,
    /// Raw `filter` value.
    pub filter: Option<String>,
}

impl FeedParams {
    /// Read the parameters from a raw query string.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "sort" => &mut params.sort,
                "filter" => &mut params.filter,
                _ => continue,
            };
            slot.get_or_insert_with(|| value.into_owned());
        }
        params
    }

    /// Build the feed query these parameters describe.
    pub fn to_feed_query(&self) -> FeedQuery {
        FeedQuery::from_params(self.sort.as_deref(), self.filter.as_deref())
    }
}

/// Home page view model.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    /// Every colleague except the signed-in user, by first name.
    #[schema(value_type = Vec<UserSchema>)]
    pub users: Vec<User>,
    /// Kudos received by the signed-in user, sorted and filtered.
    #[schema(value_type = Vec<FeedKudoSchema>)]
    pub kudos: Vec<FeedKudo>,
    /// The newest kudos across the organisation.
    #[schema(value_type = Vec<RecentKudoSchema>)]
    pub recent_kudos: Vec<RecentKudo>,
    /// The signed-in user, if their record still exists.
    #[schema(value_type = Option<UserSchema>)]
    pub user: Option<User>,
}

/// Load the dashboard: colleagues, the personal feed, recent kudos and the
/// signed-in user, fetched concurrently.
#[utoipa::path(
    get,
    path = "/home",
    params(
        ("sort" = Option<String>, Query, description = "`date`, `sender` or `emoji`"),
        ("filter" = Option<String>, Query, description = "Case-insensitive text filter")
    ),
    responses(
        (status = 200, description = "Dashboard view", body = HomeView),
        (status = 303, description = "Not signed in; redirect to login"),
        (status = 404, description = "User record missing", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["pages"],
    operation_id = "home"
)]
#[get("/home")]
pub async fn home(
    auth: AuthContext,
    req: HttpRequest,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<HomeView>> {
    let query = FeedParams::from_query(req.query_string()).to_feed_query();
    let user_id = auth.user_id();

    let (users, kudos, recent_kudos, user) = try_join!(
        state.users.other_users(user_id),
        state.kudos.feed(user_id, &query),
        state.kudos.recent(),
        state.users.current_user(user_id),
    )?;

    Ok(web::Json(HomeView {
        users,
        kudos,
        recent_kudos,
        user,
    }))
}

#[cfg(test)]
#[path = "home_tests.rs"]
mod tests;
