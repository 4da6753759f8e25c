//! OpenAPI documentation for the page loaders, the profile action and the
//! health probes.
//!
//! Domain types are described through the wrapper schemas in
//! [`crate::inbound::http::schemas`] so the domain stays free of utoipa.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::home::HomeView;
use crate::inbound::http::profile::{ProfileForm, ProfileView};
use crate::inbound::http::schemas::{
    ColorSchema, DepartmentSchema, EmojiSchema, ErrorCodeSchema, ErrorSchema, FeedKudoSchema,
    KudoAuthorSchema, KudoStyleSchema, ProfileSchema, RecentKudoSchema, UserSchema,
};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Encrypted session cookie issued by the login flow.",
            ))),
        );
    }
}

/// OpenAPI document; served by Swagger UI in debug builds.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Kudos backend API",
        description = "Colleague directory, kudos feed and profile editing behind a session cookie."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::index::index,
        crate::inbound::http::home::home,
        crate::inbound::http::profile::profile,
        crate::inbound::http::profile::update_profile,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        HomeView,
        ProfileView,
        ProfileForm,
        UserSchema,
        ProfileSchema,
        DepartmentSchema,
        FeedKudoSchema,
        RecentKudoSchema,
        KudoAuthorSchema,
        KudoStyleSchema,
        ColorSchema,
        EmojiSchema,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "pages", description = "Page loaders and form actions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
