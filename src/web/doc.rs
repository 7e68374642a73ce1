use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::web::middlewares::AUTH_TOKEN;

pub struct CookieAuthModifier;

impl Modify for CookieAuthModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(schema) = openapi.components.as_mut() {
            schema.add_security_scheme(
                "cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    AUTH_TOKEN,
                    "JWT bound to a user and a tenant",
                ))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::routes::vitrines::vitrines_list_handler,
        crate::web::routes::vitrines::vitrines_get_handler,
        crate::web::routes::courses::courses_get_handler,
        crate::web::routes::modules::modules_get_handler,
        crate::web::routes::lessons::lessons_get_handler,
        crate::web::routes::users::users_list_handler,
        crate::web::routes::users::users_me_handler,
        crate::web::routes::tenants::tenants_current_handler,
        crate::web::routes::activity::activity_events_handler,
        crate::web::routes::activity::activity_summary_handler,
        crate::web::routes::activity::activity_logs_handler,
    ),
    modifiers(&CookieAuthModifier),
    tags(
        (name = "catalog", description = "Vitrine, course, module and lesson browsing"),
        (name = "users", description = "Tenant members"),
        (name = "tenants", description = "Current tenant"),
        (name = "activity", description = "User events, summaries and system logs"),
    )
)]
pub struct ApiDoc;
