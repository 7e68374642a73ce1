use crate::web::{AppState, doc::ApiDoc};
use axum::Router;
use tower_cookies::CookieManagerLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod activity;
pub mod courses;
pub mod lessons;
pub mod modules;
pub mod tenants;
pub mod users;
pub mod vitrines;

pub fn build_app(state: AppState) -> Router {
    let docs = state.config().app().docs();

    let mut router = Router::new()
        .nest("/api/v1/vitrines", vitrines::routes(state.clone()))
        .nest("/api/v1/courses", courses::routes(state.clone()))
        .nest("/api/v1/modules", modules::routes(state.clone()))
        .nest("/api/v1/lessons", lessons::routes(state.clone()))
        .nest("/api/v1/users", users::routes(state.clone()))
        .nest("/api/v1/tenants", tenants::routes(state.clone()))
        .nest("/api/v1/activity", activity::routes(state.clone()));

    if docs {
        router = router
            .merge(SwaggerUi::new("/api/v1/docs").url("/api-doc/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(CookieManagerLayer::default())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
