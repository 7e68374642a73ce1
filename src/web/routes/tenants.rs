use axum::{
    Json, Router, extract::State, http::StatusCode, middleware, response::IntoResponse,
    routing::get,
};

use crate::{
    model::{ResourceTyped, entity::Tenant},
    web::{AppState, RequestContext, WebError, WebResult, error::ErrorResponse, middlewares},
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/current", get(tenants_current_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::extract_context_fn,
        ))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/tenants/current",
    description = "Tenant the session is bound to",
    responses(
        (status = 200, description = "Current tenant", body = Tenant),
        (status = 401, description = "You're not authorized to do this", body = ErrorResponse),
        (status = 404, description = "Tenant not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("cookie" = [])
    ),
    tag = "tenants"
)]
async fn tenants_current_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;
    let tenant = Tenant::find_by_id(state.pool(), user.tenant_id())
        .await
        .map_err(|e| WebError::resource_fetch_error(Tenant::get_resource_type(), e))?
        .ok_or_else(|| WebError::resource_not_found(Tenant::get_resource_type()))?;

    Ok((StatusCode::OK, Json(tenant)))
}
