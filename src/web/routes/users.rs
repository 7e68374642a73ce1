use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};

use crate::{
    model::{
        PaginatableRepository, Paginated, ResourceTyped, check_access,
        entity::{Membership, TenantMember, UserEntity},
    },
    web::{
        AppState, RequestContext, TenantRole, WebError, WebResult,
        dto::{pagination::PageQuery, users::CurrentUserResponse},
        error::ErrorResponse,
        middlewares,
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", get(users_list_handler))
        .route("/me", get(users_me_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::extract_context_fn,
        ))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    description = "List members of the current tenant, ordered by name",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of tenant members", body = Paginated<TenantMember>),
        (status = 400, description = "Invalid page or limit", body = ErrorResponse),
        (status = 401, description = "You're not authorized to do this", body = ErrorResponse),
        (status = 403, description = "Only tenant admins can list members", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("cookie" = [])
    ),
    tag = "users"
)]
async fn users_list_handler(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;
    check_access(user, TenantRole::Admin)
        .map_err(|e| WebError::resource_fetch_error(TenantMember::get_resource_type(), e))?;

    let request = page.validate(TenantMember::get_resource_type())?;
    let members = TenantMember::page(state.pool(), user.tenant_id(), &(), request)
        .await
        .map_err(|e| WebError::resource_fetch_error(TenantMember::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(members)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    description = "Current user and the tenants they belong to",
    responses(
        (status = 200, description = "Current user", body = CurrentUserResponse),
        (status = 401, description = "You're not authorized to do this", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("cookie" = [])
    ),
    tag = "users"
)]
async fn users_me_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;
    let entity = UserEntity::find_by_id(state.pool(), user.user_id())
        .await
        .map_err(|e| WebError::resource_fetch_error(UserEntity::get_resource_type(), e))?
        .ok_or_else(|| WebError::resource_not_found(UserEntity::get_resource_type()))?;

    let memberships = Membership::all_for_user(state.pool(), user.user_id())
        .await
        .map_err(|e| WebError::resource_fetch_error(Membership::get_resource_type(), e))?;

    Ok((
        StatusCode::OK,
        Json(CurrentUserResponse {
            user: entity,
            memberships,
        }),
    ))
}
