use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use uuid::Uuid;

use crate::{
    model::{
        PaginatableRepository, Paginated, ResourceTyped, check_access,
        entity::{ActivitySummary, SystemLog, UserEvent},
    },
    web::{
        AppState, AuthenticatedUser, RequestContext, TenantRole, WebError, WebResult,
        dto::{
            activity::{EventsQuery, LogQuery, WindowQuery},
            pagination::PageQuery,
        },
        error::ErrorResponse,
        middlewares,
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/events", get(activity_events_handler))
        .route("/summary", get(activity_summary_handler))
        .route("/logs", get(activity_logs_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::extract_context_fn,
        ))
        .with_state(state)
}

/// Members only ever see their own activity; admins may look at anyone.
fn visible_user(user: &AuthenticatedUser, requested: Option<Uuid>) -> WebResult<Option<Uuid>> {
    match (user.role(), requested) {
        (TenantRole::Admin, requested) => Ok(requested),
        (TenantRole::Member, Some(id)) if id != user.user_id() => {
            Err(WebError::resource_forbidden(UserEvent::get_resource_type()))
        }
        (TenantRole::Member, _) => Ok(Some(user.user_id())),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/activity/events",
    description = "User events of the current tenant inside a date window, newest first. Without dates the last 31 days are used",
    params(PageQuery, WindowQuery, EventsQuery),
    responses(
        (status = 200, description = "Page of user events", body = Paginated<UserEvent>),
        (status = 400, description = "Invalid page or limit", body = ErrorResponse),
        (status = 401, description = "You're not authorized to do this", body = ErrorResponse),
        (status = 403, description = "Members can only see their own events", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("cookie" = [])
    ),
    tag = "activity"
)]
async fn activity_events_handler(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(window): Query<WindowQuery>,
    Query(mut events): Query<EventsQuery>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;
    let request = page.validate(UserEvent::get_resource_type())?;
    events.user_id = visible_user(user, events.user_id)?;

    let filter = events.into_filter(window.resolve());
    let page = UserEvent::page(state.pool(), user.tenant_id(), &filter, request)
        .await
        .map_err(|e| WebError::resource_fetch_error(UserEvent::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(page)))
}

#[utoipa::path(
    get,
    path = "/api/v1/activity/summary",
    description = "Event totals of the current tenant inside a date window",
    params(WindowQuery, EventsQuery),
    responses(
        (status = 200, description = "Activity summary", body = ActivitySummary),
        (status = 401, description = "You're not authorized to do this", body = ErrorResponse),
        (status = 403, description = "Members can only see their own activity", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("cookie" = [])
    ),
    tag = "activity"
)]
async fn activity_summary_handler(
    State(state): State<AppState>,
    Query(window): Query<WindowQuery>,
    Query(mut events): Query<EventsQuery>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;
    events.user_id = visible_user(user, events.user_id)?;

    let filter = events.into_filter(window.resolve());
    let summary = ActivitySummary::fetch(state.pool(), user.tenant_id(), &filter)
        .await
        .map_err(|e| WebError::resource_fetch_error(UserEvent::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(summary)))
}

#[utoipa::path(
    get,
    path = "/api/v1/activity/logs",
    description = "System logs of the current tenant inside a date window, newest first",
    params(PageQuery, WindowQuery, LogQuery),
    responses(
        (status = 200, description = "Page of system logs", body = Paginated<SystemLog>),
        (status = 400, description = "Invalid page or limit", body = ErrorResponse),
        (status = 401, description = "You're not authorized to do this", body = ErrorResponse),
        (status = 403, description = "Only tenant admins can read logs", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("cookie" = [])
    ),
    tag = "activity"
)]
async fn activity_logs_handler(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(window): Query<WindowQuery>,
    Query(logs): Query<LogQuery>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;
    check_access(user, TenantRole::Admin)
        .map_err(|e| WebError::resource_fetch_error(SystemLog::get_resource_type(), e))?;

    let request = page.validate(SystemLog::get_resource_type())?;
    let filter = logs.into_filter(window.resolve());
    let page = SystemLog::page(state.pool(), user.tenant_id(), &filter, request)
        .await
        .map_err(|e| WebError::resource_fetch_error(SystemLog::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(page)))
}
