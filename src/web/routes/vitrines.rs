use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use uuid::Uuid;

use crate::model::ResourceTyped;
use crate::model::catalog::VitrineNode;
use crate::model::entity::Vitrine;
use crate::web::dto::catalog::{
    DetailQuery, VitrineDetailResponse, VitrineListResponse, VitrineResponse,
};
use crate::web::error::ErrorResponse;
use crate::web::{AppState, RequestContext, WebError, WebResult, middlewares};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", get(vitrines_list_handler))
        .route("/{id}", get(vitrines_get_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::extract_context_fn,
        ))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/vitrines",
    description = "List every vitrine of the current tenant with its courses, modules and published lessons",
    responses(
        (status = 200, description = "Vitrine tree", body = VitrineListResponse),
        (status = 401, description = "You're not authorized to do this", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("cookie" = [])
    ),
    tag = "catalog"
)]
async fn vitrines_list_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;
    let vitrines = VitrineNode::fetch_all(state.pool(), user.tenant_id())
        .await
        .map_err(|e| WebError::resource_fetch_error(Vitrine::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(VitrineListResponse::from_nodes(vitrines))))
}

#[utoipa::path(
    get,
    path = "/api/v1/vitrines/{vitrine_id}",
    description = "Fetch one vitrine, optionally with its whole subtree",
    params(
        ("vitrine_id" = Uuid, Path, description = "ID of the vitrine to get"),
        DetailQuery,
    ),
    responses(
        (status = 200, description = "Vitrine found", body = VitrineDetailResponse),
        (status = 404, description = "Vitrine not found", body = ErrorResponse),
        (status = 401, description = "You're not authorized to do this", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("cookie" = [])
    ),
    tag = "catalog"
)]
async fn vitrines_get_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetailQuery>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;
    let vitrine = VitrineNode::fetch_one(state.pool(), user.tenant_id(), id, query.include_children)
        .await
        .map_err(|e| WebError::resource_fetch_error(Vitrine::get_resource_type(), e))?
        .ok_or_else(|| WebError::resource_not_found(Vitrine::get_resource_type()))?;

    let vitrine = VitrineResponse::from_node(vitrine, query.include_children);
    Ok((StatusCode::OK, Json(VitrineDetailResponse { vitrine })))
}
