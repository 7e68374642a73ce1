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
use crate::model::catalog::CourseNode;
use crate::model::entity::Course;
use crate::web::dto::catalog::{CourseDetailResponse, CourseResponse, DetailQuery};
use crate::web::error::ErrorResponse;
use crate::web::{AppState, RequestContext, WebError, WebResult, middlewares};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/{id}", get(courses_get_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::extract_context_fn,
        ))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{course_id}",
    description = "Fetch one course, optionally with its modules and published lessons",
    params(
        ("course_id" = Uuid, Path, description = "ID of the course to get"),
        DetailQuery,
    ),
    responses(
        (status = 200, description = "Course found", body = CourseDetailResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 401, description = "You're not authorized to do this", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("cookie" = [])
    ),
    tag = "catalog"
)]
async fn courses_get_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetailQuery>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;
    let course = CourseNode::fetch_one(state.pool(), user.tenant_id(), id, query.include_children)
        .await
        .map_err(|e| WebError::resource_fetch_error(Course::get_resource_type(), e))?
        .ok_or_else(|| WebError::resource_not_found(Course::get_resource_type()))?;

    let course = CourseResponse::from_node(course, query.include_children);
    Ok((StatusCode::OK, Json(CourseDetailResponse { course })))
}
