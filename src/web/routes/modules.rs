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
use crate::model::catalog::ModuleNode;
use crate::model::entity::Module;
use crate::web::dto::catalog::{DetailQuery, ModuleDetailResponse, ModuleResponse};
use crate::web::error::ErrorResponse;
use crate::web::{AppState, RequestContext, WebError, WebResult, middlewares};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/{id}", get(modules_get_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::extract_context_fn,
        ))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/modules/{module_id}",
    description = "Fetch one module, optionally with its published lessons",
    params(
        ("module_id" = Uuid, Path, description = "ID of the module to get"),
        DetailQuery,
    ),
    responses(
        (status = 200, description = "Module found", body = ModuleDetailResponse),
        (status = 404, description = "Module not found", body = ErrorResponse),
        (status = 401, description = "You're not authorized to do this", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("cookie" = [])
    ),
    tag = "catalog"
)]
async fn modules_get_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetailQuery>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let user = ctx.user()?;
    let module = ModuleNode::fetch_one(state.pool(), user.tenant_id(), id, query.include_children)
        .await
        .map_err(|e| WebError::resource_fetch_error(Module::get_resource_type(), e))?
        .ok_or_else(|| WebError::resource_not_found(Module::get_resource_type()))?;

    let module = ModuleResponse::from_node(module, query.include_children);
    Ok((StatusCode::OK, Json(ModuleDetailResponse { module })))
}
