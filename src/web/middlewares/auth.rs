use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_cookies::Cookies;

use crate::{
    auth::{self, CryptError},
    model::{ResourceTyped, entity::Membership},
    web::{AppState, RequestContext, context::AuthenticatedUser, error::WebError},
};

pub static AUTH_TOKEN: &str = "SID";

/// Resolves the session cookie into a [`RequestContext`]. Requests without a
/// cookie, or whose user is no longer a member of the token's tenant, continue
/// anonymously; handlers decide whether that is acceptable.
pub async fn extract_context_fn(
    State(state): State<AppState>,
    cookies: Cookies,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = match cookies.get(AUTH_TOKEN) {
        Some(token) => token,
        None => {
            req.extensions_mut().insert(RequestContext::new(None));
            return Ok(next.run(req).await);
        }
    };

    let claims = auth::process_token(token.value(), state.config().app().jwt())
        .map_err(|e| WebError::auth_cookie_invalid(AUTH_TOKEN, CryptError::from(e)))?
        .claims;

    let user_id = claims
        .user_id()
        .map_err(|e| WebError::auth_cookie_invalid(AUTH_TOKEN, e))?;
    let tenant_id = claims
        .tenant_id()
        .map_err(|e| WebError::auth_cookie_invalid(AUTH_TOKEN, e))?;

    let role = Membership::find_role(state.pool(), user_id, tenant_id)
        .await
        .map_err(|e| WebError::resource_fetch_error(Membership::get_resource_type(), e))?;

    let ctx = match role {
        Some(role) => RequestContext::new(Some(AuthenticatedUser::new(user_id, tenant_id, role))),
        None => {
            tracing::debug!(%user_id, %tenant_id, "session user is not a member of the tenant");
            RequestContext::new(None)
        }
    };

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}
