use crate::{
    model::error::{DatabaseError, DatabaseResult},
    web::{AuthenticatedUser, TenantRole},
};

/// Tenant admins pass every check; members only pass checks requiring `Member`.
pub fn check_access(actor: &AuthenticatedUser, required: TenantRole) -> DatabaseResult<()> {
    match (actor.role(), required) {
        (TenantRole::Admin, _) => Ok(()),
        (TenantRole::Member, TenantRole::Member) => Ok(()),
        (TenantRole::Member, TenantRole::Admin) => Err(DatabaseError::Forbidden),
    }
}
