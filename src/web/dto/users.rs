use serde::Serialize;

use crate::model::entity::{Membership, UserEntity};

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct CurrentUserResponse {
    pub user: UserEntity,
    pub memberships: Vec<Membership>,
}
