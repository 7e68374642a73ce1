use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::prelude::{FromRow, Row};
use uuid::Uuid;

use crate::impl_paginatable_for;
use crate::model::repo::{ResourceTyped, TenantScopedRepository, decode_rows};
use crate::model::{ModelManager, error::DatabaseResult};
use crate::web::TenantRole;

#[derive(Debug, Clone, Serialize, FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserEntityCreate {
    pub name: String,
    pub email: String,
}

impl ResourceTyped for UserEntity {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::User
    }
}

impl UserEntity {
    pub async fn create(mm: &ModelManager, data: UserEntityCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            "INSERT INTO users (id, name, email) VALUES ($1,$2,$3) RETURNING id, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.email)
        .fetch_one(mm.executor())
        .await?;

        Ok(UserEntity {
            id: result.try_get("id")?,
            name: data.name,
            email: data.email,
            created_at: result.try_get("created_at")?,
        })
    }

    pub async fn find_by_id(mm: &ModelManager, id: Uuid) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT id, name, email, created_at FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }

    pub async fn find_by_email(mm: &ModelManager, email: &str) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT id, name, email, created_at FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }
}

/// A user as seen from inside one tenant.
#[derive(Debug, Clone, Serialize, FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

impl ResourceTyped for TenantMember {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::User
    }
}

#[async_trait::async_trait]
impl TenantScopedRepository<()> for TenantMember {
    async fn list(
        mm: &ModelManager,
        tenant_id: Uuid,
        _filter: &(),
        limit: i64,
        offset: i64,
    ) -> DatabaseResult<Vec<Self>> {
        let rows = sqlx::query(
            r#"
            SELECT u.id, u.name, u.email, ut.role, ut.created_at AS joined_at
            FROM users u
            JOIN users_on_tenants ut ON ut.user_id = u.id
            WHERE ut.tenant_id = $1
            ORDER BY u.name, u.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(tenant_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(mm.executor())
        .await?;

        Ok(decode_rows(rows))
    }

    async fn count(mm: &ModelManager, tenant_id: Uuid, _filter: &()) -> DatabaseResult<i64> {
        let result: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users_on_tenants WHERE tenant_id = $1")
                .bind(tenant_id)
                .fetch_one(mm.executor())
                .await?;

        Ok(result)
    }
}

impl_paginatable_for!(TenantMember, ());

/// Link between a user and a tenant.
#[derive(Debug, Clone, Serialize, FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub tenant_id: Uuid,
    pub tenant_name: String,
    pub role: String,
}

impl ResourceTyped for Membership {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Tenant
    }
}

impl Membership {
    pub async fn create(
        mm: &ModelManager,
        user_id: Uuid,
        tenant_id: Uuid,
        role: TenantRole,
    ) -> DatabaseResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users_on_tenants (user_id, tenant_id, role) VALUES ($1,$2,$3)
            ON CONFLICT (user_id, tenant_id) DO UPDATE SET role = EXCLUDED.role
            "#,
        )
        .bind(user_id)
        .bind(tenant_id)
        .bind(role.to_string())
        .execute(mm.executor())
        .await?;
        Ok(())
    }

    /// Role of `user_id` inside `tenant_id`, `None` when the user is not a member.
    pub async fn find_role(
        mm: &ModelManager,
        user_id: Uuid,
        tenant_id: Uuid,
    ) -> DatabaseResult<Option<TenantRole>> {
        let role: Option<String> = sqlx::query_scalar(
            "SELECT role FROM users_on_tenants WHERE user_id = $1 AND tenant_id = $2",
        )
        .bind(user_id)
        .bind(tenant_id)
        .fetch_optional(mm.executor())
        .await?;

        Ok(role.as_deref().map(TenantRole::from))
    }

    pub async fn all_for_user(mm: &ModelManager, user_id: Uuid) -> DatabaseResult<Vec<Self>> {
        let rows = sqlx::query(
            r#"
            SELECT t.id AS tenant_id, t.name AS tenant_name, ut.role
            FROM users_on_tenants ut
            JOIN tenants t ON t.id = ut.tenant_id
            WHERE ut.user_id = $1
            ORDER BY t.name, t.id
            "#,
        )
        .bind(user_id)
        .fetch_all(mm.executor())
        .await?;

        Ok(decode_rows(rows))
    }
}
