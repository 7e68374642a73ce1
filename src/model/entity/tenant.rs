use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::prelude::{FromRow, Row};
use uuid::Uuid;

use crate::model::repo::ResourceTyped;
use crate::model::{ModelManager, error::DatabaseResult};

#[derive(Debug, Clone, Serialize, FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    /// AI-assisted features are enabled for this tenant
    pub ai_enabled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TenantCreate {
    pub name: String,
    pub ai_enabled: bool,
}

impl ResourceTyped for Tenant {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Tenant
    }
}

impl Tenant {
    pub async fn create(mm: &ModelManager, data: TenantCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            "INSERT INTO tenants (id, name, ai_enabled) VALUES ($1,$2,$3) RETURNING id, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(data.ai_enabled)
        .fetch_one(mm.executor())
        .await?;

        Ok(Tenant {
            id: result.try_get("id")?,
            name: data.name,
            ai_enabled: data.ai_enabled,
            created_at: result.try_get("created_at")?,
        })
    }

    pub async fn find_by_id(mm: &ModelManager, id: Uuid) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT id, name, ai_enabled, created_at FROM tenants WHERE id = $1")
            .bind(id)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }
}
