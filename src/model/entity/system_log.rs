use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::prelude::{FromRow, Row};
use uuid::Uuid;

use crate::impl_paginatable_for;
use crate::model::repo::{ResourceTyped, TenantScopedRepository, decode_rows};
use crate::model::{ModelManager, error::DatabaseResult};
use crate::utils::date_range::DateRange;

#[derive(Debug, Clone, Serialize, FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemLog {
    pub id: Uuid,
    pub level: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SystemLogCreate {
    pub tenant_id: Option<Uuid>,
    pub level: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct LogFilter {
    pub window: DateRange,
    pub level: Option<String>,
}

impl ResourceTyped for SystemLog {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::SystemLog
    }
}

impl SystemLog {
    pub async fn create(mm: &ModelManager, data: SystemLogCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            r#"
            INSERT INTO system_logs (id, tenant_id, level, message)
            VALUES ($1,$2,$3,$4)
            RETURNING id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.tenant_id)
        .bind(&data.level)
        .bind(&data.message)
        .fetch_one(mm.executor())
        .await?;

        Ok(SystemLog {
            id: result.try_get("id")?,
            level: data.level,
            message: data.message,
            created_at: result.try_get("created_at")?,
        })
    }
}

#[async_trait::async_trait]
impl TenantScopedRepository<LogFilter> for SystemLog {
    async fn list(
        mm: &ModelManager,
        tenant_id: Uuid,
        filter: &LogFilter,
        limit: i64,
        offset: i64,
    ) -> DatabaseResult<Vec<Self>> {
        let rows = sqlx::query(
            r#"
            SELECT id, level, message, created_at
            FROM system_logs
            WHERE tenant_id = $1
              AND created_at BETWEEN $2 AND $3
              AND ($4::text IS NULL OR level = $4)
            ORDER BY created_at DESC, id
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(tenant_id)
        .bind(filter.window.start)
        .bind(filter.window.end)
        .bind(&filter.level)
        .bind(limit)
        .bind(offset)
        .fetch_all(mm.executor())
        .await?;

        Ok(decode_rows(rows))
    }

    async fn count(mm: &ModelManager, tenant_id: Uuid, filter: &LogFilter) -> DatabaseResult<i64> {
        let result: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM system_logs
            WHERE tenant_id = $1
              AND created_at BETWEEN $2 AND $3
              AND ($4::text IS NULL OR level = $4)
            "#,
        )
        .bind(tenant_id)
        .bind(filter.window.start)
        .bind(filter.window.end)
        .bind(&filter.level)
        .fetch_one(mm.executor())
        .await?;

        Ok(result)
    }
}

impl_paginatable_for!(SystemLog, LogFilter);
