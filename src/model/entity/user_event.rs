use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::prelude::{FromRow, Row};
use uuid::Uuid;

use crate::impl_paginatable_for;
use crate::model::repo::{ResourceTyped, TenantScopedRepository, decode_rows};
use crate::model::{ModelManager, error::DatabaseResult};
use crate::utils::date_range::DateRange;

/// Something a user did inside a tenant, e.g. `lesson_viewed`.
#[derive(Debug, Clone, Serialize, FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_type: String,
    pub lesson_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserEventCreate {
    pub tenant_id: Uuid,
    pub user_id: Uuid,
    pub event_type: String,
    pub lesson_id: Option<Uuid>,
    /// Defaults to the database clock
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct EventFilter {
    pub window: DateRange,
    pub user_id: Option<Uuid>,
}

impl ResourceTyped for UserEvent {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::UserEvent
    }
}

impl UserEvent {
    pub async fn create(mm: &ModelManager, data: UserEventCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            r#"
            INSERT INTO user_events (id, tenant_id, user_id, event_type, lesson_id, created_at)
            VALUES ($1,$2,$3,$4,$5, COALESCE($6, now()))
            RETURNING id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.tenant_id)
        .bind(data.user_id)
        .bind(&data.event_type)
        .bind(data.lesson_id)
        .bind(data.created_at)
        .fetch_one(mm.executor())
        .await?;

        Ok(UserEvent {
            id: result.try_get("id")?,
            user_id: data.user_id,
            event_type: data.event_type,
            lesson_id: data.lesson_id,
            created_at: result.try_get("created_at")?,
        })
    }
}

#[async_trait::async_trait]
impl TenantScopedRepository<EventFilter> for UserEvent {
    async fn list(
        mm: &ModelManager,
        tenant_id: Uuid,
        filter: &EventFilter,
        limit: i64,
        offset: i64,
    ) -> DatabaseResult<Vec<Self>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, event_type, lesson_id, created_at
            FROM user_events
            WHERE tenant_id = $1
              AND created_at BETWEEN $2 AND $3
              AND ($4::uuid IS NULL OR user_id = $4)
            ORDER BY created_at DESC, id
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(tenant_id)
        .bind(filter.window.start)
        .bind(filter.window.end)
        .bind(filter.user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(mm.executor())
        .await?;

        Ok(decode_rows(rows))
    }

    async fn count(mm: &ModelManager, tenant_id: Uuid, filter: &EventFilter) -> DatabaseResult<i64> {
        let result: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM user_events
            WHERE tenant_id = $1
              AND created_at BETWEEN $2 AND $3
              AND ($4::uuid IS NULL OR user_id = $4)
            "#,
        )
        .bind(tenant_id)
        .bind(filter.window.start)
        .bind(filter.window.end)
        .bind(filter.user_id)
        .fetch_one(mm.executor())
        .await?;

        Ok(result)
    }
}

impl_paginatable_for!(UserEvent, EventFilter);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeCount {
    pub event_type: String,
    pub count: i64,
}

impl ResourceTyped for EventTypeCount {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::UserEvent
    }
}

/// Aggregated activity of a tenant over a window.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_events: i64,
    pub active_users: i64,
    pub by_type: Vec<EventTypeCount>,
}

impl ActivitySummary {
    pub async fn fetch(
        mm: &ModelManager,
        tenant_id: Uuid,
        filter: &EventFilter,
    ) -> DatabaseResult<Self> {
        let totals = sqlx::query(
            r#"
            SELECT COUNT(*) AS total_events, COUNT(DISTINCT user_id) AS active_users
            FROM user_events
            WHERE tenant_id = $1
              AND created_at BETWEEN $2 AND $3
              AND ($4::uuid IS NULL OR user_id = $4)
            "#,
        )
        .bind(tenant_id)
        .bind(filter.window.start)
        .bind(filter.window.end)
        .bind(filter.user_id)
        .fetch_one(mm.executor())
        .await?;

        let rows = sqlx::query(
            r#"
            SELECT event_type, COUNT(*) AS count
            FROM user_events
            WHERE tenant_id = $1
              AND created_at BETWEEN $2 AND $3
              AND ($4::uuid IS NULL OR user_id = $4)
            GROUP BY event_type
            ORDER BY count DESC, event_type
            "#,
        )
        .bind(tenant_id)
        .bind(filter.window.start)
        .bind(filter.window.end)
        .bind(filter.user_id)
        .fetch_all(mm.executor())
        .await?;

        Ok(Self {
            start_date: filter.window.start,
            end_date: filter.window.end,
            total_events: totals.try_get("total_events")?,
            active_users: totals.try_get("active_users")?,
            by_type: decode_rows(rows),
        })
    }
}
