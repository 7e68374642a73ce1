use async_trait::async_trait;
use sqlx::prelude::{FromRow, Row};
use uuid::Uuid;

use crate::model::repo::{CatalogRepository, CatalogScope, ResourceTyped, decode_rows};
use crate::model::{ModelManager, error::DatabaseResult};

#[derive(Debug, Clone, FromRow)]
pub struct Vitrine {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct VitrineCreate {
    pub tenant_id: Uuid,
    pub name: String,
    pub order_index: Option<i32>,
}

impl ResourceTyped for Vitrine {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Vitrine
    }
}

#[async_trait]
impl CatalogRepository for Vitrine {
    type Create = VitrineCreate;

    async fn create(mm: &ModelManager, data: VitrineCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            "INSERT INTO vitrines (id, tenant_id, name, order_index) VALUES ($1,$2,$3,$4) RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(data.tenant_id)
        .bind(&data.name)
        .bind(data.order_index)
        .fetch_one(mm.executor())
        .await?;

        Ok(Vitrine {
            id: result.try_get("id")?,
            tenant_id: data.tenant_id,
            name: data.name,
            order_index: data.order_index,
        })
    }

    async fn fetch_scoped(mm: &ModelManager, scope: &CatalogScope) -> DatabaseResult<Vec<Self>> {
        let rows = sqlx::query(
            r#"
            SELECT v.id, v.tenant_id, v.name, v.order_index
            FROM vitrines v
            WHERE v.tenant_id = $1
              AND ($2::uuid IS NULL OR v.id = $2)
            ORDER BY COALESCE(v.order_index, 0), v.id
            "#,
        )
        .bind(scope.tenant_id)
        .bind(scope.vitrine_id)
        .fetch_all(mm.executor())
        .await?;

        Ok(decode_rows(rows))
    }
}
