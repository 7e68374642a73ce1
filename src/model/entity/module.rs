use async_trait::async_trait;
use sqlx::prelude::{FromRow, Row};
use uuid::Uuid;

use crate::model::repo::{CatalogRepository, CatalogScope, ResourceTyped, decode_rows};
use crate::model::{ModelManager, error::DatabaseResult};

/// Module row. `course_id` is resolved through the owning section.
#[derive(Debug, Clone, FromRow)]
pub struct Module {
    pub id: Uuid,
    pub course_id: Uuid,
    pub name: String,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct ModuleCreate {
    pub section_id: Uuid,
    pub name: String,
    pub order_index: Option<i32>,
}

impl ResourceTyped for Module {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Module
    }
}

#[async_trait]
impl CatalogRepository for Module {
    type Create = ModuleCreate;

    async fn create(mm: &ModelManager, data: ModuleCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            r#"
            INSERT INTO modules (id, section_id, name, order_index)
            VALUES ($1,$2,$3,$4)
            RETURNING id, (SELECT course_id FROM sections WHERE id = $2) AS course_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.section_id)
        .bind(&data.name)
        .bind(data.order_index)
        .fetch_one(mm.executor())
        .await?;

        Ok(Module {
            id: result.try_get("id")?,
            course_id: result.try_get("course_id")?,
            name: data.name,
            order_index: data.order_index,
        })
    }

    async fn fetch_scoped(mm: &ModelManager, scope: &CatalogScope) -> DatabaseResult<Vec<Self>> {
        let rows = sqlx::query(
            r#"
            SELECT m.id, s.course_id, m.name, m.order_index
            FROM modules m
            JOIN sections s ON s.id = m.section_id
            JOIN courses c ON c.id = s.course_id
            JOIN vitrines v ON v.id = c.vitrine_id
            WHERE v.tenant_id = $1
              AND ($2::uuid IS NULL OR v.id = $2)
              AND ($3::uuid IS NULL OR c.id = $3)
              AND ($4::uuid IS NULL OR m.id = $4)
            ORDER BY COALESCE(m.order_index, 0), m.id
            "#,
        )
        .bind(scope.tenant_id)
        .bind(scope.vitrine_id)
        .bind(scope.course_id)
        .bind(scope.module_id)
        .fetch_all(mm.executor())
        .await?;

        Ok(decode_rows(rows))
    }
}
