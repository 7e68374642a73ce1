use async_trait::async_trait;
use sqlx::prelude::{FromRow, Row};
use uuid::Uuid;

use crate::model::repo::{CatalogRepository, CatalogScope, ResourceTyped, decode_rows};
use crate::model::{ModelManager, error::DatabaseResult};

#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub id: Uuid,
    pub vitrine_id: Uuid,
    pub name: String,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CourseCreate {
    pub vitrine_id: Uuid,
    pub name: String,
    pub order_index: Option<i32>,
}

impl ResourceTyped for Course {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Course
    }
}

#[async_trait]
impl CatalogRepository for Course {
    type Create = CourseCreate;

    async fn create(mm: &ModelManager, data: CourseCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            "INSERT INTO courses (id, vitrine_id, name, order_index) VALUES ($1,$2,$3,$4) RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(data.vitrine_id)
        .bind(&data.name)
        .bind(data.order_index)
        .fetch_one(mm.executor())
        .await?;

        Ok(Course {
            id: result.try_get("id")?,
            vitrine_id: data.vitrine_id,
            name: data.name,
            order_index: data.order_index,
        })
    }

    async fn fetch_scoped(mm: &ModelManager, scope: &CatalogScope) -> DatabaseResult<Vec<Self>> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.vitrine_id, c.name, c.order_index
            FROM courses c
            JOIN vitrines v ON v.id = c.vitrine_id
            WHERE v.tenant_id = $1
              AND ($2::uuid IS NULL OR v.id = $2)
              AND ($3::uuid IS NULL OR c.id = $3)
            ORDER BY COALESCE(c.order_index, 0), c.id
            "#,
        )
        .bind(scope.tenant_id)
        .bind(scope.vitrine_id)
        .bind(scope.course_id)
        .fetch_all(mm.executor())
        .await?;

        Ok(decode_rows(rows))
    }
}
