use async_trait::async_trait;
use sqlx::prelude::{FromRow, Row};
use uuid::Uuid;

use crate::model::repo::{CatalogRepository, CatalogScope, ResourceTyped, decode_rows};
use crate::model::{ModelManager, error::DatabaseResult};

/// Published lesson row. Unpublished lessons are never fetched.
#[derive(Debug, Clone, FromRow)]
pub struct Lesson {
    pub id: Uuid,
    pub module_id: Uuid,
    pub name: String,
    pub slug: Option<String>,
    pub lesson_type: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail: Option<String>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct LessonCreate {
    pub module_id: Uuid,
    pub name: String,
    pub slug: Option<String>,
    pub lesson_type: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail: Option<String>,
    pub order_index: Option<i32>,
    pub published: bool,
}

impl ResourceTyped for Lesson {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Lesson
    }
}

#[async_trait]
impl CatalogRepository for Lesson {
    type Create = LessonCreate;

    async fn create(mm: &ModelManager, data: LessonCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            r#"
            INSERT INTO lessons
                (id, module_id, name, slug, type, media_url, thumbnail, order_index, published)
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.module_id)
        .bind(&data.name)
        .bind(&data.slug)
        .bind(&data.lesson_type)
        .bind(&data.media_url)
        .bind(&data.thumbnail)
        .bind(data.order_index)
        .bind(data.published)
        .fetch_one(mm.executor())
        .await?;

        Ok(Lesson {
            id: result.try_get("id")?,
            module_id: data.module_id,
            name: data.name,
            slug: data.slug,
            lesson_type: data.lesson_type,
            media_url: data.media_url,
            thumbnail: data.thumbnail,
            order_index: data.order_index,
        })
    }

    async fn fetch_scoped(mm: &ModelManager, scope: &CatalogScope) -> DatabaseResult<Vec<Self>> {
        let rows = sqlx::query(
            r#"
            SELECT
                l.id,
                l.module_id,
                l.name,
                l.slug,
                l.type AS lesson_type,
                l.media_url,
                l.thumbnail,
                l.order_index
            FROM lessons l
            JOIN modules m ON m.id = l.module_id
            JOIN sections s ON s.id = m.section_id
            JOIN courses c ON c.id = s.course_id
            JOIN vitrines v ON v.id = c.vitrine_id
            WHERE v.tenant_id = $1
              AND l.published
              AND ($2::uuid IS NULL OR v.id = $2)
              AND ($3::uuid IS NULL OR c.id = $3)
              AND ($4::uuid IS NULL OR m.id = $4)
              AND ($5::uuid IS NULL OR l.id = $5)
            ORDER BY COALESCE(l.order_index, 0), l.id
            "#,
        )
        .bind(scope.tenant_id)
        .bind(scope.vitrine_id)
        .bind(scope.course_id)
        .bind(scope.module_id)
        .bind(scope.lesson_id)
        .fetch_all(mm.executor())
        .await?;

        Ok(decode_rows(rows))
    }
}
