use sqlx::prelude::Row;
use uuid::Uuid;

use crate::model::repo::ResourceTyped;
use crate::model::{ModelManager, error::DatabaseResult};

/// Groups modules inside a course. Sections never show up in catalog
/// responses; modules are attached straight to their course.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Section {
    pub id: Uuid,
    pub course_id: Uuid,
    pub name: String,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct SectionCreate {
    pub course_id: Uuid,
    pub name: String,
    pub order_index: Option<i32>,
}

impl ResourceTyped for Section {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Section
    }
}

impl Section {
    pub async fn create(mm: &ModelManager, data: SectionCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            "INSERT INTO sections (id, course_id, name, order_index) VALUES ($1,$2,$3,$4) RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(data.course_id)
        .bind(&data.name)
        .bind(data.order_index)
        .fetch_one(mm.executor())
        .await?;

        Ok(Section {
            id: result.try_get("id")?,
            course_id: data.course_id,
            name: data.name,
            order_index: data.order_index,
        })
    }
}
