use uuid::Uuid;

use super::assemble::{assemble_courses, assemble_modules, assemble_vitrines};
use super::{CourseNode, LessonNode, ModuleNode, VitrineNode};
use crate::model::entity::{Course, Lesson, Module, Vitrine};
use crate::model::{CatalogRepository, CatalogScope, DatabaseResult, ModelManager};

impl VitrineNode {
    /// Every vitrine of the tenant with its full subtree.
    pub async fn fetch_all(mm: &ModelManager, tenant_id: Uuid) -> DatabaseResult<Vec<Self>> {
        let scope = CatalogScope::tenant(tenant_id);

        let vitrines = Vitrine::fetch_scoped(mm, &scope).await?;
        let courses = Course::fetch_scoped(mm, &scope).await?;
        let modules = Module::fetch_scoped(mm, &scope).await?;
        let lessons = Lesson::fetch_scoped(mm, &scope).await?;

        Ok(assemble_vitrines(vitrines, courses, modules, lessons))
    }

    /// `None` if the vitrine does not exist or belongs to another tenant.
    pub async fn fetch_one(
        mm: &ModelManager,
        tenant_id: Uuid,
        id: Uuid,
        include_children: bool,
    ) -> DatabaseResult<Option<Self>> {
        let scope = CatalogScope::vitrine(tenant_id, id);

        let Some(vitrine) = Vitrine::find_scoped(mm, &scope).await? else {
            return Ok(None);
        };

        if !include_children {
            return Ok(Some(vitrine.into()));
        }

        let courses = Course::fetch_scoped(mm, &scope).await?;
        let modules = Module::fetch_scoped(mm, &scope).await?;
        let lessons = Lesson::fetch_scoped(mm, &scope).await?;

        Ok(assemble_vitrines(vec![vitrine], courses, modules, lessons)
            .into_iter()
            .next())
    }
}

impl CourseNode {
    pub async fn fetch_one(
        mm: &ModelManager,
        tenant_id: Uuid,
        id: Uuid,
        include_children: bool,
    ) -> DatabaseResult<Option<Self>> {
        let scope = CatalogScope::course(tenant_id, id);

        let Some(course) = Course::find_scoped(mm, &scope).await? else {
            return Ok(None);
        };

        if !include_children {
            return Ok(Some(course.into()));
        }

        let modules = Module::fetch_scoped(mm, &scope).await?;
        let lessons = Lesson::fetch_scoped(mm, &scope).await?;

        Ok(assemble_courses(vec![course], modules, lessons)
            .into_iter()
            .next())
    }
}

impl ModuleNode {
    pub async fn fetch_one(
        mm: &ModelManager,
        tenant_id: Uuid,
        id: Uuid,
        include_children: bool,
    ) -> DatabaseResult<Option<Self>> {
        let scope = CatalogScope::module(tenant_id, id);

        let Some(module) = Module::find_scoped(mm, &scope).await? else {
            return Ok(None);
        };

        if !include_children {
            return Ok(Some(module.into()));
        }

        let lessons = Lesson::fetch_scoped(mm, &scope).await?;

        Ok(assemble_modules(vec![module], lessons).into_iter().next())
    }
}

impl LessonNode {
    /// Lessons are leaves; unpublished ones are reported as absent.
    pub async fn fetch_one(
        mm: &ModelManager,
        tenant_id: Uuid,
        id: Uuid,
    ) -> DatabaseResult<Option<Self>> {
        let scope = CatalogScope::lesson(tenant_id, id);
        Ok(Lesson::find_scoped(mm, &scope).await?.map(LessonNode::from))
    }
}
