use sqlx::{FromRow, postgres::PgRow};
use uuid::Uuid;

use crate::model::{
    ModelManager,
    error::DatabaseResult,
    pagination::{PageRequest, Paginated},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Tenant,
    User,
    Vitrine,
    Course,
    Section,
    Module,
    Lesson,
    UserEvent,
    SystemLog,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Tenant => "Tenant",
            Self::User => "User",
            Self::Vitrine => "Vitrine",
            Self::Course => "Course",
            Self::Section => "Section",
            Self::Module => "Module",
            Self::Lesson => "Lesson",
            Self::UserEvent => "User event",
            Self::SystemLog => "System log",
        };
        f.write_str(name)
    }
}

pub trait ResourceTyped {
    fn get_resource_type() -> ResourceType;
}

/// Narrows a catalog query. `tenant_id` is mandatory; every other field
/// restricts the result to the subtree under that entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogScope {
    pub tenant_id: Uuid,
    pub vitrine_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
    pub module_id: Option<Uuid>,
    pub lesson_id: Option<Uuid>,
}

impl CatalogScope {
    pub fn tenant(tenant_id: Uuid) -> Self {
        Self {
            tenant_id,
            vitrine_id: None,
            course_id: None,
            module_id: None,
            lesson_id: None,
        }
    }

    pub fn vitrine(tenant_id: Uuid, vitrine_id: Uuid) -> Self {
        Self {
            vitrine_id: Some(vitrine_id),
            ..Self::tenant(tenant_id)
        }
    }

    pub fn course(tenant_id: Uuid, course_id: Uuid) -> Self {
        Self {
            course_id: Some(course_id),
            ..Self::tenant(tenant_id)
        }
    }

    pub fn module(tenant_id: Uuid, module_id: Uuid) -> Self {
        Self {
            module_id: Some(module_id),
            ..Self::tenant(tenant_id)
        }
    }

    pub fn lesson(tenant_id: Uuid, lesson_id: Uuid) -> Self {
        Self {
            lesson_id: Some(lesson_id),
            ..Self::tenant(tenant_id)
        }
    }
}

/// One level of the vitrine hierarchy, fetched as a flat row-set.
#[async_trait::async_trait]
pub trait CatalogRepository: Sized + Send + ResourceTyped {
    type Create: Send;

    async fn create(mm: &ModelManager, data: Self::Create) -> DatabaseResult<Self>;

    /// All rows of this level visible under `scope`, ascending by order.
    async fn fetch_scoped(mm: &ModelManager, scope: &CatalogScope) -> DatabaseResult<Vec<Self>>;

    async fn find_scoped(mm: &ModelManager, scope: &CatalogScope) -> DatabaseResult<Option<Self>> {
        Ok(Self::fetch_scoped(mm, scope).await?.into_iter().next())
    }
}

/// Listings owned by a tenant, narrowed by a per-entity filter.
#[async_trait::async_trait]
pub trait TenantScopedRepository<F>: Sized + Send + ResourceTyped
where
    F: Sync,
{
    async fn list(
        mm: &ModelManager,
        tenant_id: Uuid,
        filter: &F,
        limit: i64,
        offset: i64,
    ) -> DatabaseResult<Vec<Self>>;

    async fn count(mm: &ModelManager, tenant_id: Uuid, filter: &F) -> DatabaseResult<i64>;
}

#[async_trait::async_trait]
pub trait PaginatableRepository<F>: TenantScopedRepository<F>
where
    F: Sync,
{
    async fn page(
        mm: &ModelManager,
        tenant_id: Uuid,
        filter: &F,
        request: PageRequest,
    ) -> DatabaseResult<Paginated<Self>>;
}

#[macro_export]
macro_rules! impl_paginatable_for {
    ($ent:ident, $filter:ty) => {
        #[async_trait::async_trait]
        impl $crate::model::PaginatableRepository<$filter> for $ent {
            async fn page(
                mm: &$crate::model::ModelManager,
                tenant_id: uuid::Uuid,
                filter: &$filter,
                request: $crate::model::PageRequest,
            ) -> $crate::model::DatabaseResult<$crate::model::Paginated<$ent>> {
                use $crate::model::TenantScopedRepository;

                let items =
                    $ent::list(mm, tenant_id, filter, request.limit(), request.offset()).await?;
                let count = $ent::count(mm, tenant_id, filter).await?;
                Ok($crate::model::Paginated::new(items, request, count))
            }
        }
    };
}

/// Decodes fetched rows one by one. A row that fails to decode is logged and
/// skipped, so the result may be shorter than a separately counted total.
pub fn decode_rows<T>(rows: Vec<PgRow>) -> Vec<T>
where
    T: for<'r> FromRow<'r, PgRow> + ResourceTyped,
{
    rows.iter()
        .filter_map(|row| match T::from_row(row) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(
                    resource = %T::get_resource_type(),
                    error = %e,
                    "skipping undecodable row"
                );
                None
            }
        })
        .collect()
}
