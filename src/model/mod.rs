mod access;
pub use access::check_access;

mod database;
pub use database::DbConnection;

pub mod catalog;
pub mod entity;

mod error;
pub use error::{DatabaseError, DatabaseResult};

mod pagination;
pub use pagination::{PageInfo, PageRequest, Paginated};

mod repo;
pub use repo::{
    CatalogRepository, CatalogScope, PaginatableRepository, ResourceType, ResourceTyped,
    TenantScopedRepository, decode_rows,
};

use sqlx::PgPool;

#[derive(Debug, Clone)]
pub struct ModelManager {
    database: DbConnection,
}

impl ModelManager {
    pub fn new(conn: DbConnection) -> Self {
        Self { database: conn }
    }

    pub fn executor(&self) -> &PgPool {
        self.database.pool()
    }
}
