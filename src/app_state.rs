use crate::{
    analysis::Analyzer,
    repositories::{AuditRepository, AuditRepositoryTrait},
};
use sqlx::{Pool, Postgres};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub audit_repo: Arc<dyn AuditRepositoryTrait + Send + Sync>,
    pub db_pool: Pool<Postgres>,
}

impl AppState {
    pub fn new(analyzer: Analyzer, pool: Pool<Postgres>) -> Self {
        Self {
            analyzer,
            audit_repo: Arc::new(AuditRepository::new(pool.clone())),
            db_pool: pool,
        }
    }
}
