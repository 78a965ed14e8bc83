use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::entities::Audit;

#[derive(Debug, Clone, PartialEq)]
pub struct NewAudit {
    pub email: String,
    pub score: Option<i32>,
    pub report_html: String,
}

/// Append-only audit history keyed by email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditRepositoryTrait: Send + Sync {
    async fn save(&self, audit: NewAudit) -> Result<Audit>;

    /// Newest first; every audit when `email` is `None`.
    async fn list(&self, email: Option<String>) -> Result<Vec<Audit>>;
}

#[derive(Clone)]
pub struct AuditRepository {
    pool: Pool<Postgres>,
}

impl AuditRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditRepositoryTrait for AuditRepository {
    async fn save(&self, audit: NewAudit) -> Result<Audit> {
        let saved = sqlx::query_as::<_, Audit>(
            r#"
            INSERT INTO audits (email, score, report_html)
            VALUES ($1, $2, $3)
            RETURNING id, email, score, report_html, created_at
            "#,
        )
        .bind(&audit.email)
        .bind(audit.score)
        .bind(&audit.report_html)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn list(&self, email: Option<String>) -> Result<Vec<Audit>> {
        let audits = sqlx::query_as::<_, Audit>(
            r#"
            SELECT id, email, score, report_html, created_at
            FROM audits
            WHERE $1::text IS NULL OR email = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(audits)
    }
}
