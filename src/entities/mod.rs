use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A saved audit. `report_html` and `score` are stored as the client sent them.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub id: Uuid,
    pub email: String,
    pub score: Option<i32>,
    pub report_html: String,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}
