use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Administrative record of a platform user. Distinct from the CV content model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub banned_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
