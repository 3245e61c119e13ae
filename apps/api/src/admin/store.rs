//! Profile persistence for the admin area.
//!
//! `AppState` carries an `Arc<dyn ProfileStore>`. Profiles themselves are
//! created by the sign-up flow; this service only reads them and flips the
//! ban flag.

use async_trait::async_trait;
#[cfg(test)]
use chrono::Utc;
use sqlx::PgPool;
#[cfg(test)]
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::admin::listing::UserListParams;
use crate::admin::listing::PAGE_SIZE;
use crate::errors::AppError;
use crate::models::profile::ProfileRow;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find(&self, user_id: Uuid) -> Result<Option<ProfileRow>, AppError>;

    /// One page of matching profiles (newest first) and the total match count.
    async fn list(&self, params: &UserListParams) -> Result<(Vec<ProfileRow>, i64), AppError>;

    /// Sets the ban flag. `reason` is stored only when banning.
    /// Returns `None` if the profile does not exist.
    async fn set_banned(
        &self,
        user_id: Uuid,
        banned: bool,
        reason: Option<&str>,
    ) -> Result<Option<ProfileRow>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres
// ────────────────────────────────────────────────────────────────────────────

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const LIST_WHERE: &str = r#"
    WHERE ($1::text IS NULL OR email ILIKE $1 OR full_name ILIKE $1)
      AND ($2 = 'all'
           OR ($2 = 'banned' AND is_banned)
           OR ($2 = 'admin' AND is_admin))
"#;

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn find(&self, user_id: Uuid) -> Result<Option<ProfileRow>, AppError> {
        Ok(
            sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list(&self, params: &UserListParams) -> Result<(Vec<ProfileRow>, i64), AppError> {
        let pattern = params.like_pattern();
        let filter = params.filter.as_str();

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM profiles {LIST_WHERE}"))
            .bind(&pattern)
            .bind(filter)
            .fetch_one(&self.pool)
            .await?;

        let users = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT * FROM profiles {LIST_WHERE} ORDER BY created_at DESC, user_id LIMIT $3 OFFSET $4"
        ))
        .bind(&pattern)
        .bind(filter)
        .bind(PAGE_SIZE)
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((users, total))
    }

    async fn set_banned(
        &self,
        user_id: Uuid,
        banned: bool,
        reason: Option<&str>,
    ) -> Result<Option<ProfileRow>, AppError> {
        Ok(sqlx::query_as::<_, ProfileRow>(
            r#"
            UPDATE profiles
            SET is_banned = $2,
                ban_reason = CASE WHEN $2 THEN $3 ELSE NULL END,
                banned_at = CASE WHEN $2 THEN NOW() ELSE NULL END
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(banned)
        .bind(reason)
        .fetch_optional(&self.pool)
        .await?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub struct MemoryProfileStore {
    profiles: RwLock<Vec<ProfileRow>>,
}

#[cfg(test)]
impl MemoryProfileStore {
    pub fn with_profiles(profiles: Vec<ProfileRow>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn find(&self, user_id: Uuid) -> Result<Option<ProfileRow>, AppError> {
        Ok(self
            .profiles
            .read()
            .await
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn list(&self, params: &UserListParams) -> Result<(Vec<ProfileRow>, i64), AppError> {
        let profiles = self.profiles.read().await;
        let mut matching: Vec<&ProfileRow> = profiles.iter().filter(|p| params.matches(p)).collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        let total = matching.len() as i64;
        let users = matching
            .into_iter()
            .skip(params.offset() as usize)
            .take(PAGE_SIZE as usize)
            .cloned()
            .collect();
        Ok((users, total))
    }

    async fn set_banned(
        &self,
        user_id: Uuid,
        banned: bool,
        reason: Option<&str>,
    ) -> Result<Option<ProfileRow>, AppError> {
        let mut profiles = self.profiles.write().await;
        Ok(profiles
            .iter_mut()
            .find(|p| p.user_id == user_id)
            .map(|p| {
                p.is_banned = banned;
                p.ban_reason = if banned { reason.map(str::to_string) } else { None };
                p.banned_at = if banned { Some(Utc::now()) } else { None };
                p.clone()
            }))
    }
}
