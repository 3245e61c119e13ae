//! Ban / unban state machine.
//!
//! `Active → Banned` via [`ban_user`], `Banned → Active` via [`unban_user`].
//! Both are idempotent. Any failure leaves the stored profile untouched.

use tracing::info;
use uuid::Uuid;

use crate::admin::store::ProfileStore;
use crate::errors::AppError;
use crate::models::profile::ProfileRow;

pub const MAX_BAN_REASON_LEN: usize = 500;

fn normalize_reason(reason: Option<&str>) -> Result<Option<&str>, AppError> {
    let reason = reason.map(str::trim).filter(|r| !r.is_empty());
    if let Some(r) = reason {
        if r.chars().count() > MAX_BAN_REASON_LEN {
            return Err(AppError::Validation(format!(
                "reason must be at most {MAX_BAN_REASON_LEN} characters"
            )));
        }
    }
    Ok(reason)
}

async fn load_target(store: &dyn ProfileStore, user_id: Uuid) -> Result<ProfileRow, AppError> {
    store
        .find(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))
}

/// Bans `user_id`. Admin accounts cannot be banned.
pub async fn ban_user(
    store: &dyn ProfileStore,
    actor: &ProfileRow,
    user_id: Uuid,
    reason: Option<&str>,
) -> Result<ProfileRow, AppError> {
    let reason = normalize_reason(reason)?;
    let target = load_target(store, user_id).await?;

    if target.is_admin {
        return Err(AppError::Forbidden(
            "Administrators cannot be banned".to_string(),
        ));
    }
    if target.is_banned {
        return Ok(target);
    }

    let updated = store
        .set_banned(user_id, true, reason)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;
    info!(
        "User {user_id} banned by {} (reason: {})",
        actor.user_id,
        reason.unwrap_or("none")
    );
    Ok(updated)
}

pub async fn unban_user(
    store: &dyn ProfileStore,
    actor: &ProfileRow,
    user_id: Uuid,
) -> Result<ProfileRow, AppError> {
    let target = load_target(store, user_id).await?;
    if !target.is_banned {
        return Ok(target);
    }

    let updated = store
        .set_banned(user_id, false, None)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;
    info!("User {user_id} unbanned by {}", actor.user_id);
    Ok(updated)
}
