//! Caller identity extractors.
//!
//! The acting user is identified by the `x-user-id` header set by the
//! upstream auth proxy. [`CurrentUser`] only reads the id; [`RequireAdmin`]
//! also requires an existing, non-banned admin profile.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::state::AppState;

pub const ACTOR_HEADER: &str = "x-user-id";

fn actor_id(parts: &Parts) -> Result<Uuid, AppError> {
    parts
        .headers
        .get(ACTOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v.trim()).ok())
        .ok_or(AppError::Unauthorized)
}

/// The calling user's id. Rejects with 401 when the header is missing or invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub Uuid);

impl CurrentUser {
    /// Per-user resources are only reachable by their owner.
    pub fn ensure_owner(&self, user_id: Uuid) -> Result<(), AppError> {
        if self.0 != user_id {
            return Err(AppError::Forbidden(
                "Cannot access another user's CV".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        actor_id(parts).map(CurrentUser)
    }
}

/// Rejects with 401 when the actor is unknown, 403 when not an active admin.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> Result<Json<()>, AppError> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub ProfileRow);

#[async_trait]
impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = actor_id(parts)?;

        let actor = state
            .profiles
            .find(id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !actor.is_admin || actor.is_banned {
            return Err(AppError::Forbidden("Admin role required".to_string()));
        }
        Ok(RequireAdmin(actor))
    }
}
