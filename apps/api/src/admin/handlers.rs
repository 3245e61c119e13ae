//! Handlers for the `/api/v1/admin` resource (user management).
//!
//! All handlers require an active admin via [`RequireAdmin`].

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::admin::actions;
use crate::admin::guard::RequireAdmin;
use crate::admin::listing::{UserListParams, UserListQuery, UserPage};
use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct BanRequest {
    pub reason: Option<String>,
}

/// Empty body means no reason; anything else must be a valid `BanRequest`.
fn parse_ban_request(body: &[u8]) -> Result<BanRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(BanRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid ban request body: {e}")))
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub profile: ProfileRow,
}

/// GET /api/v1/admin/users?page=&search=&filter=
pub async fn handle_list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<UserListQuery>,
) -> Result<Json<UserPage>, AppError> {
    let params = UserListParams::from(query);
    let (users, total) = state.profiles.list(&params).await?;
    Ok(Json(UserPage::new(users, total, params.page)))
}

/// POST /api/v1/admin/users/:user_id/ban
/// Body is optional: `{"reason": "..."}`.
pub async fn handle_ban_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(user_id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<ActionResponse>, AppError> {
    let req = parse_ban_request(&body)?;
    let profile =
        actions::ban_user(state.profiles.as_ref(), &admin, user_id, req.reason.as_deref()).await?;
    Ok(Json(ActionResponse {
        success: true,
        profile,
    }))
}

/// POST /api/v1/admin/users/:user_id/unban
pub async fn handle_unban_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ActionResponse>, AppError> {
    let profile = actions::unban_user(state.profiles.as_ref(), &admin, user_id).await?;
    Ok(Json(ActionResponse {
        success: true,
        profile,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_means_no_reason() {
        assert!(parse_ban_request(b"").unwrap().reason.is_none());
        assert!(parse_ban_request(b"  \n").unwrap().reason.is_none());
        assert!(parse_ban_request(b"{}").unwrap().reason.is_none());
    }

    #[test]
    fn test_reason_is_read() {
        let req = parse_ban_request(br#"{"reason": "spam"}"#).unwrap();
        assert_eq!(req.reason.as_deref(), Some("spam"));
    }

    #[test]
    fn test_malformed_body_rejected() {
        let bodies: [&[u8]; 3] = [br#"{"reason": 5}"#, b"not json", b"{"];
        for body in bodies {
            assert!(matches!(
                parse_ban_request(body),
                Err(AppError::Validation(_))
            ));
        }
    }
}
