pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::admin::handlers as admin;
use crate::cv::handlers as cv;
use crate::preview::handlers as preview;
use crate::state::AppState;
use crate::style::handlers as style;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalogue
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route(
            "/api/v1/style/color-schemes",
            get(style::handle_list_color_schemes),
        )
        .route("/api/v1/style/fonts", get(style::handle_list_fonts))
        .route("/api/v1/style/resolve", post(style::handle_resolve))
        // Preview
        .route("/api/v1/preview", post(preview::handle_live_preview))
        .route(
            "/api/v1/cv/:user_id/preview",
            get(preview::handle_stored_preview),
        )
        // CV documents
        .route(
            "/api/v1/cv/:user_id",
            get(cv::handle_get_document).put(cv::handle_put_document),
        )
        .route("/api/v1/cv/:user_id/settings", put(cv::handle_put_settings))
        .route("/api/v1/cv/:user_id/template", put(cv::handle_put_template))
        // Admin
        .route("/api/v1/admin/users", get(admin::handle_list_users))
        .route(
            "/api/v1/admin/users/:user_id/ban",
            post(admin::handle_ban_user),
        )
        .route(
            "/api/v1/admin/users/:user_id/unban",
            post(admin::handle_unban_user),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::admin::guard::ACTOR_HEADER;
    use crate::admin::store::MemoryProfileStore;
    use crate::cv::store::MemoryCvStore;
    use crate::models::profile::ProfileRow;
    use crate::templates::TemplateRegistry;

    struct Fixture {
        router: Router,
        admin: ProfileRow,
        other_admin: ProfileRow,
        user: ProfileRow,
    }

    fn profile(email: &str, name: &str, is_admin: bool, age_secs: i64) -> ProfileRow {
        ProfileRow {
            user_id: Uuid::new_v4(),
            email: email.to_string(),
            full_name: Some(name.to_string()),
            is_admin,
            is_banned: false,
            ban_reason: None,
            banned_at: None,
            created_at: Utc::now() - Duration::seconds(age_secs),
        }
    }

    fn fixture() -> Fixture {
        let admin = profile("root@example.com", "Root Admin", true, 30);
        let other_admin = profile("ops@example.com", "Ops Admin", true, 20);
        let user = profile("ada@example.com", "Ada Lovelace", false, 10);
        let state = AppState {
            documents: Arc::new(MemoryCvStore::new()),
            profiles: Arc::new(MemoryProfileStore::with_profiles(vec![
                admin.clone(),
                other_admin.clone(),
                user.clone(),
            ])),
            templates: Arc::new(TemplateRegistry::builtin().unwrap()),
        };
        Fixture {
            router: build_router(state),
            admin,
            other_admin,
            user,
        }
    }

    async fn send(router: &Router, req: Request<Body>) -> (StatusCode, String) {
        let resp = router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get_req(uri: &str, actor: Option<Uuid>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(actor) = actor {
            builder = builder.header(ACTOR_HEADER, actor.to_string());
        }
        builder.body(Body::empty()).unwrap()
    }

    fn json_req(method: &str, uri: &str, body: Value, actor: Option<Uuid>) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(actor) = actor {
            builder = builder.header(ACTOR_HEADER, actor.to_string());
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn sample_document() -> Value {
        json!({
            "personal_info": {
                "full_name": "Ada Lovelace",
                "headline": "Analyst",
                "email": "ada@example.com"
            },
            "sections": [
                { "id": "exp", "type": "experience", "title": "Experience", "order": 2,
                  "items": [{ "company": "Analytical Engine Co", "position": "Programmer" }] },
                { "id": "secret", "type": "about", "title": "Hidden", "order": 0,
                  "is_visible": false, "items": [{ "content": "do not show" }] },
                { "id": "skills", "type": "skills", "title": "Skills", "order": 1,
                  "items": [{ "name": "Mathematics", "level": 5 }] }
            ],
            "settings": { "color_scheme_id": "forest", "margin_preset": "compact" },
            "template_id": "classic"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let f = fixture();
        let (status, body) = send(&f.router, get_req("/health", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"ok\""));
    }

    #[tokio::test]
    async fn test_template_catalogue() {
        let f = fixture();
        let (status, body) = send(&f.router, get_req("/api/v1/templates", None)).await;
        assert_eq!(status, StatusCode::OK);
        let templates: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(templates.as_array().unwrap().len(), 5);
        assert_eq!(templates[0]["id"], "modern");
        assert_eq!(templates[0]["is_default"], true);
    }

    #[tokio::test]
    async fn test_live_preview_falls_back_and_hides_sections() {
        let f = fixture();
        let mut body = sample_document();
        body["template_id"] = json!("no-such-template");
        let (status, html) = send(&f.router, json_req("POST", "/api/v1/preview", body, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"data-template="modern""#));
        assert!(!html.contains("do not show"));
        let skills = html.find(r#"data-section-id="skills""#).unwrap();
        let exp = html.find(r#"data-section-id="exp""#).unwrap();
        assert!(skills < exp);
        assert!(html.contains("--cv-primary: #166534;"));
        assert!(html.contains("--cv-margin-top: 10mm;"));
    }

    #[tokio::test]
    async fn test_live_preview_unmounted_uses_default_tokens() {
        let f = fixture();
        let mut body = sample_document();
        body["mounted"] = json!(false);
        let (status, html) = send(&f.router, json_req("POST", "/api/v1/preview", body, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("--cv-primary: #1e40af;"));
        assert!(html.contains("--cv-margin-top: 15mm;"));
    }

    #[tokio::test]
    async fn test_live_preview_rejects_unsafe_color() {
        let f = fixture();
        let mut body = sample_document();
        body["settings"]["custom_primary_color"] = json!("red; background: url(x)");
        let (status, body) = send(&f.router, json_req("POST", "/api/v1/preview", body, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_resolve_endpoint_applies_overrides() {
        let f = fixture();
        let (status, body) = send(
            &f.router,
            json_req(
                "POST",
                "/api/v1/style/resolve",
                json!({ "color_scheme_id": "plum", "custom_accent_color": "#000000",
                        "margin_preset": "spacious", "font_size": "small" }),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let resolved: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(resolved["tokens"]["primary"], "#6b21a8");
        assert_eq!(resolved["tokens"]["accent"], "#000000");
        assert_eq!(resolved["tokens"]["margins"]["left"], 25.0);
        assert!(resolved["style"].as_str().unwrap().contains("--cv-font-scale: 0.9;"));
    }

    #[tokio::test]
    async fn test_resolve_endpoint_rejects_invalid_settings() {
        let f = fixture();
        let (status, body) = send(
            &f.router,
            json_req(
                "POST",
                "/api/v1/style/resolve",
                json!({ "custom_primary_color": "red; background: url(https://evil/x)",
                        "line_height": 40.0, "photo_size": 99999 }),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("VALIDATION_ERROR"));
        assert!(body.contains("settings.custom_primary_color"));
        assert!(body.contains("settings.line_height"));
        assert!(body.contains("settings.photo_size"));
        assert!(!body.contains("--cv-primary"));
    }

    #[tokio::test]
    async fn test_document_lifecycle_and_stored_preview() {
        let f = fixture();
        let owner = Some(f.user.user_id);
        let uri = format!("/api/v1/cv/{}", f.user.user_id);

        let (status, _) = send(&f.router, get_req(&uri, owner)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) =
            send(&f.router, json_req("PUT", &uri, sample_document(), owner)).await;
        assert_eq!(status, StatusCode::OK, "{body}");

        let (status, html) = send(
            &f.router,
            get_req(&format!("{uri}/preview?full=true"), owner),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"data-template="classic""#));

        let (status, body) = send(
            &f.router,
            json_req("PUT", &format!("{uri}/template"), json!({ "template_id": "sidebar" }), owner),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let doc: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(doc["template_id"], "sidebar");

        let (status, _) = send(
            &f.router,
            json_req("PUT", &format!("{uri}/settings"), json!({ "line_height": 9.0 }), owner),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_put_document_validates() {
        let f = fixture();
        let uri = format!("/api/v1/cv/{}", f.user.user_id);
        let mut body = sample_document();
        body["personal_info"]["full_name"] = json!("");
        let (status, _) = send(&f.router, json_req("PUT", &uri, body, Some(f.user.user_id))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_document_endpoints_require_owner() {
        let f = fixture();
        let uri = format!("/api/v1/cv/{}", f.user.user_id);

        let (status, _) = send(&f.router, json_req("PUT", &uri, sample_document(), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let intruder = Some(f.admin.user_id);
        let (status, body) =
            send(&f.router, json_req("PUT", &uri, sample_document(), intruder)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body.contains("FORBIDDEN"));

        let (status, _) = send(
            &f.router,
            json_req("PUT", &uri, sample_document(), Some(f.user.user_id)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        for path in [uri.clone(), format!("{uri}/preview")] {
            let (status, _) = send(&f.router, get_req(&path, intruder)).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{path}");
        }
        let (status, _) = send(
            &f.router,
            json_req("PUT", &format!("{uri}/template"), json!({ "template_id": "minimal" }), intruder),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        let (status, _) = send(
            &f.router,
            json_req("PUT", &format!("{uri}/settings"), json!({}), intruder),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (_, body) = send(&f.router, get_req(&uri, Some(f.user.user_id))).await;
        let doc: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(doc["template_id"], "classic");
    }

    #[tokio::test]
    async fn test_admin_list_requires_admin() {
        let f = fixture();
        let (status, _) = send(&f.router, get_req("/api/v1/admin/users", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &f.router,
            get_req("/api/v1/admin/users", Some(f.user.user_id)),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = send(
            &f.router,
            get_req("/api/v1/admin/users", Some(f.admin.user_id)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let page: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(page["total"], 3);
        assert_eq!(page["page_size"], 20);
        assert_eq!(page["users"][0]["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn test_admin_search_and_filter() {
        let f = fixture();
        let admin = Some(f.admin.user_id);

        let (_, body) = send(
            &f.router,
            get_req("/api/v1/admin/users?search=zzz-nobody", admin),
        )
        .await;
        let page: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(page["total"], 0);
        assert_eq!(page["users"].as_array().unwrap().len(), 0);

        let (_, body) = send(
            &f.router,
            get_req("/api/v1/admin/users?filter=admin&page=1", admin),
        )
        .await;
        let page: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(page["total"], 2);
    }

    #[tokio::test]
    async fn test_ban_then_unban_over_http() {
        let f = fixture();
        let admin = Some(f.admin.user_id);
        let target = f.user.user_id;

        let (status, body) = send(
            &f.router,
            json_req(
                "POST",
                &format!("/api/v1/admin/users/{target}/ban"),
                json!({ "reason": "spam" }),
                admin,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        let resp: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(resp["success"], true);
        assert_eq!(resp["profile"]["is_banned"], true);

        let (_, body) = send(
            &f.router,
            get_req("/api/v1/admin/users?filter=banned", admin),
        )
        .await;
        let page: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(page["total"], 1);

        let unban = Request::builder()
            .method("POST")
            .uri(format!("/api/v1/admin/users/{target}/unban"))
            .header(ACTOR_HEADER, f.admin.user_id.to_string())
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&f.router, unban).await;
        assert_eq!(status, StatusCode::OK);
        let resp: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(resp["profile"]["is_banned"], false);
    }

    #[tokio::test]
    async fn test_ban_with_malformed_body_is_rejected() {
        let f = fixture();
        let admin = Some(f.admin.user_id);
        let target = f.user.user_id;

        let (status, body) = send(
            &f.router,
            json_req(
                "POST",
                &format!("/api/v1/admin/users/{target}/ban"),
                json!({ "reason": 5 }),
                admin,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("VALIDATION_ERROR"));

        let (_, body) = send(
            &f.router,
            get_req("/api/v1/admin/users?filter=banned", admin),
        )
        .await;
        let page: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(page["total"], 0);

        let ban = Request::builder()
            .method("POST")
            .uri(format!("/api/v1/admin/users/{target}/ban"))
            .header(ACTOR_HEADER, f.admin.user_id.to_string())
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&f.router, ban).await;
        assert_eq!(status, StatusCode::OK);
        let resp: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(resp["profile"]["is_banned"], true);
        assert_eq!(resp["profile"]["ban_reason"], Value::Null);
    }

    #[tokio::test]
    async fn test_ban_without_body_and_admin_target() {
        let f = fixture();
        let ban = Request::builder()
            .method("POST")
            .uri(format!("/api/v1/admin/users/{}/ban", f.other_admin.user_id))
            .header(ACTOR_HEADER, f.admin.user_id.to_string())
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&f.router, ban).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body.contains("FORBIDDEN"));
    }
}
