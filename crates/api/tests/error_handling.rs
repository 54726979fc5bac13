mod common;

use axum::http::{header, StatusCode};
use common::{body_json, body_text, build_test_app, get, get_auth, staff_token};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_path_renders_html_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/no/such/page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Page not found"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_admin_record_is_json_404(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let response = get_auth(build_test_app(pool), "/admin/api/posts/424242", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["error"].as_str().unwrap().contains("424242"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn garbage_token_is_rejected(pool: PgPool) {
    let response = get_auth(build_test_app(pool), "/admin/api/auth/me", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivated_staff_is_forbidden(pool: PgPool) {
    let (user, token) = staff_token(&pool).await;
    sqlx::query("UPDATE staff_users SET is_active = FALSE WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let response = get_auth(build_test_app(pool), "/admin/api/testimonials", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_paths_without_trailing_slash_redirect(pool: PgPool) {
    let app = build_test_app(pool);

    for (path, target) in [
        ("/services", "/services/"),
        ("/blog", "/blog/"),
        ("/work/sunset?ref=home", "/work/sunset/?ref=home"),
    ] {
        let response = get(app.clone(), path).await;
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY, "{path}");
        assert_eq!(response.headers()[header::LOCATION], target);
    }

    let response = get(app, "/work").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
