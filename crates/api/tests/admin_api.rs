mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete_auth, get, get_auth, post_json, post_json_auth,
    put_json_auth, staff_token, TEST_PASSWORD,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_requires_token(pool: PgPool) {
    let response = get(build_test_app(pool), "/admin/api/portfolio-items").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_usable_for_me(pool: PgPool) {
    staff_token(&pool).await;
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/admin/api/auth/login",
        json!({ "username": "owner", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["expires_in"], 3600);
    let token = body["access_token"].as_str().expect("token").to_string();

    let me = body_json(get_auth(app, "/admin/api/auth/me", &token).await).await;
    assert_eq!(me["data"]["username"], "owner");
    assert!(me["data"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_rejects_wrong_password(pool: PgPool) {
    staff_token(&pool).await;
    let response = post_json(
        build_test_app(pool),
        "/admin/api/auth/login",
        json!({ "username": "owner", "password": "nope-nope-nope" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivated_account_is_hidden_behind_password_check(pool: PgPool) {
    let (user, _) = staff_token(&pool).await;
    sqlx::query("UPDATE staff_users SET is_active = FALSE WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();
    let app = build_test_app(pool);

    let wrong = post_json(
        app.clone(),
        "/admin/api/auth/login",
        json!({ "username": "owner", "password": "nope-nope-nope" }),
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let right = post_json(
        app,
        "/admin/api/auth/login",
        json!({ "username": "owner", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(right.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Portfolio items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_item_derives_slug_and_defaults_category(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let app = build_test_app(pool);

    let response = post_json_auth(
        app,
        "/admin/api/portfolio-items",
        json!({ "title": "Hello, World!", "description": "First project" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["data"]["slug"], "hello-world");
    assert_eq!(body["data"]["category"], "photography");
    assert_eq!(body["data"]["media_preview"], "No Media");
    assert_eq!(body["data"]["is_video"], false);
    assert_eq!(body["data"]["url"], "/work/hello-world/");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_slug_conflicts(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let app = build_test_app(pool);
    let input = json!({ "title": "Same Title", "description": "d" });

    let first = post_json_auth(app.clone(), "/admin/api/portfolio-items", input.clone(), &token).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json_auth(app, "/admin/api/portfolio-items", input, &token).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn media_preview_prefers_video_file(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let app = build_test_app(pool);

    let body = body_json(
        post_json_auth(
            app.clone(),
            "/admin/api/portfolio-items",
            json!({
                "title": "Reel",
                "category": "videography",
                "description": "d",
                "image_file": "portfolio_images/r.jpg",
                "video_file": "portfolio_videos/r.mp4",
                "video_url": "https://vimeo.com/1"
            }),
            &token,
        )
        .await,
    )
    .await;
    let preview = body["data"]["media_preview"].as_str().unwrap();
    assert!(preview.starts_with("<video"));
    assert!(preview.contains("/media/portfolio_videos/r.mp4"));
    assert_eq!(body["data"]["media_kind"], "video");
    assert_eq!(body["data"]["is_video"], true);

    // Clearing the video file falls back to the image.
    let id = body["data"]["id"].as_i64().unwrap();
    let updated = body_json(
        put_json_auth(
            app,
            &format!("/admin/api/portfolio-items/{id}"),
            json!({ "video_file": "" }),
            &token,
        )
        .await,
    )
    .await;
    assert!(updated["data"]["media_preview"]
        .as_str()
        .unwrap()
        .starts_with("<img"));
    assert_eq!(updated["data"]["is_video"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn external_link_only_previews_as_label(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let body = body_json(
        post_json_auth(
            build_test_app(pool),
            "/admin/api/portfolio-items",
            json!({ "title": "Link", "description": "d", "video_url": "https://youtu.be/x" }),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(body["data"]["media_preview"], "External Link");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_video_url_is_rejected(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let response = post_json_auth(
        build_test_app(pool),
        "/admin/api/portfolio-items",
        json!({ "title": "Bad", "description": "d", "video_url": "not a url" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_item_removes_gallery(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let app = build_test_app(pool);

    let item = body_json(
        post_json_auth(
            app.clone(),
            "/admin/api/portfolio-items",
            json!({ "title": "Gallery Item", "description": "d" }),
            &token,
        )
        .await,
    )
    .await;
    let id = item["data"]["id"].as_i64().unwrap();

    let image = post_json_auth(
        app.clone(),
        &format!("/admin/api/portfolio-items/{id}/images"),
        json!({ "image": "portfolio_gallery/a.jpg", "caption": "A" }),
        &token,
    )
    .await;
    assert_eq!(image.status(), StatusCode::CREATED);
    let image = body_json(image).await;
    assert!(image["data"]["image_preview"]
        .as_str()
        .unwrap()
        .contains("width=\"100\" height=\"100\""));
    let image_id = image["data"]["id"].as_i64().unwrap();

    let detail = body_json(
        get_auth(app.clone(), &format!("/admin/api/portfolio-items/{id}"), &token).await,
    )
    .await;
    assert_eq!(detail["data"]["gallery"].as_array().unwrap().len(), 1);

    let response = delete_auth(app.clone(), &format!("/admin/api/portfolio-items/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app, &format!("/admin/api/images/{image_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn gallery_image_requires_existing_item(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let response = post_json_auth(
        build_test_app(pool),
        "/admin/api/portfolio-items/9999/images",
        json!({ "image": "portfolio_gallery/a.jpg" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn portfolio_items_filter_by_category_and_search(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let app = build_test_app(pool);

    for (title, category) in [("Studio Portraits", "photography"), ("Brand Film", "videography")] {
        post_json_auth(
            app.clone(),
            "/admin/api/portfolio-items",
            json!({ "title": title, "category": category, "description": "d" }),
            &token,
        )
        .await;
    }

    let videos = body_json(
        get_auth(app.clone(), "/admin/api/portfolio-items?category=videography", &token).await,
    )
    .await;
    let videos = videos["data"].as_array().unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["title"], "Brand Film");

    let found = body_json(get_auth(app, "/admin/api/portfolio-items?q=portrait", &token).await).await;
    assert_eq!(found["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn script_video_url_is_rejected_on_create_and_update(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let app = build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/admin/api/portfolio-items",
        json!({ "title": "Xss", "description": "d", "video_url": "javascript:alert(document.cookie)" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/admin/api/portfolio-items",
            json!({ "title": "Safe", "description": "d", "video_url": "https://vimeo.com/2" }),
            &token,
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        app,
        &format!("/admin/api/portfolio-items/{id}"),
        json!({ "video_url": "javascript:alert(1)" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Testimonials and posts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn testimonial_crud_and_search(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let app = build_test_app(pool);

    let created = post_json_auth(
        app.clone(),
        "/admin/api/testimonials",
        json!({ "client_name": "Grace", "quote": "Superb edit", "company": "Navy" }),
        &token,
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let id = body_json(created).await["data"]["id"].as_i64().unwrap();

    post_json_auth(
        app.clone(),
        "/admin/api/testimonials",
        json!({ "client_name": "Linus", "quote": "Fast turnaround" }),
        &token,
    )
    .await;

    let found = body_json(get_auth(app.clone(), "/admin/api/testimonials?q=navy", &token).await).await;
    let found = found["data"].as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["client_name"], "Grace");

    let updated = body_json(
        put_json_auth(
            app.clone(),
            &format!("/admin/api/testimonials/{id}"),
            json!({ "company": "" }),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(updated["data"]["company"], "");

    let response = delete_auth(app.clone(), &format!("/admin/api/testimonials/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get_auth(app, &format!("/admin/api/testimonials/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn post_create_derives_slug_and_previews_image(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let app = build_test_app(pool);

    let created = post_json_auth(
        app.clone(),
        "/admin/api/posts",
        json!({
            "title": "Shooting in Low Light",
            "featured_image": "blog_featured_images/low.jpg",
            "content": "<p>Tips</p>"
        }),
        &token,
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let body = body_json(created).await;
    assert_eq!(body["data"]["slug"], "shooting-in-low-light");
    assert_eq!(body["data"]["excerpt"], "");
    assert_eq!(body["data"]["url"], "/blog/shooting-in-low-light/");
    assert!(body["data"]["image_preview"]
        .as_str()
        .unwrap()
        .contains("border-radius: 8px"));

    let found = body_json(get_auth(app, "/admin/api/posts?q=low%20light", &token).await).await;
    assert_eq!(found["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn post_requires_content(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let response = post_json_auth(
        build_test_app(pool),
        "/admin/api/posts",
        json!({ "title": "Empty", "featured_image": "blog_featured_images/e.jpg", "content": "  " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Site configuration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn site_configuration_is_a_singleton(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let app = build_test_app(pool);
    let input = json!({
        "hero_video": "site_assets/hero.mp4",
        "about_image": "site_assets/about.jpg"
    });

    let perms = body_json(
        get_auth(app.clone(), "/admin/api/site-configuration/permissions", &token).await,
    )
    .await;
    assert_eq!(perms["data"]["can_add"], true);

    let created = post_json_auth(app.clone(), "/admin/api/site-configuration", input.clone(), &token).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    assert_eq!(created["data"]["label"], "Home Page Settings");
    assert_eq!(created["data"]["hero_preview"], "Video Uploaded");
    let id = created["data"]["id"].as_i64().unwrap();

    let second = post_json_auth(app.clone(), "/admin/api/site-configuration", input, &token).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let perms = body_json(
        get_auth(app.clone(), "/admin/api/site-configuration/permissions", &token).await,
    )
    .await;
    assert_eq!(perms["data"]["can_add"], false);

    let list = body_json(get_auth(app.clone(), "/admin/api/site-configuration", &token).await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    let response = delete_auth(app.clone(), &format!("/admin/api/site-configuration/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let perms = body_json(
        get_auth(app, "/admin/api/site-configuration/permissions", &token).await,
    )
    .await;
    assert_eq!(perms["data"]["can_add"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn site_configuration_rejects_escaping_paths(pool: PgPool) {
    let (_, token) = staff_token(&pool).await;
    let response = post_json_auth(
        build_test_app(pool),
        "/admin/api/site-configuration",
        json!({ "hero_video": "../secret.mp4", "about_image": "site_assets/a.jpg" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
