//! Admin blog editor: create and edit payloads, list and error handling.

use axum::http::StatusCode;
use serde_json::json;

use possystem_integration_tests::{ADMIN_EMAIL, Script, TestSite, body_text, location};

fn script_with_post() -> Script {
    Script {
        posts: vec![json!({
            "_id": "p1",
            "title": "Old title",
            "excerpt": "Old excerpt",
            "content": "<p>Old</p>",
            "category": "Analytics",
            "tags": ["x", "y"],
            "published": true,
            "commentsEnabled": true,
            "seo": { "metaTitle": "Old meta", "twitterCardType": "summary_large_image" },
            "createdAt": "2024-02-01T09:30:00Z"
        })],
        ..Script::default()
    }
}

#[tokio::test]
async fn test_create_sends_tags_as_typed() {
    let site = TestSite::start(Script::default()).await;
    let cookie = site.login(ADMIN_EMAIL).await;

    let response = site
        .post_form(
            "/auth/dashboard/blogs/create",
            &[
                ("title", "Hello"),
                ("excerpt", "Short"),
                ("content", "<p>Body</p>"),
                ("category", "Technology"),
                ("tags", "a, b, c"),
                ("featuredImage", ""),
                ("published", "true"),
                ("seo.metaTitle", "Meta"),
                ("seo.twitterCardType", "player"),
            ],
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Blog Post Created Successfully!"));
    // Form is reset after a successful create
    assert!(!body.contains("value=\"Hello\""));

    let recorded = site.backend.recorded();
    assert_eq!(recorded.created_posts.len(), 1);
    let sent = &recorded.created_posts[0];
    assert_eq!(sent["tags"], json!("a, b, c"));
    assert_eq!(sent["title"], json!("Hello"));
    assert_eq!(sent["category"], json!("Technology"));
    assert_eq!(sent["published"], json!(true));
    assert_eq!(sent["seo"]["metaTitle"], json!("Meta"));
    assert_eq!(sent["seo"]["twitterCardType"], json!("player"));
    assert_eq!(sent["seo"]["ogTitle"], json!(""));
    assert!(sent.get("commentsEnabled").is_none());
}

#[tokio::test]
async fn test_update_failure_keeps_input() {
    let site = TestSite::start(Script::default()).await;
    let cookie = site.login(ADMIN_EMAIL).await;

    let response = site
        .post_form(
            "/auth/dashboard/blogs/edit/missing",
            &[("title", "Kept"), ("tags", "a")],
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Failed to update blog post."));
    assert!(body.contains("value=\"Kept\""));
    assert!(site.backend.recorded().updated_posts.is_empty());
}

#[tokio::test]
async fn test_edit_prefills_form() {
    let site = TestSite::start(script_with_post()).await;
    let cookie = site.login(ADMIN_EMAIL).await;

    let response = site
        .get("/auth/dashboard/blogs/edit/p1", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("value=\"Old title\""));
    assert!(body.contains("value=\"x, y\""));
    assert!(body.contains("value=\"Old meta\""));
    assert!(body.contains("<option value=\"Analytics\" selected>"));
    assert!(body.contains("<option value=\"summary_large_image\" selected>"));
}

#[tokio::test]
async fn test_edit_sends_tag_list() {
    let site = TestSite::start(script_with_post()).await;
    let cookie = site.login(ADMIN_EMAIL).await;

    let response = site
        .post_form(
            "/auth/dashboard/blogs/edit/p1",
            &[
                ("title", "New title"),
                ("category", "Security"),
                ("tags", "a, b, c"),
                ("published", "true"),
            ],
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Blog Post Updated Successfully!"));

    let recorded = site.backend.recorded();
    assert_eq!(recorded.updated_posts.len(), 1);
    let (id, sent) = &recorded.updated_posts[0];
    assert_eq!(id, "p1");
    assert_eq!(sent["tags"], json!(["a", "b", "c"]));
    assert_eq!(sent["title"], json!("New title"));
    assert_eq!(sent["published"], json!(true));
    // Unticked checkbox
    assert_eq!(sent["commentsEnabled"], json!(false));
}

#[tokio::test]
async fn test_edit_missing_post_returns_to_list() {
    let site = TestSite::start(Script::default()).await;
    let cookie = site.login(ADMIN_EMAIL).await;

    let response = site
        .get("/auth/dashboard/blogs/edit/missing", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/auth/dashboard/blogs"));

    let body = body_text(site.get("/auth/dashboard/blogs", Some(&cookie)).await).await;
    assert!(body.contains("Failed to fetch blog post."));
    // The backend's 404 text stays out of the notice.
    assert!(!body.contains("Blog post not found"));
}

#[tokio::test]
async fn test_list_shows_every_post() {
    let mut script = script_with_post();
    script.posts.push(json!({ "_id": "p2", "title": "Hidden draft", "published": false }));
    let site = TestSite::start(script).await;
    let cookie = site.login(ADMIN_EMAIL).await;

    let body = body_text(site.get("/auth/dashboard/blogs", Some(&cookie)).await).await;
    assert!(body.contains("Old title"));
    assert!(body.contains("Hidden draft"));
    assert!(body.contains("Draft"));
    assert!(body.contains("Feb 1, 2024"));
    assert!(body.contains("/auth/dashboard/blogs/edit/p1"));
}

#[tokio::test]
async fn test_empty_list() {
    let site = TestSite::start(Script::default()).await;
    let cookie = site.login(ADMIN_EMAIL).await;

    let body = body_text(site.get("/auth/dashboard/blogs", Some(&cookie)).await).await;
    assert!(body.contains("No blog posts found."));
    assert!(body.contains("Create Your First Blog Post"));
}
