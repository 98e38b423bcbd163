//! Public pages, health checks and the contact form.

use axum::http::StatusCode;
use serde_json::json;

use possystem_integration_tests::{Script, TestSite, body_text};

#[tokio::test]
async fn test_health() {
    let site = TestSite::start(Script::default()).await;

    let response = site.get("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");

    let response = site.get("/health/ready", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let site = TestSite::start(Script::default()).await;

    for path in ["/nope", "/auth/dashboard/nope", "/blog/a/b"] {
        let response = site.get(path, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn test_security_headers_and_request_id() {
    let site = TestSite::start(Script::default()).await;

    let response = site.get("/about", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_static_pages_render() {
    let site = TestSite::start(Script::default()).await;

    for (path, text) in [
        ("/", "Why businesses choose us"),
        ("/about", "About POSystem"),
        ("/services", "Smart Sales Processing"),
        ("/reviews", "Sarah Chen"),
        ("/pricing", "Most Popular"),
        ("/contact", "Get in touch"),
        ("/auth", "Admin login"),
        ("/auth?mode=register", "Create admin account"),
    ] {
        let response = site.get(path, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert!(body_text(response).await.contains(text), "{path}");
    }
}

#[tokio::test]
async fn test_blog_hides_drafts() {
    let site = TestSite::start(Script {
        posts: vec![
            json!({ "_id": "p1", "title": "Live post", "category": "Security" }),
            json!({ "_id": "p2", "title": "Secret draft", "published": false }),
        ],
        ..Script::default()
    })
    .await;

    let body = body_text(site.get("/blog", None).await).await;
    assert!(body.contains("Live post"));
    assert!(body.contains("/static/images/payroll.svg"));
    assert!(!body.contains("Secret draft"));

    let body = body_text(site.get("/", None).await).await;
    assert!(body.contains("Latest from the blog"));
    assert!(body.contains("Live post"));
}

#[tokio::test]
async fn test_home_hides_posts_section_without_posts() {
    let site = TestSite::start(Script::default()).await;

    let body = body_text(site.get("/", None).await).await;
    assert!(!body.contains("Latest from the blog"));
}

#[tokio::test]
async fn test_blog_post_page() {
    let site = TestSite::start(Script {
        posts: vec![json!({
            "_id": "p1",
            "title": "Inventory tips",
            "content": "<h2>Count often</h2>",
            "author": { "name": "Ada" }
        })],
        ..Script::default()
    })
    .await;

    let response = site.get("/blog/p1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<h2>Count often</h2>"));
    assert!(body.contains("By Ada"));

    let response = site.get("/blog/missing", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Post not found"));
}

#[tokio::test]
async fn test_contact_form_forwards_message() {
    let site = TestSite::start(Script::default()).await;

    let response = site
        .post_form(
            "/contact",
            &[
                ("name", "Ada"),
                ("email", "Ada@Example.com"),
                ("subject", "Demo"),
                ("message", "Please call me"),
            ],
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Message Sent!"));

    let recorded = site.backend.recorded();
    assert_eq!(recorded.contacts.len(), 1);
    assert_eq!(recorded.contacts[0]["email"], json!("ada@example.com"));
    assert_eq!(recorded.contacts[0]["subject"], json!("Demo"));
}

#[tokio::test]
async fn test_contact_form_rejects_bad_email() {
    let site = TestSite::start(Script::default()).await;

    let response = site
        .post_form(
            "/contact",
            &[
                ("name", "Ada"),
                ("email", "not-an-email"),
                ("subject", "Demo"),
                ("message", "Hi"),
            ],
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        body_text(response)
            .await
            .contains("Please enter a valid email address.")
    );
    assert!(site.backend.recorded().contacts.is_empty());
}
