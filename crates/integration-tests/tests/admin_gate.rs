//! Admin gate: every console route needs a token the backend still accepts.

use axum::http::StatusCode;

use possystem_integration_tests::{
    ADMIN_EMAIL, STALE_EMAIL, Script, TestSite, body_text, location,
};

const ADMIN_PAGES: &[&str] = &[
    "/auth/dashboard",
    "/auth/dashboard/blogs",
    "/auth/dashboard/blogs/create",
    "/auth/dashboard/blogs/edit/p1",
    "/auth/dashboard/messages",
    "/auth/dashboard/subscribers",
];

#[tokio::test]
async fn test_admin_pages_redirect_without_token() {
    let site = TestSite::start(Script::default()).await;

    for path in ADMIN_PAGES {
        let response = site.get(path, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), Some("/auth"), "{path}");
    }

    let response = site.post_form("/auth/dashboard/logout", &[], None).await;
    assert_eq!(location(&response), Some("/auth"));
    assert_eq!(site.backend.recorded().profile_calls, 0);
}

#[tokio::test]
async fn test_rejected_token_is_cleared() {
    let site = TestSite::start(Script::default()).await;
    let cookie = site.login(STALE_EMAIL).await;

    for path in ADMIN_PAGES {
        let response = site.get(path, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), Some("/auth"), "{path}");
    }

    // Only the first request reached the profile endpoint; the token was
    // dropped after it failed.
    assert_eq!(site.backend.recorded().profile_calls, 1);
}

#[tokio::test]
async fn test_unreachable_profile_clears_token() {
    let site = TestSite::start(Script {
        stall_profile: true,
        ..Script::default()
    })
    .await;
    let cookie = site.login(ADMIN_EMAIL).await;

    let response = site.get("/auth/dashboard", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/auth"));

    // The token is gone: the next request is turned away without asking
    // the backend again.
    let response = site.get("/auth/dashboard/blogs", Some(&cookie)).await;
    assert_eq!(location(&response), Some("/auth"));
    assert_eq!(site.backend.recorded().profile_calls, 1);
}

#[tokio::test]
async fn test_token_is_verified_on_every_request() {
    let site = TestSite::start(Script::with_counts(0, 0, 0)).await;
    let cookie = site.login(ADMIN_EMAIL).await;

    for _ in 0..3 {
        let response = site.get("/auth/dashboard", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(site.backend.recorded().profile_calls, 3);
}

#[tokio::test]
async fn test_login_lands_on_dashboard_with_notice() {
    let site = TestSite::start(Script::with_counts(0, 0, 0)).await;
    let cookie = site.login(ADMIN_EMAIL).await;

    let body = body_text(site.get("/auth/dashboard", Some(&cookie)).await).await;
    assert!(body.contains("Login Successful"));
    assert!(body.contains("Signed in as Ada Admin"));

    // The notice is shown once
    let body = body_text(site.get("/auth/dashboard", Some(&cookie)).await).await;
    assert!(!body.contains("Login Successful"));
}

#[tokio::test]
async fn test_auth_page_skips_form_when_logged_in() {
    let site = TestSite::start(Script::default()).await;
    let cookie = site.login(ADMIN_EMAIL).await;

    let response = site.get("/auth", Some(&cookie)).await;
    assert_eq!(location(&response), Some("/auth/dashboard"));
}

#[tokio::test]
async fn test_logout_ends_session() {
    let site = TestSite::start(Script::with_counts(0, 0, 0)).await;
    let cookie = site.login(ADMIN_EMAIL).await;

    let response = site
        .post_form("/auth/dashboard/logout", &[], Some(&cookie))
        .await;
    assert_eq!(location(&response), Some("/auth"));

    let body = body_text(site.get("/auth", Some(&cookie)).await).await;
    assert!(body.contains("You have been successfully logged out."));

    let response = site.get("/auth/dashboard", Some(&cookie)).await;
    assert_eq!(location(&response), Some("/auth"));
}

#[tokio::test]
async fn test_unauthorized_resource_call_expires_session() {
    let site = TestSite::start(Script {
        reject_resources: true,
        ..Script::default()
    })
    .await;
    let cookie = site.login(ADMIN_EMAIL).await;

    let response = site.get("/auth/dashboard/messages", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/auth"));

    let body = body_text(site.get("/auth", Some(&cookie)).await).await;
    assert!(body.contains("Session expired"));
    assert!(body.contains("Please log in again."));
}

#[tokio::test]
async fn test_wrong_password_shows_backend_message() {
    let site = TestSite::start(Script::default()).await;

    let response = site
        .post_form(
            "/auth/login",
            &[("email", ADMIN_EMAIL), ("password", "wrong")],
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_text(response).await;
    assert!(body.contains("Invalid credentials"));
    assert!(body.contains(ADMIN_EMAIL));
}

#[tokio::test]
async fn test_register_existing_account() {
    let site = TestSite::start(Script::default()).await;

    let response = site
        .post_form(
            "/auth/register",
            &[("name", "Ada"), ("email", ADMIN_EMAIL), ("password", "secret")],
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("User already exists"));
}

#[tokio::test]
async fn test_register_new_account() {
    let site = TestSite::start(Script::with_counts(0, 0, 0)).await;

    let response = site
        .post_form(
            "/auth/register",
            &[
                ("name", "Grace"),
                ("email", "grace@example.com"),
                ("password", "secret"),
            ],
            None,
        )
        .await;
    assert_eq!(location(&response), Some("/auth/dashboard"));
}
