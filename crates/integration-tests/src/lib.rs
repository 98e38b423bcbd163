//! Integration test harness for the POSystem site.
//!
//! [`FakeBackend`] serves the backend REST contract on an ephemeral port and
//! records what the site sends it. [`TestSite`] builds the real site router
//! against that backend and drives it with `tower::ServiceExt::oneshot`, so
//! no site socket is bound.
//!
//! # Accounts
//!
//! - [`ADMIN_EMAIL`] / [`PASSWORD`] logs in with [`VALID_TOKEN`], which the
//!   profile endpoint accepts.
//! - [`STALE_EMAIL`] / [`PASSWORD`] logs in with [`STALE_TOKEN`], which the
//!   profile endpoint rejects.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, Request, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use possystem_site::{build_router, config::SiteConfig, state::AppState};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const STALE_EMAIL: &str = "stale@example.com";
pub const PASSWORD: &str = "secret";
pub const VALID_TOKEN: &str = "valid-token";
pub const STALE_TOKEN: &str = "stale-token";

/// Error text the fake backend puts in its 500 bodies.
pub const DATABASE_DOWN: &str = "Mongo connection lost";

/// What the fake backend holds and how it misbehaves.
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub posts: Vec<Value>,
    pub messages: Vec<Value>,
    pub subscribers: Vec<Value>,
    /// `GET /api/subscriptions` answers 500 with [`DATABASE_DOWN`].
    pub fail_subscriptions: bool,
    /// Every bearer-protected resource answers 401, even for a valid token.
    pub reject_resources: bool,
    /// `GET /api/auth/profile` never answers, so the site's call times out.
    pub stall_profile: bool,
}

impl Script {
    /// A backend holding `messages`, `subscribers` and `posts` generated records.
    #[must_use]
    pub fn with_counts(messages: usize, subscribers: usize, posts: usize) -> Self {
        Self {
            messages: (0..messages)
                .map(|i| {
                    json!({
                        "_id": format!("m{i}"),
                        "name": format!("Sender {i}"),
                        "email": format!("sender{i}@example.com"),
                        "subject": format!("Subject {i}"),
                        "message": "Hello",
                        "createdAt": "2024-01-01T00:00:00Z",
                    })
                })
                .collect(),
            subscribers: (0..subscribers)
                .map(|i| {
                    json!({
                        "_id": format!("s{i}"),
                        "email": format!("reader{i}@example.com"),
                        "createdAt": "2024-01-01T00:00:00Z",
                    })
                })
                .collect(),
            posts: (0..posts)
                .map(|i| json!({ "_id": format!("p{i}"), "title": format!("Post {i}") }))
                .collect(),
            ..Self::default()
        }
    }
}

/// Requests the fake backend received.
#[derive(Debug, Default)]
pub struct Recorded {
    pub created_posts: Vec<Value>,
    pub updated_posts: Vec<(String, Value)>,
    pub contacts: Vec<Value>,
    pub profile_calls: usize,
}

#[derive(Clone)]
struct FakeState {
    script: Arc<Script>,
    recorded: Arc<Mutex<Recorded>>,
}

impl FakeState {
    fn record(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().expect("fake backend state poisoned")
    }

    /// Check a bearer-protected resource call.
    fn authorize(&self, headers: &HeaderMap) -> Result<(), Response> {
        if self.script.reject_resources || bearer(headers) != Some(VALID_TOKEN) {
            return Err(unauthorized());
        }
        Ok(())
    }
}

/// An in-process stand-in for the content backend.
pub struct FakeBackend {
    pub url: String,
    recorded: Arc<Mutex<Recorded>>,
}

impl FakeBackend {
    /// Serve `script` on an ephemeral localhost port.
    pub async fn start(script: Script) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().expect("Fake backend has no address");

        let state = FakeState {
            script: Arc::new(script),
            recorded: Arc::new(Mutex::new(Recorded::default())),
        };
        let recorded = Arc::clone(&state.recorded);

        let app = Router::new()
            .route("/api/auth/login", axum::routing::post(login))
            .route("/api/auth/register", axum::routing::post(register))
            .route("/api/auth/profile", get(profile))
            .route("/api/blog/posts", get(list_posts))
            .route("/api/blog/posts/{id}", get(get_post).put(update_post))
            .route("/api/blog/dashboard/blog", axum::routing::post(create_post))
            .route("/api/contact", get(list_messages).post(submit_contact))
            .route("/api/subscriptions", get(list_subscriptions))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Fake backend stopped");
        });

        Self {
            url: format!("http://{addr}"),
            recorded,
        }
    }

    /// Everything received so far.
    pub fn recorded(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().expect("fake backend state poisoned")
    }
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Not authorized" })),
    )
        .into_response()
}

fn text_field<'a>(body: &'a Value, key: &str) -> &'a str {
    body.get(key).and_then(Value::as_str).unwrap_or_default()
}

async fn login(Json(body): Json<Value>) -> Response {
    let password = text_field(&body, "password");
    match text_field(&body, "email") {
        ADMIN_EMAIL if password == PASSWORD => Json(json!({ "token": VALID_TOKEN })).into_response(),
        STALE_EMAIL if password == PASSWORD => Json(json!({ "token": STALE_TOKEN })).into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
            .into_response(),
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    if text_field(&body, "email") == ADMIN_EMAIL {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "User already exists" })),
        )
            .into_response();
    }
    (StatusCode::CREATED, Json(json!({ "token": VALID_TOKEN }))).into_response()
}

/// Longer than the site's backend timeout in [`TestSite`].
const PROFILE_STALL: Duration = Duration::from_secs(30);

async fn profile(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    state.record().profile_calls += 1;
    if state.script.stall_profile {
        tokio::time::sleep(PROFILE_STALL).await;
    }
    if bearer(&headers) != Some(VALID_TOKEN) {
        return unauthorized();
    }
    Json(json!({ "name": "Ada Admin", "email": ADMIN_EMAIL, "role": "admin" })).into_response()
}

async fn list_posts(State(state): State<FakeState>) -> Response {
    Json(json!({ "blogPosts": state.script.posts })).into_response()
}

fn find_post<'a>(state: &'a FakeState, id: &str) -> Option<&'a Value> {
    state
        .script
        .posts
        .iter()
        .find(|post| post.get("_id").and_then(Value::as_str) == Some(id))
}

async fn get_post(State(state): State<FakeState>, Path(id): Path<String>) -> Response {
    match find_post(&state, &id) {
        Some(post) => Json(json!({ "blogPost": post })).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Blog post not found" })),
        )
            .into_response(),
    }
}

async fn create_post(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    state.record().created_posts.push(body.clone());
    (StatusCode::CREATED, Json(json!({ "blogPost": body }))).into_response()
}

async fn update_post(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    if find_post(&state, &id).is_none() {
        return StatusCode::NOT_FOUND.into_response();
    }
    state.record().updated_posts.push((id, body.clone()));
    Json(json!({ "blogPost": body })).into_response()
}

async fn list_messages(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    Json(json!({ "messages": state.script.messages })).into_response()
}

async fn submit_contact(State(state): State<FakeState>, Json(body): Json<Value>) -> Response {
    state.record().contacts.push(body);
    (StatusCode::CREATED, Json(json!({ "message": "Message received" }))).into_response()
}

async fn list_subscriptions(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    if let Err(rejection) = state.authorize(&headers) {
        return rejection;
    }
    if state.script.fail_subscriptions {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": DATABASE_DOWN })),
        )
            .into_response();
    }
    Json(json!({ "subscriptions": state.script.subscribers })).into_response()
}

/// The site router wired to a [`FakeBackend`].
pub struct TestSite {
    router: Router,
    pub backend: FakeBackend,
}

impl TestSite {
    /// Start a fake backend for `script` and build the site against it.
    pub async fn start(script: Script) -> Self {
        let backend = FakeBackend::start(script).await;
        let url = backend.url.clone();
        let config = SiteConfig::from_lookup(|key| match key {
            "BACKEND_URL" => Some(url.clone()),
            "BACKEND_TIMEOUT_SECS" => Some("2".to_string()),
            _ => None,
        })
        .expect("Test configuration is valid");
        let state = AppState::new(config).expect("Failed to build site state");

        Self {
            router: build_router(state),
            backend,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible")
    }

    /// `GET path`, optionally with a session cookie.
    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::get(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).expect("Valid request"))
            .await
    }

    /// `POST path` with a URL-encoded form body.
    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> Response {
        let body = fields
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        let mut builder = Request::post(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body)).expect("Valid request"))
            .await
    }

    /// Log in through the site and return the session cookie.
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .post_form("/auth/login", &[("email", email), ("password", PASSWORD)], None)
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "login should redirect");
        session_cookie(&response).expect("Login should set a session cookie")
    }
}

/// The `name=value` part of the response's session cookie.
#[must_use]
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("possystem_session="))
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

/// The redirect target, if any.
#[must_use]
pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

/// Read the whole response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}
