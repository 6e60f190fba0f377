// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use bantuin_web::client::{
    ApiReply, ClientError, Permission, PhoneVerificationRequest, ProfileApi, ProfileUpdate,
    PushError, PushPlatform, VerifyPhoneRequest,
};
use bantuin_web::config::Config;
use bantuin_web::models::{PushKeys, PushSubscription, SubscribeOptions, User};
use bantuin_web::routes::create_router;
use bantuin_web::AppState;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ─── Mock upstream API ───────────────────────────────────────

/// One request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> (u16, Value) + Send + Sync>;

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<HashMap<(String, String), Responder>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process upstream API bound to an ephemeral port.
pub struct MockUpstream {
    pub base_url: String,
    state: MockState,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .fallback(mock_handler)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Answer `method path` with a fixed status and body.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.respond_with(method, path, move |_| (status, body.clone()));
    }

    /// Answer `method path` by calling `f` with the recorded request.
    pub fn respond_with<F>(&self, method: &str, path: &str, f: F)
    where
        F: Fn(&RecordedRequest) -> (u16, Value) + Send + Sync + 'static,
    {
        self.state
            .routes
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), Arc::new(f));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn mock_handler(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    };
    state.requests.lock().unwrap().push(recorded.clone());

    let responder = state
        .routes
        .lock()
        .unwrap()
        .get(&(recorded.method.clone(), recorded.path.clone()))
        .cloned();

    match responder {
        Some(responder) => {
            let (status, body) = responder(&recorded);
            (StatusCode::from_u16(status).unwrap(), Json(body)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Route not mocked"})),
        )
            .into_response(),
    }
}

/// Create the BFF router pointed at `api_url`.
pub fn create_test_app(api_url: &str) -> (Router, Arc<AppState>) {
    let config = Config::test_default().with_api_url(api_url);
    let state = Arc::new(AppState::from_config(config).unwrap());
    (create_router(state.clone()), state)
}

/// Serve the BFF on an ephemeral port; returns its base URL.
pub async fn spawn_test_server(api_url: &str) -> String {
    let (app, _) = create_test_app(api_url);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ─── Fake profile API ────────────────────────────────────────

/// Scripted stand-in for the profile endpoints.
///
/// Replies are queued per endpoint; an empty queue answers `200 {"success":
/// true}`. Successful verify/update calls also change the "server-side"
/// user so `current_user` reflects them.
pub struct FakeApi {
    token: Option<String>,
    replies: Mutex<HashMap<&'static str, VecDeque<Result<ApiReply, ClientError>>>>,
    calls: Mutex<Vec<(&'static str, Value)>>,
    user: Mutex<User>,
    pending_phone: Mutex<Option<String>>,
    fail_refresh: AtomicBool,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            token: Some("test-session-token".to_string()),
            replies: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            user: Mutex::new(User {
                id: "u1".to_string(),
                full_name: "Siti Aminah".to_string(),
                ..User::default()
            }),
            pending_phone: Mutex::new(None),
            fail_refresh: AtomicBool::new(false),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            token: None,
            ..Self::new()
        }
    }

    pub fn with_user(self, user: User) -> Self {
        *self.user.lock().unwrap() = user;
        self
    }

    pub fn queue(&self, endpoint: &'static str, reply: Result<ApiReply, ClientError>) {
        self.replies
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back(reply);
    }

    pub fn fail_refresh(&self) {
        self.fail_refresh.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<(&'static str, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| *name == endpoint)
            .count()
    }

    pub fn server_user(&self) -> User {
        self.user.lock().unwrap().clone()
    }

    fn record(&self, endpoint: &'static str, body: Value) -> Result<ApiReply, ClientError> {
        self.calls.lock().unwrap().push((endpoint, body));
        self.replies
            .lock()
            .unwrap()
            .get_mut(endpoint)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Ok(ApiReply::new(200, json!({"success": true}))))
    }
}

impl ProfileApi for FakeApi {
    fn session_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    async fn request_phone_verification(
        &self,
        request: &PhoneVerificationRequest,
    ) -> Result<ApiReply, ClientError> {
        let reply = self.record(
            "request_phone_verification",
            serde_json::to_value(request).unwrap(),
        );
        if matches!(&reply, Ok(r) if r.is_success()) {
            *self.pending_phone.lock().unwrap() = Some(request.phone_number.clone());
        }
        reply
    }

    async fn verify_phone(&self, request: &VerifyPhoneRequest) -> Result<ApiReply, ClientError> {
        let reply = self.record("verify_phone", serde_json::to_value(request).unwrap());
        if matches!(&reply, Ok(r) if r.is_success()) {
            let phone = self.pending_phone.lock().unwrap().take();
            self.user.lock().unwrap().phone_number = phone;
        }
        reply
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<ApiReply, ClientError> {
        let reply = self.record("update_profile", serde_json::to_value(update).unwrap());
        if matches!(&reply, Ok(r) if r.is_success()) {
            if let Some(bio) = &update.bio {
                self.user.lock().unwrap().bio = Some(bio.clone());
            }
        }
        reply
    }

    async fn current_user(&self) -> Result<User, ClientError> {
        self.calls.lock().unwrap().push(("current_user", Value::Null));
        if self.fail_refresh.load(Ordering::SeqCst) {
            return Err(ClientError::Transport("connection reset".to_string()));
        }
        Ok(self.user.lock().unwrap().clone())
    }

    async fn seller_stats(&self) -> Result<ApiReply, ClientError> {
        self.record("seller_stats", Value::Null)
    }

    async fn subscribe_push(
        &self,
        subscription: &PushSubscription,
    ) -> Result<ApiReply, ClientError> {
        self.record("subscribe_push", serde_json::to_value(subscription).unwrap())
    }
}

// ─── Fake push platform ──────────────────────────────────────

pub fn sample_subscription() -> PushSubscription {
    PushSubscription {
        endpoint: "https://push.example.test/send/abc123".to_string(),
        expiration_time: None,
        keys: PushKeys {
            p256dh: "BNcRdreALRFXTkOOUHK1EtK2wtaz5Ry4YfYCA_0QTpQtUbVlUls0VJXg7A8u-Ts1XbjhazAkj7I99e8QcYP7DkM".to_string(),
            auth: "tBHItJI5svbpez7KI4CCXg".to_string(),
        },
    }
}

/// Browser-like push platform that remembers its subscription.
pub struct FakePlatform {
    pub supported: bool,
    pub permission: Permission,
    pub fail_register: bool,
    pub fail_subscribe: bool,
    pub existing: Mutex<Option<PushSubscription>>,
    pub registrations: AtomicUsize,
    pub subscribe_calls: Mutex<Vec<SubscribeOptions>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            supported: true,
            permission: Permission::Default,
            fail_register: false,
            fail_subscribe: false,
            existing: Mutex::new(None),
            registrations: AtomicUsize::new(0),
            subscribe_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_existing(self, subscription: PushSubscription) -> Self {
        *self.existing.lock().unwrap() = Some(subscription);
        self
    }

    pub fn registrations(&self) -> usize {
        self.registrations.load(Ordering::SeqCst)
    }

    pub fn subscribe_calls(&self) -> Vec<SubscribeOptions> {
        self.subscribe_calls.lock().unwrap().clone()
    }
}

impl PushPlatform for FakePlatform {
    fn supports_push(&self) -> bool {
        self.supported
    }

    fn permission(&self) -> Permission {
        self.permission
    }

    async fn register_worker(&self, script_path: &str) -> Result<(), PushError> {
        assert_eq!(script_path, "/sw.js");
        if self.fail_register {
            return Err(PushError::Registration("script evaluation failed".to_string()));
        }
        self.registrations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn existing_subscription(&self) -> Result<Option<PushSubscription>, PushError> {
        Ok(self.existing.lock().unwrap().clone())
    }

    async fn subscribe(&self, options: SubscribeOptions) -> Result<PushSubscription, PushError> {
        self.subscribe_calls.lock().unwrap().push(options);
        if self.fail_subscribe {
            return Err(PushError::Subscribe("permission prompt dismissed".to_string()));
        }
        let subscription = sample_subscription();
        *self.existing.lock().unwrap() = Some(subscription.clone());
        Ok(subscription)
    }
}
