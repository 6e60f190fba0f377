// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed client for the `/api/...` endpoints the profile page talks to.
//!
//! Handles:
//! - Bearer token attachment from the stored session token
//! - Decoding JSON replies, including non-JSON error pages
//! - The success contract shared by every flow (see [`ApiReply::is_success`])

use crate::models::{PushSubscription, User};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use validator::{Validate, ValidationErrors};

/// Errors surfaced by client flows.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// Input rejected before any network call.
    #[error("{0}")]
    Validation(String),

    #[error("Another request is still in progress")]
    Busy,

    #[error("No verification code has been requested")]
    NoPendingChallenge,

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The server answered but did not accept the request.
    #[error("Request rejected (HTTP {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl ClientError {
    /// Server-provided message, if this is an application error that has one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

/// First human-readable message in a set of validation errors.
pub(crate) fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Input tidak valid".to_string())
}

/// Validate a request payload, mapping failures to [`ClientError::Validation`].
pub(crate) fn validate_input<T: Validate>(input: &T) -> Result<(), ClientError> {
    input
        .validate()
        .map_err(|errors| ClientError::Validation(validation_message(&errors)))
}

// ─── Request payloads ────────────────────────────────────────

/// Body of `POST /api/users/request-phone-verification`.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PhoneVerificationRequest {
    #[validate(length(min = 1, message = "Nomor telepon wajib diisi"))]
    pub phone_number: String,
}

/// Body of `POST /api/users/verify-phone`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct VerifyPhoneRequest {
    #[validate(length(min = 1, message = "Kode OTP wajib diisi"))]
    pub otp: String,
}

/// Body of `PATCH /api/users/update-profile`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

// ─── Replies ─────────────────────────────────────────────────

/// Raw reply from one API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// A reply succeeds when the status is 2xx and the body does not carry an
    /// explicit `"success": false`. Bodies without the flag count as success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
            && self.body.get("success").and_then(Value::as_bool) != Some(false)
    }

    /// Server-provided message (`message`, else `error`).
    pub fn message(&self) -> Option<&str> {
        self.body
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| self.body.get("error").and_then(Value::as_str))
            .filter(|m| !m.is_empty())
    }

    /// Diagnostic note sent by non-production OTP delivery channels.
    pub fn developer_note(&self) -> Option<&str> {
        self.body
            .get("developer_note")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
    }

    /// `data` field of a `{ success, data }` envelope, or the whole body.
    pub fn data(&self) -> &Value {
        match self.body.get("data") {
            Some(data) if !data.is_null() => data,
            _ => &self.body,
        }
    }

    /// Convert a non-successful reply into [`ClientError::Rejected`].
    pub fn into_result(self) -> Result<ApiReply, ClientError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ClientError::Rejected {
                status: self.status,
                message: self.message().map(str::to_string),
            })
        }
    }
}

// ─── API seam ────────────────────────────────────────────────

/// Profile endpoints used by the client flows.
///
/// [`ApiClient`] is the HTTP implementation; flows are generic over this
/// trait so they can be driven without a network.
pub trait ProfileApi: Send + Sync {
    /// Stored session token, if the visitor is logged in.
    fn session_token(&self) -> Option<&str>;

    fn request_phone_verification(
        &self,
        request: &PhoneVerificationRequest,
    ) -> impl Future<Output = Result<ApiReply, ClientError>> + Send;

    fn verify_phone(
        &self,
        request: &VerifyPhoneRequest,
    ) -> impl Future<Output = Result<ApiReply, ClientError>> + Send;

    fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<ApiReply, ClientError>> + Send;

    /// Latest server-confirmed profile of the session's user.
    fn current_user(&self) -> impl Future<Output = Result<User, ClientError>> + Send;

    fn seller_stats(&self) -> impl Future<Output = Result<ApiReply, ClientError>> + Send;

    fn subscribe_push(
        &self,
        subscription: &PushSubscription,
    ) -> impl Future<Output = Result<ApiReply, ClientError>> + Send;
}

/// HTTP client for the BFF's `/api` routes.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the site at `base_url` (e.g. `https://bantuin.id`).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach the stored session token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into()).filter(|t: &String| !t.is_empty());
        self
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiReply, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(body) => body,
                // Error pages are often HTML; the status alone carries the failure.
                Err(_) if !status.is_success() => Value::Null,
                Err(e) => return Err(ClientError::Decode(format!("{}: {}", url, e))),
            }
        };

        Ok(ApiReply::new(status.as_u16(), body))
    }
}

impl ProfileApi for ApiClient {
    fn session_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    async fn request_phone_verification(
        &self,
        request: &PhoneVerificationRequest,
    ) -> Result<ApiReply, ClientError> {
        self.send(
            reqwest::Method::POST,
            "/api/users/request-phone-verification",
            Some(request),
        )
        .await
    }

    async fn verify_phone(&self, request: &VerifyPhoneRequest) -> Result<ApiReply, ClientError> {
        self.send(reqwest::Method::POST, "/api/users/verify-phone", Some(request))
            .await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<ApiReply, ClientError> {
        self.send(
            reqwest::Method::PATCH,
            "/api/users/update-profile",
            Some(update),
        )
        .await
    }

    async fn current_user(&self) -> Result<User, ClientError> {
        let reply = self
            .send::<()>(reqwest::Method::GET, "/api/users/me", None)
            .await?
            .into_result()?;

        serde_json::from_value(reply.data().clone())
            .map_err(|e| ClientError::Decode(format!("user profile: {}", e)))
    }

    async fn seller_stats(&self) -> Result<ApiReply, ClientError> {
        self.send::<()>(reqwest::Method::GET, "/api/users/seller/stats", None)
            .await
    }

    async fn subscribe_push(
        &self,
        subscription: &PushSubscription,
    ) -> Result<ApiReply, ClientError> {
        self.send(
            reqwest::Method::POST,
            "/api/notifications/subscribe",
            Some(subscription),
        )
        .await
    }
}
