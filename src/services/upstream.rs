// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Upstream Bantuin API client used by the proxy routes.
//!
//! Requests are forwarded as-is: the caller's `Authorization` header is copied
//! verbatim, query strings are passed through untouched and JSON bodies are
//! re-sent without interpretation.

use crate::error::AppError;
use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::time::Duration;

/// Client for the upstream API.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

/// Status and decoded body of an upstream reply.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Value,
}

impl UpstreamClient {
    /// Create a client for `base_url`. `timeout` of `None` keeps the
    /// transport default.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward one request upstream.
    ///
    /// `path` is relative to the base URL (e.g. `/orders`). `query` is the raw
    /// query string without the leading `?`.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        authorization: &HeaderValue,
        body: Option<&Value>,
    ) -> Result<UpstreamReply, AppError> {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }

        tracing::debug!(method = %method, url = %url, "Forwarding request upstream");

        let mut request = self
            .http
            .request(method, &url)
            .header(reqwest::header::AUTHORIZATION, authorization.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(format!("Reading body from {} failed: {}", url, e)))?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|e| AppError::Upstream(format!("JSON parse error: {}", e)))?
        };

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "Upstream returned error status");
        }

        Ok(UpstreamReply { status, body })
    }
}

impl UpstreamReply {
    /// Upstream `message` field, if set to anything but `null` or `""`.
    ///
    /// Not necessarily a string: validation failures often carry an array of
    /// messages, which is relayed as-is.
    pub fn message(&self) -> Option<&Value> {
        self.body
            .get("message")
            .filter(|m| !m.is_null() && m.as_str() != Some(""))
    }

    /// Turn the reply into a local response.
    ///
    /// Success statuses relay the body unchanged. Error statuses relay the
    /// status with `{"error": message}`, using `fallback` when upstream sent no
    /// message.
    pub fn relay(self, fallback: &str) -> Response {
        if self.status.is_success() {
            return (self.status, Json(self.body)).into_response();
        }

        let error = match self.message() {
            Some(message) => message.clone(),
            None => Value::from(fallback),
        };
        (self.status, Json(serde_json::json!({ "error": error }))).into_response()
    }
}
