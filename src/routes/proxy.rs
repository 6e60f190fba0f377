// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared plumbing for pass-through routes.

use crate::error::{AppError, Result};
use crate::middleware::ForwardedAuth;
use crate::AppState;
use axum::{body::Bytes, http::Method, response::Response};
use serde_json::Value;

/// Parse a request body as JSON without imposing any shape on it.
///
/// An unreadable body is a local failure and becomes a 500, same as any
/// other exception on the forwarding path.
pub fn parse_json_body(body: &Bytes) -> Result<Value> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid JSON request body: {}", e)))
}

/// Forward one request upstream and relay the reply.
pub async fn pass_through(
    state: &AppState,
    method: Method,
    upstream_path: &str,
    query: Option<&str>,
    auth: &ForwardedAuth,
    body: Option<&Value>,
    fallback: &str,
) -> Result<Response> {
    let reply = state
        .upstream
        .forward(method, upstream_path, query, &auth.0, body)
        .await?;

    Ok(reply.relay(fallback))
}
