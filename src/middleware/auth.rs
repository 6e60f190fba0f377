// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authorization pass-through middleware.
//!
//! The BFF never validates tokens itself; it only insists that one is present
//! and hands it to the proxy handlers so they can copy it upstream.

use crate::error::AppError;
use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Caller's `Authorization` header, forwarded verbatim.
#[derive(Debug, Clone)]
pub struct ForwardedAuth(pub HeaderValue);

/// Middleware that requires an `Authorization` header.
///
/// Missing or empty headers are answered with 401 before any handler (and
/// therefore any upstream call) runs.
pub async fn require_authorization(mut request: Request, next: Next) -> Result<Response, AppError> {
    let auth = request
        .headers()
        .get(header::AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .cloned()
        .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(ForwardedAuth(auth));

    Ok(next.run(request).await)
}
