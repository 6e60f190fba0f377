// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile and notification proxy routes used by the profile page.

use super::proxy::{parse_json_body, pass_through};
use crate::error::Result;
use crate::middleware::ForwardedAuth;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::Method,
    response::Response,
    routing::{get, patch, post},
    Extension, Router,
};
use std::sync::Arc;

/// User routes (require an Authorization header).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users/me", get(get_me))
        .route(
            "/api/users/request-phone-verification",
            post(request_phone_verification),
        )
        .route("/api/users/verify-phone", post(verify_phone))
        .route("/api/users/update-profile", patch(update_profile))
        .route("/api/users/seller/stats", get(seller_stats))
        .route("/api/notifications/subscribe", post(subscribe_notifications))
}

async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<ForwardedAuth>,
) -> Result<Response> {
    pass_through(
        &state,
        Method::GET,
        "/users/me",
        None,
        &auth,
        None,
        "Gagal mengambil profil",
    )
    .await
}

async fn request_phone_verification(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<ForwardedAuth>,
    body: Bytes,
) -> Result<Response> {
    let body = parse_json_body(&body)?;
    pass_through(
        &state,
        Method::POST,
        "/users/request-phone-verification",
        None,
        &auth,
        Some(&body),
        "Gagal mengirim OTP",
    )
    .await
}

async fn verify_phone(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<ForwardedAuth>,
    body: Bytes,
) -> Result<Response> {
    let body = parse_json_body(&body)?;
    pass_through(
        &state,
        Method::POST,
        "/users/verify-phone",
        None,
        &auth,
        Some(&body),
        "OTP Salah / Kadaluarsa",
    )
    .await
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<ForwardedAuth>,
    body: Bytes,
) -> Result<Response> {
    let body = parse_json_body(&body)?;
    pass_through(
        &state,
        Method::PATCH,
        "/users/update-profile",
        None,
        &auth,
        Some(&body),
        "Gagal memperbarui profil",
    )
    .await
}

async fn seller_stats(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<ForwardedAuth>,
    RawQuery(query): RawQuery,
) -> Result<Response> {
    pass_through(
        &state,
        Method::GET,
        "/users/seller/stats",
        query.as_deref(),
        &auth,
        None,
        "Gagal mengambil statistik seller",
    )
    .await
}

/// Register a browser push subscription for the caller.
async fn subscribe_notifications(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<ForwardedAuth>,
    body: Bytes,
) -> Result<Response> {
    let body = parse_json_body(&body)?;
    pass_through(
        &state,
        Method::POST,
        "/notifications/subscribe",
        None,
        &auth,
        Some(&body),
        "Gagal menyimpan langganan notifikasi",
    )
    .await
}
