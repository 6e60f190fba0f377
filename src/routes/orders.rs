// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Order proxy routes.
//!
//! `GET /api/orders` lists orders for the caller (buyer or seller view,
//! selected by query parameters such as `?role=worker&status=IN_PROGRESS`).
//! `POST /api/orders` creates a draft order from
//! `{ serviceId, requirements, attachments }`. Both are forwarded verbatim.

use super::proxy::{parse_json_body, pass_through};
use crate::error::Result;
use crate::middleware::ForwardedAuth;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::Method,
    response::Response,
    routing::get,
    Extension, Router,
};
use std::sync::Arc;

const LIST_FALLBACK: &str = "Gagal mengambil daftar order";
const CREATE_FALLBACK: &str = "Gagal membuat order";

/// Order routes (require an Authorization header).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/orders", get(list_orders).post(create_order))
}

async fn list_orders(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<ForwardedAuth>,
    RawQuery(query): RawQuery,
) -> Result<Response> {
    pass_through(
        &state,
        Method::GET,
        "/orders",
        query.as_deref(),
        &auth,
        None,
        LIST_FALLBACK,
    )
    .await
}

async fn create_order(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<ForwardedAuth>,
    body: Bytes,
) -> Result<Response> {
    let body = parse_json_body(&body)?;

    tracing::info!("Creating order");
    pass_through(
        &state,
        Method::POST,
        "/orders",
        None,
        &auth,
        Some(&body),
        CREATE_FALLBACK,
    )
    .await
}
