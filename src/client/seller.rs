// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Seller dashboard statistics on the profile page.

use super::api::ProfileApi;
use super::session::Session;
use crate::models::SellerStats;
use serde_json::Value;

/// Load stats for the session's user.
///
/// Buyers get `None` without a request. Any failure is logged and also
/// yields `None`; the page then shows zeroes.
pub async fn load_seller_stats<A: ProfileApi>(session: &Session<A>) -> Option<SellerStats> {
    let user = session.user().await?;
    if !user.is_seller {
        return None;
    }

    let reply = match session.api().seller_stats().await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch seller stats");
            return None;
        }
    };

    // This endpoint only counts as successful with an explicit flag.
    if reply.body.get("success").and_then(Value::as_bool) != Some(true) {
        tracing::warn!(status = reply.status, "Seller stats request was not successful");
        return None;
    }

    match serde_json::from_value(reply.data().clone()) {
        Ok(stats) => Some(stats),
        Err(e) => {
            tracing::error!(error = %e, "Malformed seller stats");
            None
        }
    }
}
