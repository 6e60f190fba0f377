// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Bantuin web: backend-for-frontend for the Bantuin services marketplace.
//!
//! This crate provides the proxy API that forwards authenticated requests
//! to the upstream Bantuin API, and the profile-page client workflows
//! (phone verification, bio editing, seller stats, push subscription).

pub mod client;
pub mod config;
pub mod display_utils;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::UpstreamClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Build state from config, creating the upstream client.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let upstream = UpstreamClient::new(&config.api_url, config.upstream_timeout)?;
        Ok(Self { config, upstream })
    }
}
