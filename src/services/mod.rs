// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - upstream integration.

pub mod upstream;

pub use upstream::{UpstreamClient, UpstreamReply};
