// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod lenient;
pub mod push;
pub mod stats;
pub mod user;

pub use push::{PushKeys, PushSubscription, SubscribeOptions};
pub use stats::{SellerCounters, SellerStats};
pub use user::User;
