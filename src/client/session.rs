// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session context: the API handle plus the cached, server-confirmed user.
//!
//! The cache is only ever replaced by [`Session::refresh`]; flows never edit
//! it locally, so whatever it holds is something the server has confirmed.

use super::api::{ClientError, ProfileApi};
use crate::models::User;
use tokio::sync::RwLock;

pub struct Session<A> {
    api: A,
    user: RwLock<Option<User>>,
}

impl<A: ProfileApi> Session<A> {
    /// Session with an empty cache. Call [`Session::refresh`] to load the user.
    pub fn new(api: A) -> Self {
        Self {
            api,
            user: RwLock::new(None),
        }
    }

    /// Session seeded with a previously fetched user.
    pub fn with_user(api: A, user: User) -> Self {
        Self {
            api,
            user: RwLock::new(Some(user)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Whether a session token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.api.session_token().is_some()
    }

    /// Snapshot of the cached user.
    pub async fn user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    /// Fetch the latest profile and replace the cache with it.
    ///
    /// On failure the previous snapshot is kept.
    pub async fn refresh(&self) -> Result<User, ClientError> {
        let user = self.api.current_user().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to refresh user profile");
        })?;

        *self.user.write().await = Some(user.clone());
        Ok(user)
    }
}
