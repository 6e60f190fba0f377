// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Push notification subscription, run once per application load.
//!
//! Push is an optional enhancement: nothing here ever reports an error to
//! the user or to the caller. [`PushSubscriptionManager::try_subscribe`] is
//! the fallible step; [`PushSubscriptionManager::run`] is the boundary that
//! logs and swallows whatever it returns.

use super::api::{ClientError, ProfileApi};
use super::session::Session;
use super::vapid::decode_vapid_key;
use crate::config::SERVICE_WORKER_PATH;
use crate::models::{PushSubscription, SubscribeOptions};
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Notification permission as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Not asked yet
    Default,
    Granted,
    Denied,
}

/// Background worker and push messaging support of the host environment.
pub trait PushPlatform: Send + Sync {
    /// Whether both background workers and push messaging are available.
    fn supports_push(&self) -> bool;

    fn permission(&self) -> Permission;

    /// Register the worker script and wait until it is active.
    fn register_worker(
        &self,
        script_path: &str,
    ) -> impl Future<Output = Result<(), PushError>> + Send;

    fn existing_subscription(
        &self,
    ) -> impl Future<Output = Result<Option<PushSubscription>, PushError>> + Send;

    /// Create a subscription. May prompt the user for permission.
    fn subscribe(
        &self,
        options: SubscribeOptions,
    ) -> impl Future<Output = Result<PushSubscription, PushError>> + Send;
}

impl<T: PushPlatform> PushPlatform for Arc<T> {
    fn supports_push(&self) -> bool {
        (**self).supports_push()
    }

    fn permission(&self) -> Permission {
        (**self).permission()
    }

    fn register_worker(
        &self,
        script_path: &str,
    ) -> impl Future<Output = Result<(), PushError>> + Send {
        (**self).register_worker(script_path)
    }

    fn existing_subscription(
        &self,
    ) -> impl Future<Output = Result<Option<PushSubscription>, PushError>> + Send {
        (**self).existing_subscription()
    }

    fn subscribe(
        &self,
        options: SubscribeOptions,
    ) -> impl Future<Output = Result<PushSubscription, PushError>> + Send {
        (**self).subscribe(options)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PushError {
    #[error("Service worker registration failed: {0}")]
    Registration(String),

    #[error("Invalid VAPID public key: {0}")]
    InvalidKey(#[from] base64::DecodeError),

    #[error("Push subscription failed: {0}")]
    Subscribe(String),

    #[error("Failed to register subscription with backend: {0}")]
    Backend(#[from] ClientError),
}

/// What one run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// No worker or push support in this environment
    Unsupported,
    /// No VAPID key configured
    Disabled,
    /// No session token; anonymous visitors are never prompted
    Anonymous,
    AlreadySubscribed,
    PermissionDenied,
    Subscribed(PushSubscription),
    /// An error was logged and swallowed
    Failed,
}

pub struct PushSubscriptionManager<P, A> {
    platform: P,
    session: Arc<Session<A>>,
    vapid_public_key: Option<String>,
}

impl<P: PushPlatform, A: ProfileApi> PushSubscriptionManager<P, A> {
    pub fn new(platform: P, session: Arc<Session<A>>, vapid_public_key: Option<String>) -> Self {
        Self {
            platform,
            session,
            vapid_public_key: vapid_public_key.filter(|key| !key.is_empty()),
        }
    }

    /// Register the worker and subscribe if appropriate. Never fails.
    pub async fn run(&self) -> SubscribeOutcome {
        match self.try_subscribe().await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "Service Worker/Push registration failed");
                SubscribeOutcome::Failed
            }
        }
    }

    /// Run in a background task so page load never waits on it.
    pub fn spawn(self) -> JoinHandle<SubscribeOutcome>
    where
        P: 'static,
        A: 'static,
    {
        tokio::spawn(async move { self.run().await })
    }

    pub async fn try_subscribe(&self) -> Result<SubscribeOutcome, PushError> {
        if !self.platform.supports_push() {
            return Ok(SubscribeOutcome::Unsupported);
        }
        let Some(vapid_key) = self.vapid_public_key.as_deref() else {
            return Ok(SubscribeOutcome::Disabled);
        };

        self.platform.register_worker(SERVICE_WORKER_PATH).await?;
        tracing::debug!(path = SERVICE_WORKER_PATH, "Service worker ready");

        if !self.session.is_authenticated() {
            return Ok(SubscribeOutcome::Anonymous);
        }

        if self.platform.existing_subscription().await?.is_some() {
            return Ok(SubscribeOutcome::AlreadySubscribed);
        }

        if self.platform.permission() == Permission::Denied {
            tracing::debug!("Notification permission denied; not subscribing");
            return Ok(SubscribeOutcome::PermissionDenied);
        }

        let options = SubscribeOptions {
            user_visible_only: true,
            application_server_key: decode_vapid_key(vapid_key)?,
        };
        let subscription = self.platform.subscribe(options).await?;

        self.session
            .api()
            .subscribe_push(&subscription)
            .await?
            .into_result()?;

        tracing::info!("Subscribed to push notifications");
        Ok(SubscribeOutcome::Subscribed(subscription))
    }
}
