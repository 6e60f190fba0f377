//! Browser push subscription payloads.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Credential issued by the browser's push service, sent as-is to
/// `POST /api/notifications/subscribe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PushSubscription {
    pub endpoint: String,
    /// Expiry in epoch milliseconds; browsers usually send `null`.
    #[serde(default)]
    pub expiration_time: Option<u64>,
    pub keys: PushKeys,
}

/// Encryption material for a push subscription (both base64url).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PushKeys {
    pub p256dh: String,
    pub auth: String,
}

/// Options passed to the platform when creating a subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeOptions {
    pub user_visible_only: bool,
    /// Raw VAPID public key bytes.
    pub application_server_key: Vec<u8>,
}
