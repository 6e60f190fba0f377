//! User model as served by the upstream API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient::null_as_default;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Current user's profile.
///
/// Owned by the upstream API; clients only ever hold a snapshot of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Student number
    #[serde(default)]
    pub nim: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// Server-confirmed phone number. Only set once an OTP has been accepted.
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_seller: bool,
    /// Average rating. The upstream sometimes sends this as a string.
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | string | null"))]
    pub rating: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_reviews: u32,
}

impl User {
    /// Whether the user has a confirmed phone number.
    pub fn phone_verified(&self) -> bool {
        self.phone_number
            .as_deref()
            .is_some_and(|number| !number.trim().is_empty())
    }
}
