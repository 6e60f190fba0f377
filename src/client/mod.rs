// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile page client: session context, workflows and the API seam they
//! talk through.

pub mod api;
pub mod bio;
pub mod busy;
pub mod notify;
pub mod phone;
pub mod profile;
pub mod push;
pub mod seller;
pub mod session;
pub mod vapid;

pub use api::{
    ApiClient, ApiReply, ClientError, PhoneVerificationRequest, ProfileApi, ProfileUpdate,
    VerifyPhoneRequest,
};
pub use bio::BioEditor;
pub use busy::BusyFlag;
pub use notify::{Notifier, Toast, ToastKind, ToastQueue};
pub use phone::{PhoneVerification, VerificationStep};
pub use profile::{ProfileView, SellerView};
pub use push::{Permission, PushError, PushPlatform, PushSubscriptionManager, SubscribeOutcome};
pub use seller::load_seller_stats;
pub use session::Session;
pub use vapid::decode_vapid_key;
