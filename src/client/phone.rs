// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Phone number verification via a one-time code.
//!
//! Two steps: request a code for a number, then submit the code. The number
//! only becomes part of the profile once the server accepts the code and the
//! session is refreshed.

use super::api::{
    validate_input, ClientError, PhoneVerificationRequest, ProfileApi, VerifyPhoneRequest,
};
use super::busy::BusyFlag;
use super::notify::{Notifier, Toast};
use super::session::Session;
use std::sync::Arc;
use std::time::Duration;

/// Pause between closing the dialog and clearing its inputs.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(300);

const NETWORK_ERROR: &str = "Terjadi kesalahan jaringan";
const REQUEST_FAILED: &str = "Gagal mengirim OTP";
const VERIFY_FAILED: &str = "OTP Salah / Kadaluarsa";

/// Where the verification dialog is.
///
/// `Verify` can only be entered from a successful code request, and `Request`
/// has nowhere to keep a typed code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStep {
    Request { phone_number: String },
    Verify { phone_number: String, otp: String },
}

impl Default for VerificationStep {
    fn default() -> Self {
        VerificationStep::Request {
            phone_number: String::new(),
        }
    }
}

pub struct PhoneVerification {
    step: VerificationStep,
    dialog_open: bool,
    busy: BusyFlag,
    reset_delay: Duration,
    notifier: Arc<dyn Notifier>,
}

impl PhoneVerification {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            step: VerificationStep::default(),
            dialog_open: false,
            busy: BusyFlag::default(),
            reset_delay: DEFAULT_RESET_DELAY,
            notifier,
        }
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn step(&self) -> &VerificationStep {
        &self.step
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Shared view of the in-flight flag.
    pub fn busy(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn open(&mut self) {
        self.dialog_open = true;
    }

    /// Hide the dialog. The current step is kept.
    pub fn close(&mut self) {
        self.dialog_open = false;
    }

    /// Update the number being typed. Ignored once a code was requested.
    pub fn set_phone_number(&mut self, value: &str) {
        if let VerificationStep::Request { phone_number } = &mut self.step {
            *phone_number = value.to_string();
        }
    }

    /// Update the code being typed. Ignored before a code was requested.
    pub fn set_otp(&mut self, value: &str) {
        if let VerificationStep::Verify { otp, .. } = &mut self.step {
            *otp = value.to_string();
        }
    }

    /// Go back to the number entry without contacting the server.
    pub fn back(&mut self) {
        self.step = match std::mem::take(&mut self.step) {
            VerificationStep::Verify { phone_number, .. } => {
                VerificationStep::Request { phone_number }
            }
            request => request,
        };
    }

    /// Ask the server to send a code to `phone_number`.
    pub async fn request_code<A: ProfileApi>(
        &mut self,
        session: &Session<A>,
        phone_number: &str,
    ) -> Result<(), ClientError> {
        self.set_phone_number(phone_number);

        let request = PhoneVerificationRequest {
            phone_number: phone_number.to_string(),
        };
        if let Err(e) = validate_input(&request) {
            self.notifier.notify(Toast::error(e.to_string()));
            return Err(e);
        }

        let Some(_guard) = self.busy.try_acquire() else {
            return Err(ClientError::Busy);
        };

        let outcome = session
            .api()
            .request_phone_verification(&request)
            .await
            .and_then(|reply| reply.into_result());

        match outcome {
            Ok(reply) => {
                tracing::info!("Phone verification code requested");
                self.notifier.notify(Toast::success("Kode OTP terkirim"));
                if let Some(note) = reply.developer_note() {
                    self.notifier
                        .notify(Toast::info("Info Developer").with_description(note));
                }
                self.step = VerificationStep::Verify {
                    phone_number: request.phone_number,
                    otp: String::new(),
                };
                Ok(())
            }
            Err(e) => {
                self.notify_failure(&e, REQUEST_FAILED);
                Err(e)
            }
        }
    }

    /// Submit `otp` for the outstanding challenge.
    pub async fn verify_code<A: ProfileApi>(
        &mut self,
        session: &Session<A>,
        otp: &str,
    ) -> Result<(), ClientError> {
        if !matches!(self.step, VerificationStep::Verify { .. }) {
            return Err(ClientError::NoPendingChallenge);
        }
        self.set_otp(otp);

        let request = VerifyPhoneRequest {
            otp: otp.to_string(),
        };
        if let Err(e) = validate_input(&request) {
            self.notifier.notify(Toast::error(e.to_string()));
            return Err(e);
        }

        let Some(guard) = self.busy.try_acquire() else {
            return Err(ClientError::Busy);
        };

        let outcome = session
            .api()
            .verify_phone(&request)
            .await
            .and_then(|reply| reply.into_result());

        if let Err(e) = outcome {
            self.notify_failure(&e, VERIFY_FAILED);
            return Err(e);
        }

        tracing::info!("Phone number verified");
        // The server already accepted the code; a failed refresh only leaves
        // the cached profile stale.
        if let Err(e) = session.refresh().await {
            tracing::warn!(error = %e, "Profile refresh after phone verification failed");
        }
        drop(guard);

        self.notifier
            .notify(Toast::success("Nomor telepon berhasil diverifikasi"));
        self.dialog_open = false;

        tokio::time::sleep(self.reset_delay).await;
        self.step = VerificationStep::default();
        Ok(())
    }

    fn notify_failure(&self, error: &ClientError, fallback: &str) {
        match error {
            ClientError::Transport(msg) | ClientError::Decode(msg) => {
                tracing::error!(error = %msg, "Phone verification request failed");
                self.notifier.notify(Toast::error(NETWORK_ERROR));
            }
            _ => {
                let toast = Toast::error(fallback);
                let toast = match error.server_message() {
                    Some(message) if message != fallback => toast.with_description(message),
                    _ => toast,
                };
                self.notifier.notify(toast);
            }
        }
    }
}
