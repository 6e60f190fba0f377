// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bio editor.

use super::api::{ClientError, ProfileApi, ProfileUpdate};
use super::busy::BusyFlag;
use super::notify::{Notifier, Toast};
use super::session::Session;
use std::sync::Arc;

pub struct BioEditor {
    open: bool,
    draft: String,
    busy: BusyFlag,
    notifier: Arc<dyn Notifier>,
}

impl BioEditor {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            open: false,
            draft: String::new(),
            busy: BusyFlag::default(),
            notifier,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn busy(&self) -> BusyFlag {
        self.busy.clone()
    }

    /// Open the editor seeded with the cached bio.
    pub async fn open<A: ProfileApi>(&mut self, session: &Session<A>) {
        self.draft = session
            .user()
            .await
            .and_then(|user| user.bio)
            .unwrap_or_default();
        self.open = true;
    }

    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Replace the bio with `text`, sent exactly as given.
    pub async fn update_bio<A: ProfileApi>(
        &mut self,
        session: &Session<A>,
        text: &str,
    ) -> Result<(), ClientError> {
        self.draft = text.to_string();

        let Some(_guard) = self.busy.try_acquire() else {
            return Err(ClientError::Busy);
        };

        let update = ProfileUpdate {
            bio: Some(text.to_string()),
        };
        let outcome = session
            .api()
            .update_profile(&update)
            .await
            .and_then(|reply| reply.into_result());

        if let Err(e) = outcome {
            tracing::warn!(error = %e, "Bio update failed");
            let toast = Toast::error("Gagal memperbarui bio");
            let toast = match e.server_message() {
                Some(message) => toast.with_description(message),
                None => toast,
            };
            self.notifier.notify(toast);
            return Err(e);
        }

        if let Err(e) = session.refresh().await {
            tracing::warn!(error = %e, "Profile refresh after bio update failed");
        }

        self.notifier.notify(Toast::success("Bio berhasil diperbarui"));
        self.open = false;
        Ok(())
    }
}
