// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

//! Client-side wizard library: the draft record, its durable store, and the
//! guarded submission flow.

pub mod draft;
pub mod guard;
pub mod store;

pub use draft::{Draft, DraftFile, DraftPricing, RateSet};
pub use guard::{GuardState, SubmissionGuard, SubmitTrigger};
pub use store::DraftStore;

use serde_json::Value;

use crate::submission::{serialize_draft, MultipartPayload};

/// Glue owning one wizard instance's store and guard.
///
/// The session is the only place that turns a draft into a payload, and it
/// only does so when the guard admits the attempt; confirmed success is the
/// only event that clears the slot.
pub struct WizardSession {
    store: DraftStore,
    guard: SubmissionGuard,
}

impl WizardSession {
    pub fn new(store: DraftStore, last_step: usize) -> Self {
        Self {
            store,
            guard: SubmissionGuard::new(last_step),
        }
    }

    pub fn draft(&self) -> Draft {
        self.store.load()
    }

    pub fn guard_state(&self) -> GuardState {
        self.guard.state()
    }

    /// Apply a field mutation from the current wizard step and persist it.
    pub fn update(&mut self, partial: &Value) -> Draft {
        self.store.merge(partial)
    }

    pub fn note_step(&mut self, step: usize) {
        self.guard.note_step(step);
    }

    pub fn arm(&mut self, trigger: SubmitTrigger) -> bool {
        self.guard.arm(trigger)
    }

    /// Begin the submission if the guard admits it, returning the serialized
    /// payload. Re-entrant calls while a submission is in flight return
    /// `None`.
    pub fn begin_submission(&mut self) -> Option<MultipartPayload> {
        if self.guard.begin() {
            Some(serialize_draft(&self.store.load()))
        } else {
            None
        }
    }

    /// The server confirmed the submission: finish the wizard and clear the
    /// slot.
    pub fn confirm_success(&mut self) {
        self.guard.complete();
        self.store.clear();
    }

    /// The submission failed: re-open editing, keeping the draft intact.
    pub fn submission_failed(&mut self) {
        self.guard.fail();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn session_in(dir: &TempDir) -> WizardSession {
        WizardSession::new(DraftStore::new(dir.path().join("draft.json")), 4)
    }

    #[test]
    fn payload_is_produced_only_after_user_arming() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        session.update(&json!({ "name": "Ana" }));

        session.note_step(4);
        assert!(session.begin_submission().is_none());

        assert!(!session.arm(SubmitTrigger::Synthetic));
        assert!(session.begin_submission().is_none());

        assert!(session.arm(SubmitTrigger::UserActivation));
        let payload = session.begin_submission().expect("armed session submits");
        assert!(payload.parts.iter().any(|p| p.key == "name"));
    }

    #[test]
    fn only_one_submission_is_admitted() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        session.note_step(4);
        session.arm(SubmitTrigger::UserActivation);

        assert!(session.begin_submission().is_some());
        assert!(session.begin_submission().is_none());
    }

    #[test]
    fn confirmed_success_clears_the_slot() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        session.update(&json!({ "name": "Ana" }));
        session.note_step(4);
        session.arm(SubmitTrigger::UserActivation);
        session.begin_submission().unwrap();

        session.confirm_success();
        assert_eq!(session.draft(), Draft::default());
        assert_eq!(session.guard_state(), GuardState::Done);
    }

    #[test]
    fn failure_keeps_the_draft_for_another_attempt() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        session.update(&json!({ "name": "Ana" }));
        session.note_step(4);
        session.arm(SubmitTrigger::UserActivation);
        session.begin_submission().unwrap();

        session.submission_failed();
        assert_eq!(session.draft().name, "Ana");
        assert!(session.arm(SubmitTrigger::UserActivation));
        assert!(session.begin_submission().is_some());
    }
}
