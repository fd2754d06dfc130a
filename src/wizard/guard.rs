// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

//! Guarded submission state machine.
//!
//! The wizard must never auto-submit from restored state, focus side effects
//! or synthetic events, and must fire the create call at most once. The guard
//! expresses that as a plain state machine: only an explicit user activation
//! on the final step arms it, any step change disarms it, and only one
//! in-flight submission is ever admitted.

/// What produced a submit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// The literal, user-originated activation of the final submit control.
    UserActivation,
    /// Anything else: programmatic submits, replayed events, key side effects.
    Synthetic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// The user is somewhere in the wizard.
    Editing { step: usize },
    /// On the last step with confirmed manual intent; a submission may begin.
    ReadyToSubmit,
    /// Exactly one submission is in flight.
    Submitting,
    /// The submission completed; the wizard is finished.
    Done,
}

pub struct SubmissionGuard {
    last_step: usize,
    state: GuardState,
    manual_intent: bool,
}

impl SubmissionGuard {
    pub fn new(last_step: usize) -> Self {
        Self {
            last_step,
            state: GuardState::Editing { step: 0 },
            manual_intent: false,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn last_step(&self) -> usize {
        self.last_step
    }

    /// Record a step change. Any step change clears manual intent and returns
    /// to editing. Ignored while a submission is in flight or finished, since
    /// re-entering `Editing` there would admit a second submission.
    pub fn note_step(&mut self, step: usize) {
        match self.state {
            GuardState::Submitting | GuardState::Done => {}
            _ => {
                self.manual_intent = false;
                self.state = GuardState::Editing { step };
            }
        }
    }

    /// Try to arm the guard from a submit event. Arms only when the trigger
    /// is a genuine user activation on the last step; synthetic triggers are
    /// rejected without any transition.
    pub fn arm(&mut self, trigger: SubmitTrigger) -> bool {
        if trigger != SubmitTrigger::UserActivation {
            return false;
        }

        match self.state {
            GuardState::Editing { step } if step == self.last_step => {
                self.manual_intent = true;
                self.state = GuardState::ReadyToSubmit;
                true
            }
            GuardState::ReadyToSubmit => true,
            _ => false,
        }
    }

    /// Admit a submission attempt. Returns true exactly once per armed guard;
    /// re-entrant calls while submitting are no-ops, not queued.
    pub fn begin(&mut self) -> bool {
        match self.state {
            GuardState::ReadyToSubmit if self.manual_intent => {
                self.state = GuardState::Submitting;
                true
            }
            _ => false,
        }
    }

    /// Mark the in-flight submission as confirmed successful.
    pub fn complete(&mut self) {
        if self.state == GuardState::Submitting {
            self.state = GuardState::Done;
        }
    }

    /// Mark the in-flight submission as failed and re-open editing on the
    /// last step, with intent cleared.
    pub fn fail(&mut self) {
        if self.state == GuardState::Submitting {
            self.manual_intent = false;
            self.state = GuardState::Editing {
                step: self.last_step,
            };
        }
    }
}
