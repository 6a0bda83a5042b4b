//! Page Context
//!
//! State shared by the behaviors of one page, held in Leptos reactive cells.

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::flow::{FlowAction, VoteFlow};
use crate::models::VoteChoice;

/// Page-wide state handed to every behavior
#[derive(Clone, Copy)]
pub struct PageContext {
    config: StoredValue<UiConfig>,
    /// Confirm-then-submit state of the vote form
    vote_flow: RwSignal<VoteFlow>,
}

impl PageContext {
    pub fn new(config: UiConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            vote_flow: RwSignal::new(VoteFlow::new()),
        }
    }

    pub fn config(&self) -> UiConfig {
        self.config.get_value()
    }

    /// Feed a vote form submit into the flow
    pub fn request_vote(&self, choice: VoteChoice, dialog_available: bool) -> FlowAction {
        let mut action = FlowAction::Ignore;
        self.vote_flow.update(|flow| action = flow.request(choice, dialog_available));
        action
    }

    /// Confirmation clicked; yields the pending choice once
    pub fn confirm_vote(&self) -> Option<VoteChoice> {
        let mut choice = None;
        self.vote_flow.update(|flow| choice = flow.confirm());
        choice
    }

    /// Label of the choice still waiting for confirmation
    pub fn pending_vote_label(&self) -> Option<String> {
        self.vote_flow.with_untracked(|flow| flow.pending_label())
    }

    pub fn cancel_vote(&self) {
        self.vote_flow.update(|flow| flow.cancel());
    }

    pub fn reset_vote(&self) {
        self.vote_flow.update(|flow| flow.reset());
    }
}
