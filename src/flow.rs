//! Vote Submission Flow
//!
//! Confirm-then-submit state for the vote form. A choice is handed out for
//! submission at most once until the flow is explicitly reset.

use crate::models::VoteChoice;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    /// Modal is open for this choice
    AwaitingConfirm(VoteChoice),
    /// Choice has been handed out for submission
    Submitted,
}

/// What the page should do after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowAction {
    /// Open the confirmation modal with this label
    ShowDialog(String),
    /// Send this choice now
    Submit(VoteChoice),
    /// A submission is already underway
    Ignore,
}

#[derive(Debug, Clone, Default)]
pub struct VoteFlow {
    state: FlowState,
}

impl VoteFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == FlowState::Submitted
    }

    /// Handle a submit of the vote form.
    /// A later submit while the modal is open replaces the pending choice.
    pub fn request(&mut self, choice: VoteChoice, dialog_available: bool) -> FlowAction {
        if self.is_submitted() {
            return FlowAction::Ignore;
        }
        if dialog_available {
            let label = choice.confirm_label();
            self.state = FlowState::AwaitingConfirm(choice);
            FlowAction::ShowDialog(label)
        } else {
            self.state = FlowState::Submitted;
            FlowAction::Submit(choice)
        }
    }

    /// Explicit confirmation from the modal
    pub fn confirm(&mut self) -> Option<VoteChoice> {
        match std::mem::take(&mut self.state) {
            FlowState::AwaitingConfirm(choice) => {
                self.state = FlowState::Submitted;
                Some(choice)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Label of the choice waiting for confirmation, if any
    pub fn pending_label(&self) -> Option<String> {
        match &self.state {
            FlowState::AwaitingConfirm(choice) => Some(choice.confirm_label()),
            _ => None,
        }
    }

    /// Modal dismissed without confirming
    pub fn cancel(&mut self) {
        if matches!(self.state, FlowState::AwaitingConfirm(_)) {
            self.state = FlowState::Idle;
        }
    }

    /// Submission was rejected; allow another attempt
    pub fn reset(&mut self) {
        self.state = FlowState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> VoteChoice {
        VoteChoice::new("1", Some("Alice".to_string()))
    }

    #[test]
    fn test_dialog_then_confirm_submits_once() {
        let mut flow = VoteFlow::new();
        assert_eq!(flow.request(alice(), true), FlowAction::ShowDialog("Alice".to_string()));
        assert_eq!(flow.confirm(), Some(alice()));
        assert!(flow.is_submitted());
        assert_eq!(flow.confirm(), None);
    }

    #[test]
    fn test_no_dialog_submits_immediately() {
        let mut flow = VoteFlow::new();
        assert_eq!(flow.request(alice(), false), FlowAction::Submit(alice()));
        assert!(flow.is_submitted());
    }

    #[test]
    fn test_repeated_submits_after_submission_are_ignored() {
        let mut flow = VoteFlow::new();
        assert_eq!(flow.request(alice(), false), FlowAction::Submit(alice()));
        for _ in 0..5 {
            assert_eq!(flow.request(alice(), false), FlowAction::Ignore);
            assert_eq!(flow.request(alice(), true), FlowAction::Ignore);
        }
    }

    #[test]
    fn test_confirm_without_pending_choice_is_noop() {
        let mut flow = VoteFlow::new();
        assert_eq!(flow.confirm(), None);
        assert_eq!(flow.state(), &FlowState::Idle);
    }

    #[test]
    fn test_cancel_allows_new_choice() {
        let mut flow = VoteFlow::new();
        flow.request(alice(), true);
        flow.cancel();
        assert_eq!(flow.state(), &FlowState::Idle);

        let bob = VoteChoice::new("2", None);
        assert_eq!(
            flow.request(bob.clone(), true),
            FlowAction::ShowDialog("the selected candidate".to_string())
        );
        assert_eq!(flow.confirm(), Some(bob));
    }

    #[test]
    fn test_cancel_after_submit_keeps_submitted() {
        let mut flow = VoteFlow::new();
        flow.request(alice(), true);
        flow.confirm();
        flow.cancel();
        assert!(flow.is_submitted());
    }

    #[test]
    fn test_resubmit_while_open_replaces_choice() {
        let mut flow = VoteFlow::new();
        flow.request(alice(), true);
        let bob = VoteChoice::new("2", Some("Bob".to_string()));
        flow.request(bob.clone(), true);
        assert_eq!(flow.confirm(), Some(bob));
    }

    #[test]
    fn test_choice_made_while_modal_hides_stays_pending() {
        let mut flow = VoteFlow::new();
        flow.request(alice(), true);
        // hide starts for Alice, then Bob is submitted before the modal finishes hiding
        flow.cancel();
        let bob = VoteChoice::new("2", Some("Bob".to_string()));
        flow.request(bob.clone(), true);
        assert_eq!(flow.pending_label().as_deref(), Some("Bob"));
        assert_eq!(flow.confirm(), Some(bob));
        assert_eq!(flow.pending_label(), None);
    }

    #[test]
    fn test_no_pending_label_after_dismiss() {
        let mut flow = VoteFlow::new();
        assert_eq!(flow.pending_label(), None);
        flow.request(alice(), true);
        flow.cancel();
        assert_eq!(flow.pending_label(), None);
    }

    #[test]
    fn test_reset_after_rejection() {
        let mut flow = VoteFlow::new();
        flow.request(alice(), false);
        flow.reset();
        assert_eq!(flow.request(alice(), false), FlowAction::Submit(alice()));
    }
}
