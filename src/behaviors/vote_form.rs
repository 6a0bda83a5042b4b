//! Vote Form Behavior
//!
//! Intercepts the vote form, asks for confirmation and submits the choice once.

use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use crate::api::{self, ApiOutcome};
use crate::bootstrap;
use crate::config::UiConfig;
use crate::context::PageContext;
use crate::dom;
use crate::flow::FlowAction;
use crate::models::{SubmitMode, VoteChoice};
use crate::validation;

/// The confirmation modal, present only when its markup and Bootstrap are both on the page
#[derive(Clone)]
struct ConfirmDialog {
    element: Element,
    confirm_button: HtmlElement,
    modal: bootstrap::Modal,
    name_selector: String,
}

impl ConfirmDialog {
    fn find(document: &Document, config: &UiConfig) -> Option<Self> {
        let element = document.get_element_by_id(&config.confirm_modal_id)?;
        let Some(confirm_button) = dom::by_id::<HtmlElement>(document, &config.confirm_button_id) else {
            log::info!("#{} missing, voting without confirmation", config.confirm_button_id);
            return None;
        };
        let modal = match bootstrap::create_modal(&element) {
            Ok(modal) => modal,
            Err(e) => {
                log::info!("confirmation modal unavailable ({}), voting without confirmation", e);
                return None;
            }
        };
        Some(Self {
            element,
            confirm_button,
            modal,
            name_selector: config.candidate_name_selector.clone(),
        })
    }

    fn show(&self, label: &str) -> Result<(), String> {
        if let Ok(Some(slot)) = self.element.query_selector(&self.name_selector) {
            slot.set_text_content(Some(label));
        }
        bootstrap::show_modal(&self.modal)
    }

    fn hide(&self) {
        if let Err(e) = bootstrap::hide_modal(&self.modal) {
            log::debug!("hiding confirmation modal failed: {}", e);
        }
    }
}

/// Where and how a confirmed choice is sent
#[derive(Clone)]
struct VoteTarget {
    form: HtmlFormElement,
    radio_selector: String,
    mode: SubmitMode,
    election_id: Option<String>,
    api_path: String,
}

impl VoteTarget {
    fn submit(&self, ctx: PageContext, choice: VoteChoice) {
        let radios = dom::inputs(&self.form, &self.radio_selector);
        if let Some(radio) = dom::find_by_value(&radios, &choice.candidate_id) {
            radio.set_checked(true);
        }
        dom::set_submit_controls_disabled(&self.form, true);

        match (self.mode, self.election_id.as_deref()) {
            (SubmitMode::Api, Some(election_id)) => self.submit_api(ctx, election_id, choice),
            _ => {
                log::info!("submitting vote for candidate {}", choice.candidate_id);
                if let Err(e) = self.form.submit() {
                    log::error!("vote form submit failed: {:?}", e);
                    self.restore(ctx);
                }
            }
        }
    }

    fn submit_api(&self, ctx: PageContext, election_id: &str, choice: VoteChoice) {
        let origin = match dom::window().and_then(|w| w.location().origin().map_err(|e| format!("{:?}", e))) {
            Ok(origin) => origin,
            Err(e) => {
                log::error!("cannot resolve page origin: {}", e);
                self.restore(ctx);
                return;
            }
        };
        let url = api::vote_url(&origin, &self.api_path, election_id);
        let target = self.clone();
        log::info!("posting vote for candidate {} to {}", choice.candidate_id, url);

        wasm_bindgen_futures::spawn_local(async move {
            match api::cast_vote(&url, &choice.candidate_id).await {
                Ok(ApiOutcome::Accepted(redirect)) => target.follow(redirect),
                Ok(ApiOutcome::Rejected(message)) => {
                    log::warn!("vote rejected: {}", message);
                    dom::alert_user(&message);
                    target.restore(ctx);
                }
                Err(e) => {
                    log::error!("vote request failed: {}", e);
                    dom::alert_user(api::GENERIC_FAILURE);
                    target.restore(ctx);
                }
            }
        });
    }

    fn follow(&self, redirect: Option<String>) {
        let Ok(window) = dom::window() else { return };
        let location = window.location();
        let result = match redirect {
            Some(href) => location.set_href(&href),
            None => location.reload(),
        };
        if let Err(e) = result {
            log::error!("navigation after vote failed: {:?}", e);
        }
    }

    /// Undo the submit lockout so the user can try again
    fn restore(&self, ctx: PageContext) {
        dom::set_submit_controls_disabled(&self.form, false);
        ctx.reset_vote();
    }
}

/// Wire the vote form. Returns false when the page has no vote form.
pub fn bind(ctx: PageContext, document: &Document) -> Result<bool, String> {
    let config = ctx.config();
    let Some(form) = dom::by_id::<HtmlFormElement>(document, &config.vote_form_id) else {
        return Ok(false);
    };

    let election_id = dom::data_attr(&form, "electionId").filter(|id| !id.trim().is_empty());
    let mut mode = SubmitMode::from_attr(dom::data_attr(&form, "submitMode").as_deref());
    if mode == SubmitMode::Api && election_id.is_none() {
        log::warn!("vote form asks for api submission without data-election-id, using form post");
        mode = SubmitMode::Form;
    }

    let target = VoteTarget {
        form: form.clone(),
        radio_selector: config.candidate_radio_selector(),
        mode,
        election_id,
        api_path: config.api_vote_path.clone(),
    };
    let dialog = ConfirmDialog::find(document, &config);
    let has_dialog = dialog.is_some();

    if let Some(dialog) = &dialog {
        let on_confirm = {
            let dialog = dialog.clone();
            let target = target.clone();
            move |_ev: web_sys::Event| {
                if let Some(choice) = ctx.confirm_vote() {
                    target.submit(ctx, choice);
                    dialog.hide();
                }
            }
        };
        dom::listen(&dialog.confirm_button, "click", on_confirm)?;
        dom::listen(&dialog.element, bootstrap::MODAL_HIDE_EVENT, move |_ev| ctx.cancel_vote())?;

        // Bootstrap ignores show() while a hide is animating, so a choice submitted
        // in that window is still pending here and the modal is reopened for it
        let reopen = dialog.clone();
        let target_after_hide = target.clone();
        dom::listen(&dialog.element, bootstrap::MODAL_HIDDEN_EVENT, move |_ev| {
            let Some(label) = ctx.pending_vote_label() else { return };
            if let Err(e) = reopen.show(&label) {
                log::warn!("confirmation modal failed to reopen: {}", e);
                if let Some(choice) = ctx.confirm_vote() {
                    target_after_hide.submit(ctx, choice);
                }
            }
        })?;
    }

    let candidate_field = config.candidate_field.clone();
    let on_submit = move |ev: web_sys::Event| {
        ev.prevent_default();

        let candidate = dom::form_value(&target.form, &candidate_field);
        let display_name = candidate.as_deref().and_then(|id| {
            let radios = dom::inputs(&target.form, &target.radio_selector);
            dom::find_by_value(&radios, id).and_then(|radio| dom::data_attr(&radio, "name"))
        });
        let choice = match validation::validate_vote(candidate.as_deref(), display_name) {
            Ok(choice) => choice,
            Err(e) => {
                dom::alert_user(&e.to_string());
                return;
            }
        };

        match ctx.request_vote(choice, has_dialog) {
            FlowAction::ShowDialog(label) => {
                let Some(dialog) = &dialog else { return };
                if let Err(e) = dialog.show(&label) {
                    // Modal failed to open; submit as if there were none
                    log::warn!("confirmation modal failed to open: {}", e);
                    if let Some(choice) = ctx.confirm_vote() {
                        target.submit(ctx, choice);
                    }
                }
            }
            FlowAction::Submit(choice) => target.submit(ctx, choice),
            FlowAction::Ignore => log::debug!("vote already submitted, ignoring submit"),
        }
    };
    dom::listen(&form, "submit", on_submit)?;

    log::info!(
        "vote form ready (confirmation: {}, mode: {:?})",
        if has_dialog { "modal" } else { "none" },
        mode
    );
    Ok(true)
}
