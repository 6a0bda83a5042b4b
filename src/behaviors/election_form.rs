//! Create-Election Form Behavior
//!
//! Blocks submission while the title or candidate list is blank.

use web_sys::{Document, HtmlFormElement};

use crate::config::UiConfig;
use crate::dom;
use crate::validation;

/// Wire validation. Returns false when the page has no create-election form.
pub fn bind(config: &UiConfig, document: &Document) -> Result<bool, String> {
    let Some(form) = dom::by_id::<HtmlFormElement>(document, &config.create_form_id) else {
        return Ok(false);
    };

    let target = form.clone();
    let title_field = config.title_field.clone();
    let candidates_field = config.candidates_field.clone();
    dom::listen(&form, "submit", move |ev: web_sys::Event| {
        let title = dom::text_field(&target, &title_field);
        let candidates = dom::text_field(&target, &candidates_field);
        match validation::validate_election(&title, &candidates) {
            Ok(draft) => log::info!(
                "creating election '{}' with {} candidates",
                draft.title,
                draft.candidates.len()
            ),
            Err(e) => {
                ev.prevent_default();
                log::info!("create-election blocked: {}", e);
                dom::alert_user(&e.to_string());
            }
        }
    })?;
    Ok(true)
}
