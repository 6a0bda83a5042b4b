//! Double-Submit Guard
//!
//! Disables a form's submit controls once its submission has gone ahead.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement};

use crate::dom;

/// Install one document-level `submit` listener.
/// The check waits a zero-delay tick so form handlers can cancel first.
pub fn install(document: &Document) -> Result<(), String> {
    dom::listen(document, "submit", |ev: web_sys::Event| {
        Timeout::new(0, move || {
            if ev.default_prevented() {
                return;
            }
            let Some(form) = ev.target().and_then(|t| t.dyn_into::<HtmlFormElement>().ok()) else {
                return;
            };
            dom::set_submit_controls_disabled(&form, true);
            log::debug!("submit controls disabled for form #{}", form.id());
        })
        .forget();
    })
}
