//! Bootstrap Bindings
//!
//! Frontend bindings to the page's Bootstrap JS components.
//! The bundle is optional: every entry point reports absence instead of throwing.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    #[derive(Clone)]
    pub type Modal;

    #[wasm_bindgen(constructor, catch)]
    fn new(element: &web_sys::Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn show(this: &Modal) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn hide(this: &Modal) -> Result<(), JsValue>;

    type Alert;

    #[wasm_bindgen(static_method_of = Alert, js_name = getOrCreateInstance, catch)]
    fn get_or_create_instance(element: &web_sys::Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn close(this: &Alert) -> Result<(), JsValue>;
}

/// Event fired by Bootstrap when a modal starts hiding
pub const MODAL_HIDE_EVENT: &str = "hide.bs.modal";
/// Event fired by Bootstrap once a modal has finished hiding
pub const MODAL_HIDDEN_EVENT: &str = "hidden.bs.modal";

fn js_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Whether `window.bootstrap` is loaded
pub fn is_available() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::has(&w, &JsValue::from_str("bootstrap")).ok())
        .unwrap_or(false)
}

/// Wrap `element` in a Bootstrap modal
pub fn create_modal(element: &web_sys::Element) -> Result<Modal, String> {
    if !is_available() {
        return Err("bootstrap is not loaded".to_string());
    }
    Modal::new(element).map_err(js_error)
}

pub fn show_modal(modal: &Modal) -> Result<(), String> {
    modal.show().map_err(js_error)
}

pub fn hide_modal(modal: &Modal) -> Result<(), String> {
    modal.hide().map_err(js_error)
}

/// Close an alert through Bootstrap so its fade transition runs
pub fn close_alert(element: &web_sys::Element) -> Result<(), String> {
    if !is_available() {
        return Err("bootstrap is not loaded".to_string());
    }
    let alert = Alert::get_or_create_instance(element).map_err(js_error)?;
    alert.close().map_err(js_error)
}
