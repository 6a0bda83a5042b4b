//! DOM Helpers
//!
//! Typed lookups and small mutations shared by the page behaviors.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlFormElement, HtmlInputElement, NodeList};

/// Controls that submit a form
pub const SUBMIT_CONTROLS: &str = "button[type=\"submit\"], input[type=\"submit\"]";

pub fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

pub fn document() -> Result<Document, String> {
    window()?.document().ok_or_else(|| "no document".to_string())
}

/// Element by id, cast to `T`. None when missing or of another type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Collect a NodeList, skipping nodes that are not `T`
pub fn collect_nodes<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Show a blocking message to the user
pub fn alert_user(message: &str) {
    match window() {
        Ok(w) => {
            if w.alert_with_message(message).is_err() {
                log::warn!("alert failed: {}", message);
            }
        }
        Err(e) => log::warn!("{}: {}", e, message),
    }
}

/// Current value of a named form field as the browser would submit it
pub fn form_value(form: &HtmlFormElement, name: &str) -> Option<String> {
    let data = web_sys::FormData::new_with_form(form).ok()?;
    data.get(name).as_string()
}

/// Text of the first `input`/`textarea` named `name`, or "" when absent
pub fn text_field(form: &HtmlFormElement, name: &str) -> String {
    let selector = format!("input[name=\"{0}\"], textarea[name=\"{0}\"]", name);
    let Ok(Some(el)) = form.query_selector(&selector) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Inputs matching `selector` under `form`, in document order
pub fn inputs(form: &HtmlFormElement, selector: &str) -> Vec<HtmlInputElement> {
    form.query_selector_all(selector)
        .map(collect_nodes::<HtmlInputElement>)
        .unwrap_or_default()
}

/// The input whose value equals `value`, compared directly rather than via a selector
pub fn find_by_value(candidates: &[HtmlInputElement], value: &str) -> Option<HtmlInputElement> {
    candidates.iter().find(|input| input.value() == value).cloned()
}

/// `data-*` attribute by camelCase key
pub fn data_attr(el: &web_sys::HtmlElement, key: &str) -> Option<String> {
    el.dataset().get(key)
}

/// Enable or disable every submit control of `form`, keeping the `disabled` class in step
pub fn set_submit_controls_disabled(form: &HtmlFormElement, disabled: bool) {
    let Ok(list) = form.query_selector_all(SUBMIT_CONTROLS) else { return };
    for el in collect_nodes::<Element>(list) {
        if let Some(button) = el.dyn_ref::<web_sys::HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        }
        let classes = el.class_list();
        let toggled = if disabled {
            classes.add_1("disabled")
        } else {
            classes.remove_1("disabled")
        };
        if let Err(e) = toggled {
            log::debug!("toggling disabled class failed: {:?}", e);
        }
    }
}

/// Attach a listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), String>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let result = target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| format!("add {} listener: {:?}", event, e));
    closure.forget();
    result
}
