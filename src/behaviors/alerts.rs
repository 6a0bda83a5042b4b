//! Alert Auto-Dismiss
//!
//! Success and info banners close themselves a few seconds after load.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::bootstrap;
use crate::config::UiConfig;
use crate::dom;
use crate::models::AlertKind;

fn class_names(el: &Element) -> Vec<String> {
    el.class_name().split_whitespace().map(str::to_string).collect()
}

fn dismiss(el: &Element) {
    if let Err(e) = bootstrap::close_alert(el) {
        log::debug!("bootstrap close unavailable ({}), removing alert", e);
        el.remove();
    }
}

/// Schedule dismissal of every dismissible alert; returns how many were scheduled
pub fn schedule(config: &UiConfig, document: &Document) -> usize {
    let alerts = match document.query_selector_all(".alert") {
        Ok(list) => dom::collect_nodes::<Element>(list),
        Err(e) => {
            log::debug!("alert lookup failed: {:?}", e);
            return 0;
        }
    };

    let mut scheduled = 0;
    for el in alerts {
        let classes = class_names(&el);
        if !config.is_dismissible(classes.iter().map(String::as_str)) {
            continue;
        }
        let kind = AlertKind::from_classes(classes.iter().map(String::as_str));
        log::debug!("{:?} alert closes in {} ms", kind, config.alert_dismiss_ms);
        Timeout::new(config.alert_dismiss_ms, move || dismiss(&el)).forget();
        scheduled += 1;
    }
    scheduled
}
