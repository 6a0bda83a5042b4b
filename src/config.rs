//! Page Configuration
//!
//! The DOM contract the behaviors rely on. Pages may override any field through a
//! `<script type="application/json" id="ballot-ui-config">` block or a
//! `window.BALLOT_UI_CONFIG` object.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsCast;

/// Id of the inline JSON config block
pub const CONFIG_SCRIPT_ID: &str = "ballot-ui-config";
/// Global object consulted when no config block exists
pub const CONFIG_GLOBAL: &str = "BALLOT_UI_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub vote_form_id: String,
    pub confirm_modal_id: String,
    pub confirm_button_id: String,
    pub create_form_id: String,
    pub candidate_field: String,
    pub title_field: String,
    pub candidates_field: String,
    /// Element inside the modal that receives the candidate name
    pub candidate_name_selector: String,
    pub alert_dismiss_ms: u32,
    /// `.alert` elements carrying one of these classes are closed automatically
    pub dismissible_alert_classes: Vec<String>,
    /// `{id}` is replaced by the percent-encoded election id
    pub api_vote_path: String,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            vote_form_id: "vote-form".to_string(),
            confirm_modal_id: "voteConfirmModal".to_string(),
            confirm_button_id: "confirm-vote-btn".to_string(),
            create_form_id: "create-election-form".to_string(),
            candidate_field: "candidate".to_string(),
            title_field: "title".to_string(),
            candidates_field: "candidates".to_string(),
            candidate_name_selector: ".candidate-name".to_string(),
            alert_dismiss_ms: 6000,
            dismissible_alert_classes: vec!["alert-success".to_string(), "alert-info".to_string()],
            api_vote_path: "/api/election/{id}/vote".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.trim().parse().unwrap_or(LevelFilter::Info)
    }

    pub fn is_dismissible<'a>(&self, classes: impl IntoIterator<Item = &'a str>) -> bool {
        classes
            .into_iter()
            .any(|c| self.dismissible_alert_classes.iter().any(|d| d == c))
    }

    /// Selector for the candidate radios inside the vote form
    pub fn candidate_radio_selector(&self) -> String {
        format!("input[name=\"{}\"]", self.candidate_field)
    }

    /// Read the page's config, falling back to defaults.
    /// Returns the config plus any problems met while reading it, since the logger
    /// is not installed yet when this runs.
    pub fn load_from_page() -> (Self, Vec<String>) {
        let mut problems = Vec::new();

        if let Some(text) = config_script_text() {
            match Self::from_json(&text) {
                Ok(config) => return (config, problems),
                Err(e) => problems.push(format!("ignoring #{}: {}", CONFIG_SCRIPT_ID, e)),
            }
        }

        if let Some(value) = config_global() {
            match serde_wasm_bindgen::from_value::<UiConfig>(value) {
                Ok(config) => return (config, problems),
                Err(e) => problems.push(format!("ignoring window.{}: {}", CONFIG_GLOBAL, e)),
            }
        }

        (Self::default(), problems)
    }
}

fn config_script_text() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let script = document
        .get_element_by_id(CONFIG_SCRIPT_ID)?
        .dyn_into::<web_sys::HtmlScriptElement>()
        .ok()?;
    script.text().ok().filter(|t| !t.trim().is_empty())
}

fn config_global() -> Option<wasm_bindgen::JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into()).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}
