//! Frontend Models
//!
//! Transient values read from the page at event time.

use serde::{Deserialize, Serialize};

/// Candidate picked in the vote form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteChoice {
    /// Value of the checked `candidate` radio
    pub candidate_id: String,
    /// `data-name` of that radio, when present
    pub display_name: Option<String>,
}

impl VoteChoice {
    pub fn new(candidate_id: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            display_name,
        }
    }

    /// Text shown in the confirmation modal
    pub fn confirm_label(&self) -> String {
        match self.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => "the selected candidate".to_string(),
        }
    }
}

/// Validated contents of the create-election form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectionDraft {
    pub title: String,
    pub candidates: Vec<String>,
}

/// Flash banner category, from its `alert-*` class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Info,
    Warning,
    Danger,
    Other,
}

impl AlertKind {
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "alert-success" => Some(AlertKind::Success),
            "alert-info" => Some(AlertKind::Info),
            "alert-warning" => Some(AlertKind::Warning),
            "alert-danger" => Some(AlertKind::Danger),
            _ => None,
        }
    }

    /// First recognised `alert-*` class wins
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        classes
            .into_iter()
            .find_map(Self::from_class)
            .unwrap_or(AlertKind::Other)
    }
}

/// How the vote form delivers the final choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitMode {
    /// Native form POST
    #[default]
    Form,
    /// JSON POST to the vote API
    Api,
}

impl SubmitMode {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "api" || v == "json" => SubmitMode::Api,
            _ => SubmitMode::Form,
        }
    }
}

/// Body for the vote API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiVoteRequest {
    pub candidate_id: serde_json::Value,
}

impl ApiVoteRequest {
    /// Numeric ids go out as numbers, anything else as a string
    pub fn new(candidate_id: &str) -> Self {
        let trimmed = candidate_id.trim();
        let candidate_id = match trimmed.parse::<i64>() {
            Ok(n) => serde_json::Value::from(n),
            Err(_) => serde_json::Value::from(trimmed),
        };
        Self { candidate_id }
    }
}

/// Response from the vote API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiVoteResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_label_uses_name() {
        let choice = VoteChoice::new("3", Some("Alice".to_string()));
        assert_eq!(choice.confirm_label(), "Alice");
    }

    #[test]
    fn test_confirm_label_fallback() {
        assert_eq!(VoteChoice::new("3", None).confirm_label(), "the selected candidate");
        assert_eq!(
            VoteChoice::new("3", Some("   ".to_string())).confirm_label(),
            "the selected candidate"
        );
    }

    #[test]
    fn test_alert_kind_from_classes() {
        assert_eq!(AlertKind::from_classes(["alert", "alert-success", "fade"]), AlertKind::Success);
        assert_eq!(AlertKind::from_classes(["alert", "alert-info"]), AlertKind::Info);
        assert_eq!(AlertKind::from_classes(["alert", "alert-danger"]), AlertKind::Danger);
        assert_eq!(AlertKind::from_classes(["alert"]), AlertKind::Other);
    }

    #[test]
    fn test_submit_mode_from_attr() {
        assert_eq!(SubmitMode::from_attr(None), SubmitMode::Form);
        assert_eq!(SubmitMode::from_attr(Some("form")), SubmitMode::Form);
        assert_eq!(SubmitMode::from_attr(Some(" API ")), SubmitMode::Api);
        assert_eq!(SubmitMode::from_attr(Some("json")), SubmitMode::Api);
    }

    #[test]
    fn test_api_request_numeric_and_string_ids() {
        let numeric = serde_json::to_string(&ApiVoteRequest::new("42")).unwrap();
        assert_eq!(numeric, r#"{"candidate_id":42}"#);
        let text = serde_json::to_string(&ApiVoteRequest::new("abc")).unwrap();
        assert_eq!(text, r#"{"candidate_id":"abc"}"#);
    }

    #[test]
    fn test_api_response_optional_fields() {
        let ok: ApiVoteResponse =
            serde_json::from_str(r#"{"status":"ok","redirect":"/election/1/results"}"#).unwrap();
        assert_eq!(ok.redirect.as_deref(), Some("/election/1/results"));
        assert_eq!(ok.message, None);

        let err: ApiVoteResponse = serde_json::from_str(
            r#"{"status":"error","message":"You have already voted in this election"}"#,
        )
        .unwrap();
        assert_eq!(err.status, "error");
        assert_eq!(err.redirect, None);
    }
}
