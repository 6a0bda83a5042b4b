//! Vote API Client
//!
//! JSON alternative to the native form POST, used when the vote form opts in with
//! `data-submit-mode="api"`.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::{ApiVoteRequest, ApiVoteResponse};

/// Shown when the server gives no usable message
pub const GENERIC_FAILURE: &str = "Could not record your vote. Please try again.";

/// Result of a vote API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    /// Vote recorded; navigate to the redirect, or reload when none was given
    Accepted(Option<String>),
    /// Vote refused, with the message for the user
    Rejected(String),
}

/// Absolute endpoint URL for `election_id`.
/// `origin` is the page origin without a trailing slash.
pub fn vote_url(origin: &str, path_template: &str, election_id: &str) -> String {
    let id = utf8_percent_encode(election_id.trim(), NON_ALPHANUMERIC).to_string();
    let path = path_template.replace("{id}", &id);
    if path.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), path)
    } else {
        format!("{}/{}", origin.trim_end_matches('/'), path)
    }
}

/// Map HTTP status and decoded body to an outcome
pub fn interpret(http_ok: bool, body: Option<ApiVoteResponse>) -> ApiOutcome {
    match body {
        Some(resp) if http_ok && resp.status == "ok" => ApiOutcome::Accepted(resp.redirect),
        Some(resp) => ApiOutcome::Rejected(
            resp.message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        ),
        None => ApiOutcome::Rejected(GENERIC_FAILURE.to_string()),
    }
}

pub async fn cast_vote(url: &str, candidate_id: &str) -> Result<ApiOutcome, String> {
    let response = reqwest::Client::new()
        .post(url)
        .json(&ApiVoteRequest::new(candidate_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let http_ok = response.status().is_success();
    let body = response.json::<ApiVoteResponse>().await.ok();
    Ok(interpret(http_ok, body))
}
