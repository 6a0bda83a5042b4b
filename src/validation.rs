//! Form Validation
//!
//! UX-only checks run before a form leaves the page. The server repeats them.

use thiserror::Error;

use crate::models::{ElectionDraft, VoteChoice};

/// Reasons a submission is blocked. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Select a candidate")]
    NoCandidateSelected,
    #[error("Title is required")]
    TitleRequired,
    #[error("Please provide at least one candidate (comma-separated)")]
    CandidatesRequired,
    #[error("Please provide at least one candidate")]
    NoCandidateNames,
}

/// Split a comma-separated candidate list, trimming and dropping empty entries
pub fn split_candidates(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check the create-election fields in order: title, candidates field, candidate names
pub fn validate_election(title: &str, candidates: &str) -> Result<ElectionDraft, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if candidates.trim().is_empty() {
        return Err(ValidationError::CandidatesRequired);
    }
    let names = split_candidates(candidates);
    if names.is_empty() {
        return Err(ValidationError::NoCandidateNames);
    }
    Ok(ElectionDraft {
        title: title.to_string(),
        candidates: names,
    })
}

/// A vote needs a non-empty candidate value
pub fn validate_vote(
    candidate: Option<&str>,
    display_name: Option<String>,
) -> Result<VoteChoice, ValidationError> {
    match candidate {
        Some(id) if !id.is_empty() => Ok(VoteChoice::new(id, display_name)),
        _ => Err(ValidationError::NoCandidateSelected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_candidates() {
        assert_eq!(split_candidates("Alice, Bob ,Carol"), vec!["Alice", "Bob", "Carol"]);
        assert_eq!(split_candidates(" , ,Alice,,"), vec!["Alice"]);
        assert!(split_candidates(",,, ").is_empty());
    }

    #[test]
    fn test_blank_title_blocks() {
        assert_eq!(validate_election("", "Alice"), Err(ValidationError::TitleRequired));
        assert_eq!(validate_election("   \t", "Alice"), Err(ValidationError::TitleRequired));
    }

    #[test]
    fn test_title_checked_before_candidates() {
        assert_eq!(validate_election(" ", ""), Err(ValidationError::TitleRequired));
    }

    #[test]
    fn test_blank_candidates_blocks() {
        assert_eq!(validate_election("Board", ""), Err(ValidationError::CandidatesRequired));
        assert_eq!(validate_election("Board", "   "), Err(ValidationError::CandidatesRequired));
    }

    #[test]
    fn test_only_commas_blocks() {
        assert_eq!(validate_election("Board", " , ,, "), Err(ValidationError::NoCandidateNames));
    }

    #[test]
    fn test_valid_election() {
        let draft = validate_election("  Board 2024 ", "Alice, Bob").unwrap();
        assert_eq!(draft.title, "Board 2024");
        assert_eq!(draft.candidates, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_messages_shown_to_user() {
        assert_eq!(ValidationError::NoCandidateSelected.to_string(), "Select a candidate");
        assert_eq!(ValidationError::TitleRequired.to_string(), "Title is required");
        assert_eq!(
            ValidationError::CandidatesRequired.to_string(),
            "Please provide at least one candidate (comma-separated)"
        );
        assert_eq!(
            ValidationError::NoCandidateNames.to_string(),
            "Please provide at least one candidate"
        );
    }

    #[test]
    fn test_vote_requires_candidate() {
        assert_eq!(validate_vote(None, None), Err(ValidationError::NoCandidateSelected));
        assert_eq!(validate_vote(Some(""), None), Err(ValidationError::NoCandidateSelected));
        let choice = validate_vote(Some("7"), Some("Bob".to_string())).unwrap();
        assert_eq!(choice.candidate_id, "7");
        assert_eq!(choice.display_name.as_deref(), Some("Bob"));
    }
}
