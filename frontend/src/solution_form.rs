//! State machine behind the solution submit form.
//!
//! The machine is plain data so it can be unit tested without a browser;
//! the `Reducible` impl at the bottom is the only Yew-facing piece.

use std::rc::Rc;
use yew::prelude::Reducible;

/// Where the form is in its submit lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SolutionFormState {
    pub solution_url: String,
    pub phase: SubmitPhase,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SolutionFormAction {
    UrlChanged(String),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(String),
}

impl SolutionFormState {
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Applies one action. Pure; the async submit call lives in the
    /// component and feeds its outcome back in as an action.
    pub fn apply(&self, action: SolutionFormAction) -> Self {
        match action {
            SolutionFormAction::UrlChanged(url) => {
                // Input is locked while the simulated call is in flight;
                // the control is disabled, this guards the reducer too.
                if self.is_submitting() {
                    self.clone()
                } else {
                    Self {
                        solution_url: url,
                        phase: SubmitPhase::Idle,
                    }
                }
            }
            SolutionFormAction::SubmitStarted => Self {
                solution_url: self.solution_url.clone(),
                phase: SubmitPhase::Submitting,
            },
            SolutionFormAction::SubmitSucceeded => Self {
                solution_url: String::new(),
                phase: SubmitPhase::Succeeded,
            },
            SolutionFormAction::SubmitFailed(_) => Self {
                // Keep the input so the user can retry without retyping
                solution_url: self.solution_url.clone(),
                phase: SubmitPhase::Failed,
            },
        }
    }
}

impl Reducible for SolutionFormState {
    type Action = SolutionFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Why a candidate solution URL was rejected before submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolutionUrlError {
    Empty,
    Malformed,
}

impl SolutionUrlError {
    pub fn title(&self) -> &'static str {
        "Invalid URL"
    }

    pub fn description(&self) -> &'static str {
        match self {
            SolutionUrlError::Empty => "Please provide a valid solution URL.",
            SolutionUrlError::Malformed => {
                "Please provide a valid URL starting with http:// or https://"
            }
        }
    }
}

/// Validates a candidate solution URL and returns the trimmed form.
pub fn validate_solution_url(raw: &str) -> Result<String, SolutionUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SolutionUrlError::Empty);
    }
    if !validator::validate_url(trimmed) {
        return Err(SolutionUrlError::Malformed);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_state_is_idle_and_empty() {
        let state = SolutionFormState::default();
        assert_eq!(state.solution_url, "");
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_url_changes_tracked_while_idle() {
        let state = SolutionFormState::default()
            .apply(SolutionFormAction::UrlChanged("https://a.example".to_string()));
        assert_eq!(state.solution_url, "https://a.example");
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn test_url_changes_ignored_while_submitting() {
        let state = SolutionFormState {
            solution_url: "https://a.example".to_string(),
            phase: SubmitPhase::Submitting,
        };
        let state = state.apply(SolutionFormAction::UrlChanged("hijack".to_string()));
        assert_eq!(state.solution_url, "https://a.example");
        assert!(state.is_submitting());
    }

    #[test]
    fn test_successful_submit_clears_input_in_order() {
        let state = SolutionFormState::default()
            .apply(SolutionFormAction::UrlChanged(
                "https://example.com/solution".to_string(),
            ))
            .apply(SolutionFormAction::SubmitStarted);

        // In flight: flag up, input untouched.
        assert!(state.is_submitting());
        assert_eq!(state.solution_url, "https://example.com/solution");

        let state = state.apply(SolutionFormAction::SubmitSucceeded);
        assert!(!state.is_submitting());
        assert_eq!(state.phase, SubmitPhase::Succeeded);
        assert_eq!(state.solution_url, "");
    }

    #[test]
    fn test_failed_submit_preserves_input() {
        let state = SolutionFormState::default()
            .apply(SolutionFormAction::UrlChanged(
                "https://example.com/solution".to_string(),
            ))
            .apply(SolutionFormAction::SubmitStarted)
            .apply(SolutionFormAction::SubmitFailed("review queue is down".to_string()));

        assert!(!state.is_submitting());
        assert_eq!(state.phase, SubmitPhase::Failed);
        assert_eq!(state.solution_url, "https://example.com/solution");
    }

    #[test]
    fn test_validate_rejects_empty_and_whitespace() {
        assert_eq!(validate_solution_url(""), Err(SolutionUrlError::Empty));
        assert_eq!(validate_solution_url("   "), Err(SolutionUrlError::Empty));
        assert_eq!(validate_solution_url("\t\n"), Err(SolutionUrlError::Empty));
    }

    #[test]
    fn test_validate_rejects_non_urls() {
        assert_eq!(
            validate_solution_url("not a url"),
            Err(SolutionUrlError::Malformed)
        );
        assert_eq!(
            validate_solution_url("example.com/no-scheme"),
            Err(SolutionUrlError::Malformed)
        );
    }

    #[test]
    fn test_validate_accepts_absolute_urls_and_trims() {
        assert_eq!(
            validate_solution_url("  https://example.com/solution "),
            Ok("https://example.com/solution".to_string())
        );
        assert_eq!(
            validate_solution_url("http://localhost:3000/demo"),
            Ok("http://localhost:3000/demo".to_string())
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(SolutionUrlError::Empty.title(), "Invalid URL");
        assert_eq!(
            SolutionUrlError::Empty.description(),
            "Please provide a valid solution URL."
        );
        assert!(SolutionUrlError::Malformed
            .description()
            .contains("http://"));
    }
}
