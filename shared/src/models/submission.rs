use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Moderation state of a submitted solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "pending"),
            SubmissionStatus::Approved => write!(f, "approved"),
            SubmissionStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A user's claimed solution to a challenge.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Submission {
    /// Submission's ID
    #[validate(length(min = 1, message = "Id is required"))]
    pub id: String,

    /// Challenge this solution answers
    #[validate(length(min = 1, message = "Challenge id is required"))]
    pub challenge_id: String,

    /// Submitting user
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,

    /// Live URL where the solution can be viewed and tested
    #[validate(url(message = "Solution URL must be a valid URL"))]
    pub solution_url: String,

    /// Moderation status
    pub status: SubmissionStatus,

    /// Reviewer feedback, present once the submission has been reviewed
    pub feedback: Option<String>,

    /// When the solution was submitted
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Creates a fresh pending submission for a challenge.
    pub fn new_pending(challenge_id: String, user_id: String, solution_url: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            challenge_id,
            user_id,
            solution_url,
            status: SubmissionStatus::Pending,
            feedback: None,
            submitted_at: Utc::now(),
        }
    }
}
