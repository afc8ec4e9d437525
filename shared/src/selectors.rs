//! Pure lookup functions over the externally owned collections.
//!
//! The detail view never mutates the collections; these selectors keep the
//! lookup contract testable without a rendering environment.

use crate::models::challenge::Challenge;
use crate::models::submission::{Submission, SubmissionStatus};

/// Finds a challenge by id. Returns the first match.
pub fn challenge_by_id<'a>(challenges: &'a [Challenge], id: &str) -> Option<&'a Challenge> {
    challenges.iter().find(|c| c.id == id)
}

/// Finds the viewer's own submission for a challenge.
///
/// Returns the first entry matching both ids; at most one is expected per
/// (challenge, user) pair but uniqueness is the data source's job, not ours.
/// Guests (`user_id == None`) never have a submission.
pub fn user_submission<'a>(
    submissions: &'a [Submission],
    challenge_id: &str,
    user_id: Option<&str>,
) -> Option<&'a Submission> {
    let user_id = user_id?;
    submissions
        .iter()
        .find(|s| s.challenge_id == challenge_id && s.user_id == user_id)
}

/// All approved submissions for a challenge, in their original order.
pub fn approved_submissions<'a>(
    submissions: &'a [Submission],
    challenge_id: &str,
) -> Vec<&'a Submission> {
    submissions
        .iter()
        .filter(|s| s.challenge_id == challenge_id && s.status == SubmissionStatus::Approved)
        .collect()
}
