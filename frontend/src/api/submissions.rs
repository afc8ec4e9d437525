use crate::data::MOCK_SUBMISSIONS;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use shared::Submission;

/// Simulated review-queue round trip, in milliseconds.
pub const SUBMIT_ROUNDTRIP_MS: u32 = 1500;

/// Fetches every submission recorded for a challenge.
pub async fn submissions_for_challenge(challenge_id: &str) -> Result<Vec<Submission>, String> {
    debug!("Fetching submissions for challenge: {}", challenge_id);

    Ok(MOCK_SUBMISSIONS
        .iter()
        .filter(|s| s.challenge_id == challenge_id)
        .cloned()
        .collect())
}

/// Submits a solution URL for review.
///
/// Stands in for the real review-queue endpoint: it waits a fixed round-trip
/// delay and hands back the pending record. The mock collections are not
/// mutated, so the page keeps rendering from the unchanged store. Callers
/// must handle the `Err` branch the same way they would a network failure.
pub async fn submit_solution(
    challenge_id: &str,
    user_id: Option<&str>,
    solution_url: &str,
) -> Result<Submission, String> {
    debug!(
        "Submitting solution for challenge {} by {:?}: {}",
        challenge_id, user_id, solution_url
    );

    TimeoutFuture::new(SUBMIT_ROUNDTRIP_MS).await;

    // Guests can submit; their record is attributed to a guest identity
    // until the auth question is settled upstream.
    let user_id = user_id.unwrap_or("user/guest").to_string();
    let submission = Submission::new_pending(
        challenge_id.to_string(),
        user_id,
        solution_url.to_string(),
    );

    debug!("Submission {} recorded as pending", submission.id);
    Ok(submission)
}
