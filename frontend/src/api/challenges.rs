use crate::data::MOCK_CHALLENGES;
use log::debug;
use shared::Challenge;

/// Fetches every challenge in the catalog.
pub async fn list_challenges() -> Result<Vec<Challenge>, String> {
    debug!("Fetching all challenges");
    Ok(MOCK_CHALLENGES.clone())
}

pub async fn get_challenge_by_id(id: &str) -> Result<Challenge, String> {
    debug!("Fetching challenge with ID: {}", id);

    shared::selectors::challenge_by_id(&MOCK_CHALLENGES, id)
        .cloned()
        .ok_or_else(|| format!("Challenge not found: {}", id))
}
