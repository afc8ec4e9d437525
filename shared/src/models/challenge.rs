use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Difficulty tier of a challenge.
///
/// Challenge data comes from an external collection, so values outside the
/// three known tiers are carried through as `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
    Other(String),
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Beginner" => Difficulty::Beginner,
            "Intermediate" => Difficulty::Intermediate,
            "Expert" => Difficulty::Expert,
            _ => Difficulty::Other(value),
        }
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.to_string()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Expert => write!(f, "Expert"),
            Difficulty::Other(label) => write!(f, "{}", label),
        }
    }
}

/// A challenge definition with difficulty, reward, and requirements.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Challenge {
    /// Challenge's ID
    #[validate(length(min = 1, message = "Id is required"))]
    pub id: String,

    /// Challenge's title
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title is required and must be at most 200 characters"
    ))]
    pub title: String,

    /// Long-form description shown on the detail page
    pub description: String,

    /// Ordered list of requirements a solution must meet
    pub requirements: Vec<String>,

    /// Cover image for the challenge header
    pub image_url: String,

    /// Difficulty tier
    pub difficulty: Difficulty,

    /// Experience points awarded for an approved solution
    pub xp_reward: u32,

    /// When the challenge was created
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn challenge(title: &str) -> Challenge {
        Challenge {
            id: "challenge/1".to_string(),
            title: title.to_string(),
            description: "Build a thing".to_string(),
            requirements: vec!["Must be responsive".to_string()],
            image_url: "https://images.example.com/1.jpg".to_string(),
            difficulty: Difficulty::Beginner,
            xp_reward: 100,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_challenge_validation_valid_data() {
        assert!(challenge("Landing Page").validate().is_ok());
    }

    #[test]
    fn test_challenge_validation_empty_title() {
        assert!(challenge("").validate().is_err());
    }

    #[test_case::test_case("Beginner")]
    #[test_case::test_case("Intermediate")]
    #[test_case::test_case("Expert")]
    fn test_difficulty_known_tiers_round_trip(tier: &str) {
        let difficulty = Difficulty::from(tier.to_string());
        assert_eq!(difficulty.to_string(), tier);
        assert!(!matches!(difficulty, Difficulty::Other(_)));
    }

    #[test]
    fn test_difficulty_unknown_tier_is_other() {
        let difficulty = Difficulty::from("Legendary".to_string());
        assert_eq!(difficulty, Difficulty::Other("Legendary".to_string()));
        assert_eq!(difficulty.to_string(), "Legendary");
    }

    #[test]
    fn test_difficulty_serde_as_string() {
        let json = serde_json::to_string(&Difficulty::Expert).unwrap();
        assert_eq!(json, "\"Expert\"");
        let parsed: Difficulty = serde_json::from_str("\"Weekend Project\"").unwrap();
        assert_eq!(parsed, Difficulty::Other("Weekend Project".to_string()));
    }
}
