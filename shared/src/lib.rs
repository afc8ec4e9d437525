pub mod models {
    pub mod challenge;
    pub mod submission;
    pub mod user;
}

pub mod error;
pub mod selectors;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{
    challenge::{Challenge, Difficulty},
    submission::{Submission, SubmissionStatus},
    user::User,
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_challenge_creation() {
        let challenge = Challenge {
            id: "challenge/landing-page".to_string(),
            title: "Responsive Landing Page".to_string(),
            description: "Build a responsive landing page from the mockup".to_string(),
            requirements: vec![
                "Mobile-first layout".to_string(),
                "Accessible navigation".to_string(),
            ],
            image_url: "https://images.example.com/landing.jpg".to_string(),
            difficulty: Difficulty::Beginner,
            xp_reward: 100,
            created_at: chrono::Utc::now(),
        };

        assert_eq!(challenge.title, "Responsive Landing Page");
        assert_eq!(challenge.requirements.len(), 2);
        assert_eq!(challenge.difficulty, Difficulty::Beginner);
    }

    #[test]
    fn test_submission_round_trip() {
        let submission = Submission::new_pending(
            "challenge/landing-page".to_string(),
            "user/ada".to_string(),
            "https://solutions.example.com/ada/landing".to_string(),
        );

        let json = serde_json::to_string(&submission).unwrap();
        let parsed: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, submission);
        assert_eq!(parsed.status, SubmissionStatus::Pending);
    }

    #[test]
    fn test_user_creation() {
        let user = User {
            id: "user/ada".to_string(),
            handle: "ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        assert_eq!(user.handle, "ada");
        assert_eq!(user.email, "ada@example.com");
    }
}
