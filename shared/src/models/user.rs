use serde::{Deserialize, Serialize};
use validator::Validate;

/// The signed-in community member, as exposed by the auth collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct User {
    /// User's ID
    #[validate(length(min = 1, message = "Id is required"))]
    pub id: String,

    /// Public handle shown next to submissions
    #[validate(length(min = 1, message = "Handle is required"))]
    pub handle: String,

    /// User's email
    #[validate(email(message = "Email must be valid"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_user_validation() {
        let user = User {
            id: "user/1".to_string(),
            handle: "ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert!(user.validate().is_ok());

        let bad_email = User {
            email: "not-an-email".to_string(),
            ..user
        };
        assert!(bad_email.validate().is_err());
    }
}
