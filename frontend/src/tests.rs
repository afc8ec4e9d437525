use crate::api::challenges::{get_challenge_by_id, list_challenges};
use crate::api::submissions::submissions_for_challenge;
use crate::components::challenge::community_solutions::COMMUNITY_SOLUTIONS_LIMIT;
use crate::data::{MOCK_CHALLENGES, MOCK_SUBMISSIONS, MOCK_USERS};
use futures::executor::block_on;
use shared::selectors::{approved_submissions, user_submission};
use shared::{SubmissionStatus, Submission};
use validator::Validate;

// Mock store sanity: everything the pages render must pass model validation.
#[test]
fn test_mock_challenges_are_valid() {
    assert!(!MOCK_CHALLENGES.is_empty());
    for challenge in MOCK_CHALLENGES.iter() {
        assert!(
            challenge.validate().is_ok(),
            "challenge {} failed validation",
            challenge.id
        );
    }
}

#[test]
fn test_mock_submissions_reference_known_entities() {
    for submission in MOCK_SUBMISSIONS.iter() {
        assert!(submission.validate().is_ok());
        assert!(
            MOCK_CHALLENGES.iter().any(|c| c.id == submission.challenge_id),
            "submission {} points at unknown challenge",
            submission.id
        );
        assert!(
            MOCK_USERS.iter().any(|u| u.id == submission.user_id),
            "submission {} points at unknown user",
            submission.id
        );
    }
}

// LocalStorage persistence and any future wire format both ride on serde;
// the mock records must survive a round trip unchanged.
#[test]
fn test_mock_data_serde_round_trip() {
    let json = serde_json::to_string(&*MOCK_SUBMISSIONS).unwrap();
    let parsed: Vec<Submission> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, *MOCK_SUBMISSIONS);
}

#[test]
fn test_mock_ids_are_unique() {
    let mut challenge_ids: Vec<_> = MOCK_CHALLENGES.iter().map(|c| &c.id).collect();
    challenge_ids.sort();
    challenge_ids.dedup();
    assert_eq!(challenge_ids.len(), MOCK_CHALLENGES.len());

    let mut submission_ids: Vec<_> = MOCK_SUBMISSIONS.iter().map(|s| &s.id).collect();
    submission_ids.sort();
    submission_ids.dedup();
    assert_eq!(submission_ids.len(), MOCK_SUBMISSIONS.len());
}

// The api layer answers the same lookups the pages perform.
#[test]
fn test_get_challenge_by_id() {
    let challenge = block_on(get_challenge_by_id("challenge/landing-page")).unwrap();
    assert_eq!(challenge.title, "Responsive Landing Page");

    let missing = block_on(get_challenge_by_id("challenge/nope"));
    assert!(missing.is_err());
}

#[test]
fn test_list_challenges_returns_catalog() {
    let challenges = block_on(list_challenges()).unwrap();
    assert_eq!(challenges.len(), MOCK_CHALLENGES.len());
}

#[test]
fn test_submissions_for_challenge_filters_by_id() {
    let submissions = block_on(submissions_for_challenge("challenge/landing-page")).unwrap();
    assert_eq!(submissions.len(), 2);
    assert!(submissions
        .iter()
        .all(|s| s.challenge_id == "challenge/landing-page"));
}

// Panel selection: the status card and the submit form are mutually
// exclusive, keyed by whether the viewer already has a submission.
#[test]
fn test_viewer_with_submission_gets_status_panel() {
    let found = user_submission(&MOCK_SUBMISSIONS, "challenge/kanban-board", Some("user/ada"));
    assert!(found.is_some());
    assert_eq!(found.unwrap().status, SubmissionStatus::Pending);
}

#[test]
fn test_viewer_without_submission_gets_form() {
    assert!(user_submission(&MOCK_SUBMISSIONS, "challenge/landing-page", Some("user/ada")).is_none());
}

#[test]
fn test_guest_always_gets_form() {
    for challenge in MOCK_CHALLENGES.iter() {
        assert!(user_submission(&MOCK_SUBMISSIONS, &challenge.id, None).is_none());
    }
}

// Sidebar cap: never more than COMMUNITY_SOLUTIONS_LIMIT entries, original
// order of the first five preserved.
#[test]
fn test_community_solutions_cap() {
    let submissions: Vec<Submission> = (0..8)
        .map(|i| Submission {
            id: format!("submission/cap-{}", i),
            challenge_id: "challenge/cap".to_string(),
            user_id: format!("user/{}", i),
            solution_url: format!("https://solutions.example.com/{}", i),
            status: SubmissionStatus::Approved,
            feedback: None,
            submitted_at: chrono::Utc::now(),
        })
        .collect();

    let approved = approved_submissions(&submissions, "challenge/cap");
    assert_eq!(approved.len(), 8);

    let shown: Vec<&str> = approved
        .iter()
        .take(COMMUNITY_SOLUTIONS_LIMIT)
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(
        shown,
        vec![
            "submission/cap-0",
            "submission/cap-1",
            "submission/cap-2",
            "submission/cap-3",
            "submission/cap-4"
        ]
    );
}
