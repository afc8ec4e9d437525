//! Mock collections standing in for the platform backend.
//!
//! The detail and listing views only ever read these; the simulated submit
//! call deliberately does not write back (see `api::submissions`).

use chrono::{TimeZone, Utc};
use lazy_static::lazy_static;
use shared::{Challenge, Difficulty, Submission, SubmissionStatus, User};

lazy_static! {
    pub static ref MOCK_USERS: Vec<User> = vec![
        User {
            id: "user/ada".to_string(),
            handle: "ada".to_string(),
            email: "ada@example.com".to_string(),
        },
        User {
            id: "user/grace".to_string(),
            handle: "grace".to_string(),
            email: "grace@example.com".to_string(),
        },
        User {
            id: "user/linus".to_string(),
            handle: "linus".to_string(),
            email: "linus@example.com".to_string(),
        },
    ];

    pub static ref MOCK_CHALLENGES: Vec<Challenge> = vec![
        Challenge {
            id: "challenge/landing-page".to_string(),
            title: "Responsive Landing Page".to_string(),
            description: "Recreate the provided marketing mockup as a responsive landing \
                          page. The layout should adapt gracefully from mobile to desktop \
                          and the hero call-to-action must stay above the fold."
                .to_string(),
            requirements: vec![
                "Mobile-first layout that works down to 320px".to_string(),
                "Accessible navigation with keyboard support".to_string(),
                "Hero call-to-action visible without scrolling".to_string(),
                "Lighthouse performance score of 90 or better".to_string(),
            ],
            image_url: "https://images.example.com/challenges/landing-page.jpg".to_string(),
            difficulty: Difficulty::Beginner,
            xp_reward: 100,
            created_at: Utc.with_ymd_and_hms(2024, 1, 12, 9, 0, 0).unwrap(),
        },
        Challenge {
            id: "challenge/kanban-board".to_string(),
            title: "Drag-and-Drop Kanban Board".to_string(),
            description: "Build a kanban board with draggable cards across three columns. \
                          Board state should survive a page reload."
                .to_string(),
            requirements: vec![
                "Cards can be dragged between columns".to_string(),
                "Board state persists across reloads".to_string(),
                "New cards can be added and deleted".to_string(),
            ],
            image_url: "https://images.example.com/challenges/kanban.jpg".to_string(),
            difficulty: Difficulty::Intermediate,
            xp_reward: 250,
            created_at: Utc.with_ymd_and_hms(2024, 2, 3, 14, 30, 0).unwrap(),
        },
        Challenge {
            id: "challenge/collab-editor".to_string(),
            title: "Real-Time Collaborative Editor".to_string(),
            description: "Implement a plain-text editor that two browser tabs can edit \
                          concurrently with conflict-free merging."
                .to_string(),
            requirements: vec![
                "Edits from two tabs converge to the same document".to_string(),
                "Remote cursors are rendered live".to_string(),
                "Offline edits reconcile on reconnect".to_string(),
            ],
            image_url: "https://images.example.com/challenges/editor.jpg".to_string(),
            difficulty: Difficulty::Expert,
            xp_reward: 600,
            created_at: Utc.with_ymd_and_hms(2024, 3, 21, 11, 15, 0).unwrap(),
        },
    ];

    pub static ref MOCK_SUBMISSIONS: Vec<Submission> = vec![
        Submission {
            id: "submission/1".to_string(),
            challenge_id: "challenge/landing-page".to_string(),
            user_id: "user/grace".to_string(),
            solution_url: "https://solutions.example.com/grace/landing".to_string(),
            status: SubmissionStatus::Approved,
            feedback: Some("Clean markup and great use of CSS grid.".to_string()),
            submitted_at: Utc.with_ymd_and_hms(2024, 1, 20, 16, 45, 0).unwrap(),
        },
        Submission {
            id: "submission/2".to_string(),
            challenge_id: "challenge/landing-page".to_string(),
            user_id: "user/linus".to_string(),
            solution_url: "https://solutions.example.com/linus/landing".to_string(),
            status: SubmissionStatus::Approved,
            feedback: None,
            submitted_at: Utc.with_ymd_and_hms(2024, 1, 22, 10, 5, 0).unwrap(),
        },
        Submission {
            id: "submission/3".to_string(),
            challenge_id: "challenge/kanban-board".to_string(),
            user_id: "user/ada".to_string(),
            solution_url: "https://solutions.example.com/ada/kanban".to_string(),
            status: SubmissionStatus::Pending,
            feedback: None,
            submitted_at: Utc.with_ymd_and_hms(2024, 2, 14, 19, 20, 0).unwrap(),
        },
        Submission {
            id: "submission/4".to_string(),
            challenge_id: "challenge/collab-editor".to_string(),
            user_id: "user/grace".to_string(),
            solution_url: "https://solutions.example.com/grace/editor".to_string(),
            status: SubmissionStatus::Rejected,
            feedback: Some("Two tabs diverge after concurrent deletes, see requirement 1.".to_string()),
            submitted_at: Utc.with_ymd_and_hms(2024, 4, 2, 8, 0, 0).unwrap(),
        },
    ];
}
