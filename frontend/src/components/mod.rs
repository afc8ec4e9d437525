pub mod challenge {
    pub mod challenge_info;
    pub mod community_solutions;
    pub mod difficulty_badge;
    pub mod solution_form;
    pub mod submission_status;
}
pub mod common_toast;
pub mod footer;
pub mod nav;
