use shared::{Submission, SubmissionStatus};
use yew::prelude::*;

/// Badge styling keyed by moderation status: approved gets the default
/// (dark) badge, pending the secondary one, rejected the destructive one.
fn status_classes(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Approved => "bg-gray-900 text-white",
        SubmissionStatus::Pending => "bg-gray-100 text-gray-800",
        SubmissionStatus::Rejected => "bg-red-100 text-red-800",
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SubmissionStatusProps {
    pub submission: Submission,
}

/// The viewer's own submission for this challenge: status, link, feedback.
#[function_component(SubmissionStatusCard)]
pub fn submission_status_card(props: &SubmissionStatusProps) -> Html {
    let submission = &props.submission;

    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <h2 class="text-lg font-medium text-gray-900 flex items-center space-x-2">
                if submission.status == SubmissionStatus::Approved {
                    <svg class="w-5 h-5 text-green-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" />
                    </svg>
                } else {
                    <svg class="w-5 h-5 text-yellow-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z" />
                    </svg>
                }
                <span>{"Your Submission"}</span>
            </h2>
            <p class="text-sm text-gray-500 mb-4">
                {format!("Submitted on {}", submission.submitted_at.format("%b %e, %Y"))}
            </p>
            <div class="space-y-4">
                <div class="flex items-center justify-between">
                    <span class="font-medium">{"Status:"}</span>
                    <span class={classes!(
                        "inline-flex", "items-center", "px-2.5", "py-0.5", "rounded-full", "text-xs", "font-medium",
                        status_classes(submission.status)
                    )}>
                        {submission.status.to_string()}
                    </span>
                </div>
                <div class="flex items-center justify-between">
                    <span class="font-medium">{"Solution URL:"}</span>
                    <a
                        href={submission.solution_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center px-3 py-1 border border-gray-300 rounded-md text-sm text-gray-700 bg-white hover:bg-gray-50"
                    >
                        <svg class="w-4 h-4 mr-1" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14" />
                        </svg>
                        {"View"}
                    </a>
                </div>
                if let Some(feedback) = &submission.feedback {
                    <div>
                        <span class="font-medium">{"Feedback:"}</span>
                        <p class="text-gray-700 mt-1 p-3 bg-gray-50 rounded-lg">{feedback}</p>
                    </div>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge_mapping() {
        assert!(status_classes(SubmissionStatus::Approved).contains("bg-gray-900"));
        assert!(status_classes(SubmissionStatus::Pending).contains("bg-gray-100"));
        assert!(status_classes(SubmissionStatus::Rejected).contains("red"));
    }
}
