use shared::Submission;
use yew::prelude::*;

/// Cap on the approved submissions shown in the sidebar.
pub const COMMUNITY_SOLUTIONS_LIMIT: usize = 5;

#[derive(Properties, Clone, PartialEq)]
pub struct CommunitySolutionsProps {
    pub approved: Vec<Submission>,
}

/// Sidebar card with the first few approved community solutions.
/// Rendered only when at least one approved submission exists.
#[function_component(CommunitySolutions)]
pub fn community_solutions(props: &CommunitySolutionsProps) -> Html {
    if props.approved.is_empty() {
        return html! {};
    }

    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <h2 class="text-lg font-medium text-gray-900">{"Community Solutions"}</h2>
            <p class="text-sm text-gray-500 mb-4">{"Approved submissions from other developers"}</p>
            <div class="space-y-3">
                {for props.approved.iter().take(COMMUNITY_SOLUTIONS_LIMIT).map(|submission| {
                    html! {
                        <div key={submission.id.clone()} class="flex items-center justify-between p-3 bg-gray-50 rounded-lg">
                            <div class="flex items-center space-x-2">
                                <svg class="w-4 h-4 text-gray-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z" />
                                </svg>
                                <span class="text-sm font-medium">{"User Solution"}</span>
                            </div>
                            <a
                                href={submission.solution_url.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-gray-500 hover:text-gray-700"
                            >
                                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14" />
                                </svg>
                            </a>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
