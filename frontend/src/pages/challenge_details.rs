use crate::auth::AuthContext;
use crate::components::challenge::challenge_info::ChallengeInfo;
use crate::components::challenge::community_solutions::CommunitySolutions;
use crate::components::challenge::difficulty_badge::DifficultyBadge;
use crate::components::challenge::solution_form::SolutionForm;
use crate::components::challenge::submission_status::SubmissionStatusCard;
use crate::data::{MOCK_CHALLENGES, MOCK_SUBMISSIONS};
use crate::Route;
use shared::selectors::{approved_submissions, challenge_by_id, user_submission};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ChallengeDetailsProps {
    pub challenge_id: String,
}

#[function_component(ChallengeDetails)]
pub fn challenge_details(props: &ChallengeDetailsProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    let challenge = challenge_by_id(&MOCK_CHALLENGES, &props.challenge_id).cloned();
    let viewer_submission = user_submission(
        &MOCK_SUBMISSIONS,
        &props.challenge_id,
        auth.state.user_id(),
    )
    .cloned();
    let approved: Vec<_> = approved_submissions(&MOCK_SUBMISSIONS, &props.challenge_id)
        .into_iter()
        .cloned()
        .collect();

    // Unknown id is a navigation decision, not an error: bounce to the list.
    {
        let not_found = challenge.is_none();
        let challenge_id = props.challenge_id.clone();
        let navigator = navigator.clone();
        use_effect_with(not_found, move |not_found| {
            if *not_found {
                log::warn!(
                    "Challenge {} not found, redirecting to challenge list",
                    challenge_id
                );
                navigator.push(&Route::Challenges);
            }
            || ()
        });
    }

    let Some(challenge) = challenge else {
        return html! {};
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                // Challenge header
                <div class="bg-white shadow rounded-lg overflow-hidden mb-8">
                    <div class="relative">
                        <img
                            src={challenge.image_url.clone()}
                            alt={challenge.title.clone()}
                            class="w-full h-64 object-cover"
                        />
                        <div class="absolute inset-0 bg-black/40 flex items-end">
                            <div class="p-6 text-white">
                                <div class="flex items-center space-x-3 mb-2">
                                    <DifficultyBadge difficulty={challenge.difficulty.clone()} />
                                    <div class="flex items-center space-x-1">
                                        <svg class="w-4 h-4 text-yellow-400" fill="currentColor" viewBox="0 0 20 20">
                                            <path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z" />
                                        </svg>
                                        <span class="font-medium">{format!("{} XP", challenge.xp_reward)}</span>
                                    </div>
                                </div>
                                <h1 class="text-3xl font-bold">{&challenge.title}</h1>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="grid lg:grid-cols-3 gap-8">
                    // Main content
                    <div class="lg:col-span-2 space-y-6">
                        // Description
                        <div class="bg-white shadow rounded-lg p-6">
                            <h2 class="text-lg font-medium text-gray-900 mb-4">{"Challenge Description"}</h2>
                            <p class="text-gray-700 leading-relaxed mb-6">{&challenge.description}</p>

                            <h3 class="font-semibold text-gray-900 mb-3">{"Requirements:"}</h3>
                            <ul class="space-y-2">
                                {for challenge.requirements.iter().map(|requirement| {
                                    html! {
                                        <li class="flex items-start space-x-2">
                                            <svg class="w-5 h-5 text-green-600 mt-0.5 flex-shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" />
                                            </svg>
                                            <span class="text-gray-700">{requirement}</span>
                                        </li>
                                    }
                                })}
                            </ul>
                        </div>

                        // Exactly one of the two panels: the viewer either
                        // has a submission for this challenge or they don't.
                        if let Some(submission) = viewer_submission {
                            <SubmissionStatusCard submission={submission} />
                        } else {
                            <SolutionForm challenge_id={props.challenge_id.clone()} />
                        }
                    </div>

                    // Sidebar
                    <div class="space-y-6">
                        <ChallengeInfo challenge={challenge.clone()} approved_count={approved.len()} />
                        <CommunitySolutions approved={approved} />
                    </div>
                </div>
            </div>
        </div>
    }
}
