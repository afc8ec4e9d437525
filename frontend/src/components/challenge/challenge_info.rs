use crate::components::challenge::difficulty_badge::DifficultyBadge;
use shared::Challenge;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ChallengeInfoProps {
    pub challenge: Challenge,
    pub approved_count: usize,
}

/// Sidebar summary card for a challenge.
#[function_component(ChallengeInfo)]
pub fn challenge_info(props: &ChallengeInfoProps) -> Html {
    let challenge = &props.challenge;

    html! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-medium text-gray-900">{"Challenge Info"}</h2>
            <div class="flex justify-between items-center">
                <span class="text-gray-600">{"Difficulty:"}</span>
                <DifficultyBadge difficulty={challenge.difficulty.clone()} />
            </div>
            <div class="flex justify-between">
                <span class="text-gray-600">{"XP Reward:"}</span>
                <span class="font-medium text-purple-600">{format!("{} XP", challenge.xp_reward)}</span>
            </div>
            <div class="flex justify-between">
                <span class="text-gray-600">{"Created:"}</span>
                <span>{challenge.created_at.format("%b %e, %Y").to_string()}</span>
            </div>
            <div class="flex justify-between">
                <span class="text-gray-600">{"Submissions:"}</span>
                <span>{format!("{} approved", props.approved_count)}</span>
            </div>
        </div>
    }
}
