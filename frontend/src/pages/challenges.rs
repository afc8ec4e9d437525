use crate::api::challenges::list_challenges;
use crate::components::challenge::difficulty_badge::DifficultyBadge;
use crate::Route;
use shared::Challenge;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Challenges)]
pub fn challenges() -> Html {
    let navigator = use_navigator().unwrap();

    let challenges = use_state(|| None::<Vec<Challenge>>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let challenges = challenges.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match list_challenges().await {
                    Ok(data) => {
                        challenges.set(Some(data));
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("Failed to load challenges: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        });
    }

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">{"Challenges"}</h1>
                <p class="text-gray-600 mb-8">{"Pick a challenge, build it, submit your solution for review."}</p>

                if *loading {
                    <div class="text-center py-12">
                        <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-purple-600"></div>
                        <p class="mt-2 text-gray-600">{"Loading challenges..."}</p>
                    </div>
                } else if let Some(error_msg) = &*error {
                    <div class="bg-red-50 border border-red-200 rounded-md p-4">
                        <h3 class="text-sm font-medium text-red-800">{"Error"}</h3>
                        <p class="mt-2 text-sm text-red-700">{error_msg}</p>
                    </div>
                } else if let Some(challenge_list) = &*challenges {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {for challenge_list.iter().map(|challenge| {
                            let challenge_id = challenge.id.clone();
                            let navigator = navigator.clone();
                            html! {
                                <div
                                    key={challenge.id.clone()}
                                    class="bg-white shadow rounded-lg overflow-hidden cursor-pointer hover:shadow-md transition-shadow"
                                    onclick={Callback::from(move |_| {
                                        navigator.push(&Route::ChallengeDetails { challenge_id: challenge_id.clone() });
                                    })}
                                >
                                    <img
                                        src={challenge.image_url.clone()}
                                        alt={challenge.title.clone()}
                                        class="w-full h-40 object-cover"
                                    />
                                    <div class="p-4 space-y-2">
                                        <div class="flex items-center justify-between">
                                            <DifficultyBadge difficulty={challenge.difficulty.clone()} />
                                            <span class="text-sm font-medium text-purple-600">{format!("{} XP", challenge.xp_reward)}</span>
                                        </div>
                                        <h2 class="text-lg font-medium text-gray-900">{&challenge.title}</h2>
                                        <p class="text-sm text-gray-500 line-clamp-2">{&challenge.description}</p>
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                }
            </div>
        </div>
    }
}
