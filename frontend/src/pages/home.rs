use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator().unwrap();

    let on_browse = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::Challenges);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-24 text-center">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">{"Sharpen your skills on real challenges"}</h1>
                <p class="text-lg text-gray-600 mb-8">
                    {"Build a solution, submit the live URL, and get it reviewed by the community."}
                </p>
                <button
                    onclick={on_browse}
                    class="inline-flex items-center px-6 py-3 border border-transparent text-base font-medium rounded-md shadow-sm text-white bg-purple-600 hover:bg-purple-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-purple-500"
                >
                    {"Browse Challenges"}
                </button>
            </div>
        </div>
    }
}
