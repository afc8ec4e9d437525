use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator().unwrap();

    let on_home = Callback::from(move |_| {
        navigator.push(&Route::Home);
    });

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-5xl font-bold text-gray-900 mb-4">{"404"}</h1>
                <p class="text-gray-500 mb-6">{"The page you're looking for doesn't exist."}</p>
                <button
                    onclick={on_home}
                    class="inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-purple-600 hover:bg-purple-700"
                >
                    {"Back Home"}
                </button>
            </div>
        </div>
    }
}
