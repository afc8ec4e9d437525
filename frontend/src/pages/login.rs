use crate::auth::AuthContext;
use crate::Route;
use log::debug;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();
    let handle = use_state(String::new);

    // Already signed in: go straight to the challenge list
    {
        let signed_in = auth.state.user.is_some();
        let navigator = navigator.clone();
        use_effect_with(signed_in, move |signed_in| {
            if *signed_in {
                navigator.push(&Route::Challenges);
            }
            || ()
        });
    }

    let on_handle_input = {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_submit = {
        let handle = handle.clone();
        let login = auth.login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let handle = handle.trim().to_string();
            if handle.is_empty() {
                return;
            }
            debug!("Signing in as: {}", handle);
            login.emit(handle);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="bg-white shadow rounded-lg p-8 w-full max-w-md">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Sign in"}</h1>
                if let Some(error) = &auth.state.error {
                    <div class="bg-red-50 border border-red-200 rounded-md p-3 mb-4">
                        <p class="text-sm text-red-700">{error}</p>
                    </div>
                }
                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label for="handle" class="block text-sm font-medium text-gray-700">{"Handle"}</label>
                        <input
                            id="handle"
                            type="text"
                            value={(*handle).clone()}
                            oninput={on_handle_input}
                            placeholder="ada"
                            class="mt-1 w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-purple-500 focus:border-purple-500"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={auth.state.loading}
                        class="w-full px-4 py-2 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-purple-600 hover:bg-purple-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-purple-500 disabled:opacity-50"
                    >
                        {if auth.state.loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
