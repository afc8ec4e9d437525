use crate::api::submissions::submit_solution;
use crate::auth::AuthContext;
use crate::components::common_toast::{Toast, ToastContext};
use crate::solution_form::{validate_solution_url, SolutionFormAction, SolutionFormState};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SolutionFormProps {
    pub challenge_id: String,
}

/// The submit-your-solution panel, shown when the viewer has no submission
/// yet for this challenge.
#[function_component(SolutionForm)]
pub fn solution_form(props: &SolutionFormProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let form = use_reducer(SolutionFormState::default);

    let on_url_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(SolutionFormAction::UrlChanged(input.value()));
        })
    };

    let on_submit = {
        let form = form.clone();
        let toast_context = toast_context.clone();
        let challenge_id = props.challenge_id.clone();
        let user_id = auth.state.user_id().map(str::to_string);

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // The button is disabled while in flight, belt and braces here.
            if form.is_submitting() {
                return;
            }

            let solution_url = match validate_solution_url(&form.solution_url) {
                Ok(url) => url,
                Err(error) => {
                    toast_context.add_toast.emit(
                        Toast::new(error.title())
                            .with_description(error.description())
                            .destructive(),
                    );
                    return;
                }
            };

            form.dispatch(SolutionFormAction::SubmitStarted);

            let form = form.clone();
            let toast_context = toast_context.clone();
            let challenge_id = challenge_id.clone();
            let user_id = user_id.clone();

            spawn_local(async move {
                match submit_solution(&challenge_id, user_id.as_deref(), &solution_url).await {
                    Ok(submission) => {
                        log::info!("Solution submitted for review: {}", submission.id);
                        toast_context.add_toast.emit(
                            Toast::new("Solution submitted!").with_description(
                                "Your solution has been submitted for review. \
                                 You'll be notified once it's reviewed.",
                            ),
                        );
                        form.dispatch(SolutionFormAction::SubmitSucceeded);
                    }
                    Err(e) => {
                        log::error!("Failed to submit solution: {}", e);
                        toast_context.add_toast.emit(
                            Toast::new("Submission failed")
                                .with_description(e.clone())
                                .destructive(),
                        );
                        form.dispatch(SolutionFormAction::SubmitFailed(e));
                    }
                }
            });
        })
    };

    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <h2 class="text-lg font-medium text-gray-900">{"Submit Your Solution"}</h2>
            <p class="text-sm text-gray-500 mb-4">{"Share the URL of your completed solution"}</p>
            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label for="solution-url" class="block text-sm font-medium text-gray-700">
                        {"Solution URL"}
                    </label>
                    <input
                        id="solution-url"
                        type="url"
                        value={form.solution_url.clone()}
                        oninput={on_url_input}
                        placeholder="https://your-solution.com"
                        required={true}
                        class="mt-1 w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-purple-500 focus:border-purple-500"
                    />
                    <p class="text-sm text-gray-500 mt-1">
                        {"Provide a live URL where your solution can be viewed and tested"}
                    </p>
                </div>
                <button
                    type="submit"
                    disabled={form.is_submitting()}
                    class="w-full inline-flex justify-center items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-purple-600 hover:bg-purple-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-purple-500 disabled:opacity-50"
                >
                    if form.is_submitting() {
                        <span class="inline-block animate-spin rounded-full h-4 w-4 border-b-2 border-white mr-2"></span>
                        {"Submitting..."}
                    } else {
                        <svg class="w-4 h-4 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 19l9 2-9-18-9 18 9-2zm0 0v-8" />
                        </svg>
                        {"Submit Solution"}
                    }
                </button>
            </form>
        </div>
    }
}
