use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-white border-t border-gray-200 mt-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <p class="text-sm text-gray-500 text-center">
                    {"DevForge: build, submit, get reviewed."}
                </p>
            </div>
        </footer>
    }
}
