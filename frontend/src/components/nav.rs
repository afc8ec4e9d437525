use crate::auth::AuthContext;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    let on_logout = {
        let logout = auth.logout.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            navigator.push(&Route::Home);
        })
    };

    html! {
        <nav class="bg-white shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16 items-center">
                    <div class="flex items-center space-x-8">
                        <Link<Route> to={Route::Home} classes="text-xl font-bold text-purple-700">
                            {"DevForge"}
                        </Link<Route>>
                        <Link<Route> to={Route::Challenges} classes="text-sm font-medium text-gray-600 hover:text-gray-900">
                            {"Challenges"}
                        </Link<Route>>
                    </div>
                    <div class="flex items-center space-x-4">
                        if let Some(user) = &auth.state.user {
                            <span class="text-sm text-gray-600">{format!("@{}", user.handle)}</span>
                            <button
                                onclick={on_logout}
                                class="text-sm font-medium text-gray-600 hover:text-gray-900"
                            >
                                {"Sign out"}
                            </button>
                        } else {
                            <Link<Route> to={Route::Login} classes="text-sm font-medium text-purple-700 hover:text-purple-900">
                                {"Sign in"}
                            </Link<Route>>
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}
