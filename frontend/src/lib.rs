use crate::auth::AuthProvider;
use crate::components::common_toast::ToastProvider;
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod api;
pub mod auth;
pub mod components;
pub mod data;
pub mod solution_form;
pub mod pages {
    pub mod challenge_details;
    pub mod challenges;
    pub mod home;
    pub mod login;
    pub mod not_found;
}

use pages::{
    challenge_details::ChallengeDetails, challenges::Challenges, home::Home, login::Login,
    not_found::NotFound,
};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/challenges")]
    Challenges,
    #[at("/challenge/:challenge_id")]
    ChallengeDetails { challenge_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <AuthProvider>
                <BrowserRouter>
                    <div class="app-container">
                        <Nav />
                        <main class="flex-1">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                    </div>
                </BrowserRouter>
            </AuthProvider>
        </ToastProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => {
            debug!("Rendering Home component");
            html! { <Home /> }
        }
        Route::Login => {
            debug!("Rendering Login component");
            html! { <Login /> }
        }
        Route::Challenges => {
            debug!("Rendering Challenges component");
            html! { <Challenges /> }
        }
        Route::ChallengeDetails { challenge_id } => {
            debug!(
                "Rendering Challenge details component with challenge_id: {}",
                challenge_id
            );
            html! { <ChallengeDetails challenge_id={challenge_id} /> }
        }
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    info!("Initializing application...");

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();
    info!("Panic hook set");

    // Mount the app
    info!("Mounting application to #app");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
