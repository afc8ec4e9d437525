use crate::api::auth;
use gloo_storage::{LocalStorage, Storage};
use log::error;
use shared::User;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PartialEq for AuthState {
    fn eq(&self, other: &Self) -> bool {
        self.loading == other.loading
            && self.error == other.error
            && match (&self.user, &other.user) {
                (Some(a), Some(b)) => a.id == b.id,
                (None, None) => true,
                _ => false,
            }
    }
}

impl AuthState {
    /// Identifier of the signed-in user, if any.
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}

#[derive(Clone, Debug)]
pub enum AuthAction {
    SetLoading(bool),
    LoginSuccess(User),
    LoginError(String),
    Logout,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SetLoading(loading) => Rc::new(Self {
                loading,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::LoginSuccess(user) => {
                // Persist the user so a reload keeps the session
                if let Err(e) = LocalStorage::set("user", &user) {
                    error!("Failed to store user in local storage: {}", e);
                }
                Rc::new(Self {
                    user: Some(user),
                    loading: false,
                    error: None,
                })
            }
            AuthAction::LoginError(message) => Rc::new(Self {
                user: None,
                loading: false,
                error: Some(message),
            }),
            AuthAction::Logout => {
                LocalStorage::delete("user");
                Rc::new(Self {
                    user: None,
                    loading: false,
                    error: None,
                })
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub login: Callback<String>,
    pub logout: Callback<()>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    // Try to load the user from local storage
    let user = LocalStorage::get("user").ok();
    let auth = use_reducer_eq(move || AuthState {
        user,
        ..Default::default()
    });

    let login = {
        let auth = auth.clone();
        Callback::from(move |handle: String| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::SetLoading(true));

                match auth::login(&handle).await {
                    Ok(user) => auth.dispatch(AuthAction::LoginSuccess(user)),
                    Err(e) => auth.dispatch(AuthAction::LoginError(e)),
                }
            });
        })
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            let auth = auth.clone();
            spawn_local(async move {
                if let Err(e) = auth::logout().await {
                    error!("Logout call failed: {}", e);
                }
                // Local session state is cleared regardless.
                auth.dispatch(AuthAction::Logout);
            });
        })
    };

    let context = AuthContext {
        state: (*auth).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
