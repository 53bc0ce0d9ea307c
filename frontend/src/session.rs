use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::models::User;

const TOKEN_KEY: &str = "token";

/// Process-wide session state: the bearer token and the profile it resolves
/// to. Mounted once at the application root and injected into components via
/// context, so nothing reaches for it as an ambient global.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

pub enum SessionAction {
    SignedIn(String),
    UserLoaded(User),
    SignedOut,
}

impl Session {
    /// Initial state: pick up a token persisted by a previous visit. The
    /// profile is hydrated asynchronously by the provider.
    fn load() -> Self {
        Self { token: stored_token(), user: None }
    }

    pub fn logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn balance(&self) -> Option<f64> {
        self.user.as_ref().map(|user| user.balance)
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        match action {
            SessionAction::SignedIn(token) => {
                persist_token(&token);
                Rc::new(Session { token: Some(token), user: None })
            }
            SessionAction::UserLoaded(user) => Rc::new(Session {
                token: self.token.clone(),
                user: Some(user),
            }),
            SessionAction::SignedOut => {
                clear_stored_token();
                Rc::new(Session { token: None, user: None })
            }
        }
    }
}

pub type SessionHandle = UseReducerHandle<Session>;

pub fn stored_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
}

fn persist_token(token: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn clear_stored_token() {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Re-reads the profile (balance included) and pushes it into the context.
/// An expired token signs the session out instead of leaving a stale user.
pub async fn refresh_user(session: &SessionHandle) {
    match api::get_json::<User>("/user/me").await {
        Ok(user) => session.dispatch(SessionAction::UserLoaded(user)),
        Err(ApiError::Unauthorized) => session.dispatch(SessionAction::SignedOut),
        Err(err) => log::warn!("profile refresh failed: {err}"),
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("session context not mounted")
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(Session::load);

    // hydrate the profile whenever a token appears (page load, fresh login)
    {
        let session = session.clone();
        use_effect_with(session.token.clone(), move |token| {
            if token.is_some() {
                spawn_local(async move {
                    refresh_user(&session).await;
                });
            }
            || ()
        });
    }

    html! {
        <ContextProvider<SessionHandle> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}
