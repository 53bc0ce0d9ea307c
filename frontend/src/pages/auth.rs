use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::components::auth::{LoginForm, RegisterForm};
use crate::session::use_session;
use crate::{styles, Route};

#[derive(Clone, PartialEq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: AuthMode,
}

#[function_component(Auth)]
pub fn auth(props: &Props) -> Html {
    let navigator = use_navigator().expect("Navigator not available");
    let session = use_session();

    let on_success = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::Home);
        })
    };

    if session.logged_in() {
        navigator.push(&Route::Home);
        return html! {};
    }

    html! {
        <Base>
            <div class="flex flex-col items-center justify-center min-h-[calc(100vh-64px)]">
                <div class={styles::AUTH_CARD}>
                    {
                        match props.mode {
                            AuthMode::Login => html! {
                                <>
                                    <LoginForm on_success={on_success} />
                                    <div class="mt-8 text-center">
                                        <p class="text-sm text-slate-400">
                                            {"New here? "}
                                            <Link<Route> to={Route::Register} classes={styles::LINK}>
                                                {"Create an account"}
                                            </Link<Route>>
                                        </p>
                                    </div>
                                </>
                            },
                            AuthMode::Register => html! {
                                <>
                                    <RegisterForm on_success={on_success} />
                                    <div class="mt-8 text-center">
                                        <p class="text-sm text-slate-400">
                                            {"Already have an account? "}
                                            <Link<Route> to={Route::Login} classes={styles::LINK}>
                                                {"Sign in"}
                                            </Link<Route>>
                                        </p>
                                    </div>
                                </>
                            },
                        }
                    }
                </div>
            </div>
        </Base>
    }
}
