use shared::constants::{INVALID_EMAIL_ERROR, INVALID_PASSWORD_ERROR, INVALID_PSEUDO_ERROR};
use shared::validation::{validate_email, validate_password, validate_pseudo};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::api;
use crate::session::{use_session, SessionAction};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub on_success: Callback<()>,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let error = use_state(String::new);
    let loading = use_state(|| false);
    let pseudo_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let session = use_session();

    let handle_submit = {
        let error = error.clone();
        let loading = loading.clone();
        let pseudo_ref = pseudo_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let session = session.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *loading {
                return;
            }
            error.set(String::new());

            let pseudo_value = match pseudo_ref.cast::<HtmlInputElement>() {
                Some(input) => input.value(),
                None => return,
            };
            let email_value = match email_ref.cast::<HtmlInputElement>() {
                Some(input) => input.value(),
                None => return,
            };
            let password_value = match password_ref.cast::<HtmlInputElement>() {
                Some(input) => input.value(),
                None => return,
            };

            if validate_pseudo(&pseudo_value).is_err() {
                error.set(INVALID_PSEUDO_ERROR.to_string());
                return;
            }
            if validate_email(&email_value).is_err() {
                error.set(INVALID_EMAIL_ERROR.to_string());
                return;
            }
            if validate_password(&password_value).is_err() {
                error.set(INVALID_PASSWORD_ERROR.to_string());
                return;
            }

            loading.set(true);

            let error = error.clone();
            let loading = loading.clone();
            let session = session.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                let result = async {
                    api::register(&pseudo_value, &email_value, &password_value).await?;
                    // accounts are usable right away, so log the new user in
                    api::login(&email_value, &password_value).await
                }
                .await;

                match result {
                    Ok(token) => {
                        session.dispatch(SessionAction::SignedIn(token));
                        on_success.emit(());
                    }
                    Err(err) => error.set(err.to_string()),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <form onsubmit={handle_submit} class="space-y-5">
            <h2 class="text-4xl font-black text-center mb-8 tracking-tight text-white">{"Create account"}</h2>
            <input
                ref={pseudo_ref}
                type="text"
                placeholder="Pseudo"
                required={true}
                class={styles::INPUT}
            />
            <input
                ref={email_ref}
                type="email"
                placeholder="Email"
                required={true}
                class={styles::INPUT}
            />
            <input
                ref={password_ref}
                type="password"
                placeholder="Password"
                required={true}
                class={styles::INPUT}
            />
            if !(*error).is_empty() {
                <div class={styles::ALERT_ERROR}>{(*error).clone()}</div>
            }
            <button type="submit" disabled={*loading} class={styles::AUTH_BUTTON}>
                {if *loading { "Creating..." } else { "Join" }}
            </button>
        </form>
    }
}
