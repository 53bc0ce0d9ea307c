use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::{use_session, SessionAction};
use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

/// Navigation chrome shared by every page: brand, balance badge, nav links
/// and the logout affordance.
#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let navigator = use_navigator().expect("Navigator not available");
    let session = use_session();

    let handle_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            session.dispatch(SessionAction::SignedOut);
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class={styles::SHELL}>
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>{"CaseVault"}</Link<Route>>
                    <div class={styles::NAV_ITEMS}>
                        if session.logged_in() {
                            if let Some(balance) = session.balance() {
                                <span class={styles::NAV_BALANCE}>{format!("{balance:.2} €")}</span>
                            }
                            <Link<Route> to={Route::Home} classes={styles::NAV_LINK}>{"Cases"}</Link<Route>>
                            <Link<Route> to={Route::Inventory} classes={styles::NAV_LINK}>{"Inventory"}</Link<Route>>
                            if let Some(user) = &session.user {
                                <span class="text-sm font-medium text-gray-400">{&user.pseudo}</span>
                            }
                            <button onclick={handle_logout} class={styles::NAV_LINK}>{"Logout"}</button>
                        } else {
                            <Link<Route> to={Route::Login} classes={styles::NAV_LINK}>{"Login"}</Link<Route>>
                            <Link<Route> to={Route::Register} classes={styles::NAV_LINK}>{"Register"}</Link<Route>>
                        }
                    </div>
                </div>
            </nav>
            <main class="flex-grow overflow-y-auto pt-16">{props.children.clone()}</main>
        </div>
    }
}
