pub mod api;
pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod session;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    auth::{Auth, AuthMode},
    case_opener::CaseOpenerPage,
    home::Home,
    inventory::Inventory,
};
use crate::session::SessionProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/case/:id")]
    Case { id: u64 },
    #[at("/inventory")]
    Inventory,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <div class="min-h-screen w-full">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </SessionProvider>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Auth mode={AuthMode::Login} /> },
        Route::Register => html! { <Auth mode={AuthMode::Register} /> },
        Route::Case { id } => html! { <CaseOpenerPage {id} /> },
        Route::Inventory => html! { <Inventory /> },
    }
}
