use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::base::Base;
use crate::hooks::auth_state::use_auth_check;
use crate::models::{CaseSummary, Collection};
use crate::{styles, Route};

#[derive(Properties, PartialEq)]
struct CaseCardProps {
    case: CaseSummary,
}

#[function_component(CaseCard)]
fn case_card(props: &CaseCardProps) -> Html {
    let navigator = use_navigator().expect("Navigator not available");
    let case = &props.case;

    let image_url = case.image_url.clone().unwrap_or_else(|| {
        format!(
            "https://placehold.co/200x200/333/FFF?text={}",
            case.name.replace(' ', "+")
        )
    });

    let onclick = {
        let navigator = navigator.clone();
        let id = case.id;
        Callback::from(move |_| navigator.push(&Route::Case { id }))
    };

    html! {
        <div class={styles::CARD_HOVER} {onclick}>
            <img src={image_url} alt={case.name.clone()} class="w-full h-48 object-cover" />
            <div class="p-4">
                <h3 class="text-lg font-semibold text-white truncate">{&case.name}</h3>
                <p class="text-yellow-400 font-bold text-xl mt-2">{format!("{:.2} €", case.price)}</p>
                if let Some(tier) = &case.required_tier {
                    <span class="text-xs text-purple-400 uppercase tracking-widest">{tier}</span>
                }
            </div>
        </div>
    }
}

/// The landing page: every openable case, one authenticated collection read.
#[function_component(Home)]
pub fn home() -> Html {
    use_auth_check();

    let cases = use_state(Vec::<CaseSummary>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let cases = cases.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::get_json::<Collection<CaseSummary>>("/cases").await {
                    Ok(collection) => cases.set(collection.member),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <Base>
            if *loading {
                <div class="flex-grow flex items-center justify-center min-h-[50vh]">
                    <div class={styles::LOADING_SPINNER}></div>
                </div>
            } else if let Some(err) = &*error {
                <div class={styles::CONTAINER}>
                    <div class={styles::ALERT_ERROR}>{err}</div>
                </div>
            } else {
                <div class={styles::CONTAINER}>
                    <h1 class={classes!(styles::TEXT_H1, "mb-6")}>{"Pick a case"}</h1>
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 gap-6">
                        { for cases.iter().map(|case| html! {
                            <CaseCard key={case.id} case={case.clone()} />
                        }) }
                    </div>
                </div>
            }
        </Base>
    }
}
