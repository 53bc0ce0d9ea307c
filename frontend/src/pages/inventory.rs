use shared::shared_case_game::InventoryItem;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::api;
use crate::base::Base;
use crate::components::{rarity_style, ConfirmModal};
use crate::config::get_asset_url;
use crate::hooks::auth_state::use_auth_check;
use crate::session::{self, use_session};
use crate::styles;

/// A sale the user has asked for but not yet confirmed.
#[derive(Clone, PartialEq)]
enum SellRequest {
    One(InventoryItem),
    All,
}

#[derive(Properties, PartialEq)]
struct InventoryCardProps {
    entry: InventoryItem,
    selling: bool,
    on_sell: Callback<InventoryItem>,
}

#[function_component(InventoryCard)]
fn inventory_card(props: &InventoryCardProps) -> Html {
    let entry = &props.entry;
    let style = rarity_style(entry.item.rarity);

    let on_sell_click = {
        let on_sell = props.on_sell.clone();
        let entry = entry.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_sell.emit(entry.clone());
        })
    };

    html! {
        <div class="group relative bg-slate-800/40 rounded-xl overflow-hidden border border-white/5 transition-all duration-300 hover:scale-105 hover:border-white/20">
            <div class={classes!("absolute", "inset-0", "bg-gradient-to-b", "opacity-20", "group-hover:opacity-40", "transition-opacity", style.glow)}></div>
            <div class="p-4 relative z-10 flex flex-col h-full">
                <div class="flex justify-between items-start mb-2">
                    if entry.stat_trak {
                        <span class="text-[10px] font-black text-orange-500 tracking-widest uppercase border border-orange-500/30 px-1.5 py-0.5 rounded bg-orange-500/10">
                            {"StatTrak™"}
                        </span>
                    }
                    <span class="text-[10px] text-slate-500 font-mono ml-auto">{format!("{:.4}", entry.float)}</span>
                </div>
                <div class="flex-grow flex items-center justify-center py-4">
                    <img
                        src={get_asset_url(&entry.item.image_url)}
                        alt={entry.item.name.clone()}
                        class="max-h-28 max-w-full object-contain drop-shadow-lg"
                    />
                </div>
                <div class="mt-auto">
                    <p class={classes!("text-xs", "font-bold", "truncate", style.text)}>{entry.item.rarity.label()}</p>
                    <h3 class="text-sm font-medium text-white truncate mb-1">{&entry.item.name}</h3>
                    <p class="text-xs text-slate-400 mb-3">{&entry.wear_tier_name}</p>
                    <div class="flex items-center justify-between gap-2">
                        <span class="text-yellow-400 font-bold font-mono">{format!("{:.2} €", entry.calculated_price)}</span>
                        <button
                            onclick={on_sell_click}
                            disabled={props.selling}
                            class="bg-slate-700 hover:bg-green-600/80 text-white text-xs font-bold py-1.5 px-3 rounded transition-colors disabled:opacity-50"
                        >
                            {"Sell"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// The session user's items, with sell-one and sell-all behind a
/// confirmation step. Balance and item list refresh from the profile after
/// every sale; nothing is mutated optimistically.
#[function_component(Inventory)]
pub fn inventory() -> Html {
    use_auth_check();
    let session = use_session();

    let message = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let selling = use_state(|| false);
    let confirm = use_state(|| None::<SellRequest>);

    let Some(user) = session.user.clone() else {
        return html! {
            <Base>
                <div class="flex-grow flex items-center justify-center min-h-[50vh]">
                    <div class={styles::LOADING_SPINNER}></div>
                </div>
            </Base>
        };
    };

    let items = user.inventory_items;
    let total_value: f64 = items.iter().map(|entry| entry.calculated_price).sum();

    let request_sell_one = {
        let confirm = confirm.clone();
        let selling = selling.clone();
        Callback::from(move |entry: InventoryItem| {
            if *selling {
                return;
            }
            confirm.set(Some(SellRequest::One(entry)));
        })
    };

    let request_sell_all = {
        let confirm = confirm.clone();
        let selling = selling.clone();
        let empty = items.is_empty();
        Callback::from(move |_: MouseEvent| {
            if *selling || empty {
                return;
            }
            confirm.set(Some(SellRequest::All));
        })
    };

    let cancel_sell = {
        let confirm = confirm.clone();
        Callback::from(move |_: MouseEvent| confirm.set(None))
    };

    let execute_sell = {
        let confirm = confirm.clone();
        let selling = selling.clone();
        let message = message.clone();
        let error = error.clone();
        let session = session.clone();
        let count = items.len();

        Callback::from(move |_: MouseEvent| {
            let Some(request) = (*confirm).clone() else {
                return;
            };
            selling.set(true);
            message.set(None);
            error.set(None);

            let confirm = confirm.clone();
            let selling = selling.clone();
            let message = message.clone();
            let error = error.clone();
            let session = session.clone();

            spawn_local(async move {
                let result = match &request {
                    SellRequest::One(entry) => {
                        api::post_no_content(
                            &format!("/inventory_item/{}/sell", entry.id),
                            &serde_json::json!({}),
                        )
                        .await
                        .map(|_| format!("Item sold for {:.2} €!", entry.calculated_price))
                    }
                    SellRequest::All => api::post_no_content(
                        "/inventory_item/sell",
                        &serde_json::json!({}),
                    )
                    .await
                    .map(|_| format!("All {count} items sold for {total_value:.2} €!")),
                };

                match result {
                    Ok(text) => {
                        message.set(Some(text));
                        session::refresh_user(&session).await;
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                selling.set(false);
                confirm.set(None);
            });
        })
    };

    let (modal_title, modal_message) = match &*confirm {
        Some(SellRequest::One(entry)) => (
            "Confirm sale".to_string(),
            format!(
                "Sell {} for {:.2} €?",
                entry.item.name, entry.calculated_price
            ),
        ),
        Some(SellRequest::All) => (
            "Sell everything?".to_string(),
            format!("Sell all {} items for {:.2} €?", items.len(), total_value),
        ),
        None => (String::new(), String::new()),
    };

    html! {
        <Base>
            <div class={styles::CONTAINER}>
                <div class="bg-slate-900/50 border border-white/10 p-6 rounded-2xl mb-8 flex flex-col md:flex-row justify-between items-center gap-4 shadow-lg">
                    <div>
                        <h1 class={styles::TEXT_H1}>{"My Inventory"}</h1>
                        <p class="text-slate-400 mt-1">
                            <span class="text-white font-bold">{items.len()}</span>
                            {" skins | Total value: "}
                            <span class="text-cyan-400 font-bold font-mono text-xl">{format!("{total_value:.2} €")}</span>
                        </p>
                    </div>
                    <button
                        onclick={request_sell_all}
                        disabled={*selling || items.is_empty()}
                        class={styles::BUTTON_DANGER}
                    >
                        {if *selling { "Selling..." } else { "SELL ALL" }}
                    </button>
                </div>

                if let Some(text) = &*message {
                    <div class={styles::ALERT_SUCCESS}>{text}</div>
                }
                if let Some(text) = &*error {
                    <div class={styles::ALERT_ERROR}>{text}</div>
                }

                if items.is_empty() {
                    <div class="text-center py-20 opacity-50">
                        <div class="text-6xl mb-4">{"📦"}</div>
                        <p class="text-xl font-light">{"Your inventory is empty."}</p>
                    </div>
                } else {
                    <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 xl:grid-cols-6 gap-4">
                        { for items.iter().map(|entry| html! {
                            <InventoryCard
                                key={entry.id}
                                entry={entry.clone()}
                                selling={*selling}
                                on_sell={request_sell_one.clone()}
                            />
                        }) }
                    </div>
                }
            </div>

            if confirm.is_some() {
                <ConfirmModal
                    title={modal_title}
                    message={modal_message}
                    loading={*selling}
                    on_confirm={execute_sell}
                    on_cancel={cancel_sell}
                />
            }
        </Base>
    }
}
