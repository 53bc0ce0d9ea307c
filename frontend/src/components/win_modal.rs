use shared::shared_case_game::InventoryItem;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::item_card::rarity_style;
use crate::config::get_asset_url;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinModalProps {
    pub outcome: InventoryItem,
    pub on_close: Callback<()>,
}

/// Blocking overlay showing the item the server granted. Dismissing only
/// clears the won record; the reel behind stays landed until the next spin.
#[function_component(WinModal)]
pub fn win_modal(props: &WinModalProps) -> Html {
    let style = rarity_style(props.outcome.item.rarity);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={close.clone()}>
            <div
                class={styles::MODAL_PANEL}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <h3 class="text-2xl font-bold text-white mb-4">{"You won!"}</h3>
                <div style="width: 200px">
                    <div class={classes!("p-2", "rounded-lg", "bg-gray-700", "border-4", style.border)}>
                        if props.outcome.stat_trak {
                            <p class="text-orange-400 font-bold">{"StatTrak™"}</p>
                        }
                        <img
                            src={get_asset_url(&props.outcome.item.image_url)}
                            alt={props.outcome.item.name.clone()}
                            class="w-full h-32 object-contain"
                        />
                        <p class={classes!("font-semibold", "mt-2", style.text)}>
                            {&props.outcome.item.name}
                        </p>
                        <p class="text-gray-300 text-sm">{&props.outcome.wear_tier_name}</p>
                        <p class="text-gray-500 text-xs font-mono">
                            {format!("float {:.4}", props.outcome.float)}
                        </p>
                        <p class="text-yellow-400 font-bold text-lg">
                            {format!("{:.2} €", props.outcome.calculated_price)}
                        </p>
                    </div>
                </div>
                <button onclick={close} class={classes!(styles::BUTTON_SECONDARY, "mt-6")}>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}
