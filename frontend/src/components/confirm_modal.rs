use web_sys::MouseEvent;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub title: String,
    pub message: String,
    pub loading: bool,
    pub on_confirm: Callback<MouseEvent>,
    pub on_cancel: Callback<MouseEvent>,
}

/// Confirmation step in front of irreversible actions (selling items).
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    html! {
        <div class={styles::MODAL_BACKDROP} onclick={props.on_cancel.clone()}>
            <div
                class={classes!(styles::MODAL_PANEL, "max-w-md")}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <h3 class="text-2xl font-bold text-white mb-2">{&props.title}</h3>
                <p class="text-gray-300 mb-6">{&props.message}</p>
                <div class="flex justify-center gap-4">
                    <button
                        onclick={props.on_confirm.clone()}
                        disabled={props.loading}
                        class={styles::BUTTON_SECONDARY}
                    >
                        {if props.loading { "Processing..." } else { "Confirm" }}
                    </button>
                    <button
                        onclick={props.on_cancel.clone()}
                        disabled={props.loading}
                        class="px-6 py-2 rounded-lg font-bold text-gray-300 border border-gray-600 hover:bg-gray-700 transition-colors"
                    >
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
