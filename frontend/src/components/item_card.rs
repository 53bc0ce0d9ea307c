use shared::shared_case_game::{Item, Rarity};
use yew::prelude::*;

use crate::config::get_asset_url;

/// Tailwind classes keyed by rarity tier, shared by reel slots, inventory
/// cards and the win overlay so an item always glows the same color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityStyle {
    pub border: &'static str,
    pub text: &'static str,
    pub glow: &'static str,
}

pub fn rarity_style(rarity: Rarity) -> RarityStyle {
    match rarity {
        Rarity::ConsumerGrade => RarityStyle {
            border: "border-slate-400",
            text: "text-slate-300",
            glow: "from-slate-500/10 to-transparent",
        },
        Rarity::IndustrialGrade => RarityStyle {
            border: "border-sky-400",
            text: "text-sky-300",
            glow: "from-sky-500/10 to-transparent",
        },
        Rarity::MilSpec => RarityStyle {
            border: "border-blue-600",
            text: "text-blue-400",
            glow: "from-blue-600/10 to-transparent",
        },
        Rarity::Restricted => RarityStyle {
            border: "border-purple-500",
            text: "text-purple-400",
            glow: "from-purple-500/10 to-transparent",
        },
        Rarity::Classified => RarityStyle {
            border: "border-pink-500",
            text: "text-pink-400",
            glow: "from-pink-500/10 to-transparent",
        },
        Rarity::Covert => RarityStyle {
            border: "border-red-600",
            text: "text-red-500",
            glow: "from-red-600/10 to-transparent",
        },
        Rarity::Extraordinary => RarityStyle {
            border: "border-yellow-400",
            text: "text-yellow-400",
            glow: "from-yellow-400/10 to-transparent",
        },
        Rarity::Contraband => RarityStyle {
            border: "border-orange-500",
            text: "text-orange-500",
            glow: "from-orange-500/10 to-transparent",
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ItemCardProps {
    pub item: Item,
    /// Fixed slot width in pixels; must match the reel geometry when the
    /// card is rendered inside the strip.
    pub width_px: f64,
}

/// One slot of the reel strip.
#[function_component(ItemCard)]
pub fn item_card(props: &ItemCardProps) -> Html {
    let style = rarity_style(props.item.rarity);

    html! {
        <div style={format!("width: {}px", props.width_px)} class="flex-shrink-0">
            <div class={classes!(
                "p-2", "rounded-lg", "bg-gray-800", "border-4", "h-full",
                "flex", "flex-col", "justify-between",
                style.border
            )}>
                <img
                    src={get_asset_url(&props.item.image_url)}
                    alt={props.item.name.clone()}
                    class="w-full h-24 object-contain"
                    draggable="false"
                />
                <p class="text-white text-xs font-semibold truncate mt-2">{&props.item.name}</p>
            </div>
        </div>
    }
}
