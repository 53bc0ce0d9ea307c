pub mod auth;
pub mod confirm_modal;
pub mod item_card;
pub mod win_modal;

pub use confirm_modal::ConfirmModal;
pub use item_card::{rarity_style, ItemCard, RarityStyle};
pub use win_modal::WinModal;
