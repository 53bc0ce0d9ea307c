use serde::Deserialize;
use shared::shared_case_game::InventoryItem;

/// The signed-in account, as returned by the profile endpoint. Balance and
/// inventory are refreshed from here after every server-side mutation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    pub pseudo: String,
    pub balance: f64,
    pub tier: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub inventory_items: Vec<InventoryItem>,
}

/// Collection member of the case list endpoint. The full item pool only
/// comes with the single-case read.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    pub id: u64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub required_tier: Option<String>,
}

/// API Platform collection envelope; members arrive under a `member` key.
#[derive(Debug, Deserialize)]
pub struct Collection<T> {
    #[serde(default)]
    pub member: Vec<T>,
}
