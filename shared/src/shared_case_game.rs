use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rarity tiers, ordered lowest to highest. Serialized with the display
/// names the API uses, so an unknown tier fails deserialization instead of
/// being guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(rename = "Consumer Grade")]
    ConsumerGrade,
    #[serde(rename = "Industrial Grade")]
    IndustrialGrade,
    #[serde(rename = "Mil-Spec")]
    MilSpec,
    #[serde(rename = "Restricted")]
    Restricted,
    #[serde(rename = "Classified")]
    Classified,
    #[serde(rename = "Covert")]
    Covert,
    #[serde(rename = "Extraordinary")]
    Extraordinary,
    #[serde(rename = "Contraband")]
    Contraband,
}

impl Rarity {
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::ConsumerGrade => "Consumer Grade",
            Rarity::IndustrialGrade => "Industrial Grade",
            Rarity::MilSpec => "Mil-Spec",
            Rarity::Restricted => "Restricted",
            Rarity::Classified => "Classified",
            Rarity::Covert => "Covert",
            Rarity::Extraordinary => "Extraordinary",
            Rarity::Contraband => "Contraband",
        }
    }
}

/// An item template. Shared by value between the catalog, reel slots and won
/// records; never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub rarity: Rarity,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseEntry {
    pub id: u64,
    pub drop_rate: f64,
    pub item: Item,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDefinition {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub case_items: Vec<CaseEntry>,
}

impl CaseDefinition {
    /// Item pool for reel display. Drop rates are intentionally ignored here:
    /// decoys are visual filler only, the server owns the real odds.
    pub fn item_pool(&self) -> Vec<Item> {
        self.case_items.iter().map(|entry| entry.item.clone()).collect()
    }
}

/// One granted item, exactly as the open-case endpoint returned it. The
/// server is the sole authority for this record; the client only displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: u64,
    pub float: f64,
    pub stat_trak: bool,
    pub item: Item,
    pub calculated_price: f64,
    pub wear_tier_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReelError {
    /// The case carries no items, so no strip can be built and no spin may
    /// be offered.
    EmptyPool,
    TargetOutOfRange { target_index: usize, len: usize },
}

impl fmt::Display for ReelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReelError::EmptyPool => write!(f, "this case has no items to display"),
            ReelError::TargetOutOfRange { target_index, len } => {
                write!(f, "target slot {target_index} does not fit a strip of {len}")
            }
        }
    }
}

impl std::error::Error for ReelError {}

/// Geometry and timing of the case reel. All the numbers that decide where
/// the strip stops and when each phase fires live here, so they can be
/// validated together instead of floating around as magic literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelConfig {
    /// Rendered width of one slot.
    pub slot_width_px: f64,
    /// Horizontal gap between slots (must match the strip's CSS gap).
    pub gap_px: f64,
    /// Slots per strip.
    pub reel_length: usize,
    /// The slot the marker always lands on. Near the end of the strip so a
    /// multi-second spin has enough leading decoys to scroll through.
    pub target_index: usize,
    pub spin_duration_ms: u32,
    /// Pause between the visual stop and the win overlay.
    pub reveal_delay_ms: u32,
    /// Delay before the long transition is applied, so the zero-duration
    /// rewind has committed first and cannot be merged away by the browser.
    pub transition_start_delay_ms: u32,
    /// Stop-point variance inside the target slot, as a fraction of the slot
    /// width. Keeps successive spins from halting on the pixel every time.
    pub jitter_fraction: f64,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            slot_width_px: 150.0,
            gap_px: 8.0,
            reel_length: 100,
            target_index: 90,
            spin_duration_ms: 6000,
            reveal_delay_ms: 1000,
            transition_start_delay_ms: 50,
            jitter_fraction: 0.4,
        }
    }
}

impl ReelConfig {
    /// Minimum slots ahead of the target; fewer and the spin runs out of
    /// runway before the stop feels earned.
    pub const MIN_RUNWAY: usize = 20;

    pub fn validate(&self) -> Result<(), String> {
        if self.slot_width_px <= 0.0 {
            return Err(format!("slot width must be positive, got {}", self.slot_width_px));
        }
        if self.gap_px < 0.0 {
            return Err(format!("slot gap cannot be negative, got {}", self.gap_px));
        }
        if self.target_index >= self.reel_length {
            return Err(format!(
                "target slot {} outside strip of {}",
                self.target_index, self.reel_length
            ));
        }
        if self.target_index < Self::MIN_RUNWAY {
            return Err(format!(
                "target slot {} leaves fewer than {} leading slots",
                self.target_index,
                Self::MIN_RUNWAY
            ));
        }
        if self.spin_duration_ms == 0 {
            return Err("spin duration cannot be zero".to_string());
        }
        if !(0.0..=0.5).contains(&self.jitter_fraction) {
            return Err(format!(
                "jitter fraction {} would drift outside the target slot",
                self.jitter_fraction
            ));
        }
        Ok(())
    }

    /// Distance from one slot's left edge to the next.
    pub fn step_px(&self) -> f64 {
        self.slot_width_px + self.gap_px
    }

    /// Horizontal translation that centers the target slot under the marker,
    /// plus the per-spin jitter.
    pub fn target_offset_px(&self, viewport_width_px: f64, jitter_px: f64) -> f64 {
        -(self.target_index as f64 * self.step_px()) + viewport_width_px / 2.0
            - self.slot_width_px / 2.0
            + jitter_px
    }

    pub fn sample_jitter_px<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let bound = self.slot_width_px * self.jitter_fraction;
        if bound == 0.0 {
            return 0.0;
        }
        rng.gen_range(-bound..=bound)
    }

    pub fn schedule(&self) -> SpinSchedule {
        let landed_ms = self.transition_start_delay_ms + self.spin_duration_ms;
        SpinSchedule {
            transition_start_ms: self.transition_start_delay_ms,
            landed_ms,
            reveal_ms: landed_ms + self.reveal_delay_ms,
        }
    }
}

/// The fixed timeline of one spin, in milliseconds after the trigger. All
/// phase changes are driven by these absolute offsets rather than by
/// animation-end events, which browsers deliver unreliably.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinSchedule {
    pub transition_start_ms: u32,
    pub landed_ms: u32,
    pub reveal_ms: u32,
}

/// Where the reel is in its lifecycle. `Resetting` spans the instant rewind
/// and the authoritative open call; once the phase is `Spinning` the strip
/// already carries the real outcome at the target slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinPhase {
    #[default]
    Idle,
    Resetting,
    Spinning,
    Landed,
}

impl SpinPhase {
    /// A new spin may start only from rest or on top of a finished one.
    /// Everything in between keeps the trigger locked, which is what limits
    /// each user action to a single open call.
    pub fn accepts_trigger(self) -> bool {
        matches!(self, SpinPhase::Idle | SpinPhase::Landed)
    }
}

/// Builds a strip of `length` cosmetic slots by uniform sampling with
/// replacement. A pool of one repeats that item for the whole strip.
pub fn decoy_strip<R: Rng + ?Sized>(
    pool: &[Item],
    length: usize,
    rng: &mut R,
) -> Result<Vec<Item>, ReelError> {
    if pool.is_empty() {
        return Err(ReelError::EmptyPool);
    }
    Ok((0..length)
        .map(|_| pool[rng.gen_range(0..pool.len())].clone())
        .collect())
}

/// Replaces the decoy at the target slot with the authoritative item. After
/// this the strip may be shown moving; before it, never.
pub fn plant_outcome(
    strip: &mut [Item],
    target_index: usize,
    item: &Item,
) -> Result<(), ReelError> {
    let len = strip.len();
    match strip.get_mut(target_index) {
        Some(slot) => {
            *slot = item.clone();
            Ok(())
        }
        None => Err(ReelError::TargetOutOfRange { target_index, len }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item(id: u64, rarity: Rarity) -> Item {
        Item {
            id,
            name: format!("Item {id}"),
            rarity,
            image_url: format!("/img/{id}.png"),
        }
    }

    #[test]
    fn test_decoy_strip_single_item_pool() {
        let pool = vec![item(1, Rarity::MilSpec)];
        let mut rng = StdRng::seed_from_u64(7);
        let strip = decoy_strip(&pool, 100, &mut rng).unwrap();
        assert_eq!(strip.len(), 100);
        assert!(strip.iter().all(|slot| slot.id == 1));
    }

    #[test]
    fn test_decoy_strip_empty_pool_refused() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(decoy_strip(&[], 100, &mut rng), Err(ReelError::EmptyPool));
    }

    #[test]
    fn test_decoy_strip_samples_whole_pool() {
        let pool = vec![
            item(1, Rarity::ConsumerGrade),
            item(2, Rarity::Restricted),
            item(3, Rarity::Covert),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        let strip = decoy_strip(&pool, 300, &mut rng).unwrap();
        for wanted in [1, 2, 3] {
            assert!(strip.iter().any(|slot| slot.id == wanted));
        }
    }

    #[test]
    fn test_plant_outcome_sets_target_slot() {
        let pool = vec![item(1, Rarity::ConsumerGrade)];
        let mut rng = StdRng::seed_from_u64(1);
        let config = ReelConfig::default();
        let mut strip = decoy_strip(&pool, config.reel_length, &mut rng).unwrap();
        let won = item(99, Rarity::Covert);
        plant_outcome(&mut strip, config.target_index, &won).unwrap();
        assert_eq!(strip[config.target_index], won);
        // every other slot is untouched filler
        let decoys = strip
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != config.target_index)
            .all(|(_, slot)| slot.id == 1);
        assert!(decoys);
    }

    #[test]
    fn test_plant_outcome_rejects_out_of_range() {
        let mut strip = vec![item(1, Rarity::ConsumerGrade); 10];
        let won = item(2, Rarity::Covert);
        assert_eq!(
            plant_outcome(&mut strip, 10, &won),
            Err(ReelError::TargetOutOfRange { target_index: 10, len: 10 })
        );
    }

    #[test]
    fn test_target_offset_arithmetic() {
        let config = ReelConfig::default();
        assert_eq!(config.step_px(), 158.0);
        // -(90 * 158) + 800/2 - 150/2 = -13895
        assert_eq!(config.target_offset_px(800.0, 0.0), -13895.0);
    }

    #[test]
    fn test_target_offset_applies_jitter() {
        let config = ReelConfig::default();
        assert_eq!(config.target_offset_px(800.0, 25.0), -13870.0);
        assert_eq!(config.target_offset_px(800.0, -25.0), -13920.0);
    }

    #[test]
    fn test_jitter_stays_inside_slot_fraction() {
        let config = ReelConfig::default();
        let bound = config.slot_width_px * config.jitter_fraction;
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..1000 {
            let jitter = config.sample_jitter_px(&mut rng);
            assert!(jitter.abs() <= bound, "jitter {jitter} beyond {bound}");
        }
    }

    #[test]
    fn test_schedule_orders_phase_deadlines() {
        let config = ReelConfig::default();
        let schedule = config.schedule();
        assert_eq!(schedule.transition_start_ms, 50);
        assert_eq!(schedule.landed_ms, 6050);
        assert_eq!(schedule.reveal_ms, 7050);
        // the overlay never beats the landing beat
        assert!(schedule.reveal_ms >= config.spin_duration_ms + config.reveal_delay_ms);
        assert_eq!(schedule.reveal_ms - schedule.landed_ms, config.reveal_delay_ms);
    }

    #[test]
    fn test_trigger_guard_blocks_active_spin() {
        assert!(SpinPhase::Idle.accepts_trigger());
        assert!(SpinPhase::Landed.accepts_trigger());
        // a second click while resetting or spinning must be a no-op, so a
        // double-click can never issue a second open call
        assert!(!SpinPhase::Resetting.accepts_trigger());
        assert!(!SpinPhase::Spinning.accepts_trigger());
    }

    #[test]
    fn test_config_validation() {
        assert!(ReelConfig::default().validate().is_ok());

        let mut bad = ReelConfig::default();
        bad.target_index = bad.reel_length;
        assert!(bad.validate().is_err());

        let mut short = ReelConfig::default();
        short.reel_length = 12;
        short.target_index = 10;
        assert!(short.validate().is_err());

        let mut wide_jitter = ReelConfig::default();
        wide_jitter.jitter_fraction = 0.9;
        assert!(wide_jitter.validate().is_err());
    }

    #[test]
    fn test_rarity_ladder_order() {
        assert!(Rarity::ConsumerGrade < Rarity::IndustrialGrade);
        assert!(Rarity::MilSpec < Rarity::Restricted);
        assert!(Rarity::Covert < Rarity::Extraordinary);
        assert!(Rarity::Extraordinary < Rarity::Contraband);
    }

    #[test]
    fn test_case_definition_wire_format() {
        let json = r#"{
            "id": 3,
            "name": "Chroma Case",
            "price": 2.49,
            "caseItems": [
                {
                    "id": 11,
                    "dropRate": 0.7992,
                    "item": {
                        "id": 21,
                        "name": "MP7 | Armor Core",
                        "rarity": "Mil-Spec",
                        "imageUrl": "/img/mp7.png"
                    }
                }
            ]
        }"#;
        let case: CaseDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(case.price, 2.49);
        assert_eq!(case.case_items.len(), 1);
        assert_eq!(case.case_items[0].item.rarity, Rarity::MilSpec);
        assert_eq!(case.item_pool()[0].name, "MP7 | Armor Core");
    }

    #[test]
    fn test_inventory_item_wire_format() {
        let json = r#"{
            "id": 77,
            "float": 0.1234,
            "statTrak": true,
            "item": {
                "id": 21,
                "name": "AWP | Dragon Lore",
                "rarity": "Covert",
                "imageUrl": "/img/awp.png"
            },
            "calculatedPrice": 124.5,
            "wearTierName": "Field-Tested"
        }"#;
        let won: InventoryItem = serde_json::from_str(json).unwrap();
        assert!(won.stat_trak);
        assert_eq!(won.wear_tier_name, "Field-Tested");
        assert_eq!(won.item.rarity, Rarity::Covert);
    }

    #[test]
    fn test_unknown_rarity_rejected() {
        let json = r#"{"id": 1, "name": "X", "rarity": "Mythical", "imageUrl": "/x.png"}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }
}
