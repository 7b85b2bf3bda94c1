//! Core domain types for the cargo bay.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A supply category that can be loaded into a container.
///
/// The set is closed: every session works with exactly these five items,
/// in the order given by [`GameItem::ALL`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum GameItem {
    /// Propellant for the engines.
    #[serde(rename = "Fuel")]
    Fuel,
    /// Crew food stores.
    #[serde(rename = "Food & Ration")]
    FoodAndRation,
    /// Potable water.
    #[serde(rename = "Water")]
    Water,
    /// Medical kits and medicine.
    #[serde(rename = "Medical Supplies")]
    MedicalSupplies,
    /// Repair tools, needed by engineering in mission 2.
    #[serde(rename = "Tools & Equipment")]
    ToolsAndEquipment,
}

impl GameItem {
    /// All items in canonical order.
    pub const ALL: [GameItem; 5] = [
        GameItem::Fuel,
        GameItem::FoodAndRation,
        GameItem::Water,
        GameItem::MedicalSupplies,
        GameItem::ToolsAndEquipment,
    ];

    /// Human-readable label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            GameItem::Fuel => "Fuel",
            GameItem::FoodAndRation => "Food & Ration",
            GameItem::Water => "Water",
            GameItem::MedicalSupplies => "Medical Supplies",
            GameItem::ToolsAndEquipment => "Tools & Equipment",
        }
    }
}

impl std::fmt::Display for GameItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of items every cargo bay must be able to hold.
pub const ITEM_COUNT: usize = GameItem::ALL.len();

/// A single slot in the cargo bay array.
///
/// `id` is the 1-based position assigned when the bay is initialized and
/// never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Container {
    id: u32,
    #[new(default)]
    item: Option<GameItem>,
}

impl Container {
    /// Creates a container already holding an item.
    pub fn with_item(id: u32, item: GameItem) -> Self {
        Self {
            id,
            item: Some(item),
        }
    }

    /// Returns the 1-based container id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the stored item, if any.
    pub fn item(&self) -> Option<GameItem> {
        self.item
    }

    /// Checks if the container holds nothing.
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    /// Returns a copy of this container holding `item`.
    pub(crate) fn filled(self, item: GameItem) -> Self {
        Self {
            item: Some(item),
            ..self
        }
    }

    /// Returns a copy of this container with nothing in it.
    pub fn emptied(self) -> Self {
        Self { item: None, ..self }
    }
}

/// Stage of the session.
///
/// Phases are ordered; a session only moves forward through them
/// until it is reset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Title screen, nothing loaded yet.
    #[default]
    Intro,
    /// Declare the bay and load every item.
    Mission1,
    /// Locate an item with a linear search.
    Mission2,
    /// Journey finished.
    Complete,
}

impl Phase {
    /// Returns the display label for this phase.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Intro => "Intro",
            Phase::Mission1 => "Mission 1",
            Phase::Mission2 => "Mission 2",
            Phase::Complete => "Complete",
        }
    }

    /// Phase that is active while the given mission is being played.
    pub fn for_mission(mission: u32) -> Option<Phase> {
        match mission {
            1 => Some(Phase::Mission1),
            2 => Some(Phase::Mission2),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
