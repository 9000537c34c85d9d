use bracket_geometry::prelude::Point;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

/// The fixed catalogue of things that can lie on a dungeon floor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumIter, Serialize, Deserialize)]
pub enum ItemKind {
    PotionHeal,
    PotionAttack,
    PotionDefense,
    ScrollHeal,
    ScrollAttack,
    ScrollDefense,
    Weapon,
    Armor,
    Food,
    Currency,
    Trinket,
}

/// Stat delta applied when an item is consumed from the inventory.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemEffect {
    Heal(i32),
    Attack(i32),
    Defense(i32),
    None,
}

impl ItemKind {
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::PotionHeal => "healing potion",
            ItemKind::PotionAttack => "attack potion",
            ItemKind::PotionDefense => "defense potion",
            ItemKind::ScrollHeal => "healing scroll",
            ItemKind::ScrollAttack => "attack scroll",
            ItemKind::ScrollDefense => "defense scroll",
            ItemKind::Weapon => "sword",
            ItemKind::Armor => "shield",
            ItemKind::Food => "food ration",
            ItemKind::Currency => "gold coin",
            ItemKind::Trinket => "trinket",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            ItemKind::PotionHeal | ItemKind::PotionAttack | ItemKind::PotionDefense => '!',
            ItemKind::ScrollHeal | ItemKind::ScrollAttack | ItemKind::ScrollDefense => '?',
            ItemKind::Weapon => ')',
            ItemKind::Armor => '[',
            ItemKind::Food => '%',
            ItemKind::Currency => '$',
            ItemKind::Trinket => '*',
        }
    }

    /// Potions and scrolls carry a combat delta; the rest are inert.
    pub fn effect(self) -> ItemEffect {
        match self {
            ItemKind::PotionHeal => ItemEffect::Heal(20),
            ItemKind::ScrollHeal => ItemEffect::Heal(30),
            ItemKind::PotionAttack => ItemEffect::Attack(5),
            ItemKind::ScrollAttack => ItemEffect::Attack(10),
            ItemKind::PotionDefense => ItemEffect::Defense(5),
            ItemKind::ScrollDefense => ItemEffect::Defense(10),
            _ => ItemEffect::None,
        }
    }
}

/// One item instance. `pos` is `Some` while the item lies on the floor
/// and cleared when the player takes ownership of it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    pub pos: Option<Point>,
}

impl Item {
    pub fn on_floor(kind: ItemKind, pos: Point) -> Self {
        Self {
            kind,
            pos: Some(pos),
        }
    }
}
