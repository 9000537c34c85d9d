use bracket_geometry::prelude::Point;
use smallvec::SmallVec;

use crate::data::GameConfig;
use crate::data::items::Item;
use crate::data::monsters::MonsterTemplate;
use crate::error::GameError;

/// Mutable combat state shared by the player and every monster.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CombatStats {
    pub max_health: i32,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl CombatStats {
    pub fn new(health: i32, attack: i32, defense: i32) -> Self {
        Self {
            max_health: health,
            health,
            attack,
            defense,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Restores health without exceeding the cap; returns what was
    /// actually recovered.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount).min(self.max_health);
        self.health - before
    }
}

#[derive(Clone, Debug)]
pub struct Monster {
    pub name: String,
    pub glyph: char,
    pub stats: CombatStats,
    pub pos: Point,
}

impl Monster {
    pub fn from_template(template: &MonsterTemplate, pos: Point) -> Self {
        Self {
            name: template.name.clone(),
            glyph: template.glyph,
            stats: CombatStats::new(template.health, template.attack, template.defense),
            pos,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Point,
    pub stats: CombatStats,
    pub level: i32,
    pub experience: i32,
    pub inventory: Inventory,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Point::new(0, 0),
            stats: CombatStats::new(
                config.player_health,
                config.player_attack,
                config.player_defense,
            ),
            level: 1,
            experience: 0,
            inventory: Inventory::new(config.max_inventory),
        }
    }
}

/// Insertion-ordered, capacity-bounded item storage. Duplicate kinds
/// are distinct entries; only the count is checked.
#[derive(Clone, Debug)]
pub struct Inventory {
    slots: SmallVec<[Item; GameConfig::DEFAULT_MAX_INVENTORY]>,
    capacity: usize,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: SmallVec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn push(&mut self, item: Item) -> Result<(), GameError> {
        if self.is_full() {
            return Err(GameError::InventoryFull);
        }
        self.slots.push(item);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Item, GameError> {
        if index >= self.slots.len() {
            return Err(GameError::InvalidIndex { index });
        }
        Ok(self.slots.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.slots.iter()
    }
}
