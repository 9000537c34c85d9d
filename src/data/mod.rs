pub mod items;
pub mod monsters;

use serde::{Deserialize, Serialize};

use self::monsters::{MonsterTemplate, builtin_monsters};

/// Everything tunable about one session, fixed at construction time.
/// Passed explicitly into generation and turn resolution so nothing in
/// the core reads shared mutable state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub room_count: usize,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub place_doors: bool,
    pub monster_count: usize,
    pub item_count: usize,
    pub trap_count: usize,
    /// Probability that any single attack lands, for both sides.
    pub hit_chance: f32,
    pub trap_damage: i32,
    pub player_health: i32,
    pub player_attack: i32,
    pub player_defense: i32,
    pub max_inventory: usize,
    pub progression: ProgressionConfig,
    pub monsters: Vec<MonsterTemplate>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    pub level_up_threshold: i32,
    pub health_per_level: i32,
    pub attack_per_level: i32,
    pub defense_per_level: i32,
    pub experience_per_kill: i32,
}

impl GameConfig {
    pub const DEFAULT_GRID_WIDTH: i32 = 40;
    pub const DEFAULT_GRID_HEIGHT: i32 = 20;
    pub const DEFAULT_ROOM_COUNT: usize = 4;
    pub const DEFAULT_MAX_INVENTORY: usize = 10;
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: Self::DEFAULT_GRID_WIDTH,
            grid_height: Self::DEFAULT_GRID_HEIGHT,
            room_count: Self::DEFAULT_ROOM_COUNT,
            room_min_size: 4,
            room_max_size: 7,
            place_doors: true,
            monster_count: 5,
            item_count: 5,
            trap_count: 3,
            hit_chance: 0.8,
            trap_damage: 10,
            player_health: 100,
            player_attack: 10,
            player_defense: 5,
            max_inventory: Self::DEFAULT_MAX_INVENTORY,
            progression: ProgressionConfig::default(),
            monsters: builtin_monsters(),
        }
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            level_up_threshold: 100,
            health_per_level: 20,
            attack_per_level: 5,
            defense_per_level: 2,
            experience_per_kill: 20,
        }
    }
}
