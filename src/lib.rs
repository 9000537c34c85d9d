//! Renderer-independent roguelike core: procedural floor generation,
//! entity placement, and synchronous turn resolution. A terminal (or
//! any other) front end drives [`Game`] or the free functions and
//! draws the [`GridSnapshot`] it gets back.

pub mod actors;
pub mod combat;
pub mod data;
pub mod error;
pub mod game;
pub mod map;
pub mod progress;
pub mod render;
pub mod turn;

pub use actors::{CombatStats, Inventory, Monster, Player};
pub use combat::{CombatState, Encounter, Role, Round, resolve};
pub use data::items::{Item, ItemEffect, ItemKind};
pub use data::monsters::MonsterTemplate;
pub use data::{GameConfig, ProgressionConfig};
pub use error::GameError;
pub use game::Game;
pub use map::{CellKind, Grid, Level, new_level};
pub use progress::{ItemSummary, ItemUse, apply_item, gain_experience, open_inventory, pick_up};
pub use render::{GridSnapshot, render};
pub use turn::{Direction, MonsterEncounter, Transition, TurnEvent, TurnReport, step_turn};
