use bracket_random::prelude::RandomNumberGenerator;

use crate::actors::Player;
use crate::data::GameConfig;
use crate::error::GameError;
use crate::map::Level;
use crate::progress::{self, ItemSummary, ItemUse};
use crate::render::{self, GridSnapshot};
use crate::turn::{self, Direction, Transition, TurnReport};

/// One play session: the active floor, the player that persists across
/// floors, and the generator that drives everything. When the floor
/// changes the player is relocated, never rebuilt.
pub struct Game {
    config: GameConfig,
    pub level: Level,
    pub player: Player,
    pub depth: u32,
    rng: RandomNumberGenerator,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        let mut rng = RandomNumberGenerator::seeded(seed);
        let level = Level::generate(&config, &mut rng)?;
        let mut player = Player::new(&config);
        player.pos = level.spawn_point();
        Ok(Self {
            config,
            level,
            player,
            depth: 1,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Advances the world by one turn. When the turn ends on stairs the
    /// old floor is dropped wholesale and a fresh one generated, which
    /// can itself fail like any level construction.
    pub fn step(&mut self, input: Option<Direction>) -> Result<TurnReport, GameError> {
        let report = turn::step_turn(
            &mut self.level,
            &mut self.player,
            input,
            &self.config,
            &mut self.rng,
        );
        if let Some(transition) = report.transition {
            self.change_floor(transition)?;
        }
        Ok(report)
    }

    fn change_floor(&mut self, transition: Transition) -> Result<(), GameError> {
        self.depth = match transition {
            Transition::Descend => self.depth + 1,
            Transition::Ascend => self.depth.saturating_sub(1).max(1),
        };
        self.level = Level::generate(&self.config, &mut self.rng)?;
        self.player.pos = self.level.spawn_point();
        Ok(())
    }

    pub fn render(&self) -> GridSnapshot {
        render::render(&self.level, &self.player)
    }

    pub fn open_inventory(&self) -> Vec<ItemSummary> {
        progress::open_inventory(&self.player)
    }

    pub fn use_item(&mut self, index: usize) -> Result<ItemUse, GameError> {
        progress::apply_item(&mut self.player, index)
    }
}
