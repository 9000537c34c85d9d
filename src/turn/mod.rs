use bracket_geometry::prelude::Point;
use bracket_random::prelude::RandomNumberGenerator;

use crate::actors::Player;
use crate::combat::{self, CombatState, Encounter};
use crate::data::GameConfig;
use crate::data::items::ItemKind;
use crate::error::GameError;
use crate::map::{CellKind, Level};
use crate::progress;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Ascend,
    Descend,
}

/// Everything notable that happened within one turn, for the external
/// layer to narrate. Combat gets its own field since an encounter
/// carries a whole round log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    MoveBlocked { target: Point },
    DoorOpened { at: Point },
    TrapSprung { at: Point, damage: i32 },
    PickedUp { item: ItemKind },
    PickupRefused { item: ItemKind },
    MonsterSlain { name: String, experience: i32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterEncounter {
    pub monster: String,
    pub encounter: Encounter,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub position: Point,
    pub events: Vec<TurnEvent>,
    pub combat: Vec<MonsterEncounter>,
    pub leveled_up: bool,
    pub transition: Option<Transition>,
    pub game_over: bool,
}

/// Runs one discrete turn: validate the player's step, let every
/// monster wander, resolve any resulting collision to the end, apply
/// progression, and report what the renderer needs to show. Exactly
/// one call per external input event.
pub fn step_turn(
    level: &mut Level,
    player: &mut Player,
    input: Option<Direction>,
    config: &GameConfig,
    rng: &mut RandomNumberGenerator,
) -> TurnReport {
    let mut report = TurnReport {
        position: player.pos,
        events: Vec::new(),
        combat: Vec::new(),
        leveled_up: false,
        transition: None,
        game_over: player.stats.is_dead(),
    };
    if report.game_over {
        return report;
    }

    if let Some(direction) = input {
        match validate_move(level, player.pos, direction) {
            Ok(target) => {
                player.pos = target;
                enter_cell(level, player, config, &mut report);
            }
            Err(_) => {
                let delta = direction.delta();
                report.events.push(TurnEvent::MoveBlocked {
                    target: Point::new(player.pos.x + delta.x, player.pos.y + delta.y),
                });
            }
        }
    }

    if !player.stats.is_dead() {
        move_monsters(level, rng);
        resolve_collisions(level, player, config, rng, &mut report);
    }

    report.position = player.pos;
    report.game_over = player.stats.is_dead();
    if !report.game_over {
        report.transition = match level.grid.cell_at(player.pos) {
            Some(CellKind::StairsUp) => Some(Transition::Ascend),
            Some(CellKind::StairsDown) => Some(Transition::Descend),
            _ => None,
        };
    }
    report
}

/// A step is legal iff the target cell exists and is not a wall.
fn validate_move(level: &Level, from: Point, direction: Direction) -> Result<Point, GameError> {
    let delta = direction.delta();
    let target = Point::new(from.x + delta.x, from.y + delta.y);
    if level.grid.is_walkable(target) {
        Ok(target)
    } else {
        Err(GameError::IllegalMove)
    }
}

/// Side effects of the cell the player just stepped onto. Closed doors
/// swing open on first entry and traps spring exactly once; a loose
/// item is collected unless the pack is full, in which case it stays.
fn enter_cell(level: &mut Level, player: &mut Player, config: &GameConfig, report: &mut TurnReport) {
    match level.grid.cell_at(player.pos) {
        Some(CellKind::DoorClosed) => {
            level.grid.set_cell(player.pos, CellKind::DoorOpen);
            report.events.push(TurnEvent::DoorOpened { at: player.pos });
        }
        Some(CellKind::Trap) => {
            player.stats.health = (player.stats.health - config.trap_damage).max(0);
            level.grid.set_cell(player.pos, CellKind::Floor);
            report.events.push(TurnEvent::TrapSprung {
                at: player.pos,
                damage: config.trap_damage,
            });
        }
        _ => {}
    }

    if let Some(index) = level.item_at(player.pos) {
        let item = level.items[index];
        match progress::pick_up(player, item) {
            Ok(()) => {
                level.items.remove(index);
                report.events.push(TurnEvent::PickedUp { item: item.kind });
            }
            Err(_) => {
                report
                    .events
                    .push(TurnEvent::PickupRefused { item: item.kind });
            }
        }
    }
}

/// Every monster takes one uniform-random step among its walkable
/// 4-neighbors, in placement order; a fully enclosed monster stands
/// still. Walls are never entered.
fn move_monsters(level: &mut Level, rng: &mut RandomNumberGenerator) {
    for index in 0..level.monsters.len() {
        let options = level.grid.neighbors(level.monsters[index].pos);
        if !options.is_empty() {
            let pick = rng.range(0, options.len() as i32) as usize;
            level.monsters[index].pos = options[pick];
        }
    }
}

/// Fights every monster sharing the player's cell, in placement order,
/// each exchange running to completion before the next begins.
fn resolve_collisions(
    level: &mut Level,
    player: &mut Player,
    config: &GameConfig,
    rng: &mut RandomNumberGenerator,
    report: &mut TurnReport,
) {
    let mut index = 0;
    while index < level.monsters.len() {
        if level.monsters[index].pos != player.pos {
            index += 1;
            continue;
        }

        let encounter = combat::resolve(
            &mut player.stats,
            &mut level.monsters[index].stats,
            config.hit_chance,
            rng,
        );
        let state = encounter.state;
        report.combat.push(MonsterEncounter {
            monster: level.monsters[index].name.clone(),
            encounter,
        });

        match state {
            CombatState::InitiatorWins => {
                let slain = level.monsters.remove(index);
                let experience = config.progression.experience_per_kill;
                report.leveled_up |=
                    progress::gain_experience(player, experience, &config.progression);
                report.events.push(TurnEvent::MonsterSlain {
                    name: slain.name,
                    experience,
                });
            }
            CombatState::DefenderWins => return,
            CombatState::Ongoing => index += 1,
        }
    }
}
