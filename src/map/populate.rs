use bracket_geometry::prelude::Point;
use bracket_random::prelude::RandomNumberGenerator;
use strum::{EnumCount, IntoEnumIterator};

use crate::actors::Monster;
use crate::data::items::{Item, ItemKind};
use crate::data::monsters::MonsterTemplate;
use crate::error::GameError;

use super::{Grid, RETRY_BUDGET, sample_until};

/// Scatters `count` monsters over open floor. Positions are sampled
/// uniformly from the whole grid and rejected until they land on bare
/// floor not taken by an earlier spawn of this pass; the type is a
/// uniform draw from the configured table.
pub fn place_monsters(
    grid: &Grid,
    table: &[MonsterTemplate],
    count: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Monster>, GameError> {
    if table.is_empty() && count > 0 {
        return Err(GameError::GenerationFailed("monsters"));
    }
    let mut monsters: Vec<Monster> = Vec::with_capacity(count);
    for _ in 0..count {
        let spot = sample_until(RETRY_BUDGET, || {
            let pt = random_cell(grid, rng);
            (grid.is_open_floor(pt) && monsters.iter().all(|m| m.pos != pt)).then_some(pt)
        })
        .ok_or(GameError::GenerationFailed("monsters"))?;
        let template = &table[rng.range(0, table.len() as i32) as usize];
        monsters.push(Monster::from_template(template, spot));
    }
    Ok(monsters)
}

/// Same discipline for items; the kind is a uniform draw from the full
/// item enumeration.
pub fn place_items(
    grid: &Grid,
    count: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Item>, GameError> {
    let kinds: Vec<ItemKind> = ItemKind::iter().collect();
    let mut items: Vec<Item> = Vec::with_capacity(count);
    for _ in 0..count {
        let spot = sample_until(RETRY_BUDGET, || {
            let pt = random_cell(grid, rng);
            (grid.is_open_floor(pt) && items.iter().all(|it| it.pos != Some(pt))).then_some(pt)
        })
        .ok_or(GameError::GenerationFailed("items"))?;
        let kind = kinds[rng.range(0, ItemKind::COUNT as i32) as usize];
        items.push(Item::on_floor(kind, spot));
    }
    Ok(items)
}

fn random_cell(grid: &Grid, rng: &mut RandomNumberGenerator) -> Point {
    Point::new(rng.range(0, grid.width), rng.range(0, grid.height))
}
