pub mod populate;

use bracket_geometry::prelude::{Point, Rect};
use bracket_random::prelude::RandomNumberGenerator;
use smallvec::SmallVec;

use crate::actors::Monster;
use crate::data::GameConfig;
use crate::data::items::Item;
use crate::error::GameError;

/// Attempts allowed per rejection-sampled placement before the whole
/// level construction fails.
pub const RETRY_BUDGET: usize = 512;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellKind {
    Wall,
    Floor,
    DoorClosed,
    DoorOpen,
    StairsUp,
    StairsDown,
    Trap,
}

impl CellKind {
    pub fn glyph(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Floor => '.',
            CellKind::DoorClosed => '+',
            CellKind::DoorOpen => '/',
            CellKind::StairsUp => '<',
            CellKind::StairsDown => '>',
            CellKind::Trap => '^',
        }
    }

    /// Only walls block movement; doors, stairs and traps are terrain.
    pub fn is_walkable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    cells: Vec<CellKind>,
}

impl Grid {
    pub fn filled(width: i32, height: i32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            cells: vec![CellKind::Wall; size],
        }
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(Point::new(x, y)) {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    pub fn cell_at(&self, point: Point) -> Option<CellKind> {
        self.idx(point.x, point.y).map(|idx| self.cells[idx])
    }

    pub fn set_cell(&mut self, point: Point, kind: CellKind) {
        if let Some(idx) = self.idx(point.x, point.y) {
            self.cells[idx] = kind;
        }
    }

    pub fn is_walkable(&self, point: Point) -> bool {
        self.cell_at(point).is_some_and(CellKind::is_walkable)
    }

    /// Bare floor only: excludes doors, stairs and traps.
    pub fn is_open_floor(&self, point: Point) -> bool {
        self.cell_at(point) == Some(CellKind::Floor)
    }

    /// Walkable 4-neighbors of `point`, in fixed right/left/down/up order.
    pub fn neighbors(&self, point: Point) -> SmallVec<[Point; 4]> {
        let mut out = SmallVec::new();
        for delta in [
            Point::new(1, 0),
            Point::new(-1, 0),
            Point::new(0, 1),
            Point::new(0, -1),
        ] {
            let next = Point::new(point.x + delta.x, point.y + delta.y);
            if self.is_walkable(next) {
                out.push(next);
            }
        }
        out
    }

    pub fn walkable_points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let point = Point::new(x, y);
                if self.is_walkable(point) {
                    points.push(point);
                }
            }
        }
        points
    }
}

/// Runs `sample` until it yields a value, or `budget` attempts are
/// spent.
pub(crate) fn sample_until<T>(budget: usize, mut sample: impl FnMut() -> Option<T>) -> Option<T> {
    (0..budget).find_map(|_| sample())
}

fn walk_horizontal(path: &mut Vec<Point>, cursor: &mut Point, target_x: i32) {
    while cursor.x != target_x {
        cursor.x += if target_x > cursor.x { 1 } else { -1 };
        path.push(*cursor);
    }
}

fn walk_vertical(path: &mut Vec<Point>, cursor: &mut Point, target_y: i32) {
    while cursor.y != target_y {
        cursor.y += if target_y > cursor.y { 1 } else { -1 };
        path.push(*cursor);
    }
}

/// L-shaped corridor between two room centers; the flag decides which
/// leg is walked first.
fn corridor_path(start: Point, end: Point, horizontal_first: bool) -> Vec<Point> {
    let mut path = vec![start];
    let mut cursor = start;
    if horizontal_first {
        walk_horizontal(&mut path, &mut cursor, end.x);
        walk_vertical(&mut path, &mut cursor, end.y);
    } else {
        walk_vertical(&mut path, &mut cursor, end.y);
        walk_horizontal(&mut path, &mut cursor, end.x);
    }
    path
}

/// One fully generated floor: the grid plus everything living on it.
/// Built in a single atomic step and replaced wholesale on transition;
/// after construction only cell state and entities mutate.
#[derive(Clone, Debug)]
pub struct Level {
    pub grid: Grid,
    pub rooms: Vec<Rect>,
    pub monsters: Vec<Monster>,
    pub items: Vec<Item>,
    pub stairs_up: Point,
    pub stairs_down: Point,
    spawn: Point,
}

impl Level {
    pub fn generate(
        config: &GameConfig,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self, GameError> {
        if config.room_count == 0 {
            return Err(GameError::GenerationFailed("rooms"));
        }
        let mut grid = Grid::filled(config.grid_width, config.grid_height);
        let rooms = carve_rooms(&mut grid, config, rng)?;
        if config.place_doors {
            carve_doors(&mut grid, &rooms, rng);
        }
        let spawn = rooms[0].center();
        let (stairs_up, stairs_down) = place_stairs(&mut grid, spawn, rng)?;
        place_traps(&mut grid, spawn, config.trap_count, rng)?;
        let monsters =
            populate::place_monsters(&grid, &config.monsters, config.monster_count, rng)?;
        let items = populate::place_items(&grid, config.item_count, rng)?;
        Ok(Self {
            grid,
            rooms,
            monsters,
            items,
            stairs_up,
            stairs_down,
            spawn,
        })
    }

    pub fn spawn_point(&self) -> Point {
        self.spawn
    }

    pub fn monster_at(&self, point: Point) -> Option<usize> {
        self.monsters.iter().position(|m| m.pos == point)
    }

    pub fn item_at(&self, point: Point) -> Option<usize> {
        self.items.iter().position(|it| it.pos == Some(point))
    }
}

/// Builds one floor from a fresh generator seeded with `seed`.
pub fn new_level(config: &GameConfig, seed: u64) -> Result<Level, GameError> {
    let mut rng = RandomNumberGenerator::seeded(seed);
    Level::generate(config, &mut rng)
}

fn carve_rooms(
    grid: &mut Grid,
    config: &GameConfig,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Rect>, GameError> {
    let mut rooms: Vec<Rect> = Vec::with_capacity(config.room_count);
    for _ in 0..config.room_count {
        let accepted = sample_until(RETRY_BUDGET, || {
            let w = rng.range(config.room_min_size, config.room_max_size + 1);
            let h = rng.range(config.room_min_size, config.room_max_size + 1);
            let x_max = grid.width - w - 2;
            let y_max = grid.height - h - 2;
            if x_max <= 2 || y_max <= 2 {
                return None;
            }
            let candidate = Rect::with_size(rng.range(2, x_max), rng.range(2, y_max), w, h);
            if rooms.iter().any(|room| room.intersect(&candidate)) {
                return None;
            }
            // Also rejects candidates crossed by an earlier corridor.
            let mut clear = true;
            candidate.for_each(|pt| {
                if grid.cell_at(pt) != Some(CellKind::Wall) {
                    clear = false;
                }
            });
            clear.then_some(candidate)
        });
        let Some(room) = accepted else {
            return Err(GameError::GenerationFailed("rooms"));
        };
        room.for_each(|pt| grid.set_cell(pt, CellKind::Floor));
        if let Some(prev) = rooms.last() {
            let horizontal_first = rng.range(0, 2) == 0;
            for pt in corridor_path(prev.center(), room.center(), horizontal_first) {
                grid.set_cell(pt, CellKind::Floor);
            }
        }
        rooms.push(room);
    }
    Ok(rooms)
}

/// One door per room, on a random wall side of the ring just outside
/// the footprint (corners excluded, so the door always touches room
/// floor). A room whose ring was fully eroded by corridors goes
/// without.
fn carve_doors(grid: &mut Grid, rooms: &[Rect], rng: &mut RandomNumberGenerator) {
    for room in rooms {
        let spot = sample_until(RETRY_BUDGET, || {
            let side = rng.range(0, 4);
            let spot = match side {
                0 => Point::new(rng.range(room.x1, room.x2), room.y1 - 1),
                1 => Point::new(rng.range(room.x1, room.x2), room.y2),
                2 => Point::new(room.x1 - 1, rng.range(room.y1, room.y2)),
                _ => Point::new(room.x2, rng.range(room.y1, room.y2)),
            };
            (grid.cell_at(spot) == Some(CellKind::Wall)).then_some(spot)
        });
        if let Some(spot) = spot {
            grid.set_cell(spot, CellKind::DoorClosed);
        }
    }
}

fn place_stairs(
    grid: &mut Grid,
    spawn: Point,
    rng: &mut RandomNumberGenerator,
) -> Result<(Point, Point), GameError> {
    let up = sample_open_floor(grid, rng, spawn)
        .ok_or(GameError::GenerationFailed("stairs up"))?;
    grid.set_cell(up, CellKind::StairsUp);
    let down = sample_open_floor(grid, rng, spawn)
        .ok_or(GameError::GenerationFailed("stairs down"))?;
    grid.set_cell(down, CellKind::StairsDown);
    Ok((up, down))
}

fn place_traps(
    grid: &mut Grid,
    spawn: Point,
    count: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<(), GameError> {
    for _ in 0..count {
        let spot =
            sample_open_floor(grid, rng, spawn).ok_or(GameError::GenerationFailed("traps"))?;
        grid.set_cell(spot, CellKind::Trap);
    }
    Ok(())
}

/// Uniform open-floor cell, skipping the spawn point so a fresh player
/// never starts on stairs or a trap.
fn sample_open_floor(
    grid: &Grid,
    rng: &mut RandomNumberGenerator,
    spawn: Point,
) -> Option<Point> {
    sample_until(RETRY_BUDGET, || {
        let pt = Point::new(rng.range(0, grid.width), rng.range(0, grid.height));
        (grid.is_open_floor(pt) && pt != spawn).then_some(pt)
    })
}
