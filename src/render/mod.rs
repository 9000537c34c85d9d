use std::fmt;

use bracket_geometry::prelude::Point;
use serde::Serialize;

use crate::actors::Player;
use crate::map::Level;

/// Read-only view of one floor for the external renderer: a flat
/// char-per-cell buffer with entities already overlaid. Two snapshots
/// of unchanged state compare equal byte for byte.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridSnapshot {
    pub width: i32,
    pub height: i32,
    glyphs: Vec<char>,
}

impl GridSnapshot {
    pub fn glyph_at(&self, x: i32, y: i32) -> Option<char> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some(self.glyphs[(y * self.width + x) as usize])
    }

    fn overlay(&mut self, point: Point, glyph: char) {
        if point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height {
            self.glyphs[(point.y * self.width + point.x) as usize] = glyph;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.glyphs
            .chunks(self.width as usize)
            .map(|row| row.iter().collect())
    }
}

impl fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Projects the level and player into display glyphs. Overlays are
/// painted in ascending precedence so the player ends up above
/// monsters, monsters above items, and items above terrain.
pub fn render(level: &Level, player: &Player) -> GridSnapshot {
    let grid = &level.grid;
    let mut glyphs = Vec::with_capacity((grid.width * grid.height) as usize);
    for y in 0..grid.height {
        for x in 0..grid.width {
            let glyph = grid
                .cell_at(Point::new(x, y))
                .map(|cell| cell.glyph())
                .unwrap_or(' ');
            glyphs.push(glyph);
        }
    }

    let mut snapshot = GridSnapshot {
        width: grid.width,
        height: grid.height,
        glyphs,
    };
    for item in &level.items {
        if let Some(pos) = item.pos {
            snapshot.overlay(pos, item.kind.glyph());
        }
    }
    for monster in &level.monsters {
        snapshot.overlay(monster.pos, monster.glyph);
    }
    snapshot.overlay(player.pos, '@');
    snapshot
}
