//! In-memory map with per-cell shroud and terrain cursors.

use std::collections::{HashMap, HashSet};

use airlift_domain::{CellPos, WorldPos};

use crate::infrastructure::ports::{MapPort, ShroudPort};

/// World units per cell edge.
pub const CELL_SIZE: i32 = 1024;

/// A rectangular map whose cells are `CELL_SIZE` world units wide.
///
/// Shroud is tracked for a single player: a cell is explored once it has
/// been revealed, or when the whole map is revealed.
#[derive(Debug, Clone)]
pub struct GridMap {
    width: i32,
    height: i32,
    explored: HashSet<CellPos>,
    all_revealed: bool,
    cursors: HashMap<CellPos, String>,
}

impl GridMap {
    /// Create a map of `width` x `height` cells. Dimensions below one are
    /// raised to one.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            explored: HashSet::new(),
            all_revealed: false,
            cursors: HashMap::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn explore(&mut self, cell: CellPos) {
        self.explored.insert(cell);
    }

    pub fn reveal_all(&mut self) {
        self.all_revealed = true;
    }

    /// Give the terrain at `cell` its own move cursor (e.g. water).
    pub fn set_cursor(&mut self, cell: CellPos, cursor: impl Into<String>) {
        self.cursors.insert(cell, cursor.into());
    }

    /// World position at the center of `cell`.
    pub fn center_of(cell: CellPos) -> WorldPos {
        WorldPos::new(
            cell.x * CELL_SIZE + CELL_SIZE / 2,
            cell.y * CELL_SIZE + CELL_SIZE / 2,
            0,
        )
    }
}

impl MapPort for GridMap {
    fn cell_containing(&self, position: WorldPos) -> CellPos {
        CellPos::new(
            position.x.div_euclid(CELL_SIZE),
            position.y.div_euclid(CELL_SIZE),
        )
    }

    fn center_of_cell(&self, cell: CellPos) -> WorldPos {
        Self::center_of(cell)
    }

    fn clamp(&self, cell: CellPos) -> CellPos {
        CellPos::new(
            cell.x.clamp(0, self.width - 1),
            cell.y.clamp(0, self.height - 1),
        )
    }

    fn contains(&self, cell: CellPos) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    fn terrain_cursor(&self, cell: CellPos) -> Option<String> {
        self.cursors.get(&cell).cloned()
    }
}

impl ShroudPort for GridMap {
    fn is_explored(&self, cell: CellPos) -> bool {
        self.all_revealed || self.explored.contains(&cell)
    }
}
