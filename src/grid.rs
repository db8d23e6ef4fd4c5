/// The cell-marker grid.
///
/// Primitive storage is deliberately dumb: `new` / `get` / `set` and
/// nothing else — callers keep coordinates valid.  The grid is not the
/// source of truth for the simulation; it is rebuilt from the entity
/// state every tick via [`Grid::from_state`] and handed to the renderer.

use crate::entities::{Marker, World};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cells, `row * cols + col`.
    cells: Vec<Marker>,
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Marker::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Marker {
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, marker: Marker) {
        self.cells[row * self.cols + col] = marker;
    }

    /// True for cells on the outer frame.
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || row == self.rows - 1 || col == 0 || col == self.cols - 1
    }

    /// Paint the current entity state onto a fresh grid.  Trails first,
    /// then enemies, then the shooter, so the shooter always shows on its
    /// own cell.
    pub fn from_state(state: &World) -> Self {
        let mut grid = Grid::new(state.rows, state.cols);
        for p in &state.projectiles {
            grid.set(p.row, p.col, Marker::Trail);
        }
        for e in &state.enemies {
            grid.set(e.row, e.col, Marker::Enemy);
        }
        grid.set(state.shooter_row(), state.shooter.col, Marker::Shooter);
        grid
    }
}
