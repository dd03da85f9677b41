//! Turn-taking board engine with flip captures.
//!
//! After every move the whole board is partitioned into groups, and every
//! group left without a liberty has its stones recolored to the opponent's
//! color. Stones are never removed from the board.
//!
//! Captures are resolved in a single pass over a snapshot of the board taken
//! before any stone is flipped. A flip that leaves the recolored stones
//! without a liberty is not captured again until the next move.

use crate::constants::N;
use crate::error::GoError;
use crate::grid::{Color, Grid};
use crate::group::{Group, discover_group, enumerate_all_groups, has_liberty};

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Color of the stone that was placed
    pub color: Color,
    /// Number of stones recolored by capture resolution
    pub captured: usize,
}

/// A game in progress: the grid plus the player to move.
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    active_player: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::with_default_size()
    }
}

impl Game {
    /// An empty `size x size` game with White to move.
    pub fn new(size: usize) -> Self {
        Self::from_grid(Grid::new(size), Color::White)
    }

    /// An empty game using the board size selected by the Cargo features.
    pub fn with_default_size() -> Self {
        Self::new(N)
    }

    /// Wrap an existing grid. No captures are resolved.
    pub fn from_grid(grid: Grid, active_player: Color) -> Self {
        Self {
            grid,
            active_player,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The color whose stone the next [`play`](Self::play) places.
    pub fn active_player(&self) -> Color {
        self.active_player
    }

    /// Place the active player's stone at `(row, col)`, pass the turn and
    /// resolve captures.
    ///
    /// Fails with [`GoError::OutOfBounds`] or [`GoError::CellOccupied`]
    /// before touching the board, so a failed call changes nothing.
    pub fn play(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GoError> {
        let point = self.grid.get(row, col)?;
        if let Some(color) = point.color() {
            return Err(GoError::CellOccupied { row, col, color });
        }

        let color = self.active_player;
        self.grid.set(row, col, Some(color))?;
        self.active_player = color.opponent();
        tracing::debug!(row, col, %color, "stone placed");

        let captured = self.resolve_captures();
        Ok(MoveOutcome { color, captured })
    }

    /// Recolor every group that has no liberty. Returns the number of stones
    /// flipped.
    pub fn resolve_captures(&mut self) -> usize {
        let captured: Vec<Group> = enumerate_all_groups(&self.grid)
            .into_iter()
            .filter(|g| !has_liberty(&self.grid, g))
            .collect();

        let mut flipped = 0;
        for group in &captured {
            tracing::debug!(
                color = ?group.color(),
                stones = group.len(),
                "group captured"
            );
            for coord in group.coords() {
                let point = self.grid.point_mut(coord);
                point.set_color(point.color().map(Color::opponent));
                flipped += 1;
            }
        }
        flipped
    }

    /// The group containing `(row, col)`; empty if the point is empty.
    pub fn group_at(&self, row: usize, col: usize) -> Result<Group, GoError> {
        let point = self.grid.get(row, col)?;
        Ok(discover_group(&self.grid, point))
    }

    /// Whether the stone at `(row, col)` belongs to a group without a liberty.
    ///
    /// An empty point is never captured.
    pub fn is_captured(&self, row: usize, col: usize) -> Result<bool, GoError> {
        let group = self.group_at(row, col)?;
        Ok(!group.is_empty() && !has_liberty(&self.grid, &group))
    }

    /// All groups currently on the board, in row-major order.
    pub fn groups(&self) -> Vec<Group> {
        enumerate_all_groups(&self.grid)
    }
}
