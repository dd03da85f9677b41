//! Square grid of points with bounds-safe indexing and adjacency lookup.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::GoError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other player's color.
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A board coordinate, `(row, col)`.
pub type Coord = (usize, usize);

/// A single intersection of the grid.
///
/// The coordinates never change; the color does. Equality and hashing only
/// look at the coordinates, so a point stays the same set member after it is
/// recolored.
#[derive(Copy, Clone, Debug)]
pub struct Point {
    row: usize,
    col: usize,
    color: Option<Color>,
}

impl Point {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
    }

    pub(crate) fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coord() == other.coord()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord().hash(state);
    }
}

/// A `size x size` board stored row-major in a flat vector.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    points: Vec<Point>,
}

impl Grid {
    /// Create an empty grid. The size is fixed for the grid's lifetime.
    pub fn new(size: usize) -> Self {
        let points = (0..size * size)
            .map(|i| Point {
                row: i / size,
                col: i % size,
                color: None,
            })
            .collect();
        Self { size, points }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn check(&self, row: usize, col: usize) -> Result<usize, GoError> {
        if row >= self.size || col >= self.size {
            return Err(GoError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.idx(row, col))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&Point, GoError> {
        let i = self.check(row, col)?;
        Ok(&self.points[i])
    }

    /// Set the color of a point directly, without resolving captures.
    pub fn set(&mut self, row: usize, col: usize, color: Option<Color>) -> Result<(), GoError> {
        let i = self.check(row, col)?;
        self.points[i].color = color;
        Ok(())
    }

    pub(crate) fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        self.points[self.idx(row, col)].color
    }

    pub(crate) fn point_mut(&mut self, (row, col): Coord) -> &mut Point {
        let i = self.idx(row, col);
        &mut self.points[i]
    }

    /// Neighbors of an in-bounds coordinate, ordered up, down, left, right.
    pub(crate) fn neighbor_coords(&self, row: usize, col: usize) -> Vec<Coord> {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if row > 0 {
            v.push((row - 1, col));
        }
        if row + 1 < s {
            v.push((row + 1, col));
        }
        if col > 0 {
            v.push((row, col - 1));
        }
        if col + 1 < s {
            v.push((row, col + 1));
        }
        v
    }

    /// The 2 to 4 points adjacent to `(row, col)`, ordered up, down, left, right.
    pub fn neighbors(&self, row: usize, col: usize) -> Result<Vec<&Point>, GoError> {
        self.check(row, col)?;
        Ok(self
            .neighbor_coords(row, col)
            .into_iter()
            .map(|(r, c)| &self.points[self.idx(r, c)])
            .collect())
    }

    /// Whether any neighbor of `(row, col)` is empty.
    pub fn has_free_neighbor(&self, row: usize, col: usize) -> Result<bool, GoError> {
        self.check(row, col)?;
        Ok(self.is_free_adjacent(row, col))
    }

    pub(crate) fn is_free_adjacent(&self, row: usize, col: usize) -> bool {
        self.neighbor_coords(row, col)
            .into_iter()
            .any(|(r, c)| self.color_at(r, c).is_none())
    }

    /// All points in row-major order.
    pub fn all_points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Point]> + '_ {
        // `max(1)` keeps `chunks` happy on a zero-sized grid, which has no points anyway.
        self.points.chunks(self.size.max(1))
    }

    /// Number of stones of `color` on the board.
    pub fn stone_count(&self, color: Color) -> usize {
        self.points
            .iter()
            .filter(|p| p.color == Some(color))
            .count()
    }
}
