//! Group discovery and liberty checks.
//!
//! A group is the maximal set of same-colored stones connected through
//! orthogonal adjacency. Groups are derived from the grid on demand and never
//! stored: any mutation of the grid may change them.

use std::collections::BTreeSet;

use crate::grid::{Color, Coord, Grid, Point};

/// A connected set of same-colored stones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Group {
    color: Option<Color>,
    members: BTreeSet<Coord>,
}

impl Group {
    /// Color shared by every member, `None` for the empty group.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.members.contains(&(row, col))
    }

    /// Member coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.members.iter().copied()
    }
}

/// Discover the group containing `start`.
///
/// Only the coordinates of `start` are used: the color is read from `grid`,
/// so a copy taken before the board changed still finds the current group.
/// Returns the empty group if the point is empty or outside `grid`. The
/// traversal uses an explicit stack and a visited bitmap, so every point is
/// expanded at most once.
pub fn discover_group(grid: &Grid, start: &Point) -> Group {
    let Ok(point) = grid.get(start.row(), start.col()) else {
        return Group::default();
    };
    let mut visited = vec![false; grid.size() * grid.size()];
    discover_with(grid, point.coord(), &mut visited)
}

/// Flood fill from the in-bounds coordinate `start`, marking members in
/// `visited`.
///
/// `visited` is shared across calls by [`enumerate_all_groups`] so that each
/// point is claimed by exactly one group.
fn discover_with(grid: &Grid, start: Coord, visited: &mut [bool]) -> Group {
    let Some(color) = grid.color_at(start.0, start.1) else {
        return Group::default();
    };

    let mut members = BTreeSet::new();
    let mut stack = vec![start];
    visited[grid.idx(start.0, start.1)] = true;

    while let Some((r, c)) = stack.pop() {
        members.insert((r, c));
        for (nr, nc) in grid.neighbor_coords(r, c) {
            let ni = grid.idx(nr, nc);
            if visited[ni] {
                continue;
            }
            if grid.color_at(nr, nc) == Some(color) {
                visited[ni] = true;
                stack.push((nr, nc));
            }
        }
    }

    Group {
        color: Some(color),
        members,
    }
}

/// Whether any member of `group` is adjacent to an empty point.
///
/// The empty group has no liberty. Members outside `grid` are ignored.
pub fn has_liberty(grid: &Grid, group: &Group) -> bool {
    group
        .coords()
        .filter(|&(r, c)| r < grid.size() && c < grid.size())
        .any(|(r, c)| grid.is_free_adjacent(r, c))
}

/// Partition every occupied point of `grid` into groups.
///
/// Groups come out ordered by the row-major position of their first member.
/// Empty points are skipped.
pub fn enumerate_all_groups(grid: &Grid) -> Vec<Group> {
    let mut claimed = vec![false; grid.size() * grid.size()];
    let mut groups = Vec::new();
    for (i, point) in grid.all_points().enumerate() {
        if claimed[i] || point.is_empty() {
            continue;
        }
        groups.push(discover_with(grid, point.coord(), &mut claimed));
    }
    tracing::trace!(groups = groups.len(), "enumerated groups");
    groups
}
