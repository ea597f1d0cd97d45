//! Navigation grid cells
//!
//! A `Node` is one cell of the navigation grid together with the A*
//! bookkeeping the search writes into it.

use glam::IVec2;

/// Cost assigned to `g` and `h` when a node has not been reached yet
pub const UNVISITED_COST: i32 = i32::MAX / 3;

/// Total cost reported by a blocked node
///
/// Large enough that any open cell is expanded first, small enough that
/// blocked cells can still be sorted against each other.
pub const BLOCKED_COST: i32 = 3 * (i32::MAX / 4);

/// Position of a node inside a [`Map`](super::Map), in column/row order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridIndex {
    /// Column (first grid axis)
    pub col: usize,
    /// Row (second grid axis)
    pub row: usize,
}

impl GridIndex {
    /// Create a new grid index
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Whether `other` is exactly one step away along exactly one axis
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row) == 1
    }
}

/// A single walkable or blocked cell of the navigation grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    x: i32,
    y: i32,
    /// Cost from the search start
    pub(crate) g: i32,
    /// Heuristic estimate to the search goal
    pub(crate) h: i32,
    /// Predecessor on the best known path, written by the search
    parent: Option<GridIndex>,
    blocked: bool,
}

impl Node {
    /// Create an open node at the given world coordinates
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            g: UNVISITED_COST,
            h: UNVISITED_COST,
            parent: None,
            blocked: false,
        }
    }

    /// Create a blocked node at the given world coordinates
    #[must_use]
    pub fn wall(x: i32, y: i32) -> Self {
        Self {
            blocked: true,
            ..Self::new(x, y)
        }
    }

    /// World X coordinate
    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// World Y coordinate (the Z axis of the arena floor)
    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Both coordinates as a vector
    #[must_use]
    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Cost from the start of the last search
    #[must_use]
    pub fn g(&self) -> i32 {
        self.g
    }

    /// Heuristic estimate computed by the last search
    #[must_use]
    pub fn h(&self) -> i32 {
        self.h
    }

    /// Total estimated cost
    ///
    /// Blocked nodes report [`BLOCKED_COST`] regardless of `g` and `h`.
    #[must_use]
    pub fn f(&self) -> i32 {
        if self.blocked {
            BLOCKED_COST
        } else {
            self.g.saturating_add(self.h)
        }
    }

    /// Predecessor on the best path found by the last search
    #[must_use]
    pub fn parent(&self) -> Option<GridIndex> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: GridIndex) {
        self.parent = Some(parent);
    }

    /// Mark the node as blocked or open
    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    /// Whether the node is blocked
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Clear search state; position and blocked flag are untouched
    pub fn reset(&mut self) {
        self.g = UNVISITED_COST;
        self.h = UNVISITED_COST;
        self.parent = None;
    }
}
