//! A* pathfinding on a 2D grid
//!
//! The grid owns its nodes and the search writes its bookkeeping straight
//! into them, so a search needs `&mut Map` and two searches can never
//! interleave.

use glam::{Vec2, Vec3};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::node::{GridIndex, Node};

/// Errors raised by grid construction and lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// A grid index or coordinate that does not belong to this grid
    #[error("node ({col}, {row}) is not part of the navigation grid")]
    NodeNotInGrid { col: usize, row: usize },
    /// No node sits at the given world coordinates
    #[error("no node at world coordinates ({x}, {y})")]
    NoNodeAt { x: i32, y: i32 },
    /// Columns of differing length were supplied
    #[error("column {column} has {found} rows, expected {expected}")]
    RaggedGrid {
        column: usize,
        expected: usize,
        found: usize,
    },
    /// The grid would contain no nodes
    #[error("navigation grid has no nodes")]
    EmptyGrid,
    /// Node spacing must be positive
    #[error("grid stride must be positive, got {0}")]
    InvalidStride(i32),
}

/// Cost of stepping between two adjacent nodes
///
/// Kept as a trait so weighted terrain or diagonal steps can plug in
/// without touching the search.
pub trait MovementCost {
    /// Cost of moving from `from` to its neighbour `to`
    fn cost(&self, from: &Node, to: &Node) -> i32;
}

/// Every step costs 1
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl MovementCost for UniformCost {
    fn cost(&self, _from: &Node, _to: &Node) -> i32 {
        1
    }
}

/// Layout of a navigation grid laid over the arena floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Lowest node X coordinate
    pub x_min: i32,
    /// Highest X coordinate a node may take (inclusive)
    pub x_max: i32,
    /// Lowest node Z coordinate
    pub z_min: i32,
    /// Highest Z coordinate a node may take (inclusive)
    pub z_max: i32,
    /// World units between neighbouring nodes
    pub stride: i32,
    /// Block the outermost ring of nodes
    pub wall_border: bool,
    /// Additional blocked nodes, by world coordinates
    #[serde(default)]
    pub walls: Vec<(i32, i32)>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            x_min: -90,
            x_max: 94,
            z_min: -90,
            z_max: 92,
            stride: 2,
            wall_border: true,
            walls: Vec::new(),
        }
    }
}

/// Result of pathfinding
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathResult {
    /// Grid indices from start to goal, both included
    pub nodes: Vec<GridIndex>,
    /// Node world coordinates, parallel to `nodes`
    pub waypoints: Vec<Vec2>,
    /// Total path length in world units
    pub length: f32,
}

impl PathResult {
    /// Check if path was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the path
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// A rectangular navigation grid, stored column by column
#[derive(Debug, Clone)]
pub struct Map {
    columns: usize,
    rows: usize,
    nodes: Vec<Node>,
}

impl Map {
    /// Create an open grid with nodes at `(col * spacing, row * spacing)`
    ///
    /// # Errors
    ///
    /// Returns [`NavError::EmptyGrid`] if either dimension is zero
    pub fn new(columns: usize, rows: usize, spacing: i32) -> Result<Self, NavError> {
        if columns == 0 || rows == 0 {
            return Err(NavError::EmptyGrid);
        }

        let mut nodes = Vec::with_capacity(columns * rows);
        for col in 0..columns {
            for row in 0..rows {
                nodes.push(Node::new(col as i32 * spacing, row as i32 * spacing));
            }
        }

        Ok(Self {
            columns,
            rows,
            nodes,
        })
    }

    /// Build a grid from explicit columns of nodes
    ///
    /// # Errors
    ///
    /// Returns an error if there are no nodes or the columns differ in length
    pub fn from_columns(columns: Vec<Vec<Node>>) -> Result<Self, NavError> {
        let rows = columns.first().map_or(0, Vec::len);
        if rows == 0 {
            return Err(NavError::EmptyGrid);
        }

        let width = columns.len();
        let mut nodes = Vec::with_capacity(width * rows);
        for (index, column) in columns.into_iter().enumerate() {
            if column.len() != rows {
                return Err(NavError::RaggedGrid {
                    column: index,
                    expected: rows,
                    found: column.len(),
                });
            }
            nodes.extend(column);
        }

        Ok(Self {
            columns: width,
            rows,
            nodes,
        })
    }

    /// Lay a grid over the arena floor
    ///
    /// # Errors
    ///
    /// Returns an error if the stride is not positive or the bounds are empty
    pub fn from_config(config: &GridConfig) -> Result<Self, NavError> {
        if config.stride <= 0 {
            return Err(NavError::InvalidStride(config.stride));
        }
        let stride = config.stride as usize;
        let walls: FxHashSet<(i32, i32)> = config.walls.iter().copied().collect();

        let columns = (config.x_min..=config.x_max)
            .step_by(stride)
            .map(|x| {
                (config.z_min..=config.z_max)
                    .step_by(stride)
                    .map(|z| {
                        let border = config.wall_border
                            && (x <= config.x_min
                                || x >= config.x_max
                                || z <= config.z_min
                                || z >= config.z_max);
                        let mut node = Node::new(x, z);
                        node.set_blocked(border || walls.contains(&(x, z)));
                        node
                    })
                    .collect()
            })
            .collect();

        let map = Self::from_columns(columns)?;
        log::debug!(
            "Built navigation grid {}x{} ({} walls)",
            map.columns,
            map.rows,
            map.nodes.iter().filter(|n| n.is_blocked()).count()
        );
        Ok(map)
    }

    /// Number of columns
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns
    }

    /// Number of rows
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows
    }

    /// Total number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the grid has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if an index addresses a node of this grid
    #[must_use]
    pub fn contains(&self, index: GridIndex) -> bool {
        index.col < self.columns && index.row < self.rows
    }

    fn slot(&self, index: GridIndex) -> Result<usize, NavError> {
        if self.contains(index) {
            Ok(index.col * self.rows + index.row)
        } else {
            Err(NavError::NodeNotInGrid {
                col: index.col,
                row: index.row,
            })
        }
    }

    fn index_at(&self, slot: usize) -> GridIndex {
        GridIndex::new(slot / self.rows, slot % self.rows)
    }

    /// Get a node
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NodeNotInGrid`] for an index outside the grid
    pub fn node(&self, index: GridIndex) -> Result<&Node, NavError> {
        let slot = self.slot(index)?;
        Ok(&self.nodes[slot])
    }

    /// Get a node mutably
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NodeNotInGrid`] for an index outside the grid
    pub fn node_mut(&mut self, index: GridIndex) -> Result<&mut Node, NavError> {
        let slot = self.slot(index)?;
        Ok(&mut self.nodes[slot])
    }

    /// Set a node's passability
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NodeNotInGrid`] for an index outside the grid
    pub fn set_blocked(&mut self, index: GridIndex, blocked: bool) -> Result<(), NavError> {
        self.node_mut(index)?.set_blocked(blocked);
        Ok(())
    }

    /// Iterate over all nodes in column-major order
    pub fn nodes(&self) -> impl Iterator<Item = (GridIndex, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(slot, node)| (self.index_at(slot), node))
    }

    /// Find the grid index of the node at the given world coordinates
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NoNodeAt`] if no node has those coordinates
    pub fn index_of(&self, x: i32, y: i32) -> Result<GridIndex, NavError> {
        self.nodes
            .iter()
            .position(|node| node.x() == x && node.y() == y)
            .map(|slot| self.index_at(slot))
            .ok_or(NavError::NoNodeAt { x, y })
    }

    /// The node closest to a world position, compared on the X/Z plane
    ///
    /// Ties go to the node that comes first in column-major order.
    #[must_use]
    pub fn closest_node(&self, position: Vec3) -> Option<GridIndex> {
        let target = Vec2::new(position.x, position.z);
        let mut best: Option<(usize, f32)> = None;

        for (slot, node) in self.nodes.iter().enumerate() {
            let distance = target.distance(node.position().as_vec2());
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((slot, distance));
            }
        }

        best.map(|(slot, _)| self.index_at(slot))
    }

    /// Get the 4-directional neighbours of a node (left, right, up, down)
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NodeNotInGrid`] for an index outside the grid
    pub fn neighbours(&self, index: GridIndex) -> Result<SmallVec<[GridIndex; 4]>, NavError> {
        self.slot(index)?;
        Ok(self.neighbour_indices(index))
    }

    fn neighbour_indices(&self, index: GridIndex) -> SmallVec<[GridIndex; 4]> {
        let GridIndex { col, row } = index;
        let mut result = SmallVec::new();

        if col > 0 {
            result.push(GridIndex::new(col - 1, row));
        }
        if col + 1 < self.columns {
            result.push(GridIndex::new(col + 1, row));
        }
        if row > 0 {
            result.push(GridIndex::new(col, row - 1));
        }
        if row + 1 < self.rows {
            result.push(GridIndex::new(col, row + 1));
        }

        result
    }

    /// Clear the search state of every node
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
    }

    /// Straight-line distance between node coordinates, truncated
    #[must_use]
    pub fn heuristic(from: &Node, to: &Node) -> i32 {
        let dx = i64::from(to.x()) - i64::from(from.x());
        let dy = i64::from(to.y()) - i64::from(from.y());
        ((dx * dx + dy * dy) as f64).sqrt() as i32
    }

    /// Find a path with unit step costs
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NodeNotInGrid`] if either endpoint is outside the grid
    pub fn find_path(&mut self, start: GridIndex, goal: GridIndex) -> Result<PathResult, NavError> {
        self.find_path_with(start, goal, &UniformCost)
    }

    /// Find a path using the A* algorithm and the given step costs
    ///
    /// An empty result means the goal cannot be reached, or that one of
    /// the endpoints is blocked.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NodeNotInGrid`] if either endpoint is outside the grid
    pub fn find_path_with<C: MovementCost + ?Sized>(
        &mut self,
        start: GridIndex,
        goal: GridIndex,
        cost: &C,
    ) -> Result<PathResult, NavError> {
        let start_slot = self.slot(start)?;
        let goal_slot = self.slot(goal)?;

        if self.nodes[start_slot].is_blocked() || self.nodes[goal_slot].is_blocked() {
            log::debug!("Path {start:?} -> {goal:?} rejected: endpoint is blocked");
            return Ok(PathResult::default());
        }

        self.reset();

        let mut open: Vec<GridIndex> = vec![start];
        let mut closed: FxHashSet<GridIndex> = FxHashSet::default();

        let start_h = Self::heuristic(&self.nodes[start_slot], &self.nodes[goal_slot]);
        self.nodes[start_slot].g = 0;
        self.nodes[start_slot].h = start_h;

        let mut iterations = 0usize;
        while !open.is_empty() {
            iterations += 1;

            // Stable sort: equal costs keep insertion order
            open.sort_by_key(|&index| self.nodes[index.col * self.rows + index.row].f());
            let current = open[0];
            let current_slot = current.col * self.rows + current.row;

            if self.nodes[current_slot].is_blocked() {
                closed.insert(current);
                open.retain(|&index| index != current);
                continue;
            }

            if current == goal {
                let path = self.reconstruct_path(current_slot);
                log::trace!(
                    "Path {start:?} -> {goal:?}: {} nodes after {iterations} iterations",
                    path.len()
                );
                return Ok(path);
            }

            open.retain(|&index| index != current);
            closed.insert(current);

            for neighbour in self.neighbour_indices(current) {
                if closed.contains(&neighbour) {
                    continue;
                }

                let slot = neighbour.col * self.rows + neighbour.row;
                if !open.contains(&neighbour) {
                    let h = Self::heuristic(&self.nodes[slot], &self.nodes[goal_slot]);
                    self.nodes[slot].h = h;
                    open.push(neighbour);
                }

                let step = cost.cost(&self.nodes[current_slot], &self.nodes[slot]);
                let tentative_g = self.nodes[current_slot].g.saturating_add(step);
                if tentative_g >= self.nodes[slot].g {
                    continue;
                }

                let node = &mut self.nodes[slot];
                node.set_parent(current);
                node.g = tentative_g;
            }
        }

        log::debug!("No path {start:?} -> {goal:?} after {iterations} iterations");
        Ok(PathResult::default())
    }

    fn reconstruct_path(&self, goal_slot: usize) -> PathResult {
        let mut nodes = vec![self.index_at(goal_slot)];
        let mut current = &self.nodes[goal_slot];

        while let Some(parent) = current.parent() {
            nodes.push(parent);
            current = &self.nodes[parent.col * self.rows + parent.row];
        }

        nodes.reverse();

        let waypoints: Vec<Vec2> = nodes
            .iter()
            .map(|index| self.nodes[index.col * self.rows + index.row].position().as_vec2())
            .collect();
        let length = calculate_path_length(&waypoints);

        PathResult {
            nodes,
            waypoints,
            length,
        }
    }
}

/// Calculate total path length
fn calculate_path_length(waypoints: &[Vec2]) -> f32 {
    waypoints
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid() -> Map {
        // 5x5 nodes at (0,0)..(8,8), spaced by 2
        Map::new(5, 5, 2).unwrap()
    }

    fn assert_walkable_and_contiguous(map: &Map, path: &PathResult) {
        for index in &path.nodes {
            assert!(!map.node(*index).unwrap().is_blocked(), "{index:?} is a wall");
        }
        for pair in path.nodes.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]), "{pair:?} not adjacent");
        }
    }

    #[test]
    fn test_open_grid_corner_to_corner() {
        let mut map = open_grid();
        let path = map
            .find_path(GridIndex::new(0, 0), GridIndex::new(4, 4))
            .unwrap();

        assert_eq!(path.len(), 9);
        assert_walkable_and_contiguous(&map, &path);
        for pair in path.waypoints.windows(2) {
            assert!(pair[1].x >= pair[0].x && pair[1].y >= pair[0].y);
            assert!(pair[1] != pair[0]);
        }
        assert_eq!(path.waypoints[0], Vec2::new(0.0, 0.0));
        assert_eq!(path.waypoints[8], Vec2::new(8.0, 8.0));
        assert!((path.length - 16.0).abs() < 0.001);
    }

    #[test]
    fn test_open_grid_exact_route() {
        let mut map = open_grid();
        let path = map
            .find_path(GridIndex::new(0, 0), GridIndex::new(4, 4))
            .unwrap();

        let expected = [
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (2, 2),
            (3, 2),
            (3, 3),
            (4, 3),
            (4, 4),
        ]
        .map(|(col, row)| GridIndex::new(col, row));
        assert_eq!(path.nodes, expected);
    }

    #[test]
    fn test_wall_with_gap_at_top() {
        let mut map = open_grid();
        // Block world x = 4 except the top row (y = 8)
        for row in 0..4 {
            map.set_blocked(GridIndex::new(2, row), true).unwrap();
        }

        let path = map
            .find_path(GridIndex::new(0, 0), GridIndex::new(4, 0))
            .unwrap();

        assert_eq!(path.len(), 13);
        assert_walkable_and_contiguous(&map, &path);
        let crossings: Vec<_> = path.waypoints.iter().filter(|p| p.x == 4.0).collect();
        assert_eq!(crossings, vec![&Vec2::new(4.0, 8.0)]);
        assert_eq!(*path.waypoints.last().unwrap(), Vec2::new(8.0, 0.0));
    }

    #[test]
    fn test_grid_pathfinding() {
        let mut map = Map::new(10, 10, 1).unwrap();

        // Create a wall
        for y in 2..8 {
            map.set_blocked(GridIndex::new(5, y), true).unwrap();
        }

        let path = map
            .find_path(GridIndex::new(2, 5), GridIndex::new(8, 5))
            .unwrap();

        assert!(!path.is_empty());
        assert_eq!(path.len(), 13); // Should go around the wall
        assert_walkable_and_contiguous(&map, &path);
    }

    #[test]
    fn test_direct_path() {
        let mut map = Map::new(10, 10, 1).unwrap();

        let path = map
            .find_path(GridIndex::new(0, 0), GridIndex::new(3, 0))
            .unwrap();

        assert_eq!(path.len(), 4); // 4 cells in a line
        assert!((path.length - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_trivial_path() {
        let mut map = open_grid();
        let node = GridIndex::new(2, 3);

        let path = map.find_path(node, node).unwrap();

        assert_eq!(path.nodes, vec![node]);
        assert_eq!(path.length, 0.0);
    }

    #[test]
    fn test_blocked_goal() {
        let mut map = Map::new(5, 5, 1).unwrap();

        // Block everything around goal
        map.set_blocked(GridIndex::new(3, 2), true).unwrap();
        map.set_blocked(GridIndex::new(3, 4), true).unwrap();
        map.set_blocked(GridIndex::new(2, 3), true).unwrap();
        map.set_blocked(GridIndex::new(4, 3), true).unwrap();
        map.set_blocked(GridIndex::new(3, 3), true).unwrap();

        let path = map
            .find_path(GridIndex::new(0, 0), GridIndex::new(3, 3))
            .unwrap();

        assert!(path.is_empty());
    }

    #[test]
    fn test_blocked_start() {
        let mut map = open_grid();
        map.set_blocked(GridIndex::new(0, 0), true).unwrap();

        let path = map
            .find_path(GridIndex::new(0, 0), GridIndex::new(4, 4))
            .unwrap();

        assert!(path.is_empty());
    }

    #[test]
    fn test_enclosed_goal_unreachable() {
        let mut map = open_grid();
        for (col, row) in [(2, 1), (1, 2), (3, 2), (2, 3)] {
            map.set_blocked(GridIndex::new(col, row), true).unwrap();
        }

        let path = map
            .find_path(GridIndex::new(0, 0), GridIndex::new(2, 2))
            .unwrap();

        assert!(path.is_empty());
    }

    #[test]
    fn test_repeated_searches_are_deterministic() {
        let mut map = open_grid();
        map.set_blocked(GridIndex::new(2, 2), true).unwrap();

        let first = map
            .find_path(GridIndex::new(0, 4), GridIndex::new(4, 0))
            .unwrap();
        // An unrelated search in between must not leak state
        map.find_path(GridIndex::new(4, 4), GridIndex::new(0, 1))
            .unwrap();
        let second = map
            .find_path(GridIndex::new(0, 4), GridIndex::new(4, 0))
            .unwrap();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_index_outside_grid() {
        let mut map = open_grid();
        let result = map.find_path(GridIndex::new(0, 0), GridIndex::new(5, 0));

        assert_eq!(result, Err(NavError::NodeNotInGrid { col: 5, row: 0 }));
        assert!(map.neighbours(GridIndex::new(0, 9)).is_err());
    }

    #[test]
    fn test_neighbours_order_and_bounds() {
        let map = open_grid();

        let corner = map.neighbours(GridIndex::new(0, 0)).unwrap();
        assert_eq!(corner.as_slice(), &[GridIndex::new(1, 0), GridIndex::new(0, 1)]);

        let centre = map.neighbours(GridIndex::new(2, 2)).unwrap();
        assert_eq!(
            centre.as_slice(),
            &[
                GridIndex::new(1, 2),
                GridIndex::new(3, 2),
                GridIndex::new(2, 1),
                GridIndex::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_heuristic_truncates() {
        let a = Node::new(0, 0);
        let b = Node::new(2, 2);
        // sqrt(8) = 2.83
        assert_eq!(Map::heuristic(&a, &b), 2);
        assert_eq!(Map::heuristic(&a, &Node::new(8, 8)), 11);
    }

    #[test]
    fn test_weighted_cost_model() {
        struct Expensive;
        impl MovementCost for Expensive {
            fn cost(&self, _from: &Node, _to: &Node) -> i32 {
                10
            }
        }

        let mut map = open_grid();
        let path = map
            .find_path_with(GridIndex::new(0, 0), GridIndex::new(4, 0), &Expensive)
            .unwrap();

        assert_eq!(path.len(), 5);
        assert_eq!(map.node(GridIndex::new(4, 0)).unwrap().g(), 40);
    }

    #[test]
    fn test_closest_node() {
        let map = open_grid();

        assert_eq!(
            map.closest_node(Vec3::new(5.1, 10.0, 2.2)),
            Some(GridIndex::new(3, 1))
        );
        // Equidistant between (0,0) and (2,0): first in column order wins
        assert_eq!(
            map.closest_node(Vec3::new(1.0, 0.0, 0.0)),
            Some(GridIndex::new(0, 0))
        );
        assert_eq!(
            map.closest_node(Vec3::new(-50.0, 0.0, 50.0)),
            Some(GridIndex::new(0, 4))
        );
    }

    #[test]
    fn test_index_of() {
        let map = open_grid();
        assert_eq!(map.index_of(6, 2), Ok(GridIndex::new(3, 1)));
        assert_eq!(map.index_of(5, 2), Err(NavError::NoNodeAt { x: 5, y: 2 }));
    }

    #[test]
    fn test_from_columns_rejects_ragged() {
        let columns = vec![
            vec![Node::new(0, 0), Node::new(0, 1)],
            vec![Node::new(1, 0)],
        ];
        assert_eq!(
            Map::from_columns(columns).unwrap_err(),
            NavError::RaggedGrid {
                column: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(Map::from_columns(Vec::new()).unwrap_err(), NavError::EmptyGrid);
    }

    #[test]
    fn test_new_rejects_empty_grid() {
        assert_eq!(Map::new(0, 0, 2).unwrap_err(), NavError::EmptyGrid);
        assert_eq!(Map::new(4, 0, 2).unwrap_err(), NavError::EmptyGrid);
        assert_eq!(Map::new(1, 1, 2).unwrap().len(), 1);
    }

    #[test]
    fn test_from_config_border_and_walls() {
        let config = GridConfig {
            x_min: -4,
            x_max: 4,
            z_min: -4,
            z_max: 4,
            stride: 2,
            wall_border: true,
            walls: vec![(0, 0)],
        };
        let map = Map::from_config(&config).unwrap();

        assert_eq!(map.width(), 5);
        assert_eq!(map.height(), 5);
        let blocked = map.nodes().filter(|(_, n)| n.is_blocked()).count();
        assert_eq!(blocked, 16 + 1);
        assert!(map.node(map.index_of(0, 0).unwrap()).unwrap().is_blocked());
        assert!(!map.node(map.index_of(-2, 2).unwrap()).unwrap().is_blocked());
    }

    #[test]
    fn test_default_arena_grid() {
        let map = Map::from_config(&GridConfig::default()).unwrap();

        // x: -90..=94 step 2, z: -90..=92 step 2
        assert_eq!(map.width(), 93);
        assert_eq!(map.height(), 92);
    }

    #[test]
    fn test_from_config_rejects_bad_stride() {
        let config = GridConfig {
            stride: 0,
            ..GridConfig::default()
        };
        assert_eq!(
            Map::from_config(&config).unwrap_err(),
            NavError::InvalidStride(0)
        );
    }
}
