use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::grid::{Grid, Heading, Pose, Position};

/// Cost of a single 90° turn in the orientation-aware maze.
pub const TURN_COST: u64 = 1000;

/// Identity of a search node. Ordering is only used to break ties in the
/// frontier so that searches are deterministic.
pub trait Node: Copy + Eq + Hash + Ord + Debug {}

impl<T: Copy + Eq + Hash + Ord + Debug> Node for T {}

/// Directed, weighted edge within a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<N> {
    pub target: N,
    pub weight: u64,
}

/// Adjacency structure used by the shortest-path search.
///
/// Every node that can be reached through an edge is also present as a key,
/// possibly with no outgoing edges.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    adjacency: HashMap<N, Vec<Edge<N>>>,
}

impl<N: Node> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<N: Node> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node with no outgoing edges if it is not already present.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Insert or replace the edge `from -> to`.
    pub fn add_edge(&mut self, from: N, to: N, weight: u64) {
        self.add_node(to);
        let edges = self.adjacency.entry(from).or_default();
        if let Some(existing) = edges.iter_mut().find(|edge| edge.target == to) {
            existing.weight = weight;
        } else {
            edges.push(Edge { target: to, weight });
        }
    }

    pub fn contains(&self, node: N) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Outgoing edges of `node`; empty for unknown nodes.
    pub fn neighbours(&self, node: N) -> &[Edge<N>] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Graph with every edge reversed. Node set is unchanged.
    pub fn transpose(&self) -> Graph<N> {
        let mut reversed = Graph::new();
        for (&from, edges) in &self.adjacency {
            reversed.add_node(from);
            for edge in edges {
                reversed
                    .adjacency
                    .entry(edge.target)
                    .or_default()
                    .push(Edge {
                        target: from,
                        weight: edge.weight,
                    });
            }
        }
        reversed
    }

    /// Remove a node together with every edge that points at it.
    pub fn remove_node(&mut self, node: N) {
        if self.adjacency.remove(&node).is_none() {
            return;
        }
        for edges in self.adjacency.values_mut() {
            edges.retain(|edge| edge.target != node);
        }
    }
}

/// Build a graph with one node per open cell and unit edges between
/// orthogonally adjacent open cells.
pub fn build_grid_graph(grid: &Grid) -> Graph<Position> {
    let mut graph = Graph::new();
    for pos in grid.positions().filter(|&pos| grid.is_open(pos)) {
        graph.add_node(pos);
        for next in pos.orthogonal() {
            if grid.is_open(next) {
                graph.add_edge(pos, next, 1);
            }
        }
    }
    graph
}

/// Build a graph over `(cell, heading)` poses. Moving forward costs 1,
/// a quarter turn costs `turn_cost` and a half turn twice that.
pub fn build_oriented_graph(grid: &Grid, turn_cost: u64) -> Graph<Pose> {
    let mut graph = Graph::new();
    for pos in grid.positions().filter(|&pos| grid.is_open(pos)) {
        for heading in Heading::ALL {
            let pose = Pose::new(pos, heading);
            graph.add_edge(pose, Pose::new(pos, heading.turn_right()), turn_cost);
            graph.add_edge(pose, Pose::new(pos, heading.turn_left()), turn_cost);
            graph.add_edge(pose, Pose::new(pos, heading.reverse()), 2 * turn_cost);

            let ahead = pose.forward();
            if grid.is_open(ahead.position) {
                graph.add_edge(pose, ahead, 1);
            }
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_replaces_existing_weight() {
        let mut graph = Graph::new();
        graph.add_edge('a', 'b', 5);
        graph.add_edge('a', 'b', 2);
        assert_eq!(graph.neighbours('a'), &[Edge { target: 'b', weight: 2 }]);
        assert!(graph.contains('b'), "targets are registered as nodes");
    }

    #[test]
    fn remove_node_drops_incoming_edges() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 1);
        graph.add_edge(3, 2, 1);
        graph.add_edge(2, 1, 1);
        graph.remove_node(2);
        assert!(!graph.contains(2));
        assert!(graph.neighbours(1).is_empty());
        assert!(graph.neighbours(3).is_empty());
    }

    #[test]
    fn transpose_reverses_edges() {
        let mut graph = Graph::new();
        graph.add_edge('a', 'b', 3);
        let reversed = graph.transpose();
        assert!(reversed.neighbours('a').is_empty());
        assert_eq!(reversed.neighbours('b'), &[Edge { target: 'a', weight: 3 }]);
        assert_eq!(reversed.len(), 2);
    }
}
