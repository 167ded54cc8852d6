use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use tracing::debug;

use crate::graph::{Graph, Node};

/// Accumulated cost from the search source. `Unreachable` orders after
/// every finite distance and plays the role of infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    Unreachable,
}

impl Distance {
    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(cost) => Some(cost),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(cost) => write!(f, "{}", cost),
            Distance::Unreachable => f.write_str("inf"),
        }
    }
}

/// Minimum distance from a single source to every node of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap<N: Node> {
    source: N,
    distances: HashMap<N, Distance>,
}

impl<N: Node> DistanceMap<N> {
    pub fn source(&self) -> N {
        self.source
    }

    /// Distance to `node`; nodes outside the graph are unreachable.
    pub fn get(&self, node: N) -> Distance {
        self.distances
            .get(&node)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (N, Distance)> + '_ {
        self.distances.iter().map(|(&node, &distance)| (node, distance))
    }

    /// Nodes with a finite distance, paired with that distance.
    pub fn reachable(&self) -> impl Iterator<Item = (N, u64)> + '_ {
        self.distances
            .iter()
            .filter_map(|(&node, distance)| distance.finite().map(|cost| (node, cost)))
    }

    /// Smallest distance among `nodes`.
    pub fn min_over(&self, nodes: impl IntoIterator<Item = N>) -> Distance {
        nodes
            .into_iter()
            .map(|node| self.get(node))
            .min()
            .unwrap_or(Distance::Unreachable)
    }
}

/// Run Dijkstra's algorithm from `source` over a graph with non-negative
/// weights.
///
/// Every node of the graph appears in the result; nodes the search never
/// reaches are [`Distance::Unreachable`]. A source that is not part of the
/// graph yields a map containing only the source at distance zero.
pub fn shortest_distances<N: Node>(graph: &Graph<N>, source: N) -> DistanceMap<N> {
    let mut distances: HashMap<N, Distance> = graph
        .nodes()
        .map(|node| (node, Distance::Unreachable))
        .collect();
    distances.insert(source, Distance::Finite(0));

    let mut finalized: HashSet<N> = HashSet::new();
    let mut queue = BinaryHeap::new();
    queue.push(QueueEntry::new(source, 0));

    while let Some(entry) = queue.pop() {
        if !finalized.insert(entry.node) {
            continue;
        }

        for edge in graph.neighbours(entry.node) {
            let next_cost = entry.cost + edge.weight;
            let known = distances
                .get(&edge.target)
                .copied()
                .unwrap_or(Distance::Unreachable);
            if Distance::Finite(next_cost) < known {
                distances.insert(edge.target, Distance::Finite(next_cost));
                queue.push(QueueEntry::new(edge.target, next_cost));
            }
        }
    }

    debug!(
        nodes = distances.len(),
        finalized = finalized.len(),
        "shortest distances computed"
    );

    DistanceMap { source, distances }
}

/// Collect every node lying on at least one minimum-cost path to the best
/// of `targets`.
///
/// `reversed` must be the transpose of the graph that produced `distances`.
/// Only targets achieving the minimum finite distance seed the backward
/// walk; an edge `m -> n` of weight `w` is followed iff
/// `dist(m) + w == dist(n)`. Returns an empty set when no target is
/// reachable.
pub fn shortest_path_members<N: Node>(
    reversed: &Graph<N>,
    distances: &DistanceMap<N>,
    targets: impl IntoIterator<Item = N>,
) -> HashSet<N> {
    let targets: Vec<N> = targets.into_iter().collect();
    let Some(best) = targets
        .iter()
        .filter_map(|&target| distances.get(target).finite())
        .min()
    else {
        return HashSet::new();
    };

    let mut members: HashSet<N> = targets
        .into_iter()
        .filter(|&target| distances.get(target) == Distance::Finite(best))
        .collect();
    let mut frontier: Vec<N> = members.iter().copied().collect();

    while let Some(node) = frontier.pop() {
        let Some(cost) = distances.get(node).finite() else {
            continue;
        };
        for edge in reversed.neighbours(node) {
            let on_path = distances
                .get(edge.target)
                .finite()
                .is_some_and(|previous| previous + edge.weight == cost);
            if on_path && members.insert(edge.target) {
                frontier.push(edge.target);
            }
        }
    }

    members
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<N> {
    node: N,
    cost: u64,
}

impl<N> QueueEntry<N> {
    fn new(node: N, cost: u64) -> Self {
        Self { node, cost }
    }
}

impl<N: Ord> Ord for QueueEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<N: Ord> PartialOrd for QueueEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
