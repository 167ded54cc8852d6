//! Playground: junction boxes wired into circuits, closest pairs first.

use tracing::debug;

use crate::error::{Error, Result};
use crate::parse::{integers, lines};

const PUZZLE: &str = "aoc25:p08";

/// Closest pairs joined before measuring circuits in part one.
pub const DEFAULT_CONNECTIONS: usize = 1000;

type Point = [i64; 3];

fn boxes(input: &str) -> Result<Vec<Point>> {
    lines(input)
        .map(|line| match integers(line)[..] {
            [x, y, z] => Ok([x, y, z]),
            _ => Err(Error::parse(PUZZLE, format!("bad junction box '{}'", line))),
        })
        .collect()
}

/// Every pair of boxes, nearest first. Squared distance keeps it exact.
fn pairs_by_distance(points: &[Point]) -> Vec<(i64, usize, usize)> {
    let mut pairs = Vec::with_capacity(points.len() * points.len().saturating_sub(1) / 2);
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            let distance: i64 = points[i]
                .iter()
                .zip(&points[j])
                .map(|(a, b)| (a - b) * (a - b))
                .sum();
            pairs.push((distance, i, j));
        }
    }
    pairs.sort_unstable();
    pairs
}

/// Disjoint sets with path halving and union by size.
struct Circuits {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl Circuits {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    /// Join two boxes; returns false when they were already connected.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.count -= 1;
        true
    }

    fn sizes(&mut self) -> Vec<usize> {
        let roots: Vec<usize> = (0..self.parent.len())
            .filter(|&node| self.find(node) == node)
            .collect();
        roots.into_iter().map(|root| self.size[root]).collect()
    }
}

/// Product of the three largest circuits after the closest `connections` pairs.
pub fn part_a(input: &str, connections: usize) -> Result<u64> {
    let points = boxes(input)?;
    let mut circuits = Circuits::new(points.len());
    for &(_, i, j) in pairs_by_distance(&points).iter().take(connections) {
        circuits.union(i, j);
    }

    let mut sizes = circuits.sizes();
    if sizes.len() < 3 {
        return Err(Error::no_solution(PUZZLE, "fewer than three circuits remain"));
    }
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    Ok(sizes.iter().take(3).map(|&size| size as u64).product())
}

/// Product of the x coordinates of the pair that joins everything into one circuit.
pub fn part_b(input: &str) -> Result<i64> {
    let points = boxes(input)?;
    let mut circuits = Circuits::new(points.len());
    for (joined, &(_, i, j)) in pairs_by_distance(&points).iter().enumerate() {
        if circuits.union(i, j) && circuits.count == 1 {
            debug!(joined, "single circuit formed");
            return Ok(points[i][0] * points[j][0]);
        }
    }
    Err(Error::no_solution(PUZZLE, "boxes never form a single circuit"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_report_one_entry_per_circuit() {
        let mut circuits = Circuits::new(6);
        circuits.union(0, 1);
        circuits.union(1, 2);
        circuits.union(3, 4);

        let mut sizes = circuits.sizes();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 2, 3]);
        assert_eq!(circuits.count, 3);
    }

    #[test]
    fn largest_circuits_multiply() {
        let input = "0,0,0\n1,0,0\n2,0,0\n100,0,0\n101,0,0\n500,0,0\n900,0,0\n";
        // Three closest pairs leave circuits of 3, 2, 1 and 1 boxes.
        assert_eq!(part_a(input, 3).unwrap(), 6);
    }
}
