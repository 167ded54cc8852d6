//! LAN Party: cliques in an undirected computer network.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::parse::lines;

const PUZZLE: &str = "aoc24:p23";

type Network<'a> = BTreeMap<&'a str, BTreeSet<&'a str>>;

fn network(input: &str) -> Result<Network<'_>> {
    let mut links: Network<'_> = BTreeMap::new();
    for line in lines(input) {
        let (a, b) = line
            .trim()
            .split_once('-')
            .ok_or_else(|| Error::parse(PUZZLE, format!("bad link '{}'", line)))?;
        links.entry(a).or_default().insert(b);
        links.entry(b).or_default().insert(a);
    }
    Ok(links)
}

/// Triangles with at least one computer whose name starts with `t`.
pub fn part_a(input: &str) -> Result<usize> {
    let links = network(input)?;
    let mut count = 0;
    for (&a, neighbours) in &links {
        for &b in neighbours.iter().filter(|&&b| b > a) {
            let Some(shared) = links.get(b) else {
                continue;
            };
            for &c in shared.intersection(neighbours).filter(|&&c| c > b) {
                if [a, b, c].iter().any(|name| name.starts_with('t')) {
                    count += 1;
                }
            }
        }
    }
    Ok(count)
}

/// Bron-Kerbosch with pivoting; keeps the largest maximal clique seen.
fn bron_kerbosch<'a>(
    links: &Network<'a>,
    clique: &mut Vec<&'a str>,
    mut candidates: BTreeSet<&'a str>,
    mut excluded: BTreeSet<&'a str>,
    best: &mut Vec<&'a str>,
) {
    if candidates.is_empty() {
        if excluded.is_empty() && clique.len() > best.len() {
            best.clone_from(clique);
        }
        return;
    }

    let empty = BTreeSet::new();
    let pivot = candidates
        .union(&excluded)
        .max_by_key(|&&v| links.get(v).map_or(0, |n| n.intersection(&candidates).count()))
        .copied();
    let pivot_links = pivot.and_then(|p| links.get(p)).unwrap_or(&empty);
    let to_visit: Vec<&str> = candidates.difference(pivot_links).copied().collect();

    for vertex in to_visit {
        let neighbours = links.get(vertex).unwrap_or(&empty);
        clique.push(vertex);
        bron_kerbosch(
            links,
            clique,
            candidates.intersection(neighbours).copied().collect(),
            excluded.intersection(neighbours).copied().collect(),
            best,
        );
        clique.pop();
        candidates.remove(vertex);
        excluded.insert(vertex);
    }
}

/// Password: the names of the largest clique, sorted and comma separated.
pub fn part_b(input: &str) -> Result<String> {
    let links = network(input)?;
    let mut best = Vec::new();
    bron_kerbosch(
        &links,
        &mut Vec::new(),
        links.keys().copied().collect(),
        BTreeSet::new(),
        &mut best,
    );
    best.sort_unstable();
    Ok(best.join(","))
}
