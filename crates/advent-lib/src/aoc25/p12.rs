//! Christmas Tree Farm: do the listed presents fit under each tree?
//!
//! Regions are classified by two cheap bounds rather than by packing. A
//! region is too small when the presents' cells outnumber its own. It is
//! certainly large enough when every present gets a separate 3×3 block.
//! Anything in between is reported as undecided instead of guessed.

use tracing::debug;

use crate::error::{Error, Result};
use crate::parse::{integers, lines};

const PUZZLE: &str = "aoc25:p12";

/// Every present fits inside a block of this side length.
const BLOCK: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Region {
    width: usize,
    height: usize,
    counts: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Farm {
    /// Occupied cells of each present shape.
    areas: Vec<usize>,
    regions: Vec<Region>,
}

fn parse(input: &str) -> Result<Farm> {
    let mut areas = Vec::new();
    let mut regions = Vec::new();
    let mut shape: Option<Vec<&str>> = None;

    for line in lines(input).map(str::trim) {
        if let Some((size, counts)) = line.split_once(':').filter(|(size, _)| size.contains('x')) {
            if let Some(rows) = shape.take() {
                areas.push(shape_area(&rows)?);
            }
            regions.push(region(size, counts)?);
        } else if line.ends_with(':') {
            if !regions.is_empty() {
                return Err(Error::parse(PUZZLE, "shapes must come before regions"));
            }
            if let Some(rows) = shape.replace(Vec::new()) {
                areas.push(shape_area(&rows)?);
            }
        } else if let Some(rows) = shape.as_mut() {
            rows.push(line);
        } else {
            return Err(Error::parse(PUZZLE, format!("unexpected line '{}'", line)));
        }
    }
    if let Some(rows) = shape.take() {
        areas.push(shape_area(&rows)?);
    }

    if let Some(region) = regions.iter().find(|region| region.counts.len() > areas.len()) {
        return Err(Error::parse(
            PUZZLE,
            format!(
                "region {}x{} lists {} shapes but only {} exist",
                region.width,
                region.height,
                region.counts.len(),
                areas.len()
            ),
        ));
    }
    Ok(Farm { areas, regions })
}

fn region(size: &str, counts: &str) -> Result<Region> {
    let bad = || Error::parse(PUZZLE, format!("bad region '{}:{}'", size, counts));
    let [width, height] = integers(size)[..] else {
        return Err(bad());
    };
    let counts = integers(counts)
        .into_iter()
        .map(|count| usize::try_from(count).map_err(|_| bad()))
        .collect::<Result<Vec<_>>>()?;
    Ok(Region {
        width: usize::try_from(width).map_err(|_| bad())?,
        height: usize::try_from(height).map_err(|_| bad())?,
        counts,
    })
}

fn shape_area(rows: &[&str]) -> Result<usize> {
    if rows.is_empty() || rows.len() > BLOCK || rows.iter().any(|row| row.len() > BLOCK) {
        return Err(Error::parse(PUZZLE, "present shapes must fit in a 3x3 block"));
    }
    if let Some(row) = rows.iter().find(|row| row.bytes().any(|b| b != b'#' && b != b'.')) {
        return Err(Error::parse(PUZZLE, format!("bad shape row '{}'", row)));
    }
    Ok(rows.iter().map(|row| row.bytes().filter(|&b| b == b'#').count()).sum())
}

impl Region {
    /// `Some(true)` when the presents surely fit, `Some(false)` when they
    /// surely do not, `None` when neither bound decides.
    fn fits(&self, areas: &[usize]) -> Option<bool> {
        let needed: usize = self
            .counts
            .iter()
            .zip(areas)
            .map(|(count, area)| count * area)
            .sum();
        if needed > self.width * self.height {
            return Some(false);
        }
        let presents: usize = self.counts.iter().sum();
        let blocks = (self.width / BLOCK) * (self.height / BLOCK);
        (presents <= blocks).then_some(true)
    }
}

/// Regions that can hold every listed present.
pub fn part_a(input: &str) -> Result<usize> {
    let farm = parse(input)?;
    let mut fitting = 0;
    for region in &farm.regions {
        match region.fits(&farm.areas) {
            Some(true) => fitting += 1,
            Some(false) => debug!(width = region.width, height = region.height, "region too small"),
            None => {
                return Err(Error::no_solution(
                    PUZZLE,
                    format!(
                        "region {}x{} is neither clearly too small nor clearly large enough",
                        region.width, region.height
                    ),
                ));
            }
        }
    }
    Ok(fitting)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPES: &str = "0:\n###\n##.\n##.\n\n1:\n#.#\n###\n#..\n\n";

    #[test]
    fn parses_shapes_and_regions() {
        let farm = parse(&format!("{}6x6: 2 2\n3x3: 1 1\n", SHAPES)).unwrap();
        assert_eq!(farm.areas, vec![7, 6]);
        assert_eq!(
            farm.regions[0],
            Region {
                width: 6,
                height: 6,
                counts: vec![2, 2]
            }
        );
    }

    #[test]
    fn counts_clearly_decided_regions() {
        // 6x6 holds four 3x3 blocks; 3x3 has fewer cells than two presents.
        let input = format!("{}6x6: 2 2\n3x3: 1 1\n", SHAPES);
        assert_eq!(part_a(&input).unwrap(), 1);
    }

    #[test]
    fn undecided_region_fails_fast() {
        let input = format!("{}5x5: 1 1\n", SHAPES);
        assert!(matches!(part_a(&input), Err(Error::NoSolution { .. })));
    }

    #[test]
    fn oversized_shape_is_rejected() {
        let input = "0:\n####\n\n4x4: 1\n";
        assert!(matches!(part_a(input), Err(Error::Parse { .. })));
    }
}
