//! Disk Fragmenter: compact a dense disk map.

use crate::error::{Error, Result};

const PUZZLE: &str = "aoc24:p09";

fn digits(input: &str) -> Result<Vec<u64>> {
    input
        .trim()
        .bytes()
        .map(|b| match b {
            b'0'..=b'9' => Ok(u64::from(b - b'0')),
            _ => Err(Error::parse(PUZZLE, format!("unexpected byte '{}'", b as char))),
        })
        .collect()
}

/// Move single blocks from the end into the leftmost free slot.
pub fn part_a(input: &str) -> Result<u64> {
    let mut blocks: Vec<Option<u64>> = Vec::new();
    for (i, len) in digits(input)?.into_iter().enumerate() {
        let content = i.is_multiple_of(2).then_some(i as u64 / 2);
        blocks.extend(std::iter::repeat_n(content, len as usize));
    }

    if !blocks.is_empty() {
        let (mut left, mut right) = (0, blocks.len() - 1);
        while left < right {
            if blocks[right].is_none() {
                right -= 1;
            } else if blocks[left].is_some() {
                left += 1;
            } else {
                blocks.swap(left, right);
                left += 1;
                right -= 1;
            }
        }
    }

    Ok(blocks
        .iter()
        .enumerate()
        .filter_map(|(pos, id)| id.map(|id| pos as u64 * id))
        .sum())
}

struct Span {
    start: u64,
    len: u64,
}

/// Move whole files, highest id first, into the leftmost span that fits.
pub fn part_b(input: &str) -> Result<u64> {
    let mut files: Vec<Span> = Vec::new();
    let mut free: Vec<Span> = Vec::new();
    let mut cursor = 0;
    for (i, len) in digits(input)?.into_iter().enumerate() {
        if i.is_multiple_of(2) {
            files.push(Span { start: cursor, len });
        } else if len > 0 {
            free.push(Span { start: cursor, len });
        }
        cursor += len;
    }

    for file in files.iter_mut().rev() {
        let slot = free
            .iter_mut()
            .take_while(|span| span.start < file.start)
            .find(|span| span.len >= file.len);
        if let Some(span) = slot {
            file.start = span.start;
            span.start += file.len;
            span.len -= file.len;
        }
    }

    Ok(files
        .iter()
        .enumerate()
        .map(|(id, file)| {
            (file.start..file.start + file.len)
                .map(|pos| pos * id as u64)
                .sum::<u64>()
        })
        .sum())
}
