//! Trash Compactor: a cephalopod math worksheet.
//!
//! Problems are laid out side by side in columns, with the operator for
//! each problem on the last row.

use crate::error::{Error, Result};
use crate::parse::{lines, number};

const PUZZLE: &str = "aoc25:p06";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Multiply,
}

impl Op {
    fn apply(self, operands: &[u64]) -> u64 {
        match self {
            Op::Add => operands.iter().sum(),
            Op::Multiply => operands.iter().product(),
        }
    }
}

/// Number rows and the operators, in left-to-right order.
fn worksheet(input: &str) -> Result<(Vec<&str>, Vec<Op>)> {
    let mut rows: Vec<&str> = lines(input).collect();
    let operators = rows
        .pop()
        .ok_or_else(|| Error::parse(PUZZLE, "worksheet is empty"))?
        .split_whitespace()
        .map(|symbol| match symbol {
            "+" => Ok(Op::Add),
            "*" => Ok(Op::Multiply),
            _ => Err(Error::parse(PUZZLE, format!("unknown operator '{}'", symbol))),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((rows, operators))
}

fn grand_total(problems: &[Vec<u64>], operators: &[Op]) -> Result<u64> {
    if problems.len() != operators.len() {
        return Err(Error::parse(
            PUZZLE,
            format!("{} problems but {} operators", problems.len(), operators.len()),
        ));
    }
    Ok(problems
        .iter()
        .zip(operators)
        .map(|(operands, op)| op.apply(operands))
        .sum())
}

/// Numbers read across each row.
pub fn part_a(input: &str) -> Result<u64> {
    let (rows, operators) = worksheet(input)?;
    let mut problems: Vec<Vec<u64>> = vec![Vec::new(); operators.len()];
    for row in rows {
        for (i, token) in row.split_whitespace().enumerate() {
            let value = number(PUZZLE, token)?;
            problems
                .get_mut(i)
                .ok_or_else(|| Error::parse(PUZZLE, format!("row '{}' is too wide", row)))?
                .push(value);
        }
    }
    grand_total(&problems, &operators)
}

/// Numbers read down each character column; blank columns separate problems.
pub fn part_b(input: &str) -> Result<u64> {
    let (rows, operators) = worksheet(input)?;
    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);

    let mut problems: Vec<Vec<u64>> = vec![Vec::new()];
    for x in 0..width {
        let column: String = rows
            .iter()
            .map(|row| row.as_bytes().get(x).copied().unwrap_or(b' ') as char)
            .collect();
        let column = column.trim();
        if column.is_empty() {
            problems.push(Vec::new());
        } else if let Some(current) = problems.last_mut() {
            current.push(number(PUZZLE, column)?);
        }
    }
    problems.retain(|operands| !operands.is_empty());
    grand_total(&problems, &operators)
}
