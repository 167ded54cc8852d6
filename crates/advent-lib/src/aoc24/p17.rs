//! Chronospatial Computer: a 3-bit virtual machine.

use tracing::debug;

use crate::error::{Error, Result};
use crate::parse::integers;

const PUZZLE: &str = "aoc24:p17";

/// Instructions executed before a run is considered runaway.
pub const MAX_STEPS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Computer {
    registers: [u64; 3],
    program: Vec<u8>,
}

impl Computer {
    fn parse(input: &str) -> Result<Self> {
        let values = integers(input);
        if values.len() < 4 || values.iter().any(|&v| v < 0) {
            return Err(Error::parse(PUZZLE, "expected three registers and a program"));
        }
        let program = values[3..]
            .iter()
            .map(|&v| u8::try_from(v).ok().filter(|&op| op < 8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| Error::parse(PUZZLE, "program values must be 3-bit"))?;
        Ok(Self {
            registers: [values[0] as u64, values[1] as u64, values[2] as u64],
            program,
        })
    }

    /// Run with register A replaced by `a`, collecting the `out` values.
    fn run(&self, a: u64) -> Result<Vec<u8>> {
        let [_, mut b, mut c] = self.registers;
        let mut a = a;
        let mut output = Vec::new();
        let mut ip = 0;

        for _ in 0..MAX_STEPS {
            let (Some(&opcode), Some(&operand)) = (self.program.get(ip), self.program.get(ip + 1))
            else {
                return Ok(output);
            };
            let literal = u64::from(operand);

            match opcode {
                0 => a = shift(a, combo(operand, [a, b, c])?),
                1 => b ^= literal,
                2 => b = combo(operand, [a, b, c])? % 8,
                3 if a != 0 => {
                    ip = usize::from(operand);
                    continue;
                }
                3 => {}
                4 => b ^= c,
                5 => output.push((combo(operand, [a, b, c])? % 8) as u8),
                6 => b = shift(a, combo(operand, [a, b, c])?),
                _ => c = shift(a, combo(operand, [a, b, c])?),
            }
            ip += 2;
        }

        Err(Error::IterationLimit {
            puzzle: PUZZLE,
            limit: MAX_STEPS,
        })
    }
}

fn combo(operand: u8, [a, b, c]: [u64; 3]) -> Result<u64> {
    match operand {
        0..=3 => Ok(u64::from(operand)),
        4 => Ok(a),
        5 => Ok(b),
        6 => Ok(c),
        _ => Err(Error::parse(PUZZLE, "combo operand 7 is reserved")),
    }
}

/// `a / 2^by`, which is zero once the divisor exceeds any `u64`.
fn shift(a: u64, by: u64) -> u64 {
    u32::try_from(by)
        .ok()
        .and_then(|by| a.checked_shr(by))
        .unwrap_or(0)
}

/// Program output, comma separated.
pub fn part_a(input: &str) -> Result<String> {
    let computer = Computer::parse(input)?;
    let output = computer.run(computer.registers[0])?;
    Ok(output
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(","))
}

/// Smallest register A for which the program prints itself.
///
/// Quine programs consume A three bits per loop, so A is rebuilt one octal
/// digit at a time: the candidate with `i` digits must reproduce the last
/// `i` program values. Dead ends backtrack to the next digit.
pub fn part_b(input: &str) -> Result<u64> {
    let computer = Computer::parse(input)?;
    search(&computer, 0, 1)?
        .ok_or_else(|| Error::no_solution(PUZZLE, "no register value reproduces the program"))
}

fn search(computer: &Computer, prefix: u64, digits: usize) -> Result<Option<u64>> {
    let program = &computer.program;
    if digits > program.len() {
        return Ok(None);
    }
    let suffix = &program[program.len() - digits..];
    for digit in 0..8 {
        let candidate = prefix * 8 + digit;
        if computer.run(candidate)? != suffix {
            continue;
        }
        if digits == program.len() {
            debug!(candidate, "found self-replicating register value");
            return Ok(Some(candidate));
        }
        if let Some(found) = search(computer, candidate, digits + 1)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_instruction_checks() {
        let computer = Computer::parse("Register A: 10\nRegister B: 0\nRegister C: 0\n\nProgram: 5,0,5,1,5,4").unwrap();
        assert_eq!(computer.run(10).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn infinite_loops_hit_the_step_cap() {
        let computer = Computer::parse("Register A: 1\nRegister B: 0\nRegister C: 0\n\nProgram: 3,0").unwrap();
        assert!(matches!(
            computer.run(1),
            Err(Error::IterationLimit { limit: MAX_STEPS, .. })
        ));
    }

    #[test]
    fn reserved_combo_operand_is_rejected() {
        let computer = Computer::parse("Register A: 1\nRegister B: 0\nRegister C: 0\n\nProgram: 5,7").unwrap();
        assert!(computer.run(1).is_err());
    }
}
