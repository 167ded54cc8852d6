//! Crossed Wires: a gate network that is meant to add two numbers.

use std::collections::{BTreeSet, HashMap};

use crate::error::{Error, Result};
use crate::parse::{blocks, lines};

const PUZZLE: &str = "aoc24:p24";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    And,
    Or,
    Xor,
}

impl Op {
    fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Op::And => a & b,
            Op::Or => a | b,
            Op::Xor => a ^ b,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Gate<'a> {
    inputs: [&'a str; 2],
    op: Op,
    output: &'a str,
}

struct Device<'a> {
    initial: HashMap<&'a str, bool>,
    gates: Vec<Gate<'a>>,
}

fn parse(sections: &[String]) -> Result<Device<'_>> {
    let [wires, gates] = sections else {
        return Err(Error::parse(PUZZLE, "expected wires and gates sections"));
    };

    let mut initial = HashMap::new();
    for line in lines(wires) {
        match line.split_once(':').map(|(wire, bit)| (wire.trim(), bit.trim())) {
            Some((wire, "0")) => initial.insert(wire, false),
            Some((wire, "1")) => initial.insert(wire, true),
            _ => return Err(Error::parse(PUZZLE, format!("bad wire '{}'", line))),
        };
    }

    let gates = lines(gates)
        .map(|line| {
            let bad = || Error::parse(PUZZLE, format!("bad gate '{}'", line));
            let [a, op, b, arrow, output] = line.split_whitespace().collect::<Vec<_>>()[..] else {
                return Err(bad());
            };
            let op = match op {
                "AND" => Op::And,
                "OR" => Op::Or,
                "XOR" => Op::Xor,
                _ => return Err(bad()),
            };
            if arrow != "->" {
                return Err(bad());
            }
            Ok(Gate {
                inputs: [a, b],
                op,
                output,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Device { initial, gates })
}

impl<'a> Device<'a> {
    /// Settle every wire, sweeping the gates until nothing changes.
    fn simulate(&self) -> Result<HashMap<&'a str, bool>> {
        let mut values = self.initial.clone();
        let mut pending: Vec<Gate<'a>> = self.gates.clone();
        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|gate| {
                match (values.get(gate.inputs[0]), values.get(gate.inputs[1])) {
                    (Some(&a), Some(&b)) => {
                        values.insert(gate.output, gate.op.apply(a, b));
                        false
                    }
                    _ => true,
                }
            });
            if pending.len() == before {
                return Err(Error::no_solution(
                    PUZZLE,
                    format!("{} gates never receive both inputs", before),
                ));
            }
        }
        Ok(values)
    }

    fn feeds(&self, wire: &str, op: Op) -> bool {
        self.gates
            .iter()
            .any(|gate| gate.op == op && gate.inputs.contains(&wire))
    }
}

fn is_input(wire: &str) -> bool {
    wire.starts_with('x') || wire.starts_with('y')
}

/// The number formed by the `z` wires, `z00` being the least significant bit.
pub fn part_a(input: &str) -> Result<u64> {
    let sections = blocks(input);
    let device = parse(&sections)?;
    let values = device.simulate()?;
    let mut number = 0u64;
    for (wire, &bit) in &values {
        if let Some(index) = wire.strip_prefix('z') {
            let index: u32 = index
                .parse()
                .map_err(|_| Error::parse(PUZZLE, format!("bad output wire '{}'", wire)))?;
            if bit {
                number |= 1 << index;
            }
        }
    }
    Ok(number)
}

/// Outputs that break the ripple-carry adder shape, sorted and comma separated.
///
/// In a correct adder every `z` except the top one comes out of an `XOR`,
/// an `XOR` of internal wires drives a `z`, the half-adder `XOR` of each
/// `x`/`y` pair feeds another `XOR`, and every `AND` past bit zero feeds an
/// `OR` carry.
pub fn part_b(input: &str) -> Result<String> {
    let sections = blocks(input);
    let device = parse(&sections)?;
    let top_z = device
        .gates
        .iter()
        .map(|gate| gate.output)
        .filter(|wire| wire.starts_with('z'))
        .max()
        .ok_or_else(|| Error::no_solution(PUZZLE, "no output wires"))?;

    let mut wrong: BTreeSet<&str> = BTreeSet::new();
    for gate in &device.gates {
        let from_inputs = gate.inputs.iter().all(|wire| is_input(wire));
        let first_bit = gate.inputs.iter().any(|&wire| wire == "x00" || wire == "y00");
        let out = gate.output;

        let misplaced = match gate.op {
            _ if out == top_z => gate.op != Op::Or,
            _ if out.starts_with('z') && gate.op != Op::Xor => true,
            Op::Xor if !from_inputs => !out.starts_with('z'),
            Op::Xor => !first_bit && !device.feeds(out, Op::Xor),
            Op::And => !first_bit && !device.feeds(out, Op::Or),
            Op::Or => false,
        };
        if misplaced {
            wrong.insert(out);
        }
    }

    Ok(wrong.into_iter().collect::<Vec<_>>().join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Gate list of a ripple-carry adder over `bits` bits.
    fn adder(bits: usize) -> Vec<String> {
        let mut gates = vec![
            "x00 XOR y00 -> z00".to_string(),
            "x00 AND y00 -> c00".to_string(),
        ];
        for i in 1..bits {
            let carry_out = if i == bits - 1 {
                format!("z{:02}", bits)
            } else {
                format!("c{:02}", i)
            };
            gates.push(format!("x{i:02} XOR y{i:02} -> s{i:02}"));
            gates.push(format!("x{i:02} AND y{i:02} -> a{i:02}"));
            gates.push(format!("s{i:02} XOR c{:02} -> z{i:02}", i - 1));
            gates.push(format!("s{i:02} AND c{:02} -> b{i:02}", i - 1));
            gates.push(format!("a{i:02} OR b{i:02} -> {carry_out}"));
        }
        gates
    }

    fn device_text(bits: usize, x: u64, y: u64, gates: &[String]) -> String {
        let mut text = String::new();
        for i in 0..bits {
            text.push_str(&format!("x{:02}: {}\n", i, (x >> i) & 1));
        }
        for i in 0..bits {
            text.push_str(&format!("y{:02}: {}\n", i, (y >> i) & 1));
        }
        text.push('\n');
        text.push_str(&gates.join("\n"));
        text
    }

    fn swap_outputs(gates: &mut [String], a: &str, b: &str) {
        for gate in gates.iter_mut() {
            if gate.ends_with(&format!("-> {}", a)) {
                *gate = gate.replace(&format!("-> {}", a), &format!("-> {}", b));
            } else if gate.ends_with(&format!("-> {}", b)) {
                *gate = gate.replace(&format!("-> {}", b), &format!("-> {}", a));
            }
        }
    }

    #[test]
    fn generated_adder_adds() {
        let text = device_text(4, 11, 6, &adder(4));
        assert_eq!(part_a(&text).unwrap(), 17);
        assert_eq!(part_b(&text).unwrap(), "");
    }

    #[test]
    fn swapped_outputs_are_reported() {
        let mut gates = adder(4);
        swap_outputs(&mut gates, "z01", "c01");
        swap_outputs(&mut gates, "s02", "a02");
        let text = device_text(4, 0, 0, &gates);
        assert_eq!(part_b(&text).unwrap(), "a02,c01,s02,z01");
    }

    #[test]
    fn cyclic_wiring_is_an_error() {
        let text = "x00: 1\n\nx00 AND q -> r\nr OR x00 -> q\n";
        assert!(part_a(text).is_err());
    }
}
