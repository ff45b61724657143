use super::{FullAdder, HalfAdder, NandOr};
use crate::graph::*;
use smallvec::{smallvec, SmallVec};
use std::io::{self, Write};

/// Named output levels of a circuit, in a fixed order.
pub type Outputs = SmallVec<[(&'static str, LogicLevel); 2]>;

/// A circuit with two input bits that can be tabulated by [truth_table].
pub trait TwoInputCircuit {
    /// Re-initializes the circuit.
    fn init(&mut self) -> Result<()>;
    /// Drives both inputs.
    fn compute2(&mut self, a: LogicLevel, b: LogicLevel) -> Result<()>;
    /// Returns the current outputs.
    fn outputs(&self) -> Outputs;
}

impl TwoInputCircuit for NandOr {
    fn init(&mut self) -> Result<()> {
        NandOr::init(self)
    }
    fn compute2(&mut self, a: LogicLevel, b: LogicLevel) -> Result<()> {
        self.compute(a, b)
    }
    fn outputs(&self) -> Outputs {
        smallvec![("out", self.output())]
    }
}

impl TwoInputCircuit for HalfAdder {
    fn init(&mut self) -> Result<()> {
        HalfAdder::init(self)
    }
    fn compute2(&mut self, a: LogicLevel, b: LogicLevel) -> Result<()> {
        self.compute(a, b)
    }
    fn outputs(&self) -> Outputs {
        smallvec![("sum", self.sum()), ("carry", self.carry())]
    }
}

/// [FullAdder] with its carry in held at a fixed level.
#[derive(Debug, Clone)]
pub struct FixedCarry {
    pub adder: FullAdder,
    pub cin: LogicLevel,
}

impl TwoInputCircuit for FixedCarry {
    fn init(&mut self) -> Result<()> {
        self.adder.init()
    }
    fn compute2(&mut self, a: LogicLevel, b: LogicLevel) -> Result<()> {
        self.adder.compute(a, b, self.cin)
    }
    fn outputs(&self) -> Outputs {
        smallvec![("sum", self.adder.sum()), ("carry", self.adder.carry())]
    }
}

/// Formats `outputs` as the result column of a report line.
///
/// A single output is printed as its bare level, several as `name=level` pairs.
fn format_outputs(outputs: &Outputs) -> String {
    if let [(_, level)] = outputs.as_slice() {
        return level.to_string();
    }
    outputs
        .iter()
        .map(|(name, level)| format!("{}={}", name, level))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Initializes `circuit` once, then computes it for inputs `(0,0)`, `(0,1)`, `(1,0)` and `(1,1)`
/// in that order and returns one report line per combination.
///
/// # Example
/// ```
/// # use trilogic::{truth_table, NandOr};
/// let mut or = NandOr::new().unwrap();
///
/// assert_eq!(
///     truth_table(&mut or).unwrap(),
///     vec![
///         "Testing input 0 0 result: 0",
///         "Testing input 0 1 result: 1",
///         "Testing input 1 0 result: 1",
///         "Testing input 1 1 result: 1",
///     ]
/// );
/// ```
pub fn truth_table<C: TwoInputCircuit + ?Sized>(circuit: &mut C) -> Result<Vec<String>> {
    circuit.init()?;
    let mut lines = Vec::with_capacity(4);
    for i in 0..=1u8 {
        for j in 0..=1u8 {
            circuit.compute2((i == 1).into(), (j == 1).into())?;
            lines.push(format!(
                "Testing input {} {} result: {}",
                i,
                j,
                format_outputs(&circuit.outputs())
            ));
        }
    }
    Ok(lines)
}

/// Writes the [truth_table] of `circuit` to `out`, one line per combination.
pub fn write_truth_table<C: TwoInputCircuit + ?Sized, W: Write>(
    circuit: &mut C,
    out: &mut W,
) -> io::Result<()> {
    let lines = truth_table(circuit).map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
