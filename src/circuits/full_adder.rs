use super::HalfAdder;
use crate::graph::*;
use tracing::debug;

fn mkname(name: &str) -> String {
    format!("FULL_ADDER:{}", name)
}

/// Adds three bits by chaining two [HalfAdders](HalfAdder) and combining their carries with an OR gate.
///
/// The first half adder adds `a` and `b`, the second adds that sum and `cin`.
///
/// # Example
/// ```
/// # use trilogic::{FullAdder, LogicLevel::*};
/// let mut adder = FullAdder::new().unwrap();
///
/// adder.compute(High, High, High).unwrap();
/// assert_eq!(adder.sum(), High);
/// assert_eq!(adder.carry(), High);
/// ```
#[derive(Debug, Clone)]
pub struct FullAdder {
    first: HalfAdder,
    second: HalfAdder,
    network: Network,
    carry_gate: GateIndex,
    first_carry: WireIndex,
    second_carry: WireIndex,
    carry_out: WireIndex,
}

impl FullAdder {
    /// Returns a new, wired [FullAdder] using the default [NetworkConfig].
    pub fn new() -> Result<Self> {
        Self::with_config(Default::default())
    }

    /// Returns a new, wired [FullAdder] whose networks enforce `config`.
    pub fn with_config(config: NetworkConfig) -> Result<Self> {
        let mut network = Network::with_config(config);
        let mut adder = FullAdder {
            first: HalfAdder::with_config(config)?,
            second: HalfAdder::with_config(config)?,
            carry_gate: network.or(mkname("carry")),
            first_carry: network.wire(mkname("first_carry")),
            second_carry: network.wire(mkname("second_carry")),
            carry_out: network.wire(mkname("carry_out")),
            network,
        };
        adder.init()?;
        Ok(adder)
    }

    /// Re-initializes both half adders and the carry gate, then connects them again.
    pub fn init(&mut self) -> Result<()> {
        self.first.init()?;
        self.second.init()?;

        let n = &mut self.network;
        n.reset();
        n.add_output_connection(self.first_carry, self.carry_gate, InputSlot::A)?;
        n.add_output_connection(self.second_carry, self.carry_gate, InputSlot::B)?;
        n.connect_output(self.carry_gate, self.carry_out)?;
        debug!("full adder initialized");
        Ok(())
    }

    /// Computes `a + b + cin`.
    ///
    /// The sum of the first half adder is fed to the second one together with `cin`,
    /// then both partial carries are driven into the carry gate.
    pub fn compute(&mut self, a: LogicLevel, b: LogicLevel, cin: LogicLevel) -> Result<()> {
        self.first.compute(a, b)?;
        self.second.compute(self.first.sum(), cin)?;

        self.network.drive_level(self.first_carry, self.first.carry())?;
        self.network
            .drive_level(self.second_carry, self.second.carry())?;
        Ok(())
    }

    /// Returns the sum bit, read from the second half adder.
    pub fn sum(&self) -> LogicLevel {
        self.second.sum()
    }

    /// Returns the cached output of the carry gate.
    pub fn carry(&self) -> LogicLevel {
        self.network.output_state(self.carry_gate)
    }
}
