use crate::graph::*;
use tracing::debug;

fn mkname(name: &str) -> String {
    format!("HALF_ADDER:{}", name)
}

/// Adds two bits: the sum comes from a XOR gate and the carry from an AND gate.
///
/// Both gates read the same two input wires, `a` drives input A and `b` drives input B of each.
///
/// # Example
/// ```
/// # use trilogic::{HalfAdder, LogicLevel::*};
/// let mut adder = HalfAdder::new().unwrap();
///
/// adder.compute(High, High).unwrap();
/// assert_eq!(adder.sum(), Low);
/// assert_eq!(adder.carry(), High);
/// ```
#[derive(Debug, Clone)]
pub struct HalfAdder {
    network: Network,
    sum_gate: GateIndex,
    carry_gate: GateIndex,
    a: WireIndex,
    b: WireIndex,
    sum_out: WireIndex,
    carry_out: WireIndex,
}

impl HalfAdder {
    /// Returns a new, wired [HalfAdder] using the default [NetworkConfig].
    pub fn new() -> Result<Self> {
        Self::with_config(Default::default())
    }

    /// Returns a new, wired [HalfAdder] whose network enforces `config`.
    ///
    /// # Errors
    ///
    /// Fails if `config` allows a fan-out below 2.
    pub fn with_config(config: NetworkConfig) -> Result<Self> {
        let mut network = Network::with_config(config);
        let mut adder = HalfAdder {
            sum_gate: network.xor(mkname("sum")),
            carry_gate: network.and(mkname("carry")),
            a: network.wire(mkname("a")),
            b: network.wire(mkname("b")),
            sum_out: network.wire(mkname("sum_out")),
            carry_out: network.wire(mkname("carry_out")),
            network,
        };
        adder.init()?;
        Ok(adder)
    }

    /// Resets every gate and wire, then connects them again.
    ///
    /// Afterwards [sum](HalfAdder::sum) is [Undefined](LogicLevel::Undefined)
    /// and [carry](HalfAdder::carry) is [Low](LogicLevel::Low) until the next compute.
    pub fn init(&mut self) -> Result<()> {
        let n = &mut self.network;
        n.reset();

        n.add_output_connection(self.a, self.sum_gate, InputSlot::A)?;
        n.add_output_connection(self.b, self.sum_gate, InputSlot::B)?;
        n.add_output_connection(self.a, self.carry_gate, InputSlot::A)?;
        n.add_output_connection(self.b, self.carry_gate, InputSlot::B)?;

        n.connect_output(self.sum_gate, self.sum_out)?;
        n.connect_output(self.carry_gate, self.carry_out)?;
        debug!("half adder initialized");
        Ok(())
    }

    /// Drives wire `a` with `a`, then wire `b` with `b`.
    pub fn compute(&mut self, a: LogicLevel, b: LogicLevel) -> Result<()> {
        self.network.drive_level(self.a, a)?;
        self.network.drive_level(self.b, b)?;
        Ok(())
    }

    /// Returns the cached output of the sum gate, `a XOR b`.
    pub fn sum(&self) -> LogicLevel {
        self.network.output_state(self.sum_gate)
    }

    /// Returns the cached output of the carry gate, `a AND b`.
    pub fn carry(&self) -> LogicLevel {
        self.network.output_state(self.carry_gate)
    }

    /// Returns the wire the sum gate forwards to.
    pub fn sum_wire(&self) -> WireIndex {
        self.sum_out
    }

    /// Returns the wire the carry gate forwards to.
    pub fn carry_wire(&self) -> WireIndex {
        self.carry_out
    }

    /// Returns the internal network, for inspection and [dumping](Network::dump_dot).
    pub fn network(&self) -> &Network {
        &self.network
    }
}
