use crate::graph::*;
use tracing::debug;

fn mkname(name: &str) -> String {
    format!("NAND_OR:{}", name)
}

/// OR gate built only from NAND gates: `a OR b == NOT(a) NAND NOT(b)`.
///
/// Each input wire drives both inputs of its own NAND, turning it into an inverter,
/// and the two inverted levels are combined by a third NAND.
///
/// # Example
/// ```
/// # use trilogic::{NandOr, LogicLevel::*};
/// let mut or = NandOr::new().unwrap();
///
/// or.compute(Low, High).unwrap();
/// assert_eq!(or.output(), High);
/// ```
#[derive(Debug, Clone)]
pub struct NandOr {
    network: Network,
    inputs: [WireIndex; 2],
    inverted: [WireIndex; 2],
    inverters: [GateIndex; 2],
    out: GateIndex,
}

impl NandOr {
    /// Returns a new, wired [NandOr] using the default [NetworkConfig].
    pub fn new() -> Result<Self> {
        Self::with_config(Default::default())
    }

    /// Returns a new, wired [NandOr] whose network enforces `config`.
    pub fn with_config(config: NetworkConfig) -> Result<Self> {
        let mut network = Network::with_config(config);
        let mut or = NandOr {
            inverters: [network.nand(mkname("not_a")), network.nand(mkname("not_b"))],
            out: network.nand(mkname("out")),
            inputs: [network.wire(mkname("a")), network.wire(mkname("b"))],
            inverted: [network.wire(mkname("a_inv")), network.wire(mkname("b_inv"))],
            network,
        };
        or.init()?;
        Ok(or)
    }

    /// Resets every gate and wire, then connects them again.
    pub fn init(&mut self) -> Result<()> {
        let n = &mut self.network;
        n.reset();
        for ((input, inverter), inverted) in self
            .inputs
            .iter()
            .zip(self.inverters.iter())
            .zip(self.inverted.iter())
        {
            n.add_output_connection(*input, *inverter, InputSlot::A)?;
            n.add_output_connection(*input, *inverter, InputSlot::B)?;
            n.connect_output(*inverter, *inverted)?;
        }
        n.add_output_connection(self.inverted[0], self.out, InputSlot::A)?;
        n.add_output_connection(self.inverted[1], self.out, InputSlot::B)?;
        debug!("nand or initialized");
        Ok(())
    }

    /// Drives input `a`, then input `b`.
    pub fn compute(&mut self, a: LogicLevel, b: LogicLevel) -> Result<()> {
        self.network.drive_level(self.inputs[0], a)?;
        self.network.drive_level(self.inputs[1], b)?;
        Ok(())
    }

    /// Returns the cached output of the final NAND gate.
    pub fn output(&self) -> LogicLevel {
        self.network.output_state(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LogicLevel::*;

    #[test]
    fn test_nand_or() {
        let mut or = NandOr::new().unwrap();
        for (a, b) in [(Low, Low), (Low, High), (High, Low), (High, High)].iter() {
            or.compute(*a, *b).unwrap();
            assert_eq!(or.output(), GateType::Or.compute(*a, *b), "{} {}", a, b);
        }
    }

    #[test]
    fn test_undefined_until_both_driven() {
        let mut or = NandOr::new().unwrap();
        assert_eq!(or.output(), Undefined);

        or.network.drive_level(or.inputs[0], High).unwrap();
        assert_eq!(or.output(), Undefined);
    }
}
