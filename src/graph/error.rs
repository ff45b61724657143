use super::{GateIndex, InputSlot, WireIndex};

/// Errors returned while wiring or driving a [Network](super::Network).
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum NetworkError {
    /// A wire already drives as many gate inputs as the configuration allows.
    #[error("Wire {wire} already drives {max_fanout} gate inputs, can't connect gate {gate} slot {slot}")]
    FanoutExceeded {
        wire: WireIndex,
        gate: GateIndex,
        slot: InputSlot,
        max_fanout: usize,
    },
    /// Gates only have input slots 0 and 1.
    #[error("Invalid gate input slot: {0}")]
    InvalidSlot(usize),
    /// Gate index is out of range for this network.
    #[error("Gate with id {0} not found")]
    UnknownGate(GateIndex),
    /// Wire index is out of range for this network.
    #[error("Wire with id {0} not found")]
    UnknownWire(WireIndex),
    /// Propagation went deeper than the configured bound, either the wiring loops back on itself
    /// or the bound is lower than the longest path.
    #[error("Propagation reached depth {depth} driving wire {wire}, beyond the configured maximum depth")]
    Topology { wire: WireIndex, depth: usize },
    /// Operand widths don't match the adder width.
    #[error("Operand width mismatch: adder has {expected} bits, got {got}")]
    WidthMismatch { expected: usize, got: usize },
    /// An integer operand has bits set above the adder width.
    #[error("Operand {value} does not fit in {width} bits")]
    OperandOverflow { width: usize, value: u64 },
    /// The adder is too wide for its sum and carry to fit in a [u64].
    #[error("Adder of {width} bits is too wide for integer operands, at most {max} bits are supported")]
    AdderTooWide { width: usize, max: usize },
    /// Ripple carry adders need at least one bit.
    #[error("An adder needs at least one bit")]
    EmptyAdder,
}

pub type Result<T> = std::result::Result<T, NetworkError>;
