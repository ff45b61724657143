use super::{GateIndex, InputSlot, NetworkError, Result};
use crate::data_structures::SlabIndex;

use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};

/// Represents the index of a wire in a [super::Network].
#[repr(transparent)]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub struct WireIndex {
    pub(super) idx: usize,
}

impl WireIndex {
    /// Returns a new WireIndex from a provided usize.
    pub(super) const fn new(idx: usize) -> WireIndex {
        WireIndex { idx }
    }
}

impl From<SlabIndex> for WireIndex {
    fn from(i: SlabIndex) -> Self {
        Self::new(i.i_actually_really_know_what_i_am_doing_and_i_want_the_inner_usize())
    }
}
impl From<WireIndex> for SlabIndex {
    fn from(i: WireIndex) -> Self {
        SlabIndex::i_actually_really_know_what_i_am_doing_and_i_want_to_construct_from_usize(i.idx)
    }
}
impl Display for WireIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.idx)
    }
}

/// A gate input driven by a wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Sink {
    pub gate: GateIndex,
    pub slot: InputSlot,
}

/// Amount of sinks kept in the stack for a wire.
/// If a wire is configured for a larger fan-out they will spill into the heap.
pub(super) const WIRE_SINKS_TINYVEC_SIZE: usize = super::MAX_FANOUT;

/// Data structure that represents a wire, it drives an ordered list of gate inputs.
///
/// Sinks are only ever appended, in the order they will be driven.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Wire {
    sinks: SmallVec<[Sink; WIRE_SINKS_TINYVEC_SIZE]>,
}

impl Wire {
    /// Returns a new wire with no sinks.
    pub fn new() -> Self {
        Default::default()
    }

    /// Removes every sink.
    pub fn init(&mut self) {
        self.sinks.clear();
    }

    /// Appends a sink driving input `slot` of `gate`.
    ///
    /// `wire` is only used to describe the error.
    ///
    /// # Errors
    ///
    /// Returns [NetworkError::FanoutExceeded] if the wire already has `max_fanout` sinks.
    pub fn add_output_connection(
        &mut self,
        wire: WireIndex,
        gate: GateIndex,
        slot: InputSlot,
        max_fanout: usize,
    ) -> Result<()> {
        if self.sinks.len() >= max_fanout {
            return Err(NetworkError::FanoutExceeded {
                wire,
                gate,
                slot,
                max_fanout,
            });
        }
        self.sinks.push(Sink { gate, slot });
        Ok(())
    }

    /// Returns the sinks in the order they are driven.
    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    /// Returns the number of sinks.
    pub fn fanout(&self) -> usize {
        self.sinks.len()
    }
}
