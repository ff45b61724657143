use super::{LogicLevel, NetworkError, WireIndex};
use crate::data_structures::SlabIndex;

use num_enum::IntoPrimitive;
use std::fmt::{self, Display, Formatter};
use strum_macros::EnumIter;
use LogicLevel::*;

/// Represents the index of a logic gate in a [super::Network].
#[repr(transparent)]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub struct GateIndex {
    pub(super) idx: usize,
}

/// Returns a new GateIndex from a provided usize.
macro_rules! gi {
    ( $x:expr ) => {{
        GateIndex::new($x)
    }};
}

impl GateIndex {
    /// Returns a new GateIndex from a provided usize.
    pub(super) const fn new(idx: usize) -> GateIndex {
        GateIndex { idx }
    }
}

impl From<SlabIndex> for GateIndex {
    fn from(i: SlabIndex) -> Self {
        gi!(i.i_actually_really_know_what_i_am_doing_and_i_want_the_inner_usize())
    }
}
impl From<GateIndex> for SlabIndex {
    fn from(i: GateIndex) -> Self {
        SlabIndex::i_actually_really_know_what_i_am_doing_and_i_want_to_construct_from_usize(i.idx)
    }
}
impl Display for GateIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.idx)
    }
}

/// One of the two inputs of a [Gate].
#[repr(usize)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, IntoPrimitive, EnumIter)]
pub enum InputSlot {
    A = 0,
    B = 1,
}

impl TryFrom<usize> for InputSlot {
    type Error = NetworkError;

    /// Returns the slot at index `i`, only 0 and 1 exist.
    ///
    /// # Example
    /// ```
    /// # use std::convert::TryFrom;
    /// # use trilogic::{InputSlot, NetworkError};
    /// assert_eq!(InputSlot::try_from(1), Ok(InputSlot::B));
    /// assert_eq!(InputSlot::try_from(2), Err(NetworkError::InvalidSlot(2)));
    /// ```
    fn try_from(i: usize) -> Result<Self, Self::Error> {
        match i {
            0 => Ok(InputSlot::A),
            1 => Ok(InputSlot::B),
            _ => Err(NetworkError::InvalidSlot(i)),
        }
    }
}
impl Display for InputSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", usize::from(*self))
    }
}

/// Enum representing the different types of gates in a network.
#[repr(u8)]
#[derive(Clone, Debug, Copy, Eq, PartialEq, Hash, EnumIter, strum_macros::Display)]
pub enum GateType {
    #[strum(serialize = "NAND")]
    Nand,
    #[strum(serialize = "AND")]
    And,
    #[strum(serialize = "OR")]
    Or,
    #[strum(serialize = "XOR")]
    Xor,
}
use GateType::*;
impl GateType {
    /// Calculates the output of a gate of this type from its two inputs.
    ///
    /// [Undefined] is not handled uniformly:
    /// * Nand is [Undefined] as soon as any input is.
    /// * And and Or only look for [High] inputs, anything else counts as not high.
    /// * Xor is [Low] for two equal defined inputs, [High] if any input is high otherwise
    ///   and [Undefined] if neither applies.
    ///
    /// # Example
    /// ```
    /// # use trilogic::{GateType, LogicLevel::*};
    /// assert_eq!(GateType::Nand.compute(High, High), Low);
    /// assert_eq!(GateType::Nand.compute(Low, Undefined), Undefined);
    ///
    /// assert_eq!(GateType::And.compute(High, Undefined), Low);
    /// assert_eq!(GateType::Or.compute(High, Undefined), High);
    ///
    /// assert_eq!(GateType::Xor.compute(Low, Undefined), Undefined);
    /// assert_eq!(GateType::Xor.compute(High, Undefined), High);
    /// ```
    #[inline(always)]
    pub fn compute(&self, a: LogicLevel, b: LogicLevel) -> LogicLevel {
        match self {
            Nand => {
                if a == Undefined || b == Undefined {
                    Undefined
                } else if a == High && b == High {
                    Low
                } else {
                    High
                }
            }
            And => (a == High && b == High).into(),
            Or => (a == High || b == High).into(),
            Xor => {
                if (a == High && b == High) || (a == Low && b == Low) {
                    Low
                } else if a == High || b == High {
                    High
                } else {
                    Undefined
                }
            }
        }
    }
}

/// Data structure which represents a two input gate with a cached output
/// and an optional wire its output is forwarded to.
///
/// The output is recomputed every time an input is driven, so it never goes stale.
///
/// # Example
/// ```
/// # use trilogic::{Gate, GateType, InputSlot, LogicLevel::*};
/// let mut gate = Gate::new(GateType::And);
/// assert_eq!(gate.output_state(), Low);
///
/// gate.drive_input(InputSlot::A, High);
/// gate.drive_input(InputSlot::B, High);
/// assert_eq!(gate.output_state(), High);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Gate {
    ty: GateType,
    inputs: [LogicLevel; 2],
    output: LogicLevel,
    output_wire: Option<WireIndex>,
}

impl Gate {
    /// Returns a new, [initialized](Gate::init) gate of type `ty`.
    pub fn new(ty: GateType) -> Self {
        let mut gate = Gate {
            ty,
            inputs: [Undefined; 2],
            output: Undefined,
            output_wire: None,
        };
        gate.init();
        gate
    }

    /// Sets both inputs to [Undefined], clears the output connection and recomputes the output.
    pub fn init(&mut self) {
        self.inputs = [Undefined; 2];
        self.output_wire = None;
        self.compute_output();
    }

    /// Sets input `slot` to `level` and returns the recomputed output.
    pub fn drive_input(&mut self, slot: InputSlot, level: LogicLevel) -> LogicLevel {
        self.inputs[usize::from(slot)] = level;
        self.compute_output()
    }

    /// Recomputes the cached output from the current inputs and returns it.
    pub fn compute_output(&mut self) -> LogicLevel {
        self.output = self.ty.compute(self.inputs[0], self.inputs[1]);
        self.output
    }

    /// Returns the cached output.
    #[inline(always)]
    pub fn output_state(&self) -> LogicLevel {
        self.output
    }

    /// Returns the current level of input `slot`.
    pub fn input(&self, slot: InputSlot) -> LogicLevel {
        self.inputs[usize::from(slot)]
    }

    /// Sets the wire the output is forwarded to, replacing any previous one.
    pub fn connect_output(&mut self, wire: WireIndex) {
        self.output_wire = Some(wire);
    }

    /// Returns the wire the output is forwarded to, if any.
    pub fn output_connection(&self) -> Option<WireIndex> {
        self.output_wire
    }

    /// Returns the type of the gate.
    pub fn ty(&self) -> GateType {
        self.ty
    }
}
