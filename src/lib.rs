//! Tri-state gate and wire propagation.
//!
//! Gates and wires live in a [Network]; driving a wire synchronously recomputes every gate
//! it feeds and forwards their outputs further down. [HalfAdder], [FullAdder] and the ripple
//! carry [Adder] are built from those primitives.
pub mod graph;
pub mod circuits;
pub mod data_structures;
pub use circuits::*;
pub use graph::*;
