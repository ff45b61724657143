mod adder;
mod full_adder;
mod half_adder;
mod nand_or;
mod truth_table;
pub use adder::*;
pub use full_adder::*;
pub use half_adder::*;
pub use nand_or::*;
pub use truth_table::*;
