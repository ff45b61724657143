mod config;
mod error;
#[macro_use]
mod gate;
mod level;
mod network;
mod wire;
pub use config::*;
pub use error::*;
pub use gate::*;
pub use level::*;
pub use network::*;
pub use wire::*;
