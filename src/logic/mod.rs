pub mod alu;
pub mod config;
pub mod formatting;
pub mod state;

pub use alu::*;
pub use config::*;
pub use state::*;
