pub mod button;
pub mod led;
#[cfg(test)]
pub mod mock;

pub use button::*;
pub use led::*;
