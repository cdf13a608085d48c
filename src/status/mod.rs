pub mod aggregate;
pub mod load_state;

pub use aggregate::*;
pub use load_state::*;
