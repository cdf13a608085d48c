// Context modules for application state management
pub mod backend;
pub mod error;

pub use backend::*;
pub use error::*;
