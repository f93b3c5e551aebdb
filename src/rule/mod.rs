pub mod catalog;
pub mod condition;
pub mod payload;

pub use condition::*;
pub use payload::*;
