//! Dashboard records

mod asset;
mod notification;
mod order;
mod priority;
mod task;

pub use asset::*;
pub use notification::*;
pub use order::*;
pub use priority::*;
pub use task::*;
