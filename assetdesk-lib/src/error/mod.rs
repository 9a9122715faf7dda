//! Error types

mod dataset;
mod parse;

pub use dataset::*;
pub use parse::*;
