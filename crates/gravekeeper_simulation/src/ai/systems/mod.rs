//! AI systems (strategic layer logic)

pub mod decision;

pub use decision::*;
