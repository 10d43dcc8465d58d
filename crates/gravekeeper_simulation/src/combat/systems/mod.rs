//! Combat systems (hits, contacts, death).

pub mod contacts;
pub mod death;
pub mod hits;

pub use contacts::*;
pub use death::*;
pub use hits::*;
