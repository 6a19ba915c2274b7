//! Open Sound Control address-pattern matching.
//!
//! A pure predicate for routing: given a pattern such as `/mixer/*/fader[1-4]`
//! and a concrete address, decide whether the address is selected. Dispatch
//! tables are left to the caller.

pub mod error;
pub mod pattern;

pub use error::{PatternError, Result};
pub use pattern::{has_wildcards, matches, AddressPattern};
