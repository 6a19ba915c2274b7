//! Human-readable annotation text for OSC messages.
//!
//! Two styles are supported:
//! - `spaces`: `/addr 1(i) 3.142(f) "a string"(s) true(T)`
//! - `equalsComma`: `/addr=1(i),3.142(f),"a string"(s),true(T)`
//!
//! Decoding is best effort. Malformed text yields `false` or `None`, and the
//! reason is logged at `debug` level.

pub mod config;
pub mod decode;
pub mod encode;
mod error;
mod token;

pub use config::{AnnotationConfig, AnnotationStyle};
pub use decode::{decode, validate};
pub use encode::encode;
pub use error::ParseStyleError;
