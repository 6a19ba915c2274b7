//! Open Sound Control packets, wire codec, address patterns and annotation text.
//!
//! oscprims provides permissively licensed, allocation-predictable building
//! blocks for real-time control software. Transports and dispatch tables are
//! left to the caller.
//!
//! # Crate Structure
//!
//! - [`types`]: Argument, message, bundle and time-tag model
//! - [`codec`]: Bit-exact binary codec and size-prefixed stream framing
//! - [`pattern`]: Address-pattern matching (`*`, `?`, `[...]`, `{...}`)
//! - [`annotation`]: Human-readable text in `spaces` and `equalsComma` styles

/// Re-export value and packet types.
pub mod types {
    pub use oscprims_types::*;
}

/// Re-export binary codec types.
pub mod codec {
    pub use oscprims_codec::*;
}

/// Re-export address-pattern matching.
pub mod pattern {
    pub use oscprims_pattern::*;
}

/// Re-export annotation text codec.
pub mod annotation {
    pub use oscprims_annotation::*;
}

pub use oscprims_types::{OscArg, OscBundle, OscMessage, OscPacket, OscTimeTag};
