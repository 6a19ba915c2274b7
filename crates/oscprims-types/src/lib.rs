//! Open Sound Control value, message and bundle model.
//!
//! Everything here is a plain owned value:
//! - [`OscArg`] is the closed set of argument variants, each with one [`TypeTag`]
//! - [`OscMessage`] is a validated address plus an ordered argument list
//! - [`OscBundle`] is a time tag plus nested [`OscPacket`]s
//!
//! The wire and text codecs live in their own crates and match exhaustively
//! on these types.

pub mod address;
pub mod error;
pub mod message;
pub mod packet;
pub mod tag;
pub mod time;
pub mod value;

pub use address::validate_address;
pub use error::{AddressError, Result};
pub use message::OscMessage;
pub use packet::{OscBundle, OscPacket};
pub use tag::TypeTag;
pub use time::{OscTimeTag, NTP_UNIX_OFFSET};
pub use value::{OscArg, OscColor, OscMidi};
