//! Bit-exact Open Sound Control binary codec.
//!
//! Every encoded packet follows the OSC 1.0 wire rules:
//! - Strings are NUL-terminated and padded with NULs to a multiple of 4 bytes
//! - Blobs carry a 4-byte big-endian length and are padded to a multiple of 4
//! - Numbers are big-endian; `T`, `F`, `N` and `I` carry no payload
//! - Bundles start with `#bundle\0`, an 8-byte time tag, then size-prefixed elements
//!
//! Decoding never reads past the supplied buffer and copies everything it
//! returns. Stream transports get size-prefixed framing through
//! [`PacketReader`]/[`PacketWriter`], or [`OscCodec`] with the `async` feature.

pub mod codec;
pub mod error;
pub mod frame;
#[cfg(feature = "async")]
pub mod framed;
pub mod reader;
mod wire;
pub mod writer;

pub use codec::{
    decode, decode_with_config, encode, encode_packet, CodecConfig, BUNDLE_TAG,
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_PACKET, SIZE_PREFIX_LEN,
};
pub use error::{CodecError, Result};
pub use frame::{decode_stream_frame, encode_stream_frame};
#[cfg(feature = "async")]
pub use framed::OscCodec;
pub use reader::PacketReader;
pub use wire::padded_len;
pub use writer::PacketWriter;
