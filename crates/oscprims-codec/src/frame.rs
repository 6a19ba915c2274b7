//! Size-prefixed packet framing for stream transports (OSC 1.0 over TCP).

use bytes::{Buf, BytesMut};
use oscprims_types::OscPacket;

use crate::codec::{decode_with_config, put_size_prefixed, CodecConfig, SIZE_PREFIX_LEN};
use crate::error::{CodecError, Result};

/// Encode a packet as a stream frame.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────────┐
/// │ Size (4B BE) │ Packet           │
/// │              │ (Size bytes)     │
/// └──────────────┴──────────────────┘
/// ```
///
/// On error `dst` is left at its original length.
pub fn encode_stream_frame(packet: &OscPacket, dst: &mut BytesMut) -> Result<()> {
    let start = dst.len();
    put_size_prefixed(packet, dst).inspect_err(|_| dst.truncate(start))
}

/// Decode a stream frame from a buffer.
///
/// Returns `Ok(None)` if the buffer doesn't contain a complete frame yet.
/// On success, consumes the frame bytes from the buffer.
pub fn decode_stream_frame(src: &mut BytesMut, config: &CodecConfig) -> Result<Option<OscPacket>> {
    if src.len() < SIZE_PREFIX_LEN {
        return Ok(None);
    }

    let size = (&src[..SIZE_PREFIX_LEN]).get_u32() as usize;
    if size > config.max_packet_size {
        return Err(CodecError::TooLarge {
            size,
            max: config.max_packet_size,
        });
    }

    let total = SIZE_PREFIX_LEN + size;
    if src.len() < total {
        src.reserve(total - src.len());
        return Ok(None);
    }

    src.advance(SIZE_PREFIX_LEN);
    let frame = src.split_to(size);
    decode_with_config(&frame, config).map(Some)
}
