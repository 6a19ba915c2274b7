use bytes::{BufMut, Bytes, BytesMut};
use oscprims_types::{
    OscArg, OscBundle, OscColor, OscMessage, OscMidi, OscPacket, OscTimeTag, TypeTag,
};
use tracing::{debug, trace};

use crate::error::{CodecError, Result};
use crate::wire::{put_osc_blob, put_osc_str, WireReader};

/// Leading bytes of every encoded bundle.
pub const BUNDLE_TAG: [u8; 8] = *b"#bundle\0";

/// Size of a length prefix (bundle elements and stream frames).
pub const SIZE_PREFIX_LEN: usize = 4;

/// Default maximum packet size: 64 KiB, the largest UDP datagram.
pub const DEFAULT_MAX_PACKET: usize = 64 * 1024;

/// Default maximum bundle nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Limits applied while decoding.
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Maximum encoded packet size in bytes. Default: 64 KiB.
    pub max_packet_size: usize,
    /// Maximum number of nested bundles, counting the outermost. Default: 32.
    pub max_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_packet_size: DEFAULT_MAX_PACKET,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Encode a packet into a fresh buffer.
pub fn encode(packet: &OscPacket) -> Result<Bytes> {
    let mut dst = BytesMut::new();
    encode_packet(packet, &mut dst)?;
    Ok(dst.freeze())
}

/// Append the wire encoding of a packet to `dst`.
///
/// Wire format:
/// ```text
/// message: address (OSC string) | ",tags" (OSC string) | arguments...
/// bundle:  "#bundle\0" | time tag (8B BE) | { size (4B BE) | element }...
/// ```
///
/// On error `dst` is left at its original length.
pub fn encode_packet(packet: &OscPacket, dst: &mut BytesMut) -> Result<()> {
    let start = dst.len();
    let result = put_packet(packet, dst);
    match &result {
        Ok(()) => trace!(size = dst.len() - start, "encoded packet"),
        Err(_) => dst.truncate(start),
    }
    result
}

fn put_packet(packet: &OscPacket, dst: &mut BytesMut) -> Result<()> {
    match packet {
        OscPacket::Message(msg) => put_message(msg, dst),
        OscPacket::Bundle(bundle) => put_bundle(bundle, dst),
    }
}

fn put_bundle(bundle: &OscBundle, dst: &mut BytesMut) -> Result<()> {
    dst.put_slice(&BUNDLE_TAG);
    dst.put_u64(bundle.time().to_bits());
    for element in bundle.content() {
        put_size_prefixed(element, dst)?;
    }
    Ok(())
}

/// Write `packet` preceded by its encoded size as a 4-byte big-endian integer.
pub(crate) fn put_size_prefixed(packet: &OscPacket, dst: &mut BytesMut) -> Result<()> {
    let start = dst.len();
    dst.put_u32(0);
    put_packet(packet, dst)?;
    let size = dst.len() - start - SIZE_PREFIX_LEN;
    let prefix = u32::try_from(size).map_err(|_| CodecError::TooLarge {
        size,
        max: u32::MAX as usize,
    })?;
    dst[start..start + SIZE_PREFIX_LEN].copy_from_slice(&prefix.to_be_bytes());
    Ok(())
}

fn put_message(msg: &OscMessage, dst: &mut BytesMut) -> Result<()> {
    put_osc_str(dst, msg.address());
    put_osc_str(dst, &msg.type_tags());
    for arg in msg.args() {
        put_arg(arg, dst)?;
    }
    Ok(())
}

fn put_arg(arg: &OscArg, dst: &mut BytesMut) -> Result<()> {
    match arg {
        OscArg::Int(v) => dst.put_i32(*v),
        OscArg::Float(v) => dst.put_f32(*v),
        OscArg::String(v) => {
            if v.contains('\0') {
                return Err(CodecError::EmbeddedNul);
            }
            put_osc_str(dst, v);
        }
        OscArg::Blob(v) => put_osc_blob(dst, v)?,
        OscArg::Long(v) => dst.put_i64(*v),
        OscArg::Double(v) => dst.put_f64(*v),
        OscArg::Char(v) => dst.put_u32(u32::from(*v)),
        OscArg::Color(v) => dst.put_slice(&v.to_bytes()),
        OscArg::Midi(v) => dst.put_slice(&v.to_bytes()),
        OscArg::Time(v) => dst.put_u64(v.to_bits()),
        OscArg::True | OscArg::False | OscArg::Nil | OscArg::Impulse => {}
    }
    Ok(())
}

/// Decode one packet from a complete buffer using the default limits.
pub fn decode(buf: &[u8]) -> Result<OscPacket> {
    decode_with_config(buf, &CodecConfig::default())
}

/// Decode one packet from a complete buffer.
///
/// The whole buffer must be consumed. The returned packet owns copies of all
/// strings and blobs, so `buf` can be reused as soon as this returns.
pub fn decode_with_config(buf: &[u8], config: &CodecConfig) -> Result<OscPacket> {
    if buf.len() > config.max_packet_size {
        return Err(CodecError::TooLarge {
            size: buf.len(),
            max: config.max_packet_size,
        });
    }

    decode_element(buf, config, 0)
        .inspect(|_| trace!(size = buf.len(), "decoded packet"))
        .inspect_err(|err| debug!(size = buf.len(), error = %err, "rejected malformed packet"))
}

fn decode_element(buf: &[u8], config: &CodecConfig, depth: usize) -> Result<OscPacket> {
    if buf.starts_with(&BUNDLE_TAG) {
        decode_bundle(&buf[BUNDLE_TAG.len()..], config, depth + 1).map(OscPacket::Bundle)
    } else {
        decode_message(buf).map(OscPacket::Message)
    }
}

fn decode_bundle(buf: &[u8], config: &CodecConfig, depth: usize) -> Result<OscBundle> {
    if depth > config.max_depth {
        return Err(CodecError::DepthExceeded(config.max_depth));
    }

    let mut reader = WireReader::new(buf);
    let time = OscTimeTag::from_bits(reader.read_u64()?);
    let mut content = Vec::new();

    while reader.remaining() > 0 {
        let declared = reader.read_u32()? as usize;
        if declared > reader.remaining() {
            return Err(CodecError::ElementTooLarge {
                declared,
                remaining: reader.remaining(),
            });
        }
        if declared % 4 != 0 {
            return Err(CodecError::MisalignedElement(declared));
        }
        let element = reader.take(declared)?;
        content.push(decode_element(element, config, depth)?);
    }

    Ok(OscBundle::new(time, content))
}

fn decode_message(buf: &[u8]) -> Result<OscMessage> {
    let mut reader = WireReader::new(buf);
    let address = reader.read_osc_str()?;

    // Some OSC 1.0 senders omit the type-tag string for argument-less messages.
    if reader.remaining() == 0 {
        return Ok(OscMessage::empty(address)?);
    }

    let type_tags = reader.read_osc_str()?;
    let mut tag_chars = type_tags.chars();
    if tag_chars.next() != Some(',') {
        return Err(CodecError::MissingTypeTagComma);
    }
    let tags = tag_chars
        .map(|ch| TypeTag::from_char(ch).ok_or(CodecError::UnknownTypeTag(ch)))
        .collect::<Result<Vec<_>>>()?;

    // Strings and blobs take at least 4 bytes.
    let needed: usize = tags.iter().map(|tag| tag.fixed_width().unwrap_or(4)).sum();
    if needed > reader.remaining() {
        return Err(CodecError::UnexpectedEof {
            needed,
            remaining: reader.remaining(),
        });
    }

    let args = tags
        .into_iter()
        .map(|tag| read_arg(&mut reader, tag))
        .collect::<Result<Vec<_>>>()?;

    if reader.remaining() != 0 {
        return Err(CodecError::TrailingBytes(reader.remaining()));
    }

    Ok(OscMessage::new(address, args)?)
}

fn read_arg(reader: &mut WireReader<'_>, tag: TypeTag) -> Result<OscArg> {
    let arg = match tag {
        TypeTag::Int => OscArg::Int(reader.read_i32()?),
        TypeTag::Float => OscArg::Float(reader.read_f32()?),
        TypeTag::String => OscArg::String(reader.read_osc_str()?.to_owned()),
        TypeTag::Blob => OscArg::Blob(Bytes::copy_from_slice(reader.read_osc_blob()?)),
        TypeTag::Long => OscArg::Long(reader.read_i64()?),
        TypeTag::Double => OscArg::Double(reader.read_f64()?),
        TypeTag::Char => {
            let raw = reader.read_u32()?;
            OscArg::Char(char::from_u32(raw).ok_or(CodecError::InvalidChar(raw))?)
        }
        TypeTag::Color => OscArg::Color(OscColor::from_bytes(reader.read_array4()?)),
        TypeTag::Midi => OscArg::Midi(OscMidi::from_bytes(reader.read_array4()?)),
        TypeTag::Time => OscArg::Time(OscTimeTag::from_bits(reader.read_u64()?)),
        TypeTag::True => OscArg::True,
        TypeTag::False => OscArg::False,
        TypeTag::Nil => OscArg::Nil,
        TypeTag::Impulse => OscArg::Impulse,
    };
    Ok(arg)
}
