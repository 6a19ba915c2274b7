//! `tokio_util` codec for size-prefixed packet streams.

use bytes::BytesMut;
use oscprims_types::OscPacket;
use tokio_util::codec::{Decoder, Encoder};

use crate::codec::CodecConfig;
use crate::error::{CodecError, Result};
use crate::frame::{decode_stream_frame, encode_stream_frame};

/// Stream-framed OSC codec for use with `FramedRead`/`FramedWrite`.
#[derive(Debug, Clone, Default)]
pub struct OscCodec {
    config: CodecConfig,
}

impl OscCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl Decoder for OscCodec {
    type Item = OscPacket;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<OscPacket>> {
        decode_stream_frame(src, &self.config)
    }
}

impl Encoder<OscPacket> for OscCodec {
    type Error = CodecError;

    fn encode(&mut self, item: OscPacket, dst: &mut BytesMut) -> Result<()> {
        encode_stream_frame(&item, dst)
    }
}
