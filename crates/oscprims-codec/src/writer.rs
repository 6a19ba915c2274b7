use std::io::{ErrorKind, Write};

use bytes::BytesMut;
use oscprims_types::OscPacket;

use crate::codec::CodecConfig;
use crate::error::{CodecError, Result};
use crate::frame::encode_stream_frame;

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;

/// Writes size-prefixed packets to any `Write` stream.
pub struct PacketWriter<T> {
    inner: T,
    buf: BytesMut,
    config: CodecConfig,
}

impl<T: Write> PacketWriter<T> {
    /// Create a new packet writer with default limits.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, CodecConfig::default())
    }

    /// Create a new packet writer with explicit limits.
    pub fn with_config(inner: T, config: CodecConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
        }
    }

    /// Encode and write one complete frame (blocking).
    ///
    /// Packets larger than `max_packet_size` are rejected before anything is
    /// written.
    pub fn write_packet(&mut self, packet: &OscPacket) -> Result<()> {
        self.buf.clear();
        encode_stream_frame(packet, &mut self.buf)?;

        let size = self.buf.len() - crate::codec::SIZE_PREFIX_LEN;
        if size > self.config.max_packet_size {
            return Err(CodecError::TooLarge {
                size,
                max: self.config.max_packet_size,
            });
        }

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(CodecError::ConnectionClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(CodecError::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(CodecError::Io(err)),
            }
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current writer limits.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bytes::{Bytes, BytesMut};
    use oscprims_types::{OscArg, OscBundle, OscMessage};

    use super::*;
    use crate::frame::decode_stream_frame;

    fn msg(address: &str, arg: &str) -> OscPacket {
        OscMessage::new(address, vec![OscArg::from(arg)])
            .unwrap()
            .into()
    }

    fn written(writer: PacketWriter<Cursor<Vec<u8>>>) -> BytesMut {
        BytesMut::from(writer.into_inner().into_inner().as_slice())
    }

    #[test]
    fn write_single_packet() {
        let mut writer = PacketWriter::new(Cursor::new(Vec::<u8>::new()));
        writer.write_packet(&msg("/hello", "world")).unwrap();

        let mut wire = written(writer);
        let packet = decode_stream_frame(&mut wire, &CodecConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(packet, msg("/hello", "world"));
        assert!(wire.is_empty());
    }

    #[test]
    fn write_multiple_packets() {
        let mut writer = PacketWriter::new(Cursor::new(Vec::<u8>::new()));
        let bundle: OscPacket = OscBundle::immediate(vec![msg("/b", "2")]).into();
        writer.write_packet(&msg("/a", "1")).unwrap();
        writer.write_packet(&bundle).unwrap();

        let mut wire = written(writer);
        let config = CodecConfig::default();
        assert_eq!(
            decode_stream_frame(&mut wire, &config).unwrap().unwrap(),
            msg("/a", "1")
        );
        assert_eq!(decode_stream_frame(&mut wire, &config).unwrap().unwrap(), bundle);
    }

    #[test]
    fn rejects_oversized_packet_before_writing() {
        let cfg = CodecConfig {
            max_packet_size: 16,
            ..CodecConfig::default()
        };
        let mut writer = PacketWriter::with_config(Cursor::new(Vec::<u8>::new()), cfg);
        let big: OscPacket = OscMessage::new("/big", vec![OscArg::Blob(Bytes::from(vec![0u8; 64]))])
            .unwrap()
            .into();

        let err = writer.write_packet(&big).unwrap_err();
        assert!(matches!(err, CodecError::TooLarge { max: 16, .. }));
        assert!(writer.get_ref().get_ref().is_empty());
    }

    #[test]
    fn write_zero_reports_closed() {
        let mut writer = PacketWriter::new(ZeroWriter);
        let err = writer.write_packet(&msg("/x", "y")).unwrap_err();
        assert!(matches!(err, CodecError::ConnectionClosed));
    }

    #[test]
    fn short_writes_are_completed() {
        let mut writer = PacketWriter::new(TwoBytesAtATime(Vec::new()));
        writer.write_packet(&msg("/short", "writes")).unwrap();

        let mut wire = BytesMut::from(writer.into_inner().0.as_slice());
        let packet = decode_stream_frame(&mut wire, &CodecConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(packet, msg("/short", "writes"));
    }

    #[test]
    fn accessors_and_into_inner() {
        let mut writer = PacketWriter::new(Cursor::new(Vec::<u8>::new()));
        assert_eq!(writer.config().max_depth, CodecConfig::default().max_depth);
        let _ = writer.get_ref();
        let _ = writer.get_mut();
        let _inner = writer.into_inner();
    }

    struct ZeroWriter;

    impl Write for ZeroWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct TwoBytesAtATime(Vec<u8>);

    impl Write for TwoBytesAtATime {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let n = buf.len().min(2);
            self.0.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
