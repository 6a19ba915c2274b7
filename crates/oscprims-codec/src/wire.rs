//! Bounded primitive reads and writes for the OSC wire format.
//!
//! Every read checks the remaining length first; nothing here can index past
//! the end of the slice it was given.

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{CodecError, Result};

/// Round `len` up to the next multiple of 4.
pub const fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

/// Write an OSC string: UTF-8 bytes, a NUL terminator, NUL padding to 4.
pub(crate) fn put_osc_str(dst: &mut BytesMut, s: &str) {
    let total = padded_len(s.len() + 1);
    dst.reserve(total);
    dst.put_slice(s.as_bytes());
    dst.put_bytes(0, total - s.len());
}

/// Write an OSC blob: 4-byte big-endian length, bytes, NUL padding to 4.
pub(crate) fn put_osc_blob(dst: &mut BytesMut, data: &[u8]) -> Result<()> {
    let len = u32::try_from(data.len()).map_err(|_| CodecError::TooLarge {
        size: data.len(),
        max: u32::MAX as usize,
    })?;
    let padded = padded_len(data.len());
    dst.reserve(4 + padded);
    dst.put_u32(len);
    dst.put_slice(data);
    dst.put_bytes(0, padded - data.len());
    Ok(())
}

/// Cursor over an immutable byte slice.
pub(crate) struct WireReader<'a> {
    buf: &'a [u8],
}

impl<'a> WireReader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len()
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        if self.buf.len() < needed {
            return Err(CodecError::UnexpectedEof {
                needed,
                remaining: self.buf.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        self.ensure(n)?;
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32> {
        self.ensure(4)?;
        Ok(self.buf.get_u32())
    }

    pub(crate) fn read_i32(&mut self) -> Result<i32> {
        self.ensure(4)?;
        Ok(self.buf.get_i32())
    }

    pub(crate) fn read_u64(&mut self) -> Result<u64> {
        self.ensure(8)?;
        Ok(self.buf.get_u64())
    }

    pub(crate) fn read_i64(&mut self) -> Result<i64> {
        self.ensure(8)?;
        Ok(self.buf.get_i64())
    }

    pub(crate) fn read_f32(&mut self) -> Result<f32> {
        self.ensure(4)?;
        Ok(self.buf.get_f32())
    }

    pub(crate) fn read_f64(&mut self) -> Result<f64> {
        self.ensure(8)?;
        Ok(self.buf.get_f64())
    }

    pub(crate) fn read_array4(&mut self) -> Result<[u8; 4]> {
        let bytes = self.take(4)?;
        Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    fn skip_padding(&mut self, n: usize) -> Result<()> {
        if self.take(n)?.iter().any(|&b| b != 0) {
            return Err(CodecError::InvalidPadding);
        }
        Ok(())
    }

    /// Read a NUL-terminated, 4-byte aligned UTF-8 string.
    pub(crate) fn read_osc_str(&mut self) -> Result<&'a str> {
        let len = self
            .buf
            .iter()
            .position(|&b| b == 0)
            .ok_or(CodecError::UnterminatedString)?;
        let bytes = self.take(len)?;
        self.skip_padding(padded_len(len + 1) - len)?;
        std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
    }

    /// Read a length-prefixed, 4-byte aligned blob.
    pub(crate) fn read_osc_blob(&mut self) -> Result<&'a [u8]> {
        let len = self.read_u32()? as usize;
        let data = self.take(len)?;
        self.skip_padding(padded_len(len) - len)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_len_rounds_up() {
        assert_eq!(padded_len(0), 0);
        assert_eq!(padded_len(1), 4);
        assert_eq!(padded_len(4), 4);
        assert_eq!(padded_len(5), 8);
    }

    #[test]
    fn string_padding_always_has_a_terminator() {
        for len in 0..12 {
            let s = "x".repeat(len);
            let mut buf = BytesMut::new();
            put_osc_str(&mut buf, &s);
            assert_eq!(buf.len() % 4, 0, "len {len}");
            assert!(buf.len() > len);
            assert_eq!(buf[len], 0);
        }
    }

    #[test]
    fn blob_prefix_is_not_padded() {
        let mut buf = BytesMut::new();
        put_osc_blob(&mut buf, &[1, 2, 3]).unwrap();
        assert_eq!(buf.as_ref(), &[0, 0, 0, 3, 1, 2, 3, 0]);

        buf.clear();
        put_osc_blob(&mut buf, &[]).unwrap();
        assert_eq!(buf.as_ref(), &[0, 0, 0, 0]);
    }

    #[test]
    fn read_string_consumes_padding() {
        let mut reader = WireReader::new(b"abcd\0\0\0\0rest");
        assert_eq!(reader.read_osc_str().unwrap(), "abcd");
        assert_eq!(reader.remaining(), 4);
    }

    #[test]
    fn read_string_without_terminator_fails() {
        let mut reader = WireReader::new(b"abcd");
        assert!(matches!(
            reader.read_osc_str(),
            Err(CodecError::UnterminatedString)
        ));
    }

    #[test]
    fn read_string_with_short_padding_fails() {
        let mut reader = WireReader::new(b"ab\0");
        assert!(matches!(
            reader.read_osc_str(),
            Err(CodecError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn read_string_with_dirty_padding_fails() {
        let mut reader = WireReader::new(b"ab\0x");
        assert!(matches!(
            reader.read_osc_str(),
            Err(CodecError::InvalidPadding)
        ));
    }

    #[test]
    fn blob_length_beyond_buffer_fails() {
        let mut reader = WireReader::new(&[0, 0, 0, 9, 1, 2, 3, 4]);
        assert!(matches!(
            reader.read_osc_blob(),
            Err(CodecError::UnexpectedEof { needed: 9, remaining: 4 })
        ));
    }

    #[test]
    fn fixed_width_reads_are_bounded() {
        let mut reader = WireReader::new(&[0, 0, 1]);
        assert!(reader.read_i32().is_err());
        assert!(reader.read_u64().is_err());
        assert_eq!(reader.remaining(), 3);
    }
}
