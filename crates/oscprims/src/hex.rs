//! Hex text for packet bytes on the command line.

use std::fmt::Write as _;

pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Parse hex digits, ignoring whitespace and an optional `0x` prefix.
pub fn decode(text: &str) -> Result<Vec<u8>, String> {
    let text = text.trim();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", digits.len()));
    }
    digits
        .chunks_exact(2)
        .map(|pair| match (nibble(pair[0]), nibble(pair[1])) {
            (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
            _ => Err(format!(
                "invalid hex digit in {:?}",
                String::from_utf8_lossy(pair)
            )),
        })
        .collect()
}

fn nibble(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|d| d as u8)
}

/// Hex words of 4 bytes, 16 bytes per line, with offsets.
pub fn dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (line, chunk) in bytes.chunks(16).enumerate() {
        let _ = write!(out, "{:04x}:", line * 16);
        for word in chunk.chunks(4) {
            out.push(' ');
            out.push_str(&encode(word));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_accepts_prefix_and_whitespace() {
        assert_eq!(decode("0x2f61 0000\n").unwrap(), vec![0x2f, 0x61, 0, 0]);
        assert_eq!(decode("DEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_bad_digits() {
        assert!(decode("abc").is_err());
        assert!(decode("zz").is_err());
    }

    #[test]
    fn dump_groups_words() {
        let bytes: Vec<u8> = (0u8..20).collect();
        assert_eq!(
            dump(&bytes),
            "0000: 00010203 04050607 08090a0b 0c0d0e0f\n0010: 10111213\n"
        );
        assert_eq!(encode(&bytes[..2]), "0001");
    }
}
