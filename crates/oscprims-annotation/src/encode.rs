use std::fmt::Write as _;

use oscprims_types::{OscArg, OscMessage};

use crate::config::AnnotationStyle;

/// Marks a NaN other than the default quiet NaN; the raw bits follow in hex.
pub(crate) const NAN_BITS_PREFIX: &str = "NaN:0x";

/// Render a message as annotation text.
///
/// Without arguments the result is the bare address in either style.
pub fn encode(message: &OscMessage, style: AnnotationStyle, include_type_tags: bool) -> String {
    let mut out = String::from(message.address());

    for (i, arg) in message.args().iter().enumerate() {
        out.push(if i == 0 {
            style.address_separator()
        } else {
            style.argument_separator()
        });
        push_arg(&mut out, arg);
        if include_type_tags {
            out.push('(');
            out.push(arg.tag().as_char());
            out.push(')');
        }
    }
    out
}

fn push_arg(out: &mut String, arg: &OscArg) {
    match arg {
        OscArg::Int(v) => push_display(out, v),
        OscArg::Long(v) => push_display(out, v),
        OscArg::Float(v) if v.is_nan() && v.to_bits() != f32::NAN.to_bits() => {
            let _ = write!(out, "{NAN_BITS_PREFIX}{:08x}", v.to_bits());
        }
        OscArg::Double(v) if v.is_nan() && v.to_bits() != f64::NAN.to_bits() => {
            let _ = write!(out, "{NAN_BITS_PREFIX}{:016x}", v.to_bits());
        }
        OscArg::Float(v) => push_float(out, v, v.is_finite()),
        OscArg::Double(v) => push_float(out, v, v.is_finite()),
        OscArg::String(s) => push_text(out, s),
        OscArg::Char(c) => push_text(out, c.encode_utf8(&mut [0; 4])),
        OscArg::Blob(bytes) => push_hex(out, bytes),
        OscArg::Color(color) => push_hex(out, &color.to_bytes()),
        OscArg::Midi(midi) => push_hex(out, &midi.to_bytes()),
        OscArg::Time(time) => push_display(out, &time.to_bits()),
        OscArg::True => out.push_str("true"),
        OscArg::False => out.push_str("false"),
        OscArg::Nil => out.push_str("nil"),
        OscArg::Impulse => out.push_str("impulse"),
    }
}

fn push_display(out: &mut String, value: &impl std::fmt::Display) {
    // Writing into a String cannot fail.
    let _ = write!(out, "{value}");
}

/// Shortest round-trip decimal, always with a `.` when finite.
fn push_float(out: &mut String, value: &impl std::fmt::Display, finite: bool) {
    let start = out.len();
    push_display(out, value);
    if finite && !out[start..].contains('.') {
        out.push_str(".0");
    }
}

fn push_text(out: &mut String, text: &str) {
    if !needs_quotes(text) {
        out.push_str(text);
        return;
    }
    out.push('"');
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

/// A string is quoted when it would otherwise split, read as empty, or end
/// in something that parses as a `(tag)` suffix.
fn needs_quotes(text: &str) -> bool {
    text.is_empty()
        || text.contains(|c: char| c.is_whitespace() || c == ',' || c == '"')
        || looks_tagged(text)
}

fn looks_tagged(text: &str) -> bool {
    let mut rev = text.chars().rev();
    matches!(
        (rev.next(), rev.next(), rev.next()),
        (Some(')'), Some(_), Some('('))
    )
}

fn push_hex(out: &mut String, bytes: &[u8]) {
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
}
