use oscprims_types::{OscArg, OscColor, OscMessage, OscMidi, OscTimeTag, TypeTag};
use tracing::debug;

use crate::config::AnnotationStyle;
use crate::encode::NAN_BITS_PREFIX;
use crate::error::{AnnotationError, Result};
use crate::token::{tokenize, Payload, Token};

/// Structural check: address, quoting, separators and tag suffixes.
///
/// Payloads are not parsed, so `x(i)` validates but does not decode.
pub fn validate(text: &str, style: AnnotationStyle) -> bool {
    match tokenize(text, style) {
        Ok(_) => true,
        Err(err) => {
            debug!(text, %style, error = %err, "invalid annotation");
            false
        }
    }
}

/// Parse annotation text back into a message.
pub fn decode(text: &str, style: AnnotationStyle) -> Option<OscMessage> {
    decode_inner(text, style)
        .inspect_err(|err| debug!(text, %style, error = %err, "rejected annotation"))
        .ok()
}

fn decode_inner(text: &str, style: AnnotationStyle) -> Result<OscMessage> {
    let (address, tokens) = tokenize(text, style)?;
    let args = tokens
        .into_iter()
        .map(classify)
        .collect::<Result<Vec<_>>>()?;
    Ok(OscMessage::new(address, args)?)
}

fn classify(token: Token<'_>) -> Result<OscArg> {
    match (token.tag, token.payload) {
        (Some(tag), payload) => typed(tag, payload),
        (None, Payload::Quoted(text)) => Ok(OscArg::String(text)),
        (None, Payload::Bare(text)) => Ok(infer(text)),
    }
}

/// Untagged bare tokens: keyword, then integer, then float, then string.
fn infer(text: &str) -> OscArg {
    match text {
        "true" => return OscArg::True,
        "false" => return OscArg::False,
        _ => {}
    }

    if !text.contains('.') {
        if let Ok(v) = text.parse::<i32>() {
            return OscArg::Int(v);
        }
        if let Ok(v) = text.parse::<i64>() {
            return OscArg::Long(v);
        }
    } else if let Ok(v) = text.parse::<f32>() {
        return OscArg::Float(v);
    }
    OscArg::String(text.to_string())
}

fn typed(tag: TypeTag, payload: Payload<'_>) -> Result<OscArg> {
    let bad = |payload: &str| AnnotationError::BadPayload {
        tag,
        payload: payload.to_string(),
    };

    // Only text-like tags accept a quoted payload.
    let text = match payload {
        Payload::Quoted(text) => {
            return match tag {
                TypeTag::String => Ok(OscArg::String(text)),
                TypeTag::Char => single_char(&text).map(OscArg::Char).ok_or_else(|| bad(&text)),
                _ => Err(bad(&text)),
            };
        }
        Payload::Bare(text) => text,
    };

    let arg = match tag {
        TypeTag::String => Some(OscArg::String(text.to_string())),
        TypeTag::Char => single_char(text).map(OscArg::Char),
        TypeTag::Int => text.parse().ok().map(OscArg::Int),
        TypeTag::Long => text.parse().ok().map(OscArg::Long),
        TypeTag::Float => parse_f32(text).map(OscArg::Float),
        TypeTag::Double => parse_f64(text).map(OscArg::Double),
        TypeTag::Time => text.parse().ok().map(|bits| OscArg::Time(OscTimeTag::from_bits(bits))),
        TypeTag::Blob => parse_hex(text).map(|bytes| OscArg::Blob(bytes.into())),
        TypeTag::Color => parse_hex4(text).map(|b| OscArg::Color(OscColor::from_bytes(b))),
        TypeTag::Midi => parse_hex4(text).map(|b| OscArg::Midi(OscMidi::from_bytes(b))),
        TypeTag::True => (text == "true").then_some(OscArg::True),
        TypeTag::False => (text == "false").then_some(OscArg::False),
        TypeTag::Nil => (text == "nil").then_some(OscArg::Nil),
        TypeTag::Impulse => (text == "impulse").then_some(OscArg::Impulse),
    };
    arg.ok_or_else(|| bad(text))
}

fn parse_f32(text: &str) -> Option<f32> {
    match text.strip_prefix(NAN_BITS_PREFIX) {
        Some(hex) => u32::from_str_radix(hex, 16)
            .ok()
            .map(f32::from_bits)
            .filter(|v| v.is_nan()),
        None => text.parse().ok(),
    }
}

fn parse_f64(text: &str) -> Option<f64> {
    match text.strip_prefix(NAN_BITS_PREFIX) {
        Some(hex) => u64::from_str_radix(hex, 16)
            .ok()
            .map(f64::from_bits)
            .filter(|v| v.is_nan()),
        None => text.parse().ok(),
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_hex(text: &str) -> Option<Vec<u8>> {
    if text.len() % 2 != 0 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    (0..text.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&text[i..i + 2], 16).ok())
        .collect()
}

fn parse_hex4(text: &str) -> Option<[u8; 4]> {
    parse_hex(text)?.try_into().ok()
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::encode::encode;

    const SPACES: AnnotationStyle = AnnotationStyle::Spaces;
    const EQUALS: AnnotationStyle = AnnotationStyle::EqualsComma;

    fn args(text: &str, style: AnnotationStyle) -> Vec<OscArg> {
        decode(text, style)
            .unwrap_or_else(|| panic!("failed to decode {text:?}"))
            .into_parts()
            .1
    }

    #[test]
    fn untagged_arguments_are_inferred() {
        let text = r#"/an/address/pattern 1 3.142 "a string with spaces" string true"#;
        assert!(validate(text, SPACES));
        let msg = decode(text, SPACES).unwrap();
        assert_eq!(msg.address(), "/an/address/pattern");
        assert_eq!(
            msg.args(),
            &[
                OscArg::Int(1),
                OscArg::Float(3.142),
                OscArg::from("a string with spaces"),
                OscArg::from("string"),
                OscArg::True,
            ]
        );
    }

    #[test]
    fn single_quoted_argument_is_one_string() {
        let expected = vec![OscArg::from("this should be a single string argument")];
        assert_eq!(
            args(r#"/an/address/pattern "this should be a single string argument""#, SPACES),
            expected
        );
        assert_eq!(
            args(r#"/an/address/pattern="this should be a single string argument""#, EQUALS),
            expected
        );
        assert_eq!(args(r#"/a="x,y""#, EQUALS), vec![OscArg::from("x,y")]);
    }

    #[test]
    fn inference_agrees_with_explicit_tags() {
        for (bare, tagged) in [
            ("1", "1(i)"),
            ("1.0", "1.0(f)"),
            ("-42", "-42(i)"),
            ("true", "true(T)"),
            ("false", "false(F)"),
            ("word", "word(s)"),
            ("4294967296", "4294967296(h)"),
        ] {
            assert_eq!(
                args(&format!("/t {bare}"), SPACES),
                args(&format!("/t {tagged}"), SPACES),
                "{bare} vs {tagged}"
            );
        }
    }

    #[test]
    fn inference_precedence() {
        assert_eq!(args(r#"/t "1""#, SPACES), vec![OscArg::from("1")]);
        assert_eq!(args(r#"/t "true""#, SPACES), vec![OscArg::from("true")]);
        assert_eq!(args("/t 1e5", SPACES), vec![OscArg::from("1e5")]);
        assert_eq!(args("/t 1.5.2", SPACES), vec![OscArg::from("1.5.2")]);
        assert_eq!(args("/t nil", SPACES), vec![OscArg::from("nil")]);
        assert_eq!(args("/t 2147483648", SPACES), vec![OscArg::Long(2_147_483_648)]);
    }

    #[test]
    fn explicit_tags_override_inference() {
        assert_eq!(args("/t 1(f)", SPACES), vec![OscArg::Float(1.0)]);
        assert_eq!(args("/t 1(d)", SPACES), vec![OscArg::Double(1.0)]);
        assert_eq!(args("/t 1(h)", SPACES), vec![OscArg::Long(1)]);
        assert_eq!(args("/t 1(s)", SPACES), vec![OscArg::from("1")]);
        assert_eq!(args("/t x(c)", SPACES), vec![OscArg::Char('x')]);
        assert_eq!(args("/t nil(N) impulse(I)", SPACES), vec![OscArg::Nil, OscArg::Impulse]);
        assert_eq!(
            args("/t cafe(b)", SPACES),
            vec![OscArg::Blob(Bytes::from_static(&[0xca, 0xfe]))]
        );
        assert_eq!(args("/t (b)", SPACES), vec![OscArg::Blob(Bytes::new())]);
        assert_eq!(args("/t 1(t)", SPACES), vec![OscArg::Time(OscTimeTag::IMMEDIATE)]);
    }

    #[test]
    fn bad_tagged_payloads_fail() {
        for text in [
            "/t x(i)",
            "/t 1.5(i)",
            "/t 99999999999(i)",
            "/t abc(f)",
            "/t yes(T)",
            "/t 1(F)",
            "/t abc(b)",
            "/t 0011(r)",
            "/t NaN:0x3f800000(f)",
            "/t NaN:0xzz(d)",
            "/t ab(c)",
            r#"/t "1"(i)"#,
        ] {
            assert!(validate(text, SPACES), "{text} should be structurally valid");
            assert!(decode(text, SPACES).is_none(), "{text} should not decode");
        }
    }

    #[test]
    fn structural_failures() {
        for (text, style) in [
            ("", SPACES),
            ("no/slash 1", SPACES),
            (r#"/a "unbalanced"#, SPACES),
            ("/a 1(?)", SPACES),
            ("/a=1,,2", EQUALS),
            ("/a=", EQUALS),
            ("/a b=1", EQUALS),
            ("/a=b 1", SPACES),
        ] {
            assert!(!validate(text, style), "{text:?}");
            assert!(decode(text, style).is_none(), "{text:?}");
        }
    }

    #[test]
    fn tagged_round_trip_in_both_styles() {
        let msg = OscMessage::new(
            "/mix/{a,b}/ch1",
            vec![
                OscArg::Int(-3),
                OscArg::Float(3.142),
                OscArg::Float(f32::INFINITY),
                OscArg::Float(f32::NAN),
                OscArg::Float(f32::from_bits(0x7fc0_0001)),
                OscArg::Double(-f64::NAN),
                OscArg::Double(-0.000_125),
                OscArg::Long(i64::MIN),
                OscArg::from("a string with spaces"),
                OscArg::from("commas, and \"quotes\" and \\"),
                OscArg::from(""),
                OscArg::from("ends(s)"),
                OscArg::from("1.0"),
                OscArg::Char('"'),
                OscArg::Char(','),
                OscArg::Blob(Bytes::from_static(b"\x00\x01\xff")),
                OscArg::Color(OscColor::new(1, 2, 3, 4)),
                OscArg::Midi(OscMidi::new(0, 0x80, 64, 0)),
                OscArg::Time(OscTimeTag::new(3_900_000_000, 0x8000_0000)),
                OscArg::True,
                OscArg::False,
                OscArg::Nil,
                OscArg::Impulse,
            ],
        )
        .unwrap();

        for style in [SPACES, EQUALS] {
            let text = encode(&msg, style, true);
            assert!(validate(&text, style), "{text}");
            assert_eq!(decode(&text, style), Some(msg.clone()), "{text}");
        }
    }

    #[test]
    fn equals_sign_never_reaches_an_address() {
        assert!(OscMessage::new("/a=b", vec![OscArg::Int(1)]).is_err());
        assert_eq!(decode("/a=b=1(i)", EQUALS), None);
        assert_eq!(args("/a=b=1", EQUALS), vec![OscArg::from("b=1")]);
        assert_eq!(args("/a b=1", SPACES), vec![OscArg::from("b=1")]);
    }

    #[test]
    fn untagged_round_trip_for_unambiguous_arguments() {
        let msg = OscMessage::new(
            "/synth/1",
            vec![
                OscArg::Int(440),
                OscArg::Float(0.25),
                OscArg::from("saw tooth"),
                OscArg::False,
            ],
        )
        .unwrap();

        for style in [SPACES, EQUALS] {
            let text = encode(&msg, style, false);
            assert_eq!(decode(&text, style), Some(msg.clone()), "{text}");
        }
    }

    #[test]
    fn message_without_arguments() {
        assert_eq!(decode("/ping", SPACES), OscMessage::empty("/ping").ok());
        assert_eq!(decode("/ping", EQUALS), OscMessage::empty("/ping").ok());
        assert_eq!(decode("/ping ", SPACES), OscMessage::empty("/ping").ok());
    }
}
