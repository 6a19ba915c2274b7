use bytes::Bytes;

use crate::tag::TypeTag;
use crate::time::OscTimeTag;

/// 32-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OscColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl OscColor {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

/// 4-byte MIDI message: port id, status byte, two data bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OscMidi {
    pub port: u8,
    pub status: u8,
    pub data1: u8,
    pub data2: u8,
}

impl OscMidi {
    pub const fn new(port: u8, status: u8, data1: u8, data2: u8) -> Self {
        Self {
            port,
            status,
            data1,
            data2,
        }
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.port, self.status, self.data1, self.data2]
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

/// One OSC message argument.
///
/// Equality is structural. `Float` and `Double` compare by bit pattern so a
/// decoded value equals the value that was encoded, including NaN payloads
/// and signed zeros.
#[derive(Debug, Clone)]
pub enum OscArg {
    Int(i32),
    Float(f32),
    String(String),
    Blob(Bytes),
    Long(i64),
    Double(f64),
    Char(char),
    Color(OscColor),
    Midi(OscMidi),
    Time(OscTimeTag),
    True,
    False,
    Nil,
    Impulse,
}

impl OscArg {
    pub fn tag(&self) -> TypeTag {
        match self {
            OscArg::Int(_) => TypeTag::Int,
            OscArg::Float(_) => TypeTag::Float,
            OscArg::String(_) => TypeTag::String,
            OscArg::Blob(_) => TypeTag::Blob,
            OscArg::Long(_) => TypeTag::Long,
            OscArg::Double(_) => TypeTag::Double,
            OscArg::Char(_) => TypeTag::Char,
            OscArg::Color(_) => TypeTag::Color,
            OscArg::Midi(_) => TypeTag::Midi,
            OscArg::Time(_) => TypeTag::Time,
            OscArg::True => TypeTag::True,
            OscArg::False => TypeTag::False,
            OscArg::Nil => TypeTag::Nil,
            OscArg::Impulse => TypeTag::Impulse,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            OscArg::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            OscArg::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OscArg::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            OscArg::Blob(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            OscArg::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            OscArg::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// `Some(true)` for `True`, `Some(false)` for `False`, otherwise `None`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OscArg::True => Some(true),
            OscArg::False => Some(false),
            _ => None,
        }
    }
}

impl PartialEq for OscArg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OscArg::Int(a), OscArg::Int(b)) => a == b,
            (OscArg::Float(a), OscArg::Float(b)) => a.to_bits() == b.to_bits(),
            (OscArg::String(a), OscArg::String(b)) => a == b,
            (OscArg::Blob(a), OscArg::Blob(b)) => a == b,
            (OscArg::Long(a), OscArg::Long(b)) => a == b,
            (OscArg::Double(a), OscArg::Double(b)) => a.to_bits() == b.to_bits(),
            (OscArg::Char(a), OscArg::Char(b)) => a == b,
            (OscArg::Color(a), OscArg::Color(b)) => a == b,
            (OscArg::Midi(a), OscArg::Midi(b)) => a == b,
            (OscArg::Time(a), OscArg::Time(b)) => a == b,
            (OscArg::True, OscArg::True)
            | (OscArg::False, OscArg::False)
            | (OscArg::Nil, OscArg::Nil)
            | (OscArg::Impulse, OscArg::Impulse) => true,
            _ => false,
        }
    }
}

impl Eq for OscArg {}

impl From<i32> for OscArg {
    fn from(v: i32) -> Self {
        OscArg::Int(v)
    }
}

impl From<f32> for OscArg {
    fn from(v: f32) -> Self {
        OscArg::Float(v)
    }
}

impl From<&str> for OscArg {
    fn from(v: &str) -> Self {
        OscArg::String(v.to_string())
    }
}

impl From<String> for OscArg {
    fn from(v: String) -> Self {
        OscArg::String(v)
    }
}

impl From<Bytes> for OscArg {
    fn from(v: Bytes) -> Self {
        OscArg::Blob(v)
    }
}

impl From<Vec<u8>> for OscArg {
    fn from(v: Vec<u8>) -> Self {
        OscArg::Blob(Bytes::from(v))
    }
}

impl From<i64> for OscArg {
    fn from(v: i64) -> Self {
        OscArg::Long(v)
    }
}

impl From<f64> for OscArg {
    fn from(v: f64) -> Self {
        OscArg::Double(v)
    }
}

impl From<char> for OscArg {
    fn from(v: char) -> Self {
        OscArg::Char(v)
    }
}

impl From<bool> for OscArg {
    fn from(v: bool) -> Self {
        if v {
            OscArg::True
        } else {
            OscArg::False
        }
    }
}

impl From<OscColor> for OscArg {
    fn from(v: OscColor) -> Self {
        OscArg::Color(v)
    }
}

impl From<OscMidi> for OscArg {
    fn from(v: OscMidi) -> Self {
        OscArg::Midi(v)
    }
}

impl From<OscTimeTag> for OscArg {
    fn from(v: OscTimeTag) -> Self {
        OscArg::Time(v)
    }
}
