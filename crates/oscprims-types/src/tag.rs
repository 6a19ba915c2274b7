use bytes::Bytes;

use crate::time::OscTimeTag;
use crate::value::{OscArg, OscColor, OscMidi};

/// Single-character type tag identifying an [`OscArg`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int,
    Float,
    String,
    Blob,
    Long,
    Double,
    Char,
    Color,
    Midi,
    Time,
    True,
    False,
    Nil,
    Impulse,
}

impl TypeTag {
    /// Every tag, in canonical order.
    pub const ALL: [TypeTag; 14] = [
        TypeTag::Int,
        TypeTag::Float,
        TypeTag::String,
        TypeTag::Blob,
        TypeTag::Long,
        TypeTag::Double,
        TypeTag::Char,
        TypeTag::Color,
        TypeTag::Midi,
        TypeTag::Time,
        TypeTag::True,
        TypeTag::False,
        TypeTag::Nil,
        TypeTag::Impulse,
    ];

    /// The tag character used in type-tag strings and annotations.
    pub const fn as_char(self) -> char {
        match self {
            TypeTag::Int => 'i',
            TypeTag::Float => 'f',
            TypeTag::String => 's',
            TypeTag::Blob => 'b',
            TypeTag::Long => 'h',
            TypeTag::Double => 'd',
            TypeTag::Char => 'c',
            TypeTag::Color => 'r',
            TypeTag::Midi => 'm',
            TypeTag::Time => 't',
            TypeTag::True => 'T',
            TypeTag::False => 'F',
            TypeTag::Nil => 'N',
            TypeTag::Impulse => 'I',
        }
    }

    /// Look up a tag by its character.
    pub const fn from_char(ch: char) -> Option<TypeTag> {
        let tag = match ch {
            'i' => TypeTag::Int,
            'f' => TypeTag::Float,
            's' => TypeTag::String,
            'b' => TypeTag::Blob,
            'h' => TypeTag::Long,
            'd' => TypeTag::Double,
            'c' => TypeTag::Char,
            'r' => TypeTag::Color,
            'm' => TypeTag::Midi,
            't' => TypeTag::Time,
            'T' => TypeTag::True,
            'F' => TypeTag::False,
            'N' => TypeTag::Nil,
            'I' => TypeTag::Impulse,
            _ => return None,
        };
        Some(tag)
    }

    /// Number of payload bytes a fixed-width tag occupies on the wire.
    ///
    /// Returns `None` for the variable-width string and blob tags.
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            TypeTag::Int | TypeTag::Float | TypeTag::Char | TypeTag::Color | TypeTag::Midi => {
                Some(4)
            }
            TypeTag::Long | TypeTag::Double | TypeTag::Time => Some(8),
            TypeTag::True | TypeTag::False | TypeTag::Nil | TypeTag::Impulse => Some(0),
            TypeTag::String | TypeTag::Blob => None,
        }
    }

    /// An empty or zero-valued argument of this tag's variant.
    pub fn default_arg(self) -> OscArg {
        match self {
            TypeTag::Int => OscArg::Int(0),
            TypeTag::Float => OscArg::Float(0.0),
            TypeTag::String => OscArg::String(String::new()),
            TypeTag::Blob => OscArg::Blob(Bytes::new()),
            TypeTag::Long => OscArg::Long(0),
            TypeTag::Double => OscArg::Double(0.0),
            TypeTag::Char => OscArg::Char('\0'),
            TypeTag::Color => OscArg::Color(OscColor::default()),
            TypeTag::Midi => OscArg::Midi(OscMidi::default()),
            TypeTag::Time => OscArg::Time(OscTimeTag::default()),
            TypeTag::True => OscArg::True,
            TypeTag::False => OscArg::False,
            TypeTag::Nil => OscArg::Nil,
            TypeTag::Impulse => OscArg::Impulse,
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
