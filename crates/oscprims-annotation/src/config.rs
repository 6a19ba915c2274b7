use std::str::FromStr;

use oscprims_types::OscMessage;

use crate::error::ParseStyleError;

/// Annotation text layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnnotationStyle {
    /// `/addr arg arg`
    #[default]
    Spaces,
    /// `/addr=arg,arg`
    EqualsComma,
}

impl AnnotationStyle {
    /// Character between the address and the first argument.
    pub const fn address_separator(self) -> char {
        match self {
            AnnotationStyle::Spaces => ' ',
            AnnotationStyle::EqualsComma => '=',
        }
    }

    /// Character between arguments.
    pub const fn argument_separator(self) -> char {
        match self {
            AnnotationStyle::Spaces => ' ',
            AnnotationStyle::EqualsComma => ',',
        }
    }
}

impl FromStr for AnnotationStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spaces" => Ok(AnnotationStyle::Spaces),
            "equals-comma" | "equalsComma" | "equals_comma" => Ok(AnnotationStyle::EqualsComma),
            other => Err(ParseStyleError(other.to_string())),
        }
    }
}

impl std::fmt::Display for AnnotationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnotationStyle::Spaces => f.write_str("spaces"),
            AnnotationStyle::EqualsComma => f.write_str("equals-comma"),
        }
    }
}

/// Controls annotation encoding and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationConfig {
    /// Text layout used for both directions.
    pub style: AnnotationStyle,
    /// When true, every encoded argument carries a `(tag)` suffix.
    pub include_type_tags: bool,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            style: AnnotationStyle::Spaces,
            include_type_tags: true,
        }
    }
}

impl AnnotationConfig {
    pub fn encode(&self, message: &OscMessage) -> String {
        crate::encode::encode(message, self.style, self.include_type_tags)
    }

    pub fn validate(&self, text: &str) -> bool {
        crate::decode::validate(text, self.style)
    }

    pub fn decode(&self, text: &str) -> Option<OscMessage> {
        crate::decode::decode(text, self.style)
    }
}
