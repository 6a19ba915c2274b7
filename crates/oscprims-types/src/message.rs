use crate::address::validate_address;
use crate::error::Result;
use crate::value::OscArg;

/// An OSC message: an address and an ordered argument list.
///
/// The address is validated on construction and the message is immutable
/// afterwards. Use [`OscMessage::into_parts`] to take it apart and build a
/// modified copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OscMessage {
    address: String,
    args: Vec<OscArg>,
}

impl OscMessage {
    /// Create a message, rejecting addresses that break the address invariant.
    pub fn new(address: impl Into<String>, args: Vec<OscArg>) -> Result<Self> {
        let address = address.into();
        validate_address(&address)?;
        Ok(Self { address, args })
    }

    /// Create a message with no arguments.
    pub fn empty(address: impl Into<String>) -> Result<Self> {
        Self::new(address, Vec::new())
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn args(&self) -> &[OscArg] {
        &self.args
    }

    /// The type-tag string for this message, including the leading `,`.
    pub fn type_tags(&self) -> String {
        let mut tags = String::with_capacity(self.args.len() + 1);
        tags.push(',');
        tags.extend(self.args.iter().map(|arg| arg.tag().as_char()));
        tags
    }

    pub fn into_parts(self) -> (String, Vec<OscArg>) {
        (self.address, self.args)
    }
}
