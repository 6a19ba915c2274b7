/// Errors raised when a message is constructed with an invalid address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The address is the empty string.
    #[error("address must not be empty")]
    Empty,

    /// The address does not start with `/`.
    #[error("address must start with '/': {0:?}")]
    MissingLeadingSlash(String),

    /// The address contains a whitespace character.
    #[error("address must not contain whitespace: {0:?}")]
    Whitespace(String),

    /// The address contains a `,` outside of a `{...}` alternative group.
    #[error("address must not contain ',' outside '{{...}}': {0:?}")]
    Comma(String),

    /// The address contains `=`, which separates the address from the
    /// arguments in `equalsComma` annotation text.
    #[error("address must not contain '=': {0:?}")]
    Equals(String),

    /// The address contains a NUL byte, which would truncate it on the wire.
    #[error("address must not contain NUL: {0:?}")]
    Nul(String),
}

pub type Result<T> = std::result::Result<T, AddressError>;
