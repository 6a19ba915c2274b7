/// Errors that can occur during packet encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The buffer ended before a fixed-width value could be read.
    #[error("unexpected end of packet (needed {needed} bytes, {remaining} remaining)")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// No NUL terminator was found before the end of the buffer.
    #[error("unterminated OSC string")]
    UnterminatedString,

    /// Alignment padding contained a non-zero byte.
    #[error("non-zero padding byte")]
    InvalidPadding,

    /// A string was not valid UTF-8.
    #[error("OSC string is not valid UTF-8")]
    InvalidUtf8,

    /// The type-tag string does not begin with `,`.
    #[error("type-tag string must start with ','")]
    MissingTypeTagComma,

    /// The type-tag string names a tag outside the supported set.
    #[error("unknown type tag {0:?}")]
    UnknownTypeTag(char),

    /// A string argument contains NUL, which cannot be represented on the wire.
    #[error("string argument contains NUL")]
    EmbeddedNul,

    /// A `c` argument is not a Unicode scalar value.
    #[error("invalid character argument 0x{0:08x}")]
    InvalidChar(u32),

    /// The decoded address violates the address invariant.
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] oscprims_types::AddressError),

    /// A bundle element claims more bytes than remain in the bundle.
    #[error("bundle element too large ({declared} bytes, {remaining} remaining)")]
    ElementTooLarge { declared: usize, remaining: usize },

    /// A bundle element size is not a multiple of 4.
    #[error("bundle element size {0} is not a multiple of 4")]
    MisalignedElement(usize),

    /// Bytes were left over after the last argument of a message.
    #[error("{0} trailing bytes after message arguments")]
    TrailingBytes(usize),

    /// Bundles are nested deeper than the configured limit.
    #[error("bundle nesting exceeds depth {0}")]
    DepthExceeded(usize),

    /// A packet or length-prefixed value exceeds the allowed size.
    #[error("packet too large ({size} bytes, max {max})")]
    TooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading or writing packets.
    #[error("packet I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The connection was closed before a complete frame was received.
    #[error("connection closed (incomplete frame)")]
    ConnectionClosed,
}

pub type Result<T> = std::result::Result<T, CodecError>;
