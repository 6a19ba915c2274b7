/// Errors that can occur while compiling an address pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// A `[` set was never closed.
    #[error("unclosed '[' at offset {0}")]
    UnclosedSet(usize),

    /// A `{` alternative group was never closed.
    #[error("unclosed '{{' at offset {0}")]
    UnclosedGroup(usize),

    /// A `[` set lists no characters.
    #[error("empty character set at offset {0}")]
    EmptySet(usize),

    /// A `{` or `[` appeared inside a `{...}` group.
    #[error("nested group at offset {0}")]
    NestedGroup(usize),
}

pub type Result<T> = std::result::Result<T, PatternError>;
