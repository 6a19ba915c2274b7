use oscprims_types::{AddressError, TypeTag};

/// Reasons an annotation is rejected. Only logged, never returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum AnnotationError {
    #[error("invalid address: {0}")]
    Address(#[from] AddressError),

    #[error("unbalanced quote")]
    UnbalancedQuote,

    #[error("quote does not wrap the whole token: {0}")]
    StrayQuote(String),

    #[error("empty argument at position {0}")]
    EmptyToken(usize),

    #[error("unknown type tag '{0}'")]
    UnknownTag(char),

    #[error("'{payload}' is not a valid '{tag}' payload")]
    BadPayload { tag: TypeTag, payload: String },
}

pub(crate) type Result<T> = std::result::Result<T, AnnotationError>;

/// An unrecognized annotation style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown annotation style '{0}' (expected 'spaces' or 'equals-comma')")]
pub struct ParseStyleError(pub String);
