use thiserror::Error;

/// Main error type for LwM2M TLV codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TlvError {
    #[error("input too short to contain a frame header: {0} byte(s)")]
    InvalidInput(usize),

    #[error("frame declares length {declared} but only {available} byte(s) remain")]
    Truncated { declared: usize, available: usize },

    #[error("invalid payload length {0} for this value kind")]
    InvalidLength(usize),

    #[error("unrecognised resource kind code: {0}")]
    UnrecognizedKind(u8),

    #[error("unexpected frame kind: expected {expected:?}, found {found:?}")]
    UnexpectedFrameKind {
        expected: crate::kind::FrameKind,
        found: crate::kind::FrameKind,
    },

    #[error("identifier mismatch: schema expects {expected}, wire has {found}")]
    IdentifierMismatch { expected: u16, found: u16 },

    #[error("no schema entry for identifier {0}")]
    UnknownIdentifier(u16),

    #[error("value does not match its declared kind: {0}")]
    TypeMismatch(String),

    #[error("value too large to encode: {0}")]
    ValueTooLarge(String),

    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

/// Result type alias for LwM2M TLV codec operations
pub type TlvResult<T> = Result<T, TlvError>;
