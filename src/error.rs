use thiserror::Error;

/// Failure kinds surfaced by pattern validation and execution.
///
/// `Display` renders the exact text stored in `TestOutcome::error_message`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegexError {
    #[error("Pattern cannot be null or empty.")]
    EmptyPattern,

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("timeout exceeded: {0}")]
    Timeout(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyPattern,
    InvalidPattern,
    Timeout,
    Unexpected,
}

impl RegexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegexError::EmptyPattern => ErrorKind::EmptyPattern,
            RegexError::InvalidPattern(_) => ErrorKind::InvalidPattern,
            RegexError::Timeout(_) => ErrorKind::Timeout,
            RegexError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

pub type RegexResult<T> = Result<T, RegexError>;
