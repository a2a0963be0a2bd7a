use thiserror::Error;

/// Classifies rule parse errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Rule contains an empty label (leading, trailing or doubled dot)
    EmptyLabel,
    /// Wildcard used where the rule format does not allow it
    MisplacedWildcard,
    /// Exception rule that is bare or too short to leave a suffix behind
    BadException,
}

/// Suffix list engine error types
#[derive(Error, Debug)]
pub enum PslError {
    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine {
        line: usize,
        kind: ParseErrorKind,
        message: String,
    },

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Suffix list has not been installed")]
    NotInitialized,

    #[error("Suffix list has already been installed")]
    AlreadyInitialized,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PslError>;
