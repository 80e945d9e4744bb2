use std::fmt;

/// Result type for checksmith-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// File name does not follow the `{group}-{service}-{test}.{ext}` protocol
    InvalidCheckName(String),

    /// Extension does not map to a supported interpreter
    UnsupportedExtension(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCheckName(name) => {
                write!(
                    f,
                    "Invalid check file name '{}': expected {{group}}-{{service}}-{{test}}.{{ext}}",
                    name
                )
            }
            Error::UnsupportedExtension(ext) => {
                write!(f, "Unsupported check extension '{}'", ext)
            }
        }
    }
}

impl std::error::Error for Error {}
