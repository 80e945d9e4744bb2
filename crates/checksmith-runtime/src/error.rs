use std::fmt;
use std::path::PathBuf;

/// Result type for checksmith-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Engine layer error (templates, inference)
    Engine(checksmith_engine::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Checks root directory missing or unreadable; aborts the run
    ChecksRootMissing(PathBuf),

    /// Target check file already exists and --force was not given
    Collision(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Engine(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::ChecksRootMissing(path) => write!(
                f,
                "Checks directory not found or unreadable: {}",
                path.display()
            ),
            Error::Collision(path) => write!(
                f,
                "Target check '{}' already exists. Use --force to overwrite or choose a different name",
                path.display()
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Engine(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::ChecksRootMissing(_) | Error::Collision(_) => None,
        }
    }
}

impl From<checksmith_engine::Error> for Error {
    fn from(err: checksmith_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
