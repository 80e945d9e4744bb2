use std::fmt;
use std::path::PathBuf;

/// Result type for checksmith-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Template registry file missing or unreadable
    RegistryNotFound(PathBuf),

    /// Template registry document failed to deserialize
    RegistryFormat(String),

    /// No template matched the requested id or interpreter
    TemplateNotFound(String),

    /// Template does not list the requested group as applicable
    CategoryNotSupported {
        template_id: String,
        group: String,
        supported: Vec<String>,
    },

    /// A placeholder token survived rendering
    UnrenderedPlaceholder(String),

    /// Metadata could not be resolved; lists every missing field
    MissingMetadata(Vec<&'static str>),

    /// Explicit group override is not a known category
    UnknownGroup(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RegistryNotFound(path) => {
                write!(f, "Template registry not found: {}", path.display())
            }
            Error::RegistryFormat(msg) => write!(f, "Invalid template registry: {}", msg),
            Error::TemplateNotFound(what) => write!(
                f,
                "No matching template for {}. Run 'checksmith template list' to inspect options",
                what
            ),
            Error::CategoryNotSupported {
                template_id,
                group,
                supported,
            } => write!(
                f,
                "Template '{}' does not support group '{}'. Supported: {}",
                template_id,
                group,
                supported.join(", ")
            ),
            Error::UnrenderedPlaceholder(token) => {
                write!(f, "Template rendered with unresolved placeholder '{}'", token)
            }
            Error::MissingMetadata(fields) => write!(
                f,
                "Could not infer {} from the description. Provide --{} explicitly",
                fields.join(", "),
                fields.join(" --")
            ),
            Error::UnknownGroup(group) => write!(
                f,
                "Unsupported group '{}'. Allowed values: {}",
                group,
                checksmith_types::CATEGORIES.join(", ")
            ),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::RegistryFormat(err.to_string())
    }
}
