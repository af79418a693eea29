use thiserror::Error;

/// Reasons a version string fails to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty version string")]
    Empty,

    #[error("expected MAJOR.MINOR.PATCH, found {found} component(s) in '{input}'")]
    ComponentCount { input: String, found: usize },

    #[error("invalid {field} component '{value}'")]
    InvalidComponent { field: &'static str, value: String },

    #[error("empty prerelease identifier in '{input}'")]
    EmptyPrerelease { input: String },
}

/// Unified error type for version-check operations
#[derive(Error, Debug)]
pub enum VersionCheckError {
    #[error("Version parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-check
pub type Result<T> = std::result::Result<T, VersionCheckError>;

impl VersionCheckError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionCheckError::Config(msg.into())
    }
}
