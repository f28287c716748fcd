use thiserror::Error;

/// Main error type for gator
#[derive(Error, Debug)]
pub enum GatorError {
    /// A required key is absent, empty, or not a string
    #[error("{0} is required in config file")]
    MissingField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not determine home directory\n\nTroubleshooting:\n- Ensure HOME is set for the current user")]
    HomeDirUnavailable,
}

pub type Result<T> = std::result::Result<T, GatorError>;
