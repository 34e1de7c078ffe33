//! Error types for toggle-engine

/// Result type for toggle-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in toggle-engine operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}
