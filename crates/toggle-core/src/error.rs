//! Error types for toggle-core

/// Result type for toggle-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in toggle-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from toggle-fs
    #[error(transparent)]
    Fs(#[from] toggle_fs::Error),
}
