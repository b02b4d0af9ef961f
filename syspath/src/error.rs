//! Error types for the syspath library.
//!
//! This module provides the error hierarchy for path construction and the
//! filesystem pass-through layer, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a syspath error.
///
/// # Examples
///
/// ```
/// use syspath::{Error, Result};
///
/// fn example_operation() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the syspath library.
///
/// The path algebra itself is total over accepted input; errors arise only at
/// validated type boundaries (a non-rooted string handed to the absolute-file
/// constructor, an empty string where a name is required) and from the
/// filesystem pass-through layer.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An empty string was passed where a non-empty path is required.
    #[error("empty path: {context}")]
    EmptyPath {
        /// What the empty string was supposed to name.
        context: String,
    },

    /// An I/O error occurred in the filesystem pass-through layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error indicates a path that does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use syspath::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    /// let err: Error = io.into();
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if the error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied)
    }
}
