//! Error types for the viewer core.
//!
//! - [`IntakeError`] - user-facing validation failures that reject a whole batch
//! - [`ViewerError`] - precondition violations on session operations

use thiserror::Error;

use crate::models::FileKey;

/// Reason a batch of candidate files was rejected.
///
/// Both variants are non-fatal. The session keeps the most recent one in its
/// single error slot so the UI can show it until the next intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// At least one candidate is neither `application/pdf` nor named `*.pdf`.
    #[error("Only PDF is allowed.")]
    InvalidFileType,
    /// A candidate shares its (name, type) key with a collected file or with
    /// another candidate in the same batch.
    #[error("Don't select a duplicate file.")]
    DuplicateFile,
}

/// Session operation called with a key that is not in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("file not in collection: {0}")]
    NotInCollection(FileKey),
}
