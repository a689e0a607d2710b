/*!
 * Error types for the tagasalin pipeline.
 *
 * This module contains custom error types for the chunking pipeline and the
 * translation backend, using the thiserror crate for ergonomic error
 * definitions.
 */

use thiserror::Error;

/// Errors raised by a translation backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend could not be reached or refused our credentials
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// The backend received the request and rejected it
    #[error("Backend rejected request: {status_code} - {message}")]
    RequestRejected {
        /// HTTP status code
        status_code: u16,
        /// Error message from the backend
        message: String,
    },

    /// The backend replied with something that could not be decoded
    #[error("Failed to parse backend response: {0}")]
    MalformedResponse(String),
}

/// Errors that can occur during a translation run
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Input text is empty or whitespace-only after trimming
    #[error("Input text is empty")]
    EmptyInput,

    /// Options were rejected before any backend call was made
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A chunk failed to translate; the run is aborted with no output
    #[error("Translation of chunk {chunk_index} failed: {source}")]
    ChunkFailed {
        /// Position index of the failing chunk
        chunk_index: usize,
        /// The backend failure that caused the abort
        #[source]
        source: BackendError,
    },
}

impl TranslationError {
    /// Index of the chunk that aborted the run, if this error carries one
    pub fn chunk_index(&self) -> Option<usize> {
        match self {
            TranslationError::ChunkFailed { chunk_index, .. } => Some(*chunk_index),
            _ => None,
        }
    }
}
