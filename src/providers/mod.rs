/*!
 * Backend implementations for the translation service.
 *
 * This module contains client implementations for translation backends:
 * - OpenAI: Responses API over HTTPS, works with any compatible endpoint
 * - Mock: configurable in-memory backend for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::BackendError;

/// A single translation request handed to a backend
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Chunk text to translate
    pub text: String,

    /// Directive steering tone and preservation behavior
    pub instruction: String,

    /// Model identifier
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,
}

impl TranslationRequest {
    /// Create a request for one chunk
    pub fn new(
        text: impl Into<String>,
        instruction: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            text: text.into(),
            instruction: instruction.into(),
            model: model.into(),
            temperature,
        }
    }
}

/// Common trait for all translation backends
///
/// This trait defines the single operation the pipeline needs from a backend.
/// It is object-safe so the orchestrator can hold any backend behind a trait
/// object and tests can substitute a mock.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Translate one chunk of text
    ///
    /// # Arguments
    /// * `request` - The chunk, directive, and model parameters
    ///
    /// # Returns
    /// * `Result<String, BackendError>` - The translated text or an error
    async fn translate(&self, request: TranslationRequest) -> Result<String, BackendError>;
}

pub mod openai;
pub mod mock;
