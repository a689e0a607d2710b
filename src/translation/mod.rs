/*!
 * Translation pipeline for Tagalog output.
 *
 * This module contains the core functionality for translating chunked text
 * through an LLM backend. It is split into several submodules:
 *
 * - `instruction`: Directive construction from tone and glossary options
 * - `orchestrator`: Per-chunk backend dispatch, ordering, and fail-fast handling
 */

use crate::app_config::Tone;
use crate::errors::TranslationError;

// Re-export main types for easier usage
pub use self::instruction::InstructionBuilder;
pub use self::orchestrator::{ChunkTranslator, TranslatedChunk, join_translations};

// Submodules
pub mod instruction;
pub mod orchestrator;

/// Sampling temperature for every translation request; kept low so the
/// backend stays close to the source text
pub const TRANSLATION_TEMPERATURE: f32 = 0.2;

/// Validated, immutable options for one translation run
#[derive(Debug, Clone)]
pub struct TranslationOptions {
    /// Target register for the translation
    pub tone: Tone,

    /// Terms that must survive translation verbatim
    pub glossary: Vec<String>,

    /// Model identifier passed to the backend
    pub model: String,

    /// Sampling temperature passed to the backend
    pub temperature: f32,

    /// Word budget for a single chunk
    pub max_words_per_chunk: usize,
}

impl TranslationOptions {
    /// Validate and construct the options for a run
    ///
    /// Rejects an empty model identifier, a zero word budget, and glossary
    /// terms that are empty after trimming. Duplicate terms collapse to their
    /// first occurrence; comparison is case-sensitive, so differently cased
    /// terms stay distinct.
    pub fn new(
        tone: Tone,
        glossary: Vec<String>,
        model: impl Into<String>,
        max_words_per_chunk: usize,
    ) -> Result<Self, TranslationError> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(TranslationError::InvalidConfiguration(
                "model identifier must not be empty".to_string(),
            ));
        }

        if max_words_per_chunk == 0 {
            return Err(TranslationError::InvalidConfiguration(
                "max words per chunk must be positive".to_string(),
            ));
        }

        let mut terms: Vec<String> = Vec::with_capacity(glossary.len());
        for term in glossary {
            let trimmed = term.trim().to_string();
            if trimmed.is_empty() {
                return Err(TranslationError::InvalidConfiguration(
                    "glossary contains a term that is empty after trimming".to_string(),
                ));
            }
            if !terms.contains(&trimmed) {
                terms.push(trimmed);
            }
        }

        Ok(Self {
            tone,
            glossary: terms,
            model,
            temperature: TRANSLATION_TEMPERATURE,
            max_words_per_chunk,
        })
    }
}
