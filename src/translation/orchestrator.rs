/*!
 * Chunk translation orchestration.
 *
 * This module drives the backend over an ordered chunk sequence, with
 * support for bounded concurrency, progress tracking, and fail-fast error
 * handling. Results stay keyed by chunk index, so output order never depends
 * on completion order.
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use futures::stream::{self, StreamExt, TryStreamExt};
use log::{error, debug};

use crate::errors::TranslationError;
use crate::providers::{TranslationBackend, TranslationRequest};
use crate::text_processor::{Chunk, PARAGRAPH_SEPARATOR};
use super::TranslationOptions;

/// A translated chunk, keyed by its position in the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedChunk {
    /// Position index of the source chunk
    pub index: usize,

    /// Translated text
    pub text: String,
}

/// Orchestrator that walks the chunk sequence and collects backend replies
pub struct ChunkTranslator {
    /// The backend that performs the actual translation
    backend: Arc<dyn TranslationBackend>,

    /// Validated run options
    options: TranslationOptions,

    /// Maximum number of concurrent requests
    max_concurrent_requests: usize,
}

impl ChunkTranslator {
    /// Create a sequential translator (one request in flight at a time)
    pub fn new(backend: Arc<dyn TranslationBackend>, options: TranslationOptions) -> Self {
        Self {
            backend,
            options,
            max_concurrent_requests: 1,
        }
    }

    /// Set the concurrency limit; a limit of 1 is the sequential baseline
    pub fn with_concurrency(mut self, max_concurrent_requests: usize) -> Self {
        self.max_concurrent_requests = max_concurrent_requests.max(1);
        self
    }

    /// Translate every chunk, preserving input order in the result
    ///
    /// Dispatches up to the configured number of requests at once; every
    /// request carries the same instruction. The first backend failure aborts
    /// the run: in-flight and unstarted requests are dropped and the error
    /// names the failing chunk. On success every chunk index is present
    /// exactly once, in order, and the progress callback has been invoked
    /// once per completed chunk with (completed, total).
    pub async fn translate_chunks(
        &self,
        chunks: &[Chunk],
        instruction: &str,
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> Result<Vec<TranslatedChunk>, TranslationError> {
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        let total_chunks = chunks.len();
        let completed_chunks = Arc::new(AtomicUsize::new(0));

        let mut translated = stream::iter(chunks.iter())
            .map(|chunk| {
                let backend = Arc::clone(&self.backend);
                let completed_chunks = completed_chunks.clone();
                let progress_callback = progress_callback.clone();
                let request = TranslationRequest::new(
                    chunk.text.as_str(),
                    instruction,
                    self.options.model.as_str(),
                    self.options.temperature,
                );
                let chunk_index = chunk.index;
                let chunk_words = chunk.word_count;

                async move {
                    debug!("Dispatching chunk {} of {} ({} words)",
                           chunk_index + 1, total_chunks, chunk_words);

                    match backend.translate(request).await {
                        Ok(text) => {
                            let current = completed_chunks.fetch_add(1, Ordering::SeqCst) + 1;
                            progress_callback(current, total_chunks);
                            Ok(TranslatedChunk { index: chunk_index, text })
                        }
                        Err(source) => {
                            error!("Chunk {} of {} failed: {}", chunk_index + 1, total_chunks, source);
                            Err(TranslationError::ChunkFailed { chunk_index, source })
                        }
                    }
                }
            })
            .buffer_unordered(self.max_concurrent_requests)
            .try_collect::<Vec<_>>()
            .await?;

        // Restore input order; completion order depends on the backend
        translated.sort_by_key(|chunk| chunk.index);

        // Every index must be present exactly once before joining
        let complete = translated
            .iter()
            .enumerate()
            .all(|(position, chunk)| chunk.index == position);
        if !complete {
            error!("CRITICAL ERROR: Chunk indices incomplete after collection: {:?}",
                   translated.iter().map(|chunk| chunk.index).collect::<Vec<_>>());
        }

        Ok(translated)
    }
}

/// Join translated chunks back into one document
///
/// Chunk bodies are concatenated with the paragraph separator the splitter
/// uses, so the output keeps the blank-line structure of the input. The slice
/// must already be complete and in index order; the translator guarantees
/// both.
pub fn join_translations(translations: &[TranslatedChunk]) -> String {
    translations
        .iter()
        .map(|chunk| chunk.text.as_str())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}
