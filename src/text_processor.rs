use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use log::{error, warn, debug};

use crate::errors::TranslationError;

// @module: Paragraph splitting and chunk assembly

// @const: Paragraph break regex (a run of two or more newlines)
static PARAGRAPH_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{2,}").unwrap()
});

/// Separator placed between paragraphs inside a chunk and between translated
/// chunks in the final output
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Count whitespace-separated words in a text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

// @struct: Single paragraph of input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    // @field: Paragraph text without surrounding whitespace
    pub text: String,

    // @field: Number of whitespace-separated words
    pub word_count: usize,
}

impl Paragraph {
    /// Create a paragraph, computing its word count
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let word_count = word_count(&text);
        Paragraph { text, word_count }
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

// @struct: Budget-bounded unit of consecutive paragraphs sent to the backend
// as one translation request
#[derive(Debug, Clone)]
pub struct Chunk {
    // @field: Rank in the overall chunk sequence
    pub index: usize,

    // @field: Paragraphs rejoined with the blank-line separator
    pub text: String,

    // @field: Combined word count
    pub word_count: usize,

    // @field: Number of paragraphs in this chunk
    pub paragraph_count: usize,
}

impl Chunk {
    /// Build a chunk from consecutive paragraphs
    pub fn from_paragraphs(index: usize, paragraphs: &[Paragraph]) -> Self {
        let text = paragraphs
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(PARAGRAPH_SEPARATOR);
        let word_count = paragraphs.iter().map(|p| p.word_count).sum();

        Chunk {
            index,
            text,
            word_count,
            paragraph_count: paragraphs.len(),
        }
    }
}

/// A document split into ordered paragraphs
#[derive(Debug)]
pub struct TextDocument {
    /// Paragraphs in input order
    pub paragraphs: Vec<Paragraph>,
}

impl TextDocument {
    /// Parse raw input text into an ordered paragraph sequence
    ///
    /// Windows line endings are normalized first, then the whole input is
    /// trimmed. Splitting happens on runs of two or more newlines, so single
    /// line breaks inside a paragraph survive. An input that is empty after
    /// trimming is an error, never an empty document.
    pub fn parse(raw: &str) -> Result<Self, TranslationError> {
        let normalized = raw.replace("\r\n", "\n");
        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let paragraphs: Vec<Paragraph> = PARAGRAPH_BREAK_REGEX
            .split(trimmed)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(Paragraph::new)
            .collect();

        let document = TextDocument { paragraphs };
        debug!("Parsed {} paragraphs ({} words total)",
               document.paragraphs.len(), document.word_count());

        Ok(document)
    }

    /// Total word count across all paragraphs
    pub fn word_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.word_count).sum()
    }

    /// Pack paragraphs into translation chunks
    ///
    /// Greedy accumulation in input order: paragraphs join the current chunk
    /// while the combined word count stays within the budget, otherwise the
    /// chunk is closed and a new one starts. A single paragraph whose own word
    /// count exceeds the budget becomes its own chunk; text is never split
    /// mid-paragraph, so such a chunk overshoots the budget on purpose.
    pub fn split_into_chunks(&self, max_words_per_chunk: usize) -> Vec<Chunk> {
        if self.paragraphs.is_empty() {
            warn!("No paragraphs to split into chunks");
            return Vec::new();
        }

        // Protect against accidental loss of paragraphs - count at the beginning
        let total_paragraphs = self.paragraphs.len();

        let mut groups: Vec<Vec<Paragraph>> = Vec::new();
        let mut current: Vec<Paragraph> = Vec::new();
        let mut current_words = 0;

        for paragraph in &self.paragraphs {
            // A paragraph over the budget on its own gets its own chunk
            if paragraph.word_count > max_words_per_chunk {
                if !current.is_empty() {
                    groups.push(current);
                    current = Vec::new();
                    current_words = 0;
                }

                debug!("Paragraph of {} words exceeds the {} word budget, placing it in its own chunk",
                       paragraph.word_count, max_words_per_chunk);
                groups.push(vec![paragraph.clone()]);
                continue;
            }

            // Close the current chunk when this paragraph would overflow it
            if current_words + paragraph.word_count > max_words_per_chunk && !current.is_empty() {
                groups.push(current);
                current = Vec::new();
                current_words = 0;
            }

            current.push(paragraph.clone());
            current_words += paragraph.word_count;
        }

        if !current.is_empty() {
            groups.push(current);
        }

        // Verify that every paragraph landed in exactly one chunk
        let total_grouped: usize = groups.iter().map(|group| group.len()).sum();
        if total_grouped != total_paragraphs {
            error!("CRITICAL ERROR: Lost paragraphs during chunking! Original: {}, After chunking: {}",
                   total_paragraphs, total_grouped);
        }

        let chunks: Vec<Chunk> = groups
            .into_iter()
            .enumerate()
            .map(|(index, group)| Chunk::from_paragraphs(index, &group))
            .collect();

        if log::max_level() >= log::LevelFilter::Debug {
            for chunk in &chunks {
                debug!("Chunk {}: {} paragraphs, {} words",
                       chunk.index + 1, chunk.paragraph_count, chunk.word_count);
            }
        }

        chunks
    }
}
