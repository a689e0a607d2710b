use anyhow::{Result, Context};
use log::info;
use std::path::PathBuf;
use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::providers::openai::OpenAI;
use crate::text_processor::TextDocument;
use crate::translation::{ChunkTranslator, InstructionBuilder, TranslationOptions, join_translations};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::Arc;

// @module: Application controller for the translation pipeline

/// Main application controller for text translation
pub struct Controller {
    // @field: App configuration
    pub config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let controller = Self {
            config,
        };

        Ok(controller)
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.translation.model.is_empty()
    }

    /// Run the main workflow: read the source text, translate it, write the result
    pub async fn run(&self, input_file: Option<PathBuf>, output_file: Option<PathBuf>) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Read the source text from the input file or stdin
        let source_text = match &input_file {
            Some(path) => {
                if !FileManager::file_exists(path) {
                    return Err(anyhow::anyhow!("Input file does not exist: {:?}", path));
                }
                FileManager::read_to_string(path)?
            }
            None => FileManager::read_from_stdin()?,
        };

        let translated = self.translate_text(&source_text).await?;

        // Write the translation to the output file or stdout
        match &output_file {
            Some(path) => {
                FileManager::write_to_file(path, &translated)?;
                info!("Success: {}", path.display());
            }
            None => {
                let mut stdout = std::io::stdout();
                stdout
                    .write_all(translated.as_bytes())
                    .context("Failed to write translation to stdout")?;
                stdout.flush()?;
            }
        }

        // Log completion time metrics
        info!(
            "Translation completed in {}.",
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Translate a whole document: split, pack, translate every chunk, rejoin
    async fn translate_text(&self, source_text: &str) -> Result<String> {
        // Build validated options from the configuration
        let options = TranslationOptions::new(
            self.config.tone.clone(),
            self.config.glossary.clone(),
            self.config.translation.model.clone(),
            self.config.translation.max_words_per_chunk,
        )?;

        // One directive is rendered up front and reused for every chunk
        let instruction = InstructionBuilder::from_options(&options).build();

        // Split the text into paragraphs and pack them into chunks
        let document = TextDocument::parse(source_text)?;
        let chunks = document.split_into_chunks(options.max_words_per_chunk);
        info!(
            "Translating {} paragraph(s) in {} chunk(s)",
            document.paragraphs.len(),
            chunks.len()
        );

        // Create the backend client from config
        let backend = Arc::new(
            OpenAI::new(
                self.config.translation.resolve_api_key(),
                self.config.translation.endpoint.clone(),
                self.config.translation.timeout_secs,
            )
            .with_retries(
                self.config.translation.retry_count,
                self.config.translation.retry_backoff_ms,
            ),
        );

        let translator = ChunkTranslator::new(backend, options)
            .with_concurrency(self.config.translation.concurrent_requests);

        // Create a progress bar for translation tracking
        let progress_bar = ProgressBar::new(chunks.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));

        // Log that we're starting translation with model and tone info
        info!(
            "🚀 Tagasalin: {} - {} tone",
            self.config.translation.model, self.config.tone
        );
        info!("Translating, please wait…");
        progress_bar.set_message("Translating");

        // Clone the progress_bar for use in the callback
        let pb = progress_bar.clone();

        // Pass a callback to update the progress bar for each completed chunk
        let translated_chunks = translator
            .translate_chunks(&chunks, &instruction, move |completed, _total| {
                pb.set_position(completed as u64);
            })
            .await?;

        progress_bar.finish_and_clear();

        info!(
            "Successfully translated all {} chunk(s)",
            translated_chunks.len()
        );

        Ok(join_translations(&translated_chunks))
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
