use std::fmt;
use std::time::Duration;
use serde::{Serialize, Deserialize};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;
use log::{error, warn, debug};

use crate::errors::BackendError;
use crate::providers::{TranslationBackend, TranslationRequest};

/// Default public API host
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// OpenAI client for the Responses API
///
/// Any host exposing a compatible `/v1/responses` route works; the endpoint
/// is configurable for that reason.
#[derive(Clone)]
pub struct OpenAI {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Base URL of the API host
    endpoint: String,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

impl fmt::Debug for OpenAI {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // The API key stays out of debug output
        f.debug_struct("OpenAI")
            .field("endpoint", &self.endpoint)
            .field("max_retries", &self.max_retries)
            .field("backoff_base_ms", &self.backoff_base_ms)
            .finish_non_exhaustive()
    }
}

/// Request body for the Responses API
#[derive(Debug, Serialize)]
pub struct ResponsesRequest {
    /// The model to use
    model: String,

    /// Temperature for generation
    temperature: f32,

    /// Combined directive and chunk text
    input: String,
}

/// Response body from the Responses API
#[derive(Debug, Deserialize)]
pub struct ResponsesReply {
    /// Output items produced by the model
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

/// A single output item in a Responses API reply
#[derive(Debug, Deserialize)]
pub struct OutputItem {
    /// The type of item
    #[serde(rename = "type")]
    pub item_type: String,

    /// Content blocks for message items
    #[serde(default)]
    pub content: Vec<OutputContent>,
}

/// Individual content block in an output item
#[derive(Debug, Deserialize)]
pub struct OutputContent {
    /// The type of content
    #[serde(rename = "type")]
    pub content_type: String,

    /// The actual text content
    #[serde(default)]
    pub text: String,
}

impl OpenAI {
    /// Create a new OpenAI client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            max_retries: 2,
            backoff_base_ms: 1000,
        }
    }

    /// Set the retry policy for transient failures
    pub fn with_retries(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Resolve the full URL of the responses route
    fn api_url(&self) -> Result<String, BackendError> {
        let base = if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.endpoint.as_str()
        };

        let parsed = Url::parse(base)
            .map_err(|e| BackendError::Unavailable(format!("Invalid endpoint {}: {}", base, e)))?;

        Ok(format!("{}/v1/responses", parsed.as_str().trim_end_matches('/')))
    }

    /// Compose the single input string the Responses API receives
    pub fn compose_input(request: &TranslationRequest) -> String {
        format!(
            "{}\n\n---\n\nIsalin ang sumusunod na teksto sa Tagalog (Filipino):\n\n{}\n",
            request.instruction, request.text
        )
    }

    /// Collect the translated text out of a reply's output items
    pub fn extract_text(reply: &ResponsesReply) -> String {
        reply
            .output
            .iter()
            .filter(|item| item.item_type == "message")
            .flat_map(|item| item.content.iter())
            .filter(|content| content.content_type == "output_text")
            .map(|content| content.text.as_str())
            .collect()
    }

    /// Send a request with retry logic for transient failures
    async fn send_with_retry(&self, body: &ResponsesRequest) -> Result<String, BackendError> {
        let url = self.api_url()?;

        let mut attempt = 0;
        let mut last_error: Option<BackendError> = None;

        while attempt <= self.max_retries {
            let response_result = self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .header("Authorization", format!("Bearer {}", self.api_key))
                .json(body)
                .send()
                .await;

            match response_result {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        match response.json::<ResponsesReply>().await {
                            Ok(reply) => {
                                let text = Self::extract_text(&reply);
                                if text.trim().is_empty() {
                                    // Empty body with a success status - can retry
                                    warn!("OpenAI reply contained no output text - attempt {}/{}",
                                          attempt + 1, self.max_retries + 1);
                                    last_error = Some(BackendError::MalformedResponse(
                                        "response contained no output text".to_string(),
                                    ));
                                } else {
                                    return Ok(text);
                                }
                            }
                            Err(e) => {
                                // Undecodable body - can retry
                                warn!("Failed to parse OpenAI response: {} - attempt {}/{}",
                                      e, attempt + 1, self.max_retries + 1);
                                last_error = Some(BackendError::MalformedResponse(e.to_string()));
                            }
                        }
                    } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                        // Bad credentials - don't retry
                        let error_text = response.text().await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        error!("OpenAI authentication rejected ({}): {}", status, error_text);
                        return Err(BackendError::Unavailable(format!(
                            "authentication rejected ({}): {}",
                            status, error_text
                        )));
                    } else if status == StatusCode::TOO_MANY_REQUESTS {
                        // Rate limited - can retry
                        let error_text = response.text().await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        error!("OpenAI rate limit ({}): {} - attempt {}/{}",
                               status, error_text, attempt + 1, self.max_retries + 1);
                        last_error = Some(BackendError::RequestRejected {
                            status_code: status.as_u16(),
                            message: error_text,
                        });
                    } else if status.is_server_error() {
                        // Server error - can retry
                        let error_text = response.text().await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        error!("OpenAI API error ({}): {} - attempt {}/{}",
                               status, error_text, attempt + 1, self.max_retries + 1);
                        last_error = Some(BackendError::Unavailable(format!(
                            "server error ({}): {}",
                            status, error_text
                        )));
                    } else {
                        // Client error - don't retry
                        let error_text = response.text().await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        error!("OpenAI API error ({}): {}", status, error_text);
                        return Err(BackendError::RequestRejected {
                            status_code: status.as_u16(),
                            message: error_text,
                        });
                    }
                }
                Err(e) => {
                    // Network error - can retry
                    error!("OpenAI network error: {} - attempt {}/{}",
                           e, attempt + 1, self.max_retries + 1);
                    last_error = Some(BackendError::Unavailable(e.to_string()));
                }
            }

            attempt += 1;

            // If we have more retries left, wait with exponential backoff
            if attempt <= self.max_retries {
                let backoff_ms = self.backoff_base_ms * (1u64 << (attempt - 1));
                debug!("Retrying OpenAI request in {} ms", backoff_ms);
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            BackendError::Unavailable("request failed after all retry attempts".to_string())
        }))
    }
}

#[async_trait]
impl TranslationBackend for OpenAI {
    async fn translate(&self, request: TranslationRequest) -> Result<String, BackendError> {
        let body = ResponsesRequest {
            model: request.model.clone(),
            temperature: request.temperature,
            input: Self::compose_input(&request),
        };

        self.send_with_retry(&body).await
    }
}
