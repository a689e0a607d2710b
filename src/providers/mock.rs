/*!
 * Mock backend implementation for testing.
 *
 * This module provides a mock backend that simulates different behaviors:
 * - `MockBackend::working()` - Always succeeds with tagged text
 * - `MockBackend::failing()` - Always fails with an outage error
 * - `MockBackend::fail_at(n)` - Fails exactly the nth request
 *
 * Every request is recorded, so tests can assert how many backend calls a
 * run made and what instruction each one carried.
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::errors::BackendError;
use crate::providers::{TranslationBackend, TranslationRequest};

/// Behavior mode for the mock backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a tagged translation
    Working,
    /// Always fails with an outage error
    Failing,
    /// Fails exactly the request at the given zero-based position
    FailAt { index: usize },
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Returns an empty reply
    Empty,
    /// Simulates processing time proportional to input size
    DelayPerWord { ms_per_word: u64 },
}

/// Mock backend for testing orchestration behavior
#[derive(Debug)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared across clones
    request_count: Arc<AtomicUsize>,
    /// Every request received, in arrival order, shared across clones
    requests: Arc<Mutex<Vec<TranslationRequest>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&TranslationRequest) -> String>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    /// Create a working mock backend that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock backend that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock backend that fails exactly the nth request (zero-based)
    pub fn fail_at(index: usize) -> Self {
        Self::new(MockBehavior::FailAt { index })
    }

    /// Create an intermittently failing mock backend
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Create a mock backend that returns empty replies
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a mock backend whose latency grows with input size
    pub fn delay_per_word(ms_per_word: u64) -> Self {
        Self::new(MockBehavior::DelayPerWord { ms_per_word })
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&TranslationRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Snapshot of every request received so far, in arrival order
    pub fn recorded_requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Render the reply for a successful request
    fn render(&self, request: &TranslationRequest) -> String {
        if let Some(generator) = self.custom_response {
            generator(request)
        } else {
            format!("[TAGALOG] {}", request.text)
        }
    }
}

impl Clone for MockBackend {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            requests: Arc::clone(&self.requests),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn translate(&self, request: TranslationRequest) -> Result<String, BackendError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        match self.behavior {
            MockBehavior::Working => Ok(self.render(&request)),

            MockBehavior::Failing => Err(BackendError::Unavailable(
                "Simulated backend outage".to_string(),
            )),

            MockBehavior::FailAt { index } => {
                if count == index {
                    Err(BackendError::RequestRejected {
                        status_code: 503,
                        message: format!("Simulated failure (request #{})", count + 1),
                    })
                } else {
                    Ok(self.render(&request))
                }
            }

            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Err(BackendError::RequestRejected {
                        status_code: 503,
                        message: format!("Simulated intermittent failure (request #{})", count + 1),
                    })
                } else {
                    Ok(self.render(&request))
                }
            }

            MockBehavior::Empty => Ok(String::new()),

            MockBehavior::DelayPerWord { ms_per_word } => {
                let words = request.text.split_whitespace().count() as u64;
                tokio::time::sleep(Duration::from_millis(ms_per_word * words)).await;
                Ok(self.render(&request))
            }
        }
    }
}
