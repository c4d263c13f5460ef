//! Mock completion driver for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use storyteller_core::Prompt;
use storyteller_error::{CompletionError, CompletionErrorKind, CompletionResult};
use storyteller_models::CompletionDriver;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the given story
    Success(String),
    /// Always fail with the given error
    Error(CompletionErrorKind),
}

/// Mock completion driver for testing.
///
/// Records every prompt it receives so tests can check what would have been
/// sent upstream.
#[derive(Clone)]
pub struct MockCompletionDriver {
    behavior: MockBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockCompletionDriver {
    /// Create a mock driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock driver that always fails with the given error.
    pub fn new_error(error: CompletionErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock driver with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times complete() was called.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionDriver for MockCompletionDriver {
    async fn complete(&self, prompt: &Prompt) -> CompletionResult<String> {
        self.prompts
            .lock()
            .unwrap()
            .push(prompt.as_str().to_string());

        match &self.behavior {
            MockBehavior::Success(text) => Ok(text.clone()),
            MockBehavior::Error(kind) => Err(CompletionError::new(kind.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
