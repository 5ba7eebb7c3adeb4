//! Mock completion provider for tests.
//!
//! Records every prompt it receives and answers from a caller-supplied
//! reply function. Tests assert on the exact prompt strings rather than on
//! end-to-end model output, because the hosted model is not deterministic
//! across provider versions even at temperature zero.

use crate::error::PolishError;
use crate::llm::CompletionProvider;
use async_trait::async_trait;
use std::sync::Mutex;

type ReplyFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Completion provider that returns canned responses.
pub struct MockProvider {
    reply: ReplyFn,
    calls: Mutex<Vec<String>>,
    fail_with: Option<fn() -> PolishError>,
}

impl MockProvider {
    /// Echo provider: every completion returns its own prompt.
    pub fn new() -> Self {
        Self::with_reply(|prompt| prompt.to_string())
    }

    /// Provider that computes each reply from the submitted prompt.
    pub fn with_reply(reply: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self {
            reply: Box::new(reply),
            calls: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// Provider whose every call fails, for error-path tests.
    pub fn failing(make_error: fn() -> PolishError) -> Self {
        Self {
            reply: Box::new(|_| String::new()),
            calls: Mutex::new(Vec::new()),
            fail_with: Some(make_error),
        }
    }

    /// Prompts received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of completions submitted so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, prompt: &str) -> Result<String, PolishError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        if let Some(make_error) = self.fail_with {
            return Err(make_error());
        }
        Ok((self.reply)(prompt))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
