//! Stub collaborators for tests: a canned generator and a spy extractor.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::extraction::{ExtractionError, TextExtractor};
use crate::llm_client::{LlmError, TextGenerator};

type ErrorFactory = Box<dyn Fn() -> LlmError + Send + Sync>;

enum Reply {
    Text(String),
    Fail(ErrorFactory),
}

/// Returns a fixed reply and records every prompt it receives.
pub struct StubGenerator {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn text(text: &str) -> Self {
        Self::with_reply(Reply::Text(text.to_string()))
    }

    /// `LlmError` is not `Clone`, so failures are built fresh per call.
    pub fn failing(make_error: impl Fn() -> LlmError + Send + Sync + 'static) -> Self {
        Self::with_reply(Reply::Fail(Box::new(make_error)))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(make_error) => Err(make_error()),
        }
    }
}

/// Returns fixed text (or a fixed failure) and counts calls.
pub struct SpyExtractor {
    result: Result<String, String>,
    calls: AtomicUsize,
}

impl SpyExtractor {
    pub fn text(text: &str) -> Self {
        Self {
            result: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextExtractor for SpyExtractor {
    async fn extract(&self, _document: Bytes) -> Result<String, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(ExtractionError::Pdf)
    }
}
