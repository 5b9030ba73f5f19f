//! Scripted in-memory language model for deterministic agent tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tutor::error::GenerationError;
use tutor::models::LanguageModel;

/// One recorded `generate` call.
#[derive(Debug, Clone)]
pub struct Call {
    pub prompt: String,
    pub context: Option<String>,
}

/// Replies are popped from a FIFO queue. When the queue is empty the
/// model answers "mock response".
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn transport_error() -> GenerationError {
    GenerationError::Transport("connection refused".to_string())
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn generate(&self, prompt: &str, context: Option<&str>) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(Call {
            prompt: prompt.to_string(),
            context: context.map(str::to_string),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("mock response".to_string()))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
