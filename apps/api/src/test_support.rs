//! Test doubles shared by module tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{LlmError, SamplingConfig, TextGenerator};

/// Scripted `TextGenerator`: returns a fixed reply (or API error) and records every call.
pub struct FakeGenerator {
    reply: Result<String, (u16, String)>,
    calls: Mutex<Vec<(String, SamplingConfig)>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            reply: Err((status, message.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, SamplingConfig)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str, sampling: &SamplingConfig) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), *sampling));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err((status, message)) => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
