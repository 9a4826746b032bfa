use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// The external language model: takes a rendered instruction, returns raw text.
///
/// Any failure is reported as [`AppError::GenerationError`]; callers never look
/// at provider-specific details. Calls may be slow and have no built-in deadline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Chat-completion client for any OpenAI-compatible endpoint (Gemini by default).
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl OpenAiGenerator {
    pub fn new(api_base: &str, api_key: &str, model: &str, temperature: f32) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(api_base.trim_end_matches('/'))
            .with_api_key(api_key);

        Self {
            client: Client::with_config(openai_config),
            model: model.to_string(),
            temperature,
        }
    }

    pub fn from_config(config: &Config, model: &str) -> Self {
        Self::new(
            &config.llm_api_base,
            config.llm_api_key.expose_secret(),
            model,
            config.llm_temperature,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        log::debug!("Sending {} prompt chars to model {}", prompt.len(), self.model);

        let response: ChatResponse = self.client.chat().create_byot(request).await.map_err(|e| {
            log::error!("Model {} request failed: {}", self.model, e);
            AppError::from(e)
        })?;

        let text = response
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                AppError::GenerationError(format!("Model {} returned no content", self.model))
            })?;

        Ok(text)
    }
}
