use std::env;
use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEFAULT_LLM_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub llm_api_key: SecretString,
    pub llm_api_base: String,
    pub llm_model: String,
    pub diagram_model: String,
    pub llm_temperature: f32,
    pub youtube_base_url: String,
    pub transcript_language: String,
    pub max_input_chars: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "memora-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            llm_api_key: SecretString::from(
                env::var("GEMINI_API")
                    .or_else(|_| env::var("LLM_API_KEY"))
                    .unwrap_or_default(),
            ),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_LLM_API_BASE.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            diagram_model: env::var("DIAGRAM_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-pro".to_string()),
            llm_temperature: env::var("LLM_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            youtube_base_url: env::var("YOUTUBE_BASE_URL")
                .unwrap_or_else(|_| "https://www.youtube.com".to_string()),
            transcript_language: env::var("TRANSCRIPT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
            max_input_chars: env::var("MAX_INPUT_CHARS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(50_000),
        }
    }

    /// Checks the settings that have no usable default outside local development.
    pub fn validate_for_production(&self) -> AppResult<()> {
        if self.llm_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ValidationError(
                "GEMINI_API (or LLM_API_KEY) must be set to reach the language model".to_string(),
            ));
        }

        if !self.llm_api_base.starts_with("http://") && !self.llm_api_base.starts_with("https://") {
            return Err(AppError::ValidationError(format!(
                "LLM_API_BASE must be an http(s) URL, got '{}'",
                self.llm_api_base
            )));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "memora-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            llm_api_key: SecretString::from("test_api_key".to_string()),
            llm_api_base: "http://127.0.0.1:9".to_string(),
            llm_model: "test-model".to_string(),
            diagram_model: "test-diagram-model".to_string(),
            llm_temperature: 0.0,
            youtube_base_url: "http://127.0.0.1:9".to_string(),
            transcript_language: "en".to_string(),
            max_input_chars: 1_000,
        }
    }
}
