pub mod diagram_service;
pub mod flashcard_service;
pub mod model_service;
pub mod prompt_builder;
pub mod quiz_service;
pub mod transcript_client;
pub mod transcript_service;

pub use diagram_service::DiagramService;
pub use flashcard_service::FlashcardService;
pub use model_service::{OpenAiGenerator, TextGenerator};
pub use quiz_service::QuizService;
pub use transcript_client::{TranscriptFetcher, YoutubeTranscriptClient};
pub use transcript_service::TranscriptService;

use crate::errors::{AppError, AppResult};

/// Trims caller text and enforces the configured size limit. Runs before any
/// model call so rejected input never costs a generation request.
pub(crate) fn prepare_input(input_text: &str, max_chars: usize) -> AppResult<&str> {
    let trimmed = input_text.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError("Input text is required".to_string()));
    }

    let chars = trimmed.chars().count();
    if chars > max_chars {
        return Err(AppError::ValidationError(format!(
            "Input text is too long: {} characters (limit {})",
            chars, max_chars
        )));
    }

    Ok(trimmed)
}
