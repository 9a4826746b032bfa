use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Flashcard,
        dto::{
            request::CreateFlashcardsRequest,
            response::{FlashcardBatchResponse, FlashcardDto, PaginatedResponse},
        },
    },
    parsers::{detect_language, parse_flashcards},
    repositories::FlashcardRepository,
    services::{
        model_service::TextGenerator,
        prepare_input,
        prompt_builder::{render, PromptKind, PromptOptions},
    },
};

pub struct FlashcardService {
    repository: Arc<dyn FlashcardRepository>,
    generator: Arc<dyn TextGenerator>,
    max_input_chars: usize,
}

impl FlashcardService {
    pub fn new(
        repository: Arc<dyn FlashcardRepository>,
        generator: Arc<dyn TextGenerator>,
        max_input_chars: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_input_chars,
        }
    }

    /// Generates flashcards from free text and stores every pair the reply yields.
    pub async fn create_flashcards(
        &self,
        request: CreateFlashcardsRequest,
    ) -> AppResult<FlashcardBatchResponse> {
        request.validate()?;
        let input_text = prepare_input(&request.input_text, self.max_input_chars)?;

        let language = detect_language(input_text);
        let options = PromptOptions::from_input(request.options.as_ref());
        let prompt = render(PromptKind::Flashcards, language, &options).fill(input_text);

        let reply = self.generator.generate(&prompt).await?;
        let outcome = parse_flashcards(&reply);

        log::info!(
            "Flashcard reply parsed ({}): {} accepted, {} rejected blocks",
            language,
            outcome.accepted(),
            outcome.rejected_blocks
        );

        if outcome.is_empty() {
            return Err(AppError::NoContentExtracted(
                "the model reply contained no question/answer pairs".to_string(),
            ));
        }

        let rejected = outcome.rejected_blocks;
        let cards: Vec<Flashcard> = outcome
            .records
            .into_iter()
            .map(|card| Flashcard::from_parsed(card, language))
            .collect();

        let cards = self.repository.create_many(cards).await?;

        Ok(FlashcardBatchResponse {
            accepted: cards.len() as i32,
            rejected: rejected as i32,
            cards: cards.into_iter().map(FlashcardDto::from).collect(),
        })
    }

    pub async fn list_flashcards(
        &self,
        offset: i64,
        limit: i64,
    ) -> AppResult<PaginatedResponse<FlashcardDto>> {
        let (cards, total) = self.repository.list(offset, limit).await?;
        let items = cards.into_iter().map(FlashcardDto::from).collect();
        Ok(PaginatedResponse::new(items, offset, limit, total))
    }
}
