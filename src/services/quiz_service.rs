use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{AnswerOrdering, QuizQuestion},
        dto::{
            request::{CreateQuizBatchRequest, CreateQuizRequest},
            response::{PaginatedResponse, QuizBatchResponse, QuizQuestionDto},
        },
    },
    parsers::{detect_language, parse_quiz_batch, parse_single_quiz},
    repositories::QuizQuestionRepository,
    services::{
        model_service::TextGenerator,
        prepare_input,
        prompt_builder::{render, PromptKind, PromptOptions},
    },
};

pub struct QuizService {
    repository: Arc<dyn QuizQuestionRepository>,
    generator: Arc<dyn TextGenerator>,
    max_input_chars: usize,
}

impl QuizService {
    pub fn new(
        repository: Arc<dyn QuizQuestionRepository>,
        generator: Arc<dyn TextGenerator>,
        max_input_chars: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_input_chars,
        }
    }

    /// One question with four answers; the prompt asks for the correct answer first.
    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<QuizQuestionDto> {
        request.validate()?;
        let input_text = prepare_input(&request.input_text, self.max_input_chars)?;

        let language = detect_language(input_text);
        let prompt = render(PromptKind::SingleQuiz, language, &PromptOptions::default())
            .fill(input_text);

        let reply = self.generator.generate(&prompt).await?;
        let parsed = parse_single_quiz(&reply).ok_or_else(|| {
            log::warn!("Single quiz reply had fewer than four answers");
            AppError::NoContentExtracted(
                "the model reply did not contain a question with four answers".to_string(),
            )
        })?;

        let question = QuizQuestion::from_parsed(parsed, AnswerOrdering::ModelClaimedFirst, language);
        let question = self.repository.create(question).await?;

        Ok(question.into())
    }

    /// Several questions in one request. Blocks without exactly four labelled
    /// answers are dropped and counted.
    pub async fn create_quiz_batch(
        &self,
        request: CreateQuizBatchRequest,
    ) -> AppResult<QuizBatchResponse> {
        request.validate()?;
        let input_text = prepare_input(&request.input_text, self.max_input_chars)?;

        let language = detect_language(input_text);
        let options = PromptOptions::default().with_question_count(request.question_count);
        let prompt = render(PromptKind::QuizBatch, language, &options).fill(input_text);

        let reply = self.generator.generate(&prompt).await?;
        let outcome = parse_quiz_batch(&reply);

        log::info!(
            "Quiz reply parsed ({} requested): {} accepted, {} rejected blocks",
            options.question_count,
            outcome.accepted(),
            outcome.rejected_blocks
        );

        if outcome.is_empty() {
            return Err(AppError::NoContentExtracted(
                "the model reply contained no complete quiz questions".to_string(),
            ));
        }

        let rejected = outcome.rejected_blocks;
        let questions: Vec<QuizQuestion> = outcome
            .records
            .into_iter()
            .map(|parsed| QuizQuestion::from_parsed(parsed, AnswerOrdering::Unverified, language))
            .collect();

        let questions = self.repository.create_many(questions).await?;

        Ok(QuizBatchResponse {
            accepted: questions.len() as i32,
            rejected: rejected as i32,
            questions: questions.into_iter().map(QuizQuestionDto::from).collect(),
        })
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<QuizQuestionDto> {
        let question = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz question with id '{}' not found", id)))?;

        Ok(question.into())
    }

    pub async fn list_quizzes(
        &self,
        offset: i64,
        limit: i64,
    ) -> AppResult<PaginatedResponse<QuizQuestionDto>> {
        let (questions, total) = self.repository.list(offset, limit).await?;
        let items = questions.into_iter().map(QuizQuestionDto::from).collect();
        Ok(PaginatedResponse::new(items, offset, limit, total))
    }
}
