use async_graphql::{OutputType, SimpleObject};
use serde::Serialize;

use crate::{
    models::domain::{AnswerOrdering, Diagram, Flashcard, QuizQuestion, Transcript},
    parsers::Language,
};

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct FlashcardDto {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl From<Flashcard> for FlashcardDto {
    fn from(card: Flashcard) -> Self {
        FlashcardDto {
            id: card.id,
            question: card.question,
            answer: card.answer,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct FlashcardBatchResponse {
    pub cards: Vec<FlashcardDto>,
    pub accepted: i32,
    pub rejected: i32,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuizQuestionDto {
    pub id: String,
    pub question: String,
    pub answer1: String,
    pub answer2: String,
    pub answer3: String,
    pub answer4: String,
    pub answer_ordering: AnswerOrdering,
}

impl From<QuizQuestion> for QuizQuestionDto {
    fn from(question: QuizQuestion) -> Self {
        QuizQuestionDto {
            answer1: question.answer(0).to_string(),
            answer2: question.answer(1).to_string(),
            answer3: question.answer(2).to_string(),
            answer4: question.answer(3).to_string(),
            id: question.id,
            question: question.question,
            answer_ordering: question.answer_ordering,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuizBatchResponse {
    pub questions: Vec<QuizQuestionDto>,
    pub accepted: i32,
    pub rejected: i32,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct DiagramDto {
    pub id: String,
    pub title: String, // the Mermaid source
    pub language: Option<Language>,
    pub attempts: i32,
}

impl From<Diagram> for DiagramDto {
    fn from(diagram: Diagram) -> Self {
        DiagramDto {
            id: diagram.id,
            title: diagram.code,
            language: diagram.language,
            attempts: diagram.attempts,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct TranscriptDto {
    pub id: String,
    pub url: String,
    pub video_id: String,
    pub text: String,
}

impl From<Transcript> for TranscriptDto {
    fn from(transcript: Transcript) -> Self {
        TranscriptDto {
            id: transcript.id,
            url: transcript.url,
            video_id: transcript.video_id,
            text: transcript.text,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct PaginationMetadata {
    pub offset: i64,
    pub limit: i64,
    pub total: i64,
    pub has_more: bool,
}

impl PaginationMetadata {
    pub fn new(offset: i64, limit: i64, total: i64) -> Self {
        PaginationMetadata {
            offset,
            limit,
            total,
            has_more: offset + limit < total,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[graphql(concrete(name = "PaginatedFlashcards", params(FlashcardDto)))]
#[graphql(concrete(name = "PaginatedQuizQuestions", params(QuizQuestionDto)))]
#[graphql(concrete(name = "PaginatedDiagrams", params(DiagramDto)))]
pub struct PaginatedResponse<T: OutputType> {
    pub items: Vec<T>,
    pub pagination: PaginationMetadata,
}

impl<T: OutputType> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, offset: i64, limit: i64, total: i64) -> Self {
        PaginatedResponse {
            items,
            pagination: PaginationMetadata::new(offset, limit, total),
        }
    }
}
