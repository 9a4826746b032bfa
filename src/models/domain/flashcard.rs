use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parsers::{Language, ParsedCard};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub language: Language, // language of the text the card was generated from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Flashcard {
    pub fn new(question: &str, answer: &str, language: Language) -> Self {
        Flashcard {
            id: Uuid::new_v4().to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            language,
            created_at: Some(Utc::now()),
        }
    }

    pub fn from_parsed(card: ParsedCard, language: Language) -> Self {
        Flashcard {
            id: Uuid::new_v4().to_string(),
            question: card.question,
            answer: card.answer,
            language,
            created_at: Some(Utc::now()),
        }
    }
}
