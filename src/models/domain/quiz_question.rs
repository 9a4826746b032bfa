use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parsers::{Language, ParsedQuizQuestion};

/// What is known about the position of the correct answer.
///
/// Neither quiz prompt can force the model to list the right answer first, so
/// the flag records whether the prompt asked for it rather than a verified fact.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, Copy)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOrdering {
    ModelClaimedFirst, // single-question prompt: "the correct answer is always first"
    Unverified,        // batch prompt: ordering not relied upon
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub answers: Vec<String>, // always four entries
    pub answer_ordering: AnswerOrdering,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl QuizQuestion {
    pub fn from_parsed(
        parsed: ParsedQuizQuestion,
        answer_ordering: AnswerOrdering,
        language: Language,
    ) -> Self {
        QuizQuestion {
            id: Uuid::new_v4().to_string(),
            question: parsed.question,
            answers: parsed.answers.into(),
            answer_ordering,
            language,
            created_at: Some(Utc::now()),
        }
    }

    pub fn answer(&self, slot: usize) -> &str {
        self.answers.get(slot).map(String::as_str).unwrap_or_default()
    }
}
