use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parsers::Language;

/// A Mermaid flowchart that passed the structural checks when it was created.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Diagram {
    pub id: String,
    pub code: String,
    pub source_text: Option<String>,
    pub language: Option<Language>,
    pub attempts: i32, // generation requests it took, 1 or 2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Diagram {
    pub fn new(code: String, source_text: Option<String>, language: Option<Language>, attempts: i32) -> Self {
        Diagram {
            id: Uuid::new_v4().to_string(),
            code,
            source_text,
            language,
            attempts,
            created_at: Some(Utc::now()),
        }
    }
}
