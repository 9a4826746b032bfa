use async_graphql::InputObject;
use serde::Deserialize;
use validator::Validate;

/// Optional prompt customisation. Every unset key falls back to a fixed default.
#[derive(Debug, Clone, Default, Deserialize, Validate, InputObject)]
pub struct PromptOptionsInput {
    #[validate(range(min = 1, max = 50))]
    pub min_cards: Option<u32>,

    #[validate(range(min = 1, max = 100))]
    pub max_cards: Option<u32>,

    #[validate(length(min = 1, max = 300))]
    pub question_format: Option<String>,

    #[validate(length(min = 1, max = 300))]
    pub answer_length: Option<String>,

    #[validate(length(min = 1, max = 300))]
    pub special_focus: Option<String>,

    #[validate(length(min = 1, max = 500))]
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct CreateFlashcardsRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Input text is required"))]
    pub input_text: String,

    #[serde(default)]
    #[validate(nested)]
    pub options: Option<PromptOptionsInput>,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct CreateQuizRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Input text is required"))]
    pub input_text: String,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct CreateQuizBatchRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Input text is required"))]
    pub input_text: String,

    #[validate(range(min = 1, max = 20))]
    pub question_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct CreateDiagramRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Input text is required"))]
    pub input_text: String,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct FetchCaptionsRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 2048, message = "URL is required"))]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }
}
