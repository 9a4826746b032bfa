use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Transcript {
    pub id: String,
    pub url: String,
    pub video_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Transcript {
    pub fn new(url: &str, video_id: &str, text: String) -> Self {
        Transcript {
            id: uuid::Uuid::new_v4().to_string(),
            url: url.to_string(),
            video_id: video_id.to_string(),
            text,
            created_at: Some(Utc::now()),
        }
    }
}

/// One timed caption line as returned by the transcript source.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CaptionFragment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Joins caption fragments with single spaces, skipping empty ones.
pub fn join_fragments(fragments: &[CaptionFragment]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
