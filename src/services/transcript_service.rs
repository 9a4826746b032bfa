use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{transcript::join_fragments, Transcript},
        dto::{request::FetchCaptionsRequest, response::TranscriptDto},
    },
    parsers::extract_video_id,
    repositories::TranscriptRepository,
    services::transcript_client::TranscriptFetcher,
};

pub struct TranscriptService {
    repository: Arc<dyn TranscriptRepository>,
    fetcher: Arc<dyn TranscriptFetcher>,
}

impl TranscriptService {
    pub fn new(repository: Arc<dyn TranscriptRepository>, fetcher: Arc<dyn TranscriptFetcher>) -> Self {
        Self { repository, fetcher }
    }

    /// Fetches the captions of a video, joins them into one text and stores it.
    /// Fetch failures are reported, never retried.
    pub async fn fetch_captions(&self, request: FetchCaptionsRequest) -> AppResult<TranscriptDto> {
        request.validate()?;
        let url = request.url.trim();

        let video_id = extract_video_id(url)
            .ok_or_else(|| AppError::ValidationError("Invalid YouTube URL".to_string()))?;

        let fragments = self.fetcher.fetch(video_id).await?;
        let text = join_fragments(&fragments);
        if text.is_empty() {
            return Err(AppError::TranscriptError(format!(
                "Transcript for video {} is empty",
                video_id
            )));
        }

        log::info!(
            "Fetched {} caption fragments ({} chars) for video {}",
            fragments.len(),
            text.len(),
            video_id
        );

        let transcript = self.repository.create(Transcript::new(url, video_id, text)).await?;
        Ok(transcript.into())
    }

    pub async fn get_transcript(&self, id: &str) -> AppResult<TranscriptDto> {
        let transcript = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Transcript with id '{}' not found", id)))?;

        Ok(transcript.into())
    }
}
