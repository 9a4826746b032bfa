use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::CaptionFragment,
};

const CAPTION_TRACKS_KEY: &str = "\"captionTracks\":";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) memora-server";

static TEXT_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<text\s+start="([0-9.]+)"(?:\s+dur="([0-9.]+)")?[^>]*>(.*?)</text>"#)
        .expect("TEXT_ELEMENT is a valid regex pattern")
});

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#x[0-9A-Fa-f]+|#[0-9]+|amp|lt|gt|quot|apos);")
        .expect("ENTITY is a valid regex pattern")
});

/// Source of timed captions for a video.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    async fn fetch(&self, video_id: &str) -> AppResult<Vec<CaptionFragment>>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    #[serde(default)]
    language_code: String,
}

/// Reads caption tracks straight from the public watch page.
pub struct YoutubeTranscriptClient {
    http: reqwest::Client,
    base_url: String,
    language: String,
}

impl YoutubeTranscriptClient {
    pub fn new(base_url: &str, language: &str) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(&config.youtube_base_url, &config.transcript_language)
    }

    async fn caption_tracks(&self, video_id: &str) -> AppResult<Vec<CaptionTrack>> {
        let page = self
            .http
            .get(format!("{}/watch", self.base_url))
            .query(&[("v", video_id)])
            .header("accept-language", "en-US,en;q=0.9")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_caption_tracks(&page).ok_or_else(|| {
            AppError::TranscriptError(format!("No captions available for video {}", video_id))
        })
    }

    fn pick_track<'a>(&self, tracks: &'a [CaptionTrack]) -> Option<&'a CaptionTrack> {
        tracks
            .iter()
            .find(|track| track.language_code == self.language)
            .or_else(|| tracks.first())
    }
}

#[async_trait]
impl TranscriptFetcher for YoutubeTranscriptClient {
    async fn fetch(&self, video_id: &str) -> AppResult<Vec<CaptionFragment>> {
        let tracks = self.caption_tracks(video_id).await?;
        let track = self.pick_track(&tracks).ok_or_else(|| {
            AppError::TranscriptError(format!("No captions available for video {}", video_id))
        })?;

        log::debug!(
            "Fetching '{}' captions for video {}",
            track.language_code,
            video_id
        );

        let xml = self
            .http
            .get(&track.base_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(parse_timed_text(&xml))
    }
}

/// Pulls the `captionTracks` array out of a watch page. `None` when the video
/// has no captions or the page layout is not recognised.
fn parse_caption_tracks(page: &str) -> Option<Vec<CaptionTrack>> {
    let start = page.find(CAPTION_TRACKS_KEY)? + CAPTION_TRACKS_KEY.len();
    let tracks = serde_json::Deserializer::from_str(&page[start..])
        .into_iter::<Vec<CaptionTrack>>()
        .next()?
        .ok()?;

    if tracks.is_empty() {
        None
    } else {
        Some(tracks)
    }
}

fn parse_timed_text(xml: &str) -> Vec<CaptionFragment> {
    TEXT_ELEMENT
        .captures_iter(xml)
        .map(|caps| CaptionFragment {
            start: caps[1].parse().unwrap_or_default(),
            duration: caps
                .get(2)
                .and_then(|dur| dur.as_str().parse().ok())
                .unwrap_or_default(),
            // timed text is often escaped twice (&amp;#39;)
            text: decode_entities(&decode_entities(&caps[3])),
        })
        .collect()
}

fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ if entity.starts_with("#x") => u32::from_str_radix(&entity[2..], 16)
                    .ok()
                    .and_then(char::from_u32),
                _ => entity[1..].parse().ok().and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}
