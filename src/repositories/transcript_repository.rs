use async_trait::async_trait;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Transcript};

use super::ensure_id_index;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptRepository: Send + Sync {
    async fn create(&self, transcript: Transcript) -> AppResult<Transcript>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Transcript>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoTranscriptRepository {
    collection: Collection<Transcript>,
}

impl MongoTranscriptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("transcripts");
        Self { collection }
    }
}

#[async_trait]
impl TranscriptRepository for MongoTranscriptRepository {
    async fn create(&self, transcript: Transcript) -> AppResult<Transcript> {
        self.collection.insert_one(&transcript).await?;
        Ok(transcript)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Transcript>> {
        let transcript = self.collection.find_one(doc! { "id": id }).await?;
        Ok(transcript)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        ensure_id_index(&self.collection).await
    }
}
