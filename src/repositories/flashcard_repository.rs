use async_trait::async_trait;
use mongodb::Collection;

use crate::{db::Database, errors::AppResult, models::domain::Flashcard};

use super::{ensure_id_index, list_page};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FlashcardRepository: Send + Sync {
    async fn create_many(&self, cards: Vec<Flashcard>) -> AppResult<Vec<Flashcard>>;
    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Flashcard>, i64)>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoFlashcardRepository {
    collection: Collection<Flashcard>,
}

impl MongoFlashcardRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("flashcards");
        Self { collection }
    }
}

#[async_trait]
impl FlashcardRepository for MongoFlashcardRepository {
    async fn create_many(&self, cards: Vec<Flashcard>) -> AppResult<Vec<Flashcard>> {
        if cards.is_empty() {
            return Ok(cards);
        }
        self.collection.insert_many(&cards).await?;
        Ok(cards)
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Flashcard>, i64)> {
        list_page(&self.collection, offset, limit).await
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        ensure_id_index(&self.collection).await
    }
}
