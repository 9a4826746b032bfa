pub mod diagram_repository;
pub mod flashcard_repository;
pub mod quiz_repository;
pub mod transcript_repository;

pub use diagram_repository::{DiagramRepository, MongoDiagramRepository};
pub use flashcard_repository::{FlashcardRepository, MongoFlashcardRepository};
pub use quiz_repository::{MongoQuizQuestionRepository, QuizQuestionRepository};
pub use transcript_repository::{MongoTranscriptRepository, TranscriptRepository};

use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};
use serde::de::DeserializeOwned;

use crate::errors::AppResult;

/// Unique index on the application-level `id` every record carries.
pub(crate) async fn ensure_id_index<T>(collection: &Collection<T>) -> AppResult<()>
where
    T: Send + Sync,
{
    log::info!("Creating indexes for {} collection", collection.name());

    let id_index = IndexModel::builder()
        .keys(doc! { "id": 1 })
        .options(
            IndexOptions::builder()
                .unique(true)
                .name("id_unique".to_string())
                .build(),
        )
        .build();

    collection.create_index(id_index).await?;

    log::info!("Successfully created indexes for {} collection", collection.name());
    Ok(())
}

/// Newest-first page of a collection together with the collection total.
pub(crate) async fn list_page<T>(
    collection: &Collection<T>,
    offset: i64,
    limit: i64,
) -> AppResult<(Vec<T>, i64)>
where
    T: DeserializeOwned + Send + Sync,
{
    let total = collection.count_documents(doc! {}).await? as i64;

    let find_options = FindOptions::builder()
        .sort(doc! { "created_at": -1 })
        .skip(Some(offset.max(0) as u64))
        .limit(Some(limit))
        .build();

    let cursor = collection.find(doc! {}).with_options(find_options).await?;
    let items: Vec<T> = cursor.try_collect().await?;

    Ok((items, total))
}
