use async_trait::async_trait;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Diagram};

use super::{ensure_id_index, list_page};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiagramRepository: Send + Sync {
    async fn create(&self, diagram: Diagram) -> AppResult<Diagram>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Diagram>>;
    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Diagram>, i64)>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoDiagramRepository {
    collection: Collection<Diagram>,
}

impl MongoDiagramRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("diagrams");
        Self { collection }
    }
}

#[async_trait]
impl DiagramRepository for MongoDiagramRepository {
    async fn create(&self, diagram: Diagram) -> AppResult<Diagram> {
        self.collection.insert_one(&diagram).await?;
        Ok(diagram)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Diagram>> {
        let diagram = self.collection.find_one(doc! { "id": id }).await?;
        Ok(diagram)
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Diagram>, i64)> {
        list_page(&self.collection, offset, limit).await
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        ensure_id_index(&self.collection).await
    }
}
