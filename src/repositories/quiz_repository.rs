use async_trait::async_trait;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::QuizQuestion};

use super::{ensure_id_index, list_page};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizQuestionRepository: Send + Sync {
    async fn create(&self, question: QuizQuestion) -> AppResult<QuizQuestion>;
    async fn create_many(&self, questions: Vec<QuizQuestion>) -> AppResult<Vec<QuizQuestion>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizQuestion>>;
    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<QuizQuestion>, i64)>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoQuizQuestionRepository {
    collection: Collection<QuizQuestion>,
}

impl MongoQuizQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_questions");
        Self { collection }
    }
}

#[async_trait]
impl QuizQuestionRepository for MongoQuizQuestionRepository {
    async fn create(&self, question: QuizQuestion) -> AppResult<QuizQuestion> {
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn create_many(&self, questions: Vec<QuizQuestion>) -> AppResult<Vec<QuizQuestion>> {
        if questions.is_empty() {
            return Ok(questions);
        }
        self.collection.insert_many(&questions).await?;
        Ok(questions)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizQuestion>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<QuizQuestion>, i64)> {
        list_page(&self.collection, offset, limit).await
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        ensure_id_index(&self.collection).await
    }
}
