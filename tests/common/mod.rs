#![allow(dead_code)]

use std::{collections::VecDeque, sync::Arc};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::{Mutex, RwLock};

use memora_server::{
    app_state::{AppComponents, AppState},
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{CaptionFragment, Diagram, Flashcard, QuizQuestion, Transcript},
    repositories::{DiagramRepository, FlashcardRepository, QuizQuestionRepository, TranscriptRepository},
    services::{TextGenerator, TranscriptFetcher},
};

pub fn test_config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "memora-test".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        llm_api_key: SecretString::from("test_api_key".to_string()),
        llm_api_base: "http://127.0.0.1:9".to_string(),
        llm_model: "test-model".to_string(),
        diagram_model: "test-diagram-model".to_string(),
        llm_temperature: 0.0,
        youtube_base_url: "http://127.0.0.1:9".to_string(),
        transcript_language: "en".to_string(),
        max_input_chars: 2_000,
    }
}

/// Records keyed by their `id`, listed newest first like the MongoDB repositories.
pub struct InMemoryStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Clone> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    async fn insert(&self, record: T, id: impl Fn(&T) -> &str) -> AppResult<T> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| id(r) == id(&record)) {
            return Err(AppError::DatabaseError(format!(
                "E11000 duplicate key error: id '{}'",
                id(&record)
            )));
        }
        records.push(record.clone());
        Ok(record)
    }

    async fn find(&self, wanted: &str, id: impl Fn(&T) -> &str) -> Option<T> {
        let records = self.records.read().await;
        records.iter().find(|r| id(r) == wanted).cloned()
    }

    async fn page(&self, offset: i64, limit: i64) -> (Vec<T>, i64) {
        let records = self.records.read().await;
        let total = records.len() as i64;
        let page = records
            .iter()
            .rev()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect();
        (page, total)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

pub type InMemoryFlashcardRepository = InMemoryStore<Flashcard>;
pub type InMemoryQuizRepository = InMemoryStore<QuizQuestion>;
pub type InMemoryDiagramRepository = InMemoryStore<Diagram>;
pub type InMemoryTranscriptRepository = InMemoryStore<Transcript>;

#[async_trait]
impl FlashcardRepository for InMemoryStore<Flashcard> {
    async fn create_many(&self, cards: Vec<Flashcard>) -> AppResult<Vec<Flashcard>> {
        let mut created = Vec::with_capacity(cards.len());
        for card in cards {
            created.push(self.insert(card, |c| c.id.as_str()).await?);
        }
        Ok(created)
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Flashcard>, i64)> {
        Ok(self.page(offset, limit).await)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl QuizQuestionRepository for InMemoryStore<QuizQuestion> {
    async fn create(&self, question: QuizQuestion) -> AppResult<QuizQuestion> {
        self.insert(question, |q| q.id.as_str()).await
    }

    async fn create_many(&self, questions: Vec<QuizQuestion>) -> AppResult<Vec<QuizQuestion>> {
        let mut created = Vec::with_capacity(questions.len());
        for question in questions {
            created.push(self.insert(question, |q| q.id.as_str()).await?);
        }
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizQuestion>> {
        Ok(self.find(id, |q| q.id.as_str()).await)
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<QuizQuestion>, i64)> {
        Ok(self.page(offset, limit).await)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl DiagramRepository for InMemoryStore<Diagram> {
    async fn create(&self, diagram: Diagram) -> AppResult<Diagram> {
        self.insert(diagram, |d| d.id.as_str()).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Diagram>> {
        Ok(self.find(id, |d| d.id.as_str()).await)
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Diagram>, i64)> {
        Ok(self.page(offset, limit).await)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl TranscriptRepository for InMemoryStore<Transcript> {
    async fn create(&self, transcript: Transcript) -> AppResult<Transcript> {
        self.insert(transcript, |t| t.id.as_str()).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Transcript>> {
        Ok(self.find(id, |t| t.id.as_str()).await)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Replies with queued results in order and remembers every prompt it saw.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<AppResult<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<AppResult<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(reply: &str) -> Self {
        Self::new(vec![Ok(reply.to_string())])
    }

    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        self.prompts.lock().await.push(prompt.to_string());
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(AppError::GenerationError("no scripted reply left".to_string())))
    }
}

pub struct StaticFetcher {
    pub fragments: Vec<CaptionFragment>,
}

#[async_trait]
impl TranscriptFetcher for StaticFetcher {
    async fn fetch(&self, _video_id: &str) -> AppResult<Vec<CaptionFragment>> {
        Ok(self.fragments.clone())
    }
}

pub fn caption(text: &str, start: f64) -> CaptionFragment {
    CaptionFragment {
        text: text.to_string(),
        start,
        duration: 2.0,
    }
}

/// Everything a test may want to inspect after driving the app.
pub struct TestHarness {
    pub state: AppState,
    pub flashcards: Arc<InMemoryFlashcardRepository>,
    pub quizzes: Arc<InMemoryQuizRepository>,
    pub diagrams: Arc<InMemoryDiagramRepository>,
    pub transcripts: Arc<InMemoryTranscriptRepository>,
    pub text_generator: Arc<ScriptedGenerator>,
    pub diagram_generator: Arc<ScriptedGenerator>,
}

pub fn harness(
    text_replies: Vec<AppResult<String>>,
    diagram_replies: Vec<AppResult<String>>,
    fragments: Vec<CaptionFragment>,
) -> TestHarness {
    let flashcards = Arc::new(InMemoryFlashcardRepository::new());
    let quizzes = Arc::new(InMemoryQuizRepository::new());
    let diagrams = Arc::new(InMemoryDiagramRepository::new());
    let transcripts = Arc::new(InMemoryTranscriptRepository::new());
    let text_generator = Arc::new(ScriptedGenerator::new(text_replies));
    let diagram_generator = Arc::new(ScriptedGenerator::new(diagram_replies));

    let components = AppComponents {
        flashcard_repository: flashcards.clone(),
        quiz_repository: quizzes.clone(),
        diagram_repository: diagrams.clone(),
        transcript_repository: transcripts.clone(),
        text_generator: text_generator.clone(),
        diagram_generator: diagram_generator.clone(),
        transcript_fetcher: Arc::new(StaticFetcher { fragments }),
    };

    TestHarness {
        state: AppState::from_components(test_config(), components, None),
        flashcards,
        quizzes,
        diagrams,
        transcripts,
        text_generator,
        diagram_generator,
    }
}
