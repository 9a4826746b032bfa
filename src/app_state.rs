use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        DiagramRepository, FlashcardRepository, MongoDiagramRepository, MongoFlashcardRepository,
        MongoQuizQuestionRepository, MongoTranscriptRepository, QuizQuestionRepository,
        TranscriptRepository,
    },
    services::{
        DiagramService, FlashcardService, OpenAiGenerator, QuizService, TextGenerator,
        TranscriptFetcher, TranscriptService, YoutubeTranscriptClient,
    },
};

/// Collaborators the services are built from. `AppState::new` fills this with
/// MongoDB repositories and network clients; tests supply their own.
pub struct AppComponents {
    pub flashcard_repository: Arc<dyn FlashcardRepository>,
    pub quiz_repository: Arc<dyn QuizQuestionRepository>,
    pub diagram_repository: Arc<dyn DiagramRepository>,
    pub transcript_repository: Arc<dyn TranscriptRepository>,
    pub text_generator: Arc<dyn TextGenerator>,
    pub diagram_generator: Arc<dyn TextGenerator>,
    pub transcript_fetcher: Arc<dyn TranscriptFetcher>,
}

#[derive(Clone)]
pub struct AppState {
    pub flashcard_service: Arc<FlashcardService>,
    pub quiz_service: Arc<QuizService>,
    pub diagram_service: Arc<DiagramService>,
    pub transcript_service: Arc<TranscriptService>,
    pub config: Arc<Config>,
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let flashcard_repository = Arc::new(MongoFlashcardRepository::new(&db));
        flashcard_repository.ensure_indexes().await?;
        let quiz_repository = Arc::new(MongoQuizQuestionRepository::new(&db));
        quiz_repository.ensure_indexes().await?;
        let diagram_repository = Arc::new(MongoDiagramRepository::new(&db));
        diagram_repository.ensure_indexes().await?;
        let transcript_repository = Arc::new(MongoTranscriptRepository::new(&db));
        transcript_repository.ensure_indexes().await?;

        let components = AppComponents {
            flashcard_repository,
            quiz_repository,
            diagram_repository,
            transcript_repository,
            text_generator: Arc::new(OpenAiGenerator::from_config(&config, &config.llm_model)),
            diagram_generator: Arc::new(OpenAiGenerator::from_config(&config, &config.diagram_model)),
            transcript_fetcher: Arc::new(YoutubeTranscriptClient::from_config(&config)?),
        };

        log::info!(
            "Using model '{}' for text and '{}' for diagrams",
            config.llm_model,
            config.diagram_model
        );

        Ok(Self::from_components(config, components, Some(db)))
    }

    pub fn from_components(config: Config, components: AppComponents, db: Option<Database>) -> Self {
        let max_input_chars = config.max_input_chars;

        Self {
            flashcard_service: Arc::new(FlashcardService::new(
                components.flashcard_repository,
                components.text_generator.clone(),
                max_input_chars,
            )),
            quiz_service: Arc::new(QuizService::new(
                components.quiz_repository,
                components.text_generator,
                max_input_chars,
            )),
            diagram_service: Arc::new(DiagramService::new(
                components.diagram_repository,
                components.diagram_generator,
                max_input_chars,
            )),
            transcript_service: Arc::new(TranscriptService::new(
                components.transcript_repository,
                components.transcript_fetcher,
            )),
            config: Arc::new(config),
            db,
        }
    }

    /// Pings MongoDB. A state built without a database is never ready.
    pub async fn database_ready(&self) -> bool {
        match &self.db {
            Some(db) => db.health_check().await.is_ok(),
            None => false,
        }
    }
}
