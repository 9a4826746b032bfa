use crate::{
    models::domain::{Diagram, Flashcard, QuizQuestion},
    parsers::{Language, ParsedQuizQuestion},
};

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::models::domain::AnswerOrdering;

    pub const FLASHCARD_REPLY: &str =
        "What is photosynthesis?\nPlants turning light into energy.\n\nWho wrote Hamlet?\nShakespeare.";

    pub const SINGLE_QUIZ_REPLY: &str = "What is the capital of France?\nParis\nLondon\nBerlin\nRome";

    pub const DIAGRAM_REPLY: &str = "```mermaid\ngraph TD\n    A[Sun] --> B[Plants]\n```";

    pub fn test_flashcard() -> Flashcard {
        Flashcard::new("What is photosynthesis?", "Plants turning light into energy.", Language::English)
    }

    pub fn test_quiz_question() -> QuizQuestion {
        QuizQuestion::from_parsed(
            ParsedQuizQuestion {
                question: "What is the capital of France?".to_string(),
                answers: ["Paris", "London", "Berlin", "Rome"].map(String::from),
            },
            AnswerOrdering::ModelClaimedFirst,
            Language::English,
        )
    }

    pub fn test_diagram() -> Diagram {
        Diagram::new(
            "graph TD\nA[Sun] --> B[Plants]".to_string(),
            Some("The sun feeds plants.".to_string()),
            Some(Language::English),
            1,
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::http::StatusCode;

    use crate::{
        app_state::{AppComponents, AppState},
        config::Config,
        repositories::{
            diagram_repository::MockDiagramRepository, flashcard_repository::MockFlashcardRepository,
            quiz_repository::MockQuizQuestionRepository,
            transcript_repository::MockTranscriptRepository,
        },
        services::{model_service::MockTextGenerator, transcript_client::MockTranscriptFetcher},
    };

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }

    #[derive(Default)]
    pub struct MockComponents {
        pub flashcard_repository: MockFlashcardRepository,
        pub quiz_repository: MockQuizQuestionRepository,
        pub diagram_repository: MockDiagramRepository,
        pub transcript_repository: MockTranscriptRepository,
        pub text_generator: MockTextGenerator,
        pub diagram_generator: MockTextGenerator,
        pub transcript_fetcher: MockTranscriptFetcher,
    }

    /// AppState over mocks with no database. Unconfigured mocks panic when called.
    pub fn mock_state(configure: impl FnOnce(&mut MockComponents)) -> AppState {
        let mut mocks = MockComponents::default();
        configure(&mut mocks);

        let components = AppComponents {
            flashcard_repository: Arc::new(mocks.flashcard_repository),
            quiz_repository: Arc::new(mocks.quiz_repository),
            diagram_repository: Arc::new(mocks.diagram_repository),
            transcript_repository: Arc::new(mocks.transcript_repository),
            text_generator: Arc::new(mocks.text_generator),
            diagram_generator: Arc::new(mocks.diagram_generator),
            transcript_fetcher: Arc::new(mocks.transcript_fetcher),
        };

        AppState::from_components(Config::test_config(), components, None)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::parsers::{clean_diagram, parse_flashcards, parse_single_quiz};

    #[test]
    fn test_fixture_replies_parse() {
        assert_eq!(parse_flashcards(FLASHCARD_REPLY).accepted(), 2);
        assert!(parse_single_quiz(SINGLE_QUIZ_REPLY).is_some());
        assert!(clean_diagram(DIAGRAM_REPLY).is_ok());
    }

    #[test]
    fn test_fixture_records() {
        assert_eq!(test_quiz_question().answers.len(), 4);
        assert_eq!(test_diagram().attempts, 1);
        assert!(!test_flashcard().id.is_empty());
    }
}
