use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Diagram,
        dto::{
            request::CreateDiagramRequest,
            response::{DiagramDto, PaginatedResponse},
        },
    },
    parsers::{clean_diagram, detect_language, DiagramDefect, Language},
    repositories::DiagramRepository,
    services::{
        model_service::TextGenerator,
        prepare_input,
        prompt_builder::{render, PromptKind, PromptOptions},
    },
};

/// Where a diagram request is in its generation budget: one initial request
/// and at most one stricter retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramAttempt {
    Initial,
    Retried,
}

impl DiagramAttempt {
    pub fn number(self) -> i32 {
        match self {
            DiagramAttempt::Initial => 1,
            DiagramAttempt::Retried => 2,
        }
    }
}

#[derive(Debug)]
enum AttemptFailure {
    Invalid(DiagramDefect),
    Generation(AppError),
}

impl AttemptFailure {
    fn defect(&self) -> Option<DiagramDefect> {
        match self {
            AttemptFailure::Invalid(defect) => Some(*defect),
            AttemptFailure::Generation(_) => None,
        }
    }

    fn into_error(self) -> AppError {
        match self {
            AttemptFailure::Invalid(defect) => AppError::InvalidDiagram(defect.label().to_string()),
            AttemptFailure::Generation(err) => err,
        }
    }
}

pub struct DiagramService {
    repository: Arc<dyn DiagramRepository>,
    generator: Arc<dyn TextGenerator>,
    max_input_chars: usize,
}

impl DiagramService {
    pub fn new(
        repository: Arc<dyn DiagramRepository>,
        generator: Arc<dyn TextGenerator>,
        max_input_chars: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_input_chars,
        }
    }

    pub async fn create_diagram(&self, request: CreateDiagramRequest) -> AppResult<DiagramDto> {
        request.validate()?;
        let input_text = prepare_input(&request.input_text, self.max_input_chars)?;
        let language = detect_language(input_text);

        let mut attempt = DiagramAttempt::Initial;
        let mut kind = PromptKind::Diagram;

        let code = loop {
            match (self.generate_valid(kind, language, input_text).await, attempt) {
                (Ok(code), _) => break code,
                (Err(failure), DiagramAttempt::Initial) => {
                    log::warn!(
                        "Diagram attempt {} failed ({:?}), retrying with strict prompt",
                        attempt.number(),
                        failure
                    );
                    kind = PromptKind::StrictDiagram(failure.defect());
                    attempt = DiagramAttempt::Retried;
                }
                (Err(failure), DiagramAttempt::Retried) => {
                    log::error!("Diagram retry failed ({:?}), giving up", failure);
                    return Err(failure.into_error());
                }
            }
        };

        let diagram = Diagram::new(
            code,
            Some(input_text.to_string()),
            Some(language),
            attempt.number(),
        );
        let diagram = self.repository.create(diagram).await?;

        log::info!("Stored diagram {} after {} attempt(s)", diagram.id, diagram.attempts);
        Ok(diagram.into())
    }

    async fn generate_valid(
        &self,
        kind: PromptKind,
        language: Language,
        input_text: &str,
    ) -> Result<String, AttemptFailure> {
        let prompt = render(kind, language, &PromptOptions::default()).fill(input_text);

        let reply = self
            .generator
            .generate(&prompt)
            .await
            .map_err(AttemptFailure::Generation)?;

        clean_diagram(&reply).map_err(AttemptFailure::Invalid)
    }

    pub async fn get_diagram(&self, id: &str) -> AppResult<DiagramDto> {
        let diagram = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Diagram with id '{}' not found", id)))?;

        Ok(diagram.into())
    }

    pub async fn list_diagrams(
        &self,
        offset: i64,
        limit: i64,
    ) -> AppResult<PaginatedResponse<DiagramDto>> {
        let (diagrams, total) = self.repository.list(offset, limit).await?;
        let items = diagrams.into_iter().map(DiagramDto::from).collect();
        Ok(PaginatedResponse::new(items, offset, limit, total))
    }
}
