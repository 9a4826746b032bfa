use async_graphql::{Context, Object, Result, ResultExt};

use crate::{
    app_state::AppState,
    models::dto::{
        request::{
            CreateDiagramRequest, CreateFlashcardsRequest, CreateQuizBatchRequest,
            CreateQuizRequest, FetchCaptionsRequest,
        },
        response::{DiagramDto, FlashcardBatchResponse, QuizBatchResponse, QuizQuestionDto, TranscriptDto},
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_flashcards(
        &self,
        ctx: &Context<'_>,
        input: CreateFlashcardsRequest,
    ) -> Result<FlashcardBatchResponse> {
        let state = ctx.data::<AppState>()?;
        state.flashcard_service.create_flashcards(input).await.extend()
    }

    async fn create_quiz(&self, ctx: &Context<'_>, input: CreateQuizRequest) -> Result<QuizQuestionDto> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.create_quiz(input).await.extend()
    }

    async fn create_quiz_batch(
        &self,
        ctx: &Context<'_>,
        input: CreateQuizBatchRequest,
    ) -> Result<QuizBatchResponse> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.create_quiz_batch(input).await.extend()
    }

    async fn create_diagram(&self, ctx: &Context<'_>, input: CreateDiagramRequest) -> Result<DiagramDto> {
        let state = ctx.data::<AppState>()?;
        state.diagram_service.create_diagram(input).await.extend()
    }

    async fn fetch_captions(&self, ctx: &Context<'_>, input: FetchCaptionsRequest) -> Result<TranscriptDto> {
        let state = ctx.data::<AppState>()?;
        state.transcript_service.fetch_captions(input).await.extend()
    }
}
