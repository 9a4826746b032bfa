use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::{
    app_state::AppState,
    graphql::helpers::{page_bounds, parse_id},
    models::dto::response::{
        DiagramDto, FlashcardDto, PaginatedResponse, QuizQuestionDto, TranscriptDto,
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn flashcards(
        &self,
        ctx: &Context<'_>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<PaginatedResponse<FlashcardDto>> {
        let state = ctx.data::<AppState>()?;
        let (offset, limit) = page_bounds(offset, limit);

        state.flashcard_service.list_flashcards(offset, limit).await.extend()
    }

    async fn quizzes(
        &self,
        ctx: &Context<'_>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<PaginatedResponse<QuizQuestionDto>> {
        let state = ctx.data::<AppState>()?;
        let (offset, limit) = page_bounds(offset, limit);

        state.quiz_service.list_quizzes(offset, limit).await.extend()
    }

    async fn quiz(&self, ctx: &Context<'_>, id: ID) -> Result<QuizQuestionDto> {
        let state = ctx.data::<AppState>()?;
        let id = parse_id(&id).extend()?;

        state.quiz_service.get_quiz(&id).await.extend()
    }

    async fn diagrams(
        &self,
        ctx: &Context<'_>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<PaginatedResponse<DiagramDto>> {
        let state = ctx.data::<AppState>()?;
        let (offset, limit) = page_bounds(offset, limit);

        state.diagram_service.list_diagrams(offset, limit).await.extend()
    }

    async fn diagram(&self, ctx: &Context<'_>, id: ID) -> Result<DiagramDto> {
        let state = ctx.data::<AppState>()?;
        let id = parse_id(&id).extend()?;

        state.diagram_service.get_diagram(&id).await.extend()
    }

    async fn transcript(&self, ctx: &Context<'_>, id: ID) -> Result<TranscriptDto> {
        let state = ctx.data::<AppState>()?;
        let id = parse_id(&id).extend()?;

        state.transcript_service.get_transcript(&id).await.extend()
    }
}
