//! Handlers for the `/ai` feature endpoints.
//!
//! Each handler validates its request, builds the prompt pair, runs one
//! completion, and shapes the reply. Structured features additionally
//! decode the reply JSON; a decode failure is surfaced as a 500, never a
//! partial result. An unconfigured provider short-circuits to 501 inside
//! the client before any network I/O.

use axum::extract::State;
use axum::Json;
use scribe_ai::client::{reply_token_budget, ChatMessage, Sampling};
use scribe_ai::decode::{
    decode_deconstruct, decode_naming, decode_review, DeconstructReport, NameSuggestion,
    ReviewReport,
};
use scribe_ai::prompts::{
    self, ChatRequest, ContinueWritingRequest, DeconstructRequest, GenerateCharacterRequest,
    GenerateDraftRequest, GenerateOutlineRequest, GenerateWorldRequest, NamingRequest,
    RefineRequest, ReviewRequest,
};
use scribe_core::error::CoreError;
use scribe_core::text::word_count;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types (camelCase, matching the rest of the AI surface)
// ---------------------------------------------------------------------------

/// Free-text reply with a derived word count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextResponse {
    pub content: String,
    pub word_count: i32,
}

/// Raw chat passthrough reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub content: String,
    pub raw: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct OutlineResponse {
    pub success: bool,
    pub outline: String,
}

#[derive(Debug, Serialize)]
pub struct CharacterResponse {
    pub success: bool,
    pub character: String,
}

#[derive(Debug, Serialize)]
pub struct WorldResponse {
    pub success: bool,
    pub world: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub success: bool,
    pub review: ReviewReport,
}

#[derive(Debug, Serialize)]
pub struct DeconstructResponse {
    pub success: bool,
    pub analysis: DeconstructReport,
}

#[derive(Debug, Serialize)]
pub struct NamingResponse {
    pub success: bool,
    pub suggestions: Vec<NameSuggestion>,
}

fn require_non_blank(value: &str, message: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(message.to_string())));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/ai/chat
pub async fn chat(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    if input.messages.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "messages must not be empty".into(),
        )));
    }

    let raw = state.ai.chat(&input.messages, input.sampling()).await?;
    let content = scribe_ai::client::extract_content(&raw)?;
    Ok(Json(ChatResponse { content, raw }))
}

/// POST /api/v1/ai/continue-writing
pub async fn continue_writing(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<ContinueWritingRequest>,
) -> AppResult<Json<TextResponse>> {
    require_non_blank(&input.content, "content must not be empty")?;

    let (system, user_prompt) = prompts::continue_writing_prompts(&input);
    let messages = [ChatMessage::system(system), ChatMessage::user(user_prompt)];
    let sampling = Sampling {
        temperature: 0.8,
        max_tokens: reply_token_budget(input.length),
        top_p: 0.9,
    };

    let content = state.ai.complete(&messages, sampling).await?;
    let count = word_count(&content);
    Ok(Json(TextResponse {
        content,
        word_count: count,
    }))
}

/// POST /api/v1/ai/refine
pub async fn refine(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<RefineRequest>,
) -> AppResult<Json<TextResponse>> {
    require_non_blank(&input.content, "content must not be empty")?;

    let (system, user_prompt) = prompts::refine_prompts(&input);
    let messages = [ChatMessage::system(system), ChatMessage::user(user_prompt)];
    let sampling = Sampling {
        temperature: 0.7,
        max_tokens: reply_token_budget(input.length),
        top_p: 0.9,
    };

    let content = state.ai.complete(&messages, sampling).await?;
    let count = word_count(&content);
    Ok(Json(TextResponse {
        content,
        word_count: count,
    }))
}

/// POST /api/v1/ai/generate-outline
pub async fn generate_outline(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<GenerateOutlineRequest>,
) -> AppResult<Json<OutlineResponse>> {
    require_non_blank(&input.title, "title must not be empty")?;

    let (system, user_prompt) = prompts::generate_outline_prompts(&input);
    let messages = [ChatMessage::system(system), ChatMessage::user(user_prompt)];
    let sampling = Sampling {
        temperature: 0.7,
        max_tokens: 4000,
        top_p: 0.9,
    };

    let outline = state.ai.complete(&messages, sampling).await?;
    Ok(Json(OutlineResponse {
        success: true,
        outline,
    }))
}

/// POST /api/v1/ai/generate-character
pub async fn generate_character(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<GenerateCharacterRequest>,
) -> AppResult<Json<CharacterResponse>> {
    let (system, user_prompt) = prompts::generate_character_prompts(&input);
    let messages = [ChatMessage::system(system), ChatMessage::user(user_prompt)];
    let sampling = Sampling {
        temperature: 0.8,
        max_tokens: 2000,
        top_p: 0.9,
    };

    let character = state.ai.complete(&messages, sampling).await?;
    Ok(Json(CharacterResponse {
        success: true,
        character,
    }))
}

/// POST /api/v1/ai/generate-world
pub async fn generate_world(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<GenerateWorldRequest>,
) -> AppResult<Json<WorldResponse>> {
    let (system, user_prompt) = prompts::generate_world_prompts(&input);
    let messages = [ChatMessage::system(system), ChatMessage::user(user_prompt)];
    let sampling = Sampling {
        temperature: 0.8,
        max_tokens: 3000,
        top_p: 0.9,
    };

    let world = state.ai.complete(&messages, sampling).await?;
    Ok(Json(WorldResponse {
        success: true,
        world,
    }))
}

/// POST /api/v1/ai/generate-draft
pub async fn generate_draft(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<GenerateDraftRequest>,
) -> AppResult<Json<TextResponse>> {
    require_non_blank(&input.title, "title must not be empty")?;

    let (system, user_prompt) = prompts::generate_draft_prompts(&input);
    let messages = [ChatMessage::system(system), ChatMessage::user(user_prompt)];
    let sampling = Sampling {
        temperature: 0.8,
        max_tokens: reply_token_budget(input.length),
        top_p: 0.9,
    };

    let content = state.ai.complete(&messages, sampling).await?;
    let count = word_count(&content);
    Ok(Json(TextResponse {
        content,
        word_count: count,
    }))
}

/// POST /api/v1/ai/review
pub async fn review(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<ReviewRequest>,
) -> AppResult<Json<ReviewResponse>> {
    require_non_blank(&input.content, "content must not be empty")?;

    let (system, user_prompt) = prompts::review_prompts(&input);
    let messages = [ChatMessage::system(system), ChatMessage::user(user_prompt)];
    let sampling = Sampling {
        temperature: 0.4,
        max_tokens: 1200,
        top_p: 0.8,
    };

    let reply = state.ai.complete(&messages, sampling).await?;
    let review = decode_review(&reply)?;
    Ok(Json(ReviewResponse {
        success: true,
        review,
    }))
}

/// POST /api/v1/ai/deconstruct
pub async fn deconstruct(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<DeconstructRequest>,
) -> AppResult<Json<DeconstructResponse>> {
    require_non_blank(&input.content, "content must not be empty")?;

    let (system, user_prompt) = prompts::deconstruct_prompts(&input);
    let messages = [ChatMessage::system(system), ChatMessage::user(user_prompt)];
    let sampling = Sampling {
        temperature: 0.7,
        max_tokens: 1600,
        top_p: 0.9,
    };

    let reply = state.ai.complete(&messages, sampling).await?;
    let analysis = decode_deconstruct(&reply)?;
    Ok(Json(DeconstructResponse {
        success: true,
        analysis,
    }))
}

/// POST /api/v1/ai/naming
pub async fn naming(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<NamingRequest>,
) -> AppResult<Json<NamingResponse>> {
    if input.keywords.trim().is_empty() && input.background.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "provide at least one of keywords or background".into(),
        )));
    }

    let (system, user_prompt) = prompts::naming_prompts(&input);
    let messages = [ChatMessage::system(system), ChatMessage::user(user_prompt)];
    let sampling = Sampling {
        temperature: 0.7,
        max_tokens: 800,
        top_p: 0.9,
    };

    let reply = state.ai.complete(&messages, sampling).await?;
    let suggestions = decode_naming(&reply)?;
    Ok(Json(NamingResponse {
        success: true,
        suggestions,
    }))
}
