//! Axum route handlers for phrasing suggestions.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::ResumeDocument;
use crate::state::AppState;
use crate::suggestion::{request_suggestion, SuggestionOutcome, SuggestionTarget};

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub target: SuggestionTarget,
}

#[derive(Debug, Serialize)]
pub struct AcceptResponse {
    pub document: ResumeDocument,
}

/// POST /api/v1/suggestions
///
/// Asks the gateway for a rewrite of one field. The result is parked on the
/// field until accepted; the document is not changed here.
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(req): Json<SuggestionRequest>,
) -> Result<Json<SuggestionOutcome>, AppError> {
    let outcome = request_suggestion(&state.session, state.gateway.as_ref(), req.target).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/suggestions/accept
///
/// Copies the parked suggestion into its field and persists.
pub async fn handle_accept(
    State(state): State<AppState>,
    Json(req): Json<SuggestionRequest>,
) -> Result<Json<AcceptResponse>, AppError> {
    let mut session = state.session.lock().await;
    session.accept_suggestion(req.target)?;
    state.persist(&session).await;
    Ok(Json(AcceptResponse {
        document: session.document.clone(),
    }))
}
