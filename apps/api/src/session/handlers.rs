//! Axum route handlers for section order and reset/undo.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::SectionId;
use crate::session::SessionView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReorderSectionsRequest {
    pub moving: SectionId,
    pub target: SectionId,
}

#[derive(Debug, Serialize)]
pub struct SectionInfo {
    pub id: SectionId,
    pub title: &'static str,
}

/// GET /api/v1/sections
pub async fn handle_get_sections(State(state): State<AppState>) -> Json<Vec<SectionInfo>> {
    let session = state.session.lock().await;
    Json(section_infos(session.order.ids()))
}

/// POST /api/v1/sections/reorder
///
/// Moves one section onto another's position. Same id or unknown ids are a no-op.
pub async fn handle_reorder_sections(
    State(state): State<AppState>,
    Json(req): Json<ReorderSectionsRequest>,
) -> Json<Vec<SectionInfo>> {
    let mut session = state.session.lock().await;
    session.reorder_sections(req.moving, req.target);
    state.persist(&session).await;
    Json(section_infos(session.order.ids()))
}

/// POST /api/v1/reset
///
/// Replaces document and order with defaults. The previous state can be
/// restored once via `/api/v1/reset/undo`.
pub async fn handle_reset(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.reset();
    state.persist(&session).await;
    Json(session.view())
}

/// POST /api/v1/reset/undo
pub async fn handle_undo_reset(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.lock().await;
    session.undo_reset()?;
    state.persist(&session).await;
    Ok(Json(session.view()))
}

fn section_infos(ids: &[SectionId]) -> Vec<SectionInfo> {
    ids.iter()
        .map(|&id| SectionInfo {
            id,
            title: id.title(),
        })
        .collect()
}
