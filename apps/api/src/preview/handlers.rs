use axum::{extract::State, Json};

use crate::preview::{preview_page, PreviewPage};
use crate::state::AppState;

/// GET /api/v1/preview
pub async fn handle_preview(State(state): State<AppState>) -> Json<PreviewPage> {
    let session = state.session.lock().await;
    Json(preview_page(&session.document, &session.order))
}
