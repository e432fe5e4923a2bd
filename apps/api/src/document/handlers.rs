//! Axum route handlers for the resume document and its list entries.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::document::migration::document_from_edit;
use crate::document::validation::ValidationErrors;
use crate::errors::AppError;
use crate::models::{ListSection, ResumeDocument};
use crate::session::SessionView;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AddEntryResponse {
    pub id: Uuid,
    pub document: ResumeDocument,
    pub errors: ValidationErrors,
}

#[derive(Debug, Deserialize)]
pub struct ReorderEntriesRequest {
    pub moving: Uuid,
    pub target: Uuid,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.session.lock().await.view())
}

/// PUT /api/v1/resume
///
/// Replaces the document with the client's edit. Missing or null fields
/// read as empty; validation errors come back in the body and never reject
/// the edit.
pub async fn handle_put_resume(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SessionView>, AppError> {
    let Value::Object(edit) = body else {
        return Err(AppError::BadRequest(
            "Resume edit must be a JSON object".to_string(),
        ));
    };
    let mut session = state.session.lock().await;
    session.replace_document(document_from_edit(&edit));
    state.persist(&session).await;
    Ok(Json(session.view()))
}

/// GET /api/v1/resume/validation
pub async fn handle_get_validation(State(state): State<AppState>) -> Json<ValidationErrors> {
    Json(state.session.lock().await.validation())
}

/// POST /api/v1/resume/:section/entries
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path(section): Path<ListSection>,
) -> (StatusCode, Json<AddEntryResponse>) {
    let mut session = state.session.lock().await;
    let id = session.add_entry(section);
    state.persist(&session).await;
    (
        StatusCode::CREATED,
        Json(AddEntryResponse {
            id,
            document: session.document.clone(),
            errors: session.validation(),
        }),
    )
}

/// DELETE /api/v1/resume/:section/entries/:id
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((section, id)): Path<(ListSection, Uuid)>,
) -> Result<StatusCode, AppError> {
    let mut session = state.session.lock().await;
    session.remove_entry(section, id)?;
    state.persist(&session).await;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resume/:section/entries/reorder
///
/// Moves `moving` onto `target`'s position. Unknown ids are a no-op.
pub async fn handle_reorder_entries(
    State(state): State<AppState>,
    Path(section): Path<ListSection>,
    Json(req): Json<ReorderEntriesRequest>,
) -> Json<ResumeDocument> {
    let mut session = state.session.lock().await;
    session.reorder_entries(section, req.moving, req.target);
    state.persist(&session).await;
    Json(session.document.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::defaults::default_document;
    use crate::state::test_support::{assert_persisted, memory_state};

    #[tokio::test]
    async fn test_put_keeps_edit_missing_a_required_field() {
        let state = memory_state();
        let mut edit = serde_json::to_value(default_document()).unwrap();
        edit["projects"][0]
            .as_object_mut()
            .unwrap()
            .remove("description");

        let Json(view) = handle_put_resume(State(state.clone()), Json(edit))
            .await
            .unwrap();

        assert_eq!(view.errors.paths(), vec!["projects[0].description"]);
        assert_eq!(view.document.projects[0].description, "");
        assert_persisted(&state).await;
    }

    #[tokio::test]
    async fn test_put_null_summary_is_reported_not_rejected() {
        let state = memory_state();
        let mut edit = serde_json::to_value(default_document()).unwrap();
        edit["summary"] = Value::Null;

        let Json(view) = handle_put_resume(State(state.clone()), Json(edit))
            .await
            .unwrap();

        assert_eq!(view.errors.paths(), vec!["summary"]);
        assert_eq!(state.session.lock().await.document.summary, "");
    }

    #[tokio::test]
    async fn test_put_non_object_is_bad_request() {
        let state = memory_state();
        let result = handle_put_resume(State(state.clone()), Json(Value::Null)).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(state.session.lock().await.document, default_document());
    }

    #[tokio::test]
    async fn test_entry_mutations_are_persisted() {
        let state = memory_state();

        let (status, Json(added)) =
            handle_add_entry(State(state.clone()), Path(ListSection::Projects)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_persisted(&state).await;

        let first = state.session.lock().await.document.projects[0].id;
        handle_reorder_entries(
            State(state.clone()),
            Path(ListSection::Projects),
            Json(ReorderEntriesRequest {
                moving: added.id,
                target: first,
            }),
        )
        .await;
        assert_eq!(
            state.session.lock().await.document.projects[0].id,
            added.id
        );
        assert_persisted(&state).await;

        let status = handle_remove_entry(
            State(state.clone()),
            Path((ListSection::Projects, first)),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_persisted(&state).await;
    }
}
