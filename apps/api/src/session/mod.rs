// Editor session: the live document + section order, the single source of
// truth for storage and preview. Owned by AppState behind one mutex; every
// mutation goes through here.

pub mod handlers;
pub mod reset;

use serde::Serialize;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::document::migration::normalize_entry_ids;
use crate::document::ordering::{reorder, reorder_entries};
use crate::document::validation::{validate, ValidationErrors};
use crate::models::{Entry, ListSection, ResumeDocument, SectionId, SectionOrder};
use crate::suggestion::{apply_to_document, SuggestionTarget, SuggestionTracker};

use self::reset::Snapshot;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No {section:?} entry with id {id}")]
    EntryNotFound { section: ListSection, id: Uuid },

    #[error("No suggestion is waiting for {0}")]
    NoPendingSuggestion(SuggestionTarget),

    #[error("Suggestion target {0} no longer exists")]
    TargetGone(SuggestionTarget),

    #[error("Nothing to undo")]
    NothingToUndo,
}

/// Runs `$body` with `$list` bound to the `Vec` behind a `ListSection`.
macro_rules! with_list {
    ($doc:expr, $section:expr, |$list:ident| $body:expr) => {
        match $section {
            ListSection::Projects => {
                let $list = &mut $doc.projects;
                $body
            }
            ListSection::Achievements => {
                let $list = &mut $doc.achievements;
                $body
            }
            ListSection::Leadership => {
                let $list = &mut $doc.leadership_and_volunteering;
                $body
            }
            ListSection::Education => {
                let $list = &mut $doc.education;
                $body
            }
            ListSection::Certificates => {
                let $list = &mut $doc.certificates;
                $body
            }
            ListSection::References => {
                let $list = &mut $doc.references;
                $body
            }
        }
    };
}

#[derive(Debug)]
pub struct EditorSession {
    pub document: ResumeDocument,
    pub order: SectionOrder,
    pub suggestions: SuggestionTracker,
    pending_undo: Option<Snapshot>,
}

/// What a client needs to render the form: state plus inline field errors.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub document: ResumeDocument,
    pub order: SectionOrder,
    pub errors: ValidationErrors,
    pub can_undo_reset: bool,
}

impl EditorSession {
    pub fn new(document: ResumeDocument, order: SectionOrder) -> Self {
        Self {
            document,
            order,
            suggestions: SuggestionTracker::default(),
            pending_undo: None,
        }
    }

    pub fn validation(&self) -> ValidationErrors {
        validate(&self.document).err().unwrap_or_default()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            document: self.document.clone(),
            order: self.order.clone(),
            errors: self.validation(),
            can_undo_reset: self.pending_undo.is_some(),
        }
    }

    /// Installs an edited document. Validation problems are reported, never
    /// blocking: the edit is kept either way.
    pub fn replace_document(&mut self, mut document: ResumeDocument) -> ValidationErrors {
        normalize_entry_ids(&mut document);
        self.document = document;
        self.validation()
    }

    /// Appends a blank entry and returns its id.
    pub fn add_entry(&mut self, section: ListSection) -> Uuid {
        with_list!(self.document, section, |list| push_blank(list))
    }

    pub fn remove_entry(&mut self, section: ListSection, id: Uuid) -> Result<(), SessionError> {
        let removed = with_list!(self.document, section, |list| remove_by_id(list, id));
        if removed {
            if let Some(target) = SuggestionTarget::for_entry(section, id) {
                self.suggestions.forget(target);
            }
            Ok(())
        } else {
            Err(SessionError::EntryNotFound { section, id })
        }
    }

    /// Moves an entry onto another's position. Unknown ids leave the list as is.
    pub fn reorder_entries(&mut self, section: ListSection, moving: Uuid, target: Uuid) {
        with_list!(self.document, section, |list| {
            *list = reorder_entries(list, moving, target);
        })
    }

    pub fn reorder_sections(&mut self, moving: SectionId, target: SectionId) {
        self.order = reorder(&self.order, moving, target);
    }

    /// Replaces live state with defaults, keeping one snapshot for undo.
    /// A second reset replaces the earlier snapshot.
    pub fn reset(&mut self) -> &Snapshot {
        let snapshot = reset::reset(&mut self.document, &mut self.order);
        self.suggestions.clear();
        info!("Resume reset to defaults (snapshot taken at {})", snapshot.taken_at);
        self.pending_undo.insert(snapshot)
    }

    /// Restores the snapshot taken by the last reset. Single-shot.
    pub fn undo_reset(&mut self) -> Result<(), SessionError> {
        let snapshot = self.pending_undo.take().ok_or(SessionError::NothingToUndo)?;
        reset::restore(&mut self.document, &mut self.order, snapshot);
        self.suggestions.clear();
        info!("Resume restored from reset snapshot");
        Ok(())
    }

    /// Copies the parked suggestion for `target` into the document.
    pub fn accept_suggestion(&mut self, target: SuggestionTarget) -> Result<(), SessionError> {
        let text = self
            .suggestions
            .take(target)
            .ok_or(SessionError::NoPendingSuggestion(target))?;
        if apply_to_document(&mut self.document, target, text) {
            Ok(())
        } else {
            Err(SessionError::TargetGone(target))
        }
    }
}

fn push_blank<T: Entry>(list: &mut Vec<T>) -> Uuid {
    let entry = T::blank();
    let id = entry.id();
    list.push(entry);
    id
}

fn remove_by_id<T: Entry>(list: &mut Vec<T>, id: Uuid) -> bool {
    let before = list.len();
    list.retain(|e| e.id() != id);
    list.len() != before
}
