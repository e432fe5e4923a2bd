//! Reset/Undo: snapshot-and-restore around the destructive reset action.
//!
//! The snapshot is a plain value, so undo is testable by equality and holds
//! no hidden captured state.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::document::defaults::{default_document, default_order};
use crate::models::{ResumeDocument, SectionOrder};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub document: ResumeDocument,
    pub order: SectionOrder,
    pub taken_at: DateTime<Utc>,
}

/// Replaces both halves with defaults and returns what was there before.
pub fn reset(document: &mut ResumeDocument, order: &mut SectionOrder) -> Snapshot {
    Snapshot {
        document: std::mem::replace(document, default_document()),
        order: std::mem::replace(order, default_order()),
        taken_at: Utc::now(),
    }
}

/// Overwrites live state with the snapshot. A full overwrite, not a merge:
/// anything added, removed or reordered since the snapshot is discarded.
pub fn restore(document: &mut ResumeDocument, order: &mut SectionOrder, snapshot: Snapshot) {
    *document = snapshot.document;
    *order = snapshot.order;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ordering::reorder;
    use crate::models::{Entry, Project, Reference, SectionId};

    fn edited() -> (ResumeDocument, SectionOrder) {
        let mut doc = default_document();
        doc.summary = "My own summary".to_string();
        doc.projects.push(Project {
            name: "Compiler".to_string(),
            description: "A toy compiler".to_string(),
            ..Project::blank()
        });
        let order = reorder(&default_order(), SectionId::Skills, SectionId::Summary);
        (doc, order)
    }

    #[test]
    fn test_reset_installs_defaults() {
        let (mut doc, mut order) = edited();
        reset(&mut doc, &mut order);
        assert_eq!(doc, default_document());
        assert_eq!(order, default_order());
    }

    #[test]
    fn test_snapshot_captures_pre_reset_state() {
        let (mut doc, mut order) = edited();
        let (before_doc, before_order) = (doc.clone(), order.clone());
        let snapshot = reset(&mut doc, &mut order);
        assert_eq!(snapshot.document, before_doc);
        assert_eq!(snapshot.order, before_order);
    }

    #[test]
    fn test_restore_overwrites_intervening_edits() {
        let (mut doc, mut order) = edited();
        let (before_doc, before_order) = (doc.clone(), order.clone());
        let snapshot = reset(&mut doc, &mut order);

        doc.projects.clear();
        doc.references.push(Reference::blank());
        order = reorder(&order, SectionId::References, SectionId::Summary);

        restore(&mut doc, &mut order, snapshot);
        assert_eq!(doc, before_doc);
        assert_eq!(order, before_order);
    }
}
