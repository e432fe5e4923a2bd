//! Migration: normalizes stored data of unknown or older shape into the
//! current schema.
//!
//! There is no version field. Structure is inferred from key presence:
//! - missing top-level keys are filled from the defaults (never overwriting)
//! - keys no longer in the schema are dropped
//! - a malformed sub-tree falls back to the default for that key
//!
//! `serde_json::Value` is the untrusted input; every shape check lives here.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::document::defaults::*;
use crate::models::{
    Achievement, Certificate, Education, Entry, Leadership, Personal, Project, Reference,
    ResumeDocument, SectionId, SectionOrder, Skills, Styling,
};

type Obj = Map<String, Value>;

/// Upgrades a stored document to the current schema. Never fails.
pub fn migrate_document(raw: Option<&Value>) -> ResumeDocument {
    match raw {
        None | Some(Value::Null) => default_document(),
        Some(Value::Object(obj)) => read_document(obj, Fill::Defaults),
        Some(other) => {
            warn!(
                "Stored document is a {}, not an object; using defaults",
                kind(other)
            );
            default_document()
        }
    }
}

/// Reads a full document sent by the editor. A missing or null field here is
/// a cleared field, so it reads as empty and `validate` reports it.
pub fn document_from_edit(edit: &Map<String, Value>) -> ResumeDocument {
    read_document(edit, Fill::Empty)
}

/// What an absent or malformed sub-tree becomes.
#[derive(Debug, Clone, Copy)]
enum Fill {
    Defaults,
    Empty,
}

impl Fill {
    fn or<T: Default>(self, default: fn() -> T) -> impl FnOnce() -> T {
        move || match self {
            Fill::Defaults => default(),
            Fill::Empty => T::default(),
        }
    }
}

fn read_document(obj: &Obj, fill: Fill) -> ResumeDocument {
    for key in obj.keys() {
        if !ResumeDocument::KEYS.contains(&key.as_str()) {
            debug!("Dropping deprecated document key '{key}'");
        }
    }

    let mut seen = HashSet::new();

    ResumeDocument {
        personal: sub_tree(obj, "personal", parse_personal, fill.or(default_personal)),
        styling: sub_tree(obj, "styling", parse_styling, fill.or(default_styling)),
        summary: sub_tree(
            obj,
            "summary",
            |v| v.as_str().map(str::to_string),
            fill.or(default_summary),
        ),
        projects: list(obj, "projects", parse_project, fill.or(default_projects), &mut seen),
        achievements: list(
            obj,
            "achievements",
            parse_achievement,
            fill.or(default_achievements),
            &mut seen,
        ),
        leadership_and_volunteering: list(
            obj,
            "leadershipAndVolunteering",
            parse_leadership,
            fill.or(default_leadership),
            &mut seen,
        ),
        education: list(obj, "education", parse_education, fill.or(default_education), &mut seen),
        skills: sub_tree(obj, "skills", parse_skills, fill.or(default_skills)),
        certificates: list(
            obj,
            "certificates",
            parse_certificate,
            fill.or(default_certificates),
            &mut seen,
        ),
        references: list(obj, "references", parse_reference, fill.or(default_references), &mut seen),
    }
}

/// Upgrades a stored section order. Accepts plain id strings as well as the
/// legacy `{ "id": ..., "title": ... }` objects. Idempotent.
pub fn migrate_order(raw: Option<&Value>) -> SectionOrder {
    let items = match raw {
        None | Some(Value::Null) => return default_order(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            warn!(
                "Stored section order is a {}, not an array; using defaults",
                kind(other)
            );
            return default_order();
        }
    };

    let mut seen = HashSet::new();
    let mut ids = Vec::with_capacity(SectionId::ALL.len());

    for item in items {
        let name = item
            .as_str()
            .or_else(|| item.get("id").and_then(Value::as_str));
        match name.and_then(SectionId::parse) {
            Some(id) => {
                if seen.insert(id) {
                    ids.push(id);
                }
            }
            None => debug!("Dropping unknown section {item}"),
        }
    }

    // Sections introduced since the order was stored go at the end.
    for id in SectionId::ALL {
        if seen.insert(id) {
            ids.push(id);
        }
    }

    SectionOrder(ids)
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-tree helpers
// ────────────────────────────────────────────────────────────────────────────

fn sub_tree<T>(
    obj: &Obj,
    key: &str,
    parse: impl FnOnce(&Value) -> Option<T>,
    default: impl FnOnce() -> T,
) -> T {
    match obj.get(key) {
        None | Some(Value::Null) => default(),
        Some(v) => parse(v).unwrap_or_else(|| {
            warn!("Stored '{key}' is malformed ({}); using default", kind(v));
            default()
        }),
    }
}

fn list<T: Entry>(
    obj: &Obj,
    key: &str,
    parse: fn(&Obj) -> T,
    default: impl FnOnce() -> Vec<T>,
    seen: &mut HashSet<Uuid>,
) -> Vec<T> {
    let parse_all = |v: &Value| {
        v.as_array().map(|items| {
            items
                .iter()
                .filter_map(|item| match item.as_object() {
                    Some(o) => Some(parse(o)),
                    None => {
                        warn!("Skipping malformed entry in '{key}': {item}");
                        None
                    }
                })
                .collect::<Vec<T>>()
        })
    };
    let mut entries = sub_tree(obj, key, parse_all, default);
    ensure_unique_ids(&mut entries, seen);
    entries
}

/// Gives every entry a usable id: stored ids are kept, missing or duplicate
/// ones are replaced with fresh ids.
fn ensure_unique_ids<T: Entry>(entries: &mut [T], seen: &mut HashSet<Uuid>) {
    for entry in entries.iter_mut() {
        let id = entry.id();
        if id.is_nil() || !seen.insert(id) {
            let fresh = Uuid::new_v4();
            seen.insert(fresh);
            entry.set_id(fresh);
        }
    }
}

/// Re-establishes unique, non-nil entry ids on a document that arrived
/// typed (e.g. a full replacement from the client).
pub fn normalize_entry_ids(doc: &mut ResumeDocument) {
    let mut seen = HashSet::new();
    ensure_unique_ids(&mut doc.projects, &mut seen);
    ensure_unique_ids(&mut doc.achievements, &mut seen);
    ensure_unique_ids(&mut doc.leadership_and_volunteering, &mut seen);
    ensure_unique_ids(&mut doc.education, &mut seen);
    ensure_unique_ids(&mut doc.certificates, &mut seen);
    ensure_unique_ids(&mut doc.references, &mut seen);
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field readers
// ────────────────────────────────────────────────────────────────────────────

/// Strings pass through; numbers and booleans are stringified; anything else
/// counts as absent.
fn opt_str(obj: &Obj, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Required fields read as empty when absent; `validate` reports them.
fn req_str(obj: &Obj, key: &str) -> String {
    opt_str(obj, key).unwrap_or_default()
}

fn stored_id(obj: &Obj) -> Uuid {
    obj.get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or(Uuid::nil())
}

fn parse_personal(v: &Value) -> Option<Personal> {
    let o = v.as_object()?;
    Some(Personal {
        name: opt_str(o, "name"),
        email: opt_str(o, "email"),
        phone: opt_str(o, "phone"),
        linkedin: opt_str(o, "linkedin"),
        location: opt_str(o, "location"),
    })
}

fn parse_styling(v: &Value) -> Option<Styling> {
    let o = v.as_object()?;
    Some(Styling {
        font_family: opt_str(o, "fontFamily"),
        font_size: opt_str(o, "fontSize"),
        line_height: opt_str(o, "lineHeight"),
        text_align: opt_str(o, "textAlign"),
    })
}

fn parse_skills(v: &Value) -> Option<Skills> {
    let o = v.as_object()?;
    Some(Skills {
        technical_skills: opt_str(o, "technicalSkills"),
        soft_skills: opt_str(o, "softSkills"),
        language: opt_str(o, "language"),
    })
}

fn parse_project(o: &Obj) -> Project {
    Project {
        id: stored_id(o),
        name: req_str(o, "name"),
        project_type: opt_str(o, "projectType"),
        role: opt_str(o, "role"),
        period: opt_str(o, "period"),
        description: req_str(o, "description"),
        preview: opt_str(o, "preview"),
    }
}

fn parse_achievement(o: &Obj) -> Achievement {
    Achievement {
        id: stored_id(o),
        achievement: req_str(o, "achievement"),
        event: opt_str(o, "event"),
        date: opt_str(o, "date"),
        description: req_str(o, "description"),
    }
}

fn parse_leadership(o: &Obj) -> Leadership {
    Leadership {
        id: stored_id(o),
        organization: req_str(o, "organization"),
        role: req_str(o, "role"),
        date: opt_str(o, "date"),
        description: req_str(o, "description"),
    }
}

fn parse_education(o: &Obj) -> Education {
    Education {
        id: stored_id(o),
        degree: req_str(o, "degree"),
        school: req_str(o, "school"),
        location: opt_str(o, "location"),
        graduation_date: opt_str(o, "graduationDate"),
        cgpa: opt_str(o, "cgpa"),
    }
}

fn parse_certificate(o: &Obj) -> Certificate {
    Certificate {
        id: stored_id(o),
        name: req_str(o, "name"),
        issuing_organization: opt_str(o, "issuingOrganization"),
        date: opt_str(o, "date"),
    }
}

fn parse_reference(o: &Obj) -> Reference {
    Reference {
        id: stored_id(o),
        name: req_str(o, "name"),
        contact: req_str(o, "contact"),
        relation: opt_str(o, "relation"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys_of(doc: &ResumeDocument) -> Vec<String> {
        let value = serde_json::to_value(doc).unwrap();
        value.as_object().unwrap().keys().cloned().collect()
    }

    fn assert_schema_shape(doc: &ResumeDocument) {
        let mut keys = keys_of(doc);
        keys.sort();
        let mut expected: Vec<String> =
            ResumeDocument::KEYS.iter().map(|k| k.to_string()).collect();
        expected.sort();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_absent_returns_defaults() {
        assert_eq!(migrate_document(None), default_document());
        assert_eq!(migrate_document(Some(&Value::Null)), default_document());
    }

    #[test]
    fn test_empty_object_fills_every_key() {
        let doc = migrate_document(Some(&json!({})));
        assert_eq!(doc, default_document());
        assert_schema_shape(&doc);
    }

    #[test]
    fn test_summary_only_keeps_summary_and_defaults_the_rest() {
        let doc = migrate_document(Some(&json!({ "summary": "x" })));
        let defaults = default_document();
        assert_eq!(doc.summary, "x");
        assert_eq!(doc.personal, defaults.personal);
        assert_eq!(doc.styling, defaults.styling);
        assert_eq!(doc.projects, defaults.projects);
        assert_eq!(doc.achievements, defaults.achievements);
        assert_eq!(
            doc.leadership_and_volunteering,
            defaults.leadership_and_volunteering
        );
        assert_eq!(doc.education, defaults.education);
        assert_eq!(doc.skills, defaults.skills);
        assert_eq!(doc.certificates, defaults.certificates);
        assert_eq!(doc.references, defaults.references);
    }

    #[test]
    fn test_deprecated_keys_are_dropped() {
        let raw = json!({
            "summary": "x",
            "events": [{ "name": "Hackathon" }],
            "somethingElse": 42
        });
        let doc = migrate_document(Some(&raw));
        let keys = keys_of(&doc);
        assert!(!keys.contains(&"events".to_string()));
        assert!(!keys.contains(&"somethingElse".to_string()));
        assert_schema_shape(&doc);
    }

    #[test]
    fn test_present_keys_are_never_overwritten() {
        let raw = json!({ "projects": [], "references": [] });
        let doc = migrate_document(Some(&raw));
        assert!(doc.projects.is_empty());
        assert!(doc.references.is_empty());
        assert_eq!(doc.education, default_document().education);
    }

    #[test]
    fn test_non_object_input_returns_defaults() {
        assert_eq!(migrate_document(Some(&json!("garbage"))), default_document());
        assert_eq!(migrate_document(Some(&json!([1, 2, 3]))), default_document());
    }

    #[test]
    fn test_malformed_sub_tree_falls_back_to_default() {
        let raw = json!({
            "summary": 17,
            "projects": "not a list",
            "personal": ["nope"],
            "skills": { "technicalSkills": "Rust" }
        });
        let doc = migrate_document(Some(&raw));
        let defaults = default_document();
        assert_eq!(doc.summary, defaults.summary);
        assert_eq!(doc.projects, defaults.projects);
        assert_eq!(doc.personal, defaults.personal);
        assert_eq!(doc.skills.technical_skills.as_deref(), Some("Rust"));
        assert_eq!(doc.skills.soft_skills, None);
    }

    #[test]
    fn test_non_object_list_items_are_skipped() {
        let raw = json!({
            "certificates": [ "junk", { "name": "CKA" }, null ]
        });
        let doc = migrate_document(Some(&raw));
        assert_eq!(doc.certificates.len(), 1);
        assert_eq!(doc.certificates[0].name, "CKA");
    }

    #[test]
    fn test_entries_without_ids_get_fresh_ones() {
        let raw = json!({
            "projects": [
                { "name": "A", "description": "a" },
                { "name": "B", "description": "b" }
            ]
        });
        let doc = migrate_document(Some(&raw));
        assert!(!doc.projects[0].id.is_nil());
        assert_ne!(doc.projects[0].id, doc.projects[1].id);
    }

    #[test]
    fn test_stored_ids_survive_and_duplicates_are_replaced() {
        let id = Uuid::new_v4();
        let raw = json!({
            "references": [
                { "id": id.to_string(), "name": "A", "contact": "a" },
                { "id": id.to_string(), "name": "B", "contact": "b" }
            ]
        });
        let doc = migrate_document(Some(&raw));
        assert_eq!(doc.references[0].id, id);
        assert_ne!(doc.references[1].id, id);
    }

    #[test]
    fn test_migrating_migrated_output_is_stable() {
        let raw = json!({ "summary": "x", "education": [{ "degree": "BSc", "school": "MIT" }] });
        let once = migrate_document(Some(&raw));
        let again = migrate_document(Some(&serde_json::to_value(&once).unwrap()));
        assert_eq!(once, again);
    }

    #[test]
    fn test_missing_required_entry_field_reads_empty() {
        let raw = json!({ "references": [{ "name": "Jane" }] });
        let doc = migrate_document(Some(&raw));
        assert_eq!(doc.references[0].contact, "");
    }

    fn edit_of(doc: &ResumeDocument) -> Obj {
        match serde_json::to_value(doc).unwrap() {
            Value::Object(obj) => obj,
            other => panic!("document serialized as {other}"),
        }
    }

    #[test]
    fn test_edit_round_trips_a_full_document() {
        let doc = default_document();
        assert_eq!(document_from_edit(&edit_of(&doc)), doc);
    }

    #[test]
    fn test_edit_reads_cleared_fields_as_empty() {
        let mut edit = edit_of(&default_document());
        edit["projects"][0]
            .as_object_mut()
            .unwrap()
            .remove("description");
        edit.insert("summary".to_string(), Value::Null);
        edit.remove("references");

        let doc = document_from_edit(&edit);
        assert_eq!(doc.projects[0].description, "");
        assert_eq!(doc.projects[0].name, "AI Resume Builder");
        assert_eq!(doc.summary, "");
        assert!(doc.references.is_empty());
        assert_eq!(doc.education, default_education());
    }

    #[test]
    fn test_numeric_fields_are_stringified() {
        let raw = json!({ "education": [{ "degree": "BSc", "school": "MIT", "cgpa": 3.8 }] });
        let doc = migrate_document(Some(&raw));
        assert_eq!(doc.education[0].cgpa.as_deref(), Some("3.8"));
    }

    #[test]
    fn test_normalize_entry_ids_replaces_duplicates_across_lists() {
        let mut doc = default_document();
        let shared = doc.projects[0].id;
        doc.references[0].id = shared;
        doc.certificates[0].id = Uuid::nil();

        normalize_entry_ids(&mut doc);

        assert_eq!(doc.projects[0].id, shared);
        assert_ne!(doc.references[0].id, shared);
        assert!(!doc.certificates[0].id.is_nil());
    }

    // ── order ──────────────────────────────────────────────────────────────

    #[test]
    fn test_order_absent_returns_default() {
        assert_eq!(migrate_order(None), default_order());
        assert_eq!(migrate_order(Some(&json!({"a": 1}))), default_order());
    }

    #[test]
    fn test_order_drops_unknown_and_appends_missing() {
        let raw = json!([
            "summary", "projects", "events", "achievements", "skills",
            "leadership", "education", "certificates"
        ]);
        let order = migrate_order(Some(&raw));
        assert_eq!(
            order.ids(),
            &[
                SectionId::Summary,
                SectionId::Projects,
                SectionId::Achievements,
                SectionId::Skills,
                SectionId::Leadership,
                SectionId::Education,
                SectionId::Certificates,
                SectionId::References,
            ]
        );
    }

    #[test]
    fn test_order_preserves_relative_order_of_retained() {
        let raw = json!(["references", "skills", "summary"]);
        let order = migrate_order(Some(&raw));
        assert_eq!(
            &order.ids()[..3],
            &[SectionId::References, SectionId::Skills, SectionId::Summary]
        );
        assert_eq!(order.ids().len(), SectionId::ALL.len());
    }

    #[test]
    fn test_order_accepts_legacy_objects() {
        let raw = json!([
            { "id": "education", "title": "Education" },
            { "id": "events", "title": "Events" },
            { "id": "summary", "title": "Professional Summary" }
        ]);
        let order = migrate_order(Some(&raw));
        assert_eq!(order.ids()[0], SectionId::Education);
        assert_eq!(order.ids()[1], SectionId::Summary);
    }

    #[test]
    fn test_order_removes_duplicates() {
        let raw = json!(["skills", "skills", "summary", "skills"]);
        let order = migrate_order(Some(&raw));
        assert_eq!(order.ids().len(), SectionId::ALL.len());
        assert_eq!(order.ids()[0], SectionId::Skills);
        assert_eq!(order.ids()[1], SectionId::Summary);
    }

    #[test]
    fn test_order_migration_is_idempotent() {
        let inputs = [
            json!(null),
            json!([]),
            json!(["events", 3, "summary"]),
            json!(["references", "skills", "references"]),
            json!([{ "id": "projects" }, "bogus"]),
        ];
        for raw in inputs {
            let once = migrate_order(Some(&raw));
            let twice = migrate_order(Some(&serde_json::to_value(&once).unwrap()));
            assert_eq!(once, twice, "not idempotent for {raw}");
            for id in SectionId::ALL {
                assert_eq!(once.ids().iter().filter(|s| **s == id).count(), 1);
            }
        }
    }
}
