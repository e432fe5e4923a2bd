// Phrasing suggestions: per-field LLM rewrites that only reach the document
// on explicit acceptance. All LLM calls go through llm_client.

pub mod gateway;
pub mod handlers;
pub mod prompts;
pub mod tracker;

use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{ListSection, ResumeDocument, Skills};
use crate::session::EditorSession;

pub use gateway::{GatewayError, SuggestionGateway};
pub use tracker::SuggestionTracker;

/// The section kinds the phrasing prompt understands. Closed: anything else
/// fails deserialization before a request is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionSection {
    #[serde(rename = "Summary")]
    Summary,
    #[serde(rename = "Project Description")]
    ProjectDescription,
    #[serde(rename = "Achievement / Event")]
    AchievementEvent,
    #[serde(rename = "Leadership")]
    Leadership,
}

impl SuggestionSection {
    /// The label interpolated into the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionSection::Summary => "Summary",
            SuggestionSection::ProjectDescription => "Project Description",
            SuggestionSection::AchievementEvent => "Achievement / Event",
            SuggestionSection::Leadership => "Leadership",
        }
    }
}

/// An invocation site: the one field a suggestion is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "camelCase")]
pub enum SuggestionTarget {
    Summary,
    ProjectDescription { id: Uuid },
    AchievementDescription { id: Uuid },
    LeadershipDescription { id: Uuid },
}

impl SuggestionTarget {
    /// The suggestion site on an entry of `section`, if that section has one.
    pub fn for_entry(section: ListSection, id: Uuid) -> Option<Self> {
        match section {
            ListSection::Projects => Some(SuggestionTarget::ProjectDescription { id }),
            ListSection::Achievements => Some(SuggestionTarget::AchievementDescription { id }),
            ListSection::Leadership => Some(SuggestionTarget::LeadershipDescription { id }),
            ListSection::Education | ListSection::Certificates | ListSection::References => None,
        }
    }

    pub fn section(&self) -> SuggestionSection {
        match self {
            SuggestionTarget::Summary => SuggestionSection::Summary,
            SuggestionTarget::ProjectDescription { .. } => SuggestionSection::ProjectDescription,
            SuggestionTarget::AchievementDescription { .. } => SuggestionSection::AchievementEvent,
            SuggestionTarget::LeadershipDescription { .. } => SuggestionSection::Leadership,
        }
    }
}

impl fmt::Display for SuggestionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionTarget::Summary => write!(f, "summary"),
            SuggestionTarget::ProjectDescription { id } => write!(f, "projects/{id}/description"),
            SuggestionTarget::AchievementDescription { id } => {
                write!(f, "achievements/{id}/description")
            }
            SuggestionTarget::LeadershipDescription { id } => {
                write!(f, "leadershipAndVolunteering/{id}/description")
            }
        }
    }
}

/// Builds the free-text context blob for a target: the current text, the
/// user's skills and summary, and the entry's sibling fields.
/// `None` when the target entry no longer exists.
pub fn assemble_information(doc: &ResumeDocument, target: SuggestionTarget) -> Option<String> {
    let (current, context): (&str, Vec<(&str, Option<&str>)>) = match target {
        SuggestionTarget::Summary => (doc.summary.as_str(), Vec::new()),
        SuggestionTarget::ProjectDescription { id } => {
            let p = doc.projects.iter().find(|p| p.id == id)?;
            (
                p.description.as_str(),
                vec![
                    ("name", Some(p.name.as_str())),
                    ("projectType", p.project_type.as_deref()),
                    ("role", p.role.as_deref()),
                    ("period", p.period.as_deref()),
                ],
            )
        }
        SuggestionTarget::AchievementDescription { id } => {
            let a = doc.achievements.iter().find(|a| a.id == id)?;
            (
                a.description.as_str(),
                vec![
                    ("achievement", Some(a.achievement.as_str())),
                    ("event", a.event.as_deref()),
                    ("date", a.date.as_deref()),
                ],
            )
        }
        SuggestionTarget::LeadershipDescription { id } => {
            let l = doc.leadership_and_volunteering.iter().find(|l| l.id == id)?;
            (
                l.description.as_str(),
                vec![
                    ("organization", Some(l.organization.as_str())),
                    ("role", Some(l.role.as_str())),
                    ("date", l.date.as_deref()),
                ],
            )
        }
    };

    let context = context
        .into_iter()
        .filter_map(|(k, v)| v.filter(|v| !v.trim().is_empty()).map(|v| format!("{k}: {v}")))
        .collect::<Vec<_>>()
        .join("; ");

    Some(format!(
        "Current Text: {current}\nUser's Skills: {}\nUser's Summary: {}\nSection Context: {context}",
        skills_line(&doc.skills),
        doc.summary
    ))
}

fn skills_line(skills: &Skills) -> String {
    [
        ("Technical", skills.technical_skills.as_deref()),
        ("Soft", skills.soft_skills.as_deref()),
        ("Languages", skills.language.as_deref()),
    ]
    .into_iter()
    .filter_map(|(k, v)| v.filter(|v| !v.trim().is_empty()).map(|v| format!("{k}: {v}")))
    .collect::<Vec<_>>()
    .join("; ")
}

/// Writes accepted text into the target field. Returns false if the entry
/// is gone.
pub fn apply_to_document(doc: &mut ResumeDocument, target: SuggestionTarget, text: String) -> bool {
    let field = match target {
        SuggestionTarget::Summary => Some(&mut doc.summary),
        SuggestionTarget::ProjectDescription { id } => doc
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .map(|p| &mut p.description),
        SuggestionTarget::AchievementDescription { id } => doc
            .achievements
            .iter_mut()
            .find(|a| a.id == id)
            .map(|a| &mut a.description),
        SuggestionTarget::LeadershipDescription { id } => doc
            .leadership_and_volunteering
            .iter_mut()
            .find(|l| l.id == id)
            .map(|l| &mut l.description),
    };
    match field {
        Some(field) => {
            *field = text;
            true
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SuggestionOutcome {
    /// The suggestion is parked on the site, awaiting accept.
    Ready { suggestion: String },
    /// A newer request for the same site started while this one was pending.
    Superseded,
}

/// Runs one suggestion request for `target`.
///
/// The session lock is released while the gateway call is pending, so the
/// rest of the editor stays usable. Only the newest request per site may
/// deliver a result.
pub async fn request_suggestion(
    session: &Mutex<EditorSession>,
    gateway: &dyn SuggestionGateway,
    target: SuggestionTarget,
) -> Result<SuggestionOutcome, AppError> {
    let (information, ticket) = {
        let mut s = session.lock().await;
        let information = assemble_information(&s.document, target)
            .ok_or_else(|| AppError::NotFound(format!("No entry for suggestion target {target}")))?;
        (information, s.suggestions.begin(target))
    };

    let result = gateway.suggest(target.section(), &information).await;

    let mut s = session.lock().await;
    match result {
        Ok(text) => {
            if s.suggestions.complete(target, ticket, text.clone()) {
                Ok(SuggestionOutcome::Ready { suggestion: text })
            } else {
                debug!("Discarding stale suggestion for {target}");
                Ok(SuggestionOutcome::Superseded)
            }
        }
        Err(e) if s.suggestions.is_current(target, ticket) => Err(e.into()),
        Err(_) => Ok(SuggestionOutcome::Superseded),
    }
}
