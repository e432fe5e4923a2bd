use serde::{Deserialize, Serialize};

/// One named block of the resume. The set is closed: stored identifiers
/// outside it are dropped during migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Summary,
    Projects,
    Achievements,
    Leadership,
    Education,
    Skills,
    Certificates,
    References,
}

impl SectionId {
    /// Every known section, in default display order.
    pub const ALL: [SectionId; 8] = [
        SectionId::Summary,
        SectionId::Projects,
        SectionId::Achievements,
        SectionId::Skills,
        SectionId::Leadership,
        SectionId::Education,
        SectionId::Certificates,
        SectionId::References,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Summary => "summary",
            SectionId::Projects => "projects",
            SectionId::Achievements => "achievements",
            SectionId::Leadership => "leadership",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Certificates => "certificates",
            SectionId::References => "references",
        }
    }

    pub fn parse(s: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Heading shown on the form card and in the preview.
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Summary => "Professional Summary",
            SectionId::Projects => "Projects",
            SectionId::Achievements => "Achievements",
            SectionId::Leadership => "Leadership and Volunteering",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
            SectionId::Certificates => "Certificate of Completion",
            SectionId::References => "References",
        }
    }
}

/// Ordered section identifiers driving form and preview order.
/// Holds exactly one of each `SectionId` once migrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionOrder(pub Vec<SectionId>);

impl SectionOrder {
    pub fn ids(&self) -> &[SectionId] {
        &self.0
    }
}

/// The list-valued sections, i.e. the ones whose entries can be added,
/// removed and reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListSection {
    Projects,
    Achievements,
    Leadership,
    Education,
    Certificates,
    References,
}
