use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The full editable resume. Keys serialize in camelCase so that documents
/// written by the browser editor load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal: Personal,
    pub styling: Styling,
    pub summary: String,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub leadership_and_volunteering: Vec<Leadership>,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub certificates: Vec<Certificate>,
    pub references: Vec<Reference>,
}

impl ResumeDocument {
    /// Top-level keys of the current schema, in serialization order.
    pub const KEYS: [&'static str; 10] = [
        "personal",
        "styling",
        "summary",
        "projects",
        "achievements",
        "leadershipAndVolunteering",
        "education",
        "skills",
        "certificates",
        "references",
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub location: Option<String>,
}

/// Free-form styling values. The accepted sets live in `document::validation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styling {
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub line_height: Option<String>,
    pub text_align: Option<String>,
}

/// Newline-delimited free text blobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub technical_skills: Option<String>,
    pub soft_skills: Option<String>,
    pub language: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// List entries
// ────────────────────────────────────────────────────────────────────────────

/// Anything stored in a list-valued section. The id is stable for the life
/// of the entry and never encodes its position.
pub trait Entry: Clone {
    fn id(&self) -> Uuid;
    fn set_id(&mut self, id: Uuid);
    /// A blank entry as created by the "add" action.
    fn blank() -> Self;
}

macro_rules! impl_entry {
    ($ty:ty { $($field:ident),* }) => {
        impl Entry for $ty {
            fn id(&self) -> Uuid {
                self.id
            }

            fn set_id(&mut self, id: Uuid) {
                self.id = id;
            }

            fn blank() -> Self {
                Self {
                    id: Uuid::new_v4(),
                    $($field: Default::default(),)*
                }
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub project_type: Option<String>,
    pub role: Option<String>,
    pub period: Option<String>,
    pub description: String,
    pub preview: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub achievement: String,
    pub event: Option<String>,
    pub date: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leadership {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub organization: String,
    pub role: String,
    pub date: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub degree: String,
    pub school: String,
    pub location: Option<String>,
    pub graduation_date: Option<String>,
    pub cgpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub issuing_organization: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    pub relation: Option<String>,
}

impl_entry!(Project { name, project_type, role, period, description, preview });
impl_entry!(Achievement { achievement, event, date, description });
impl_entry!(Leadership { organization, role, date, description });
impl_entry!(Education { degree, school, location, graduation_date, cgpa });
impl_entry!(Certificate { name, issuing_organization, date });
impl_entry!(Reference { name, contact, relation });
