// Live preview assembly: the document laid out in the current section order,
// with empty sections left out. Rendering itself belongs to the client.

pub mod handlers;

use serde::Serialize;

use crate::models::{
    Achievement, Certificate, Education, Leadership, Project, Reference, ResumeDocument,
    SectionId, SectionOrder, Styling,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewPage {
    pub style: PreviewStyle,
    pub header: PreviewHeader,
    pub sections: Vec<PreviewSection>,
}

/// Styling with blanks filled by the values the editor starts from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewStyle {
    pub font_family: String,
    pub font_size: String,
    pub line_height: String,
    pub text_align: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewHeader {
    pub name: Option<String>,
    /// Location, phone and email as separate items, in display order.
    pub contact: Vec<String>,
    pub email: Option<Link>,
    pub linkedin: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewSection {
    pub id: SectionId,
    pub heading: &'static str,
    pub content: PreviewContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PreviewContent {
    Summary { text: String },
    Projects { items: Vec<ProjectItem> },
    Achievements { items: Vec<Achievement> },
    Leadership { items: Vec<Leadership> },
    Education { items: Vec<Education> },
    Skills(SkillsBlock),
    Certificates { items: Vec<Certificate> },
    References { items: Vec<Reference> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    #[serde(flatten)]
    pub project: Project,
    /// Set when `preview` parses as a URL.
    pub preview_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsBlock {
    /// Technical skills text, unchanged.
    pub technical_skills: Option<String>,
    /// Technical skills split into titled groups. Empty when the text has no
    /// group structure, in which case the raw text is shown instead.
    pub technical_groups: Vec<SkillGroup>,
    pub soft_skills: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub title: String,
    pub points: Vec<String>,
}

pub fn preview_page(doc: &ResumeDocument, order: &SectionOrder) -> PreviewPage {
    PreviewPage {
        style: preview_style(&doc.styling),
        header: preview_header(doc),
        sections: ordered_sections(doc, order),
    }
}

/// Sections with content, in `order`.
pub fn ordered_sections(doc: &ResumeDocument, order: &SectionOrder) -> Vec<PreviewSection> {
    order
        .ids()
        .iter()
        .filter_map(|&id| {
            section_content(doc, id).map(|content| PreviewSection {
                id,
                heading: heading(id),
                content,
            })
        })
        .collect()
}

fn section_content(doc: &ResumeDocument, id: SectionId) -> Option<PreviewContent> {
    let content = match id {
        SectionId::Summary => {
            if doc.summary.trim().is_empty() {
                return None;
            }
            PreviewContent::Summary {
                text: doc.summary.clone(),
            }
        }
        SectionId::Projects => PreviewContent::Projects {
            items: non_empty(&doc.projects)?
                .iter()
                .map(|p| ProjectItem {
                    preview_link: p.preview.as_deref().and_then(link_target),
                    project: p.clone(),
                })
                .collect(),
        },
        SectionId::Achievements => {
            // Entries without a title are not shown at all.
            let items: Vec<_> = doc
                .achievements
                .iter()
                .filter(|a| !a.achievement.is_empty())
                .cloned()
                .collect();
            PreviewContent::Achievements {
                items: non_empty(&items)?.to_vec(),
            }
        }
        SectionId::Leadership => PreviewContent::Leadership {
            items: non_empty(&doc.leadership_and_volunteering)?.to_vec(),
        },
        SectionId::Education => PreviewContent::Education {
            items: non_empty(&doc.education)?.to_vec(),
        },
        SectionId::Skills => PreviewContent::Skills(SkillsBlock {
            technical_skills: present(&doc.skills.technical_skills),
            technical_groups: doc
                .skills
                .technical_skills
                .as_deref()
                .map(group_skills)
                .unwrap_or_default(),
            soft_skills: present(&doc.skills.soft_skills),
            language: present(&doc.skills.language),
        }),
        SectionId::Certificates => PreviewContent::Certificates {
            items: non_empty(&doc.certificates)?.to_vec(),
        },
        SectionId::References => PreviewContent::References {
            items: non_empty(&doc.references)?.to_vec(),
        },
    };
    Some(content)
}

fn non_empty<T>(items: &[T]) -> Option<&[T]> {
    (!items.is_empty()).then_some(items)
}

fn present(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Preview heading. Differs from the form title for summary.
pub fn heading(id: SectionId) -> &'static str {
    match id {
        SectionId::Summary => "SUMMARY",
        SectionId::Projects => "PROJECTS",
        SectionId::Achievements => "ACHIEVEMENTS",
        SectionId::Leadership => "LEADERSHIP AND VOLUNTEERING",
        SectionId::Education => "EDUCATION",
        SectionId::Skills => "SKILLS",
        SectionId::Certificates => "CERTIFICATE OF COMPLETION",
        SectionId::References => "REFERENCES",
    }
}

fn preview_style(styling: &Styling) -> PreviewStyle {
    let or = |v: &Option<String>, fallback: &str| present(v).unwrap_or_else(|| fallback.to_string());
    PreviewStyle {
        font_family: or(&styling.font_family, "Inter"),
        font_size: or(&styling.font_size, "0.9rem"),
        line_height: or(&styling.line_height, "1.5"),
        text_align: or(&styling.text_align, "left"),
    }
}

fn preview_header(doc: &ResumeDocument) -> PreviewHeader {
    let p = &doc.personal;
    let contact = [&p.location, &p.phone, &p.email]
        .into_iter()
        .filter_map(present)
        .collect();
    PreviewHeader {
        name: present(&p.name),
        contact,
        email: present(&p.email).map(|email| Link {
            href: format!("mailto:{email}"),
            text: email,
        }),
        linkedin: present(&p.linkedin).map(|url| Link {
            href: ensure_absolute_url(&url),
            text: url,
        }),
    }
}

/// Prefixes `https://` unless the url already names http or https.
pub fn ensure_absolute_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// A link target for `text` if it is a URL with a scheme, e.g.
/// `https://a.dev` or `mailto:x@y.z`. Bare hosts like `a.dev` are plain text.
fn link_target(text: &str) -> Option<String> {
    let (scheme, rest) = text.split_once(':')?;
    let mut chars = scheme.chars();
    let scheme_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !scheme_ok || rest.is_empty() || text.contains(char::is_whitespace) {
        return None;
    }
    Some(ensure_absolute_url(text))
}

/// Splits technical skills into groups: a plain line opens a group, lines
/// starting with `-` or `>` are its points. Points before any title are
/// dropped.
pub fn group_skills(text: &str) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(point) = line.strip_prefix('-').or_else(|| line.strip_prefix('>')) {
            if let Some(group) = groups.last_mut() {
                group.points.push(point.trim().to_string());
            }
        } else {
            groups.push(SkillGroup {
                title: line.to_string(),
                points: Vec::new(),
            });
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::defaults::{default_document, default_order};
    use crate::document::ordering::reorder;

    fn ids(sections: &[PreviewSection]) -> Vec<SectionId> {
        sections.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_sections_follow_live_order() {
        let doc = default_document();
        let order = reorder(&default_order(), SectionId::References, SectionId::Summary);
        let sections = ordered_sections(&doc, &order);
        assert_eq!(sections.len(), 8);
        assert_eq!(ids(&sections)[0], SectionId::References);
        assert_eq!(ids(&sections)[1], SectionId::Summary);
        assert_eq!(sections[0].heading, "REFERENCES");
    }

    #[test]
    fn test_empty_sections_are_skipped() {
        let mut doc = default_document();
        doc.summary.clear();
        doc.projects.clear();
        doc.certificates.clear();
        let sections = ordered_sections(&doc, &default_order());
        let shown = ids(&sections);
        assert!(!shown.contains(&SectionId::Summary));
        assert!(!shown.contains(&SectionId::Projects));
        assert!(!shown.contains(&SectionId::Certificates));
        assert!(shown.contains(&SectionId::Skills));
    }

    #[test]
    fn test_blank_summary_is_skipped() {
        let mut doc = default_document();
        doc.summary = "  \n ".to_string();
        let sections = ordered_sections(&doc, &default_order());
        assert!(!ids(&sections).contains(&SectionId::Summary));
    }

    #[test]
    fn test_untitled_achievements_hidden() {
        let mut doc = default_document();
        doc.achievements[0].achievement.clear();
        let sections = ordered_sections(&doc, &default_order());
        assert!(!ids(&sections).contains(&SectionId::Achievements));
    }

    #[test]
    fn test_project_preview_link() {
        let mut doc = default_document();
        let sections = ordered_sections(&doc, &default_order());
        let PreviewContent::Projects { items } = &sections[1].content else {
            panic!("expected projects second");
        };
        assert_eq!(
            items[0].preview_link.as_deref(),
            Some("https://my-resume-builder.com")
        );

        doc.projects[0].preview = Some("my-resume-builder.com".to_string());
        let sections = ordered_sections(&doc, &default_order());
        let PreviewContent::Projects { items } = &sections[1].content else {
            panic!("expected projects second");
        };
        assert_eq!(items[0].preview_link, None);
    }

    #[test]
    fn test_header_links() {
        let page = preview_page(&default_document(), &default_order());
        assert_eq!(page.header.name.as_deref(), Some("Alex Doe"));
        assert_eq!(
            page.header.contact,
            vec!["New York, NY", "123-456-7890", "alex.doe@example.com"]
        );
        let linkedin = page.header.linkedin.unwrap();
        assert_eq!(linkedin.href, "https://www.linkedin.com/in/alex-doe");
        assert_eq!(linkedin.text, "www.linkedin.com/in/alex-doe");
        assert_eq!(page.header.email.unwrap().href, "mailto:alex.doe@example.com");
    }

    #[test]
    fn test_ensure_absolute_url() {
        assert_eq!(ensure_absolute_url("http://a.dev"), "http://a.dev");
        assert_eq!(ensure_absolute_url("https://a.dev"), "https://a.dev");
        assert_eq!(ensure_absolute_url("a.dev"), "https://a.dev");
    }

    #[test]
    fn test_style_falls_back_for_blank_values() {
        let mut doc = default_document();
        doc.styling = Styling {
            font_family: Some(String::new()),
            ..Styling::default()
        };
        let style = preview_page(&doc, &default_order()).style;
        assert_eq!(style.font_family, "Inter");
        assert_eq!(style.font_size, "0.9rem");
        assert_eq!(style.text_align, "left");
    }

    #[test]
    fn test_group_skills() {
        let groups = group_skills("Languages\n- Rust\n> Go\n\nTools\n  - Docker  \n");
        assert_eq!(
            groups,
            vec![
                SkillGroup {
                    title: "Languages".to_string(),
                    points: vec!["Rust".to_string(), "Go".to_string()],
                },
                SkillGroup {
                    title: "Tools".to_string(),
                    points: vec!["Docker".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_skills_text_passed_through() {
        let doc = default_document();
        let sections = ordered_sections(&doc, &default_order());
        let skills = sections
            .iter()
            .find_map(|s| match &s.content {
                PreviewContent::Skills(block) => Some(block),
                _ => None,
            })
            .unwrap();
        assert_eq!(skills.technical_skills, doc.skills.technical_skills);
        assert_eq!(skills.technical_groups.len(), 1);
    }
}
