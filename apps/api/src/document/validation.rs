use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ResumeDocument, Styling};

/// Font families offered by the styling panel.
pub const FONT_FAMILIES: &[&str] = &["Inter", "Roboto", "Lato", "Montserrat", "Open Sans"];

pub const TEXT_ALIGNMENTS: &[&str] = &["left", "center", "right", "justify"];

/// Font size slider bounds, in rem.
pub const FONT_SIZE_RANGE: (f64, f64) = (0.8, 1.2);

pub const LINE_HEIGHT_RANGE: (f64, f64) = (1.2, 2.0);

/// A single field-level problem, addressed by path (e.g. `projects[0].description`)
/// so the form can attach the message to the exact control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn require(&mut self, path: impl Into<String>, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.errors.push(FieldError {
                path: path.into(),
                message: message.to_string(),
            });
        }
    }

    fn push(&mut self, path: &str, message: String) {
        self.errors.push(FieldError {
            path: path.to_string(),
            message,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub fn paths(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.path.as_str()).collect()
    }
}

/// Checks every required field and entry constraint. Never mutates the input.
pub fn validate(doc: &ResumeDocument) -> Result<&ResumeDocument, ValidationErrors> {
    let mut errs = ValidationErrors::default();

    errs.require("summary", &doc.summary, "A summary is required");

    for (i, p) in doc.projects.iter().enumerate() {
        errs.require(format!("projects[{i}].name"), &p.name, "Project name is required");
        errs.require(
            format!("projects[{i}].description"),
            &p.description,
            "Description is required",
        );
    }

    for (i, a) in doc.achievements.iter().enumerate() {
        errs.require(
            format!("achievements[{i}].achievement"),
            &a.achievement,
            "Achievement is required",
        );
        errs.require(
            format!("achievements[{i}].description"),
            &a.description,
            "Description is required",
        );
    }

    for (i, l) in doc.leadership_and_volunteering.iter().enumerate() {
        let base = format!("leadershipAndVolunteering[{i}]");
        errs.require(
            format!("{base}.organization"),
            &l.organization,
            "Organization is required",
        );
        errs.require(format!("{base}.role"), &l.role, "Role is required");
        errs.require(
            format!("{base}.description"),
            &l.description,
            "Description is required",
        );
    }

    for (i, e) in doc.education.iter().enumerate() {
        errs.require(format!("education[{i}].degree"), &e.degree, "Degree is required");
        errs.require(format!("education[{i}].school"), &e.school, "School is required");
    }

    for (i, c) in doc.certificates.iter().enumerate() {
        errs.require(
            format!("certificates[{i}].name"),
            &c.name,
            "Certificate name is required",
        );
    }

    for (i, r) in doc.references.iter().enumerate() {
        errs.require(format!("references[{i}].name"), &r.name, "Name is required");
        errs.require(format!("references[{i}].contact"), &r.contact, "Contact is required");
    }

    check_styling(&doc.styling, &mut errs);

    if errs.is_empty() {
        Ok(doc)
    } else {
        Err(errs)
    }
}

fn check_styling(styling: &Styling, errs: &mut ValidationErrors) {
    if let Some(family) = styling.font_family.as_deref() {
        if !FONT_FAMILIES.contains(&family) {
            errs.push(
                "styling.fontFamily",
                format!("Font family must be one of: {}", FONT_FAMILIES.join(", ")),
            );
        }
    }

    if let Some(align) = styling.text_align.as_deref() {
        if !TEXT_ALIGNMENTS.contains(&align) {
            errs.push(
                "styling.textAlign",
                format!("Text alignment must be one of: {}", TEXT_ALIGNMENTS.join(", ")),
            );
        }
    }

    if let Some(size) = styling.font_size.as_deref() {
        let parsed = size
            .strip_suffix("rem")
            .and_then(|n| n.trim().parse::<f64>().ok());
        if !parsed.is_some_and(|n| in_range(n, FONT_SIZE_RANGE)) {
            errs.push(
                "styling.fontSize",
                format!(
                    "Font size must be between {}rem and {}rem",
                    FONT_SIZE_RANGE.0, FONT_SIZE_RANGE.1
                ),
            );
        }
    }

    if let Some(height) = styling.line_height.as_deref() {
        let parsed = height.trim().parse::<f64>().ok();
        if !parsed.is_some_and(|n| in_range(n, LINE_HEIGHT_RANGE)) {
            errs.push(
                "styling.lineHeight",
                format!(
                    "Line height must be between {} and {}",
                    LINE_HEIGHT_RANGE.0, LINE_HEIGHT_RANGE.1
                ),
            );
        }
    }
}

// Slider steps produce values like 0.8500000000000001; allow for that.
fn in_range(n: f64, (lo, hi): (f64, f64)) -> bool {
    const EPS: f64 = 1e-9;
    n >= lo - EPS && n <= hi + EPS
}
