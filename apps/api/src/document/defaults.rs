//! Placeholder resume shown to first-time users and restored by reset.
//!
//! Default entries carry fixed ids so two calls produce equal documents.

use uuid::Uuid;

use crate::models::{
    Achievement, Certificate, Education, Leadership, Personal, Project, Reference,
    ResumeDocument, SectionId, SectionOrder, Skills, Styling,
};

const DEFAULT_PROJECT_ID: Uuid = Uuid::from_u128(0x5e5e_0001_0000_4000_8000_000000000001);
const DEFAULT_ACHIEVEMENT_ID: Uuid = Uuid::from_u128(0x5e5e_0001_0000_4000_8000_000000000002);
const DEFAULT_LEADERSHIP_ID: Uuid = Uuid::from_u128(0x5e5e_0001_0000_4000_8000_000000000003);
const DEFAULT_EDUCATION_ID: Uuid = Uuid::from_u128(0x5e5e_0001_0000_4000_8000_000000000004);
const DEFAULT_CERTIFICATE_ID: Uuid = Uuid::from_u128(0x5e5e_0001_0000_4000_8000_000000000005);
const DEFAULT_REFERENCE_ID: Uuid = Uuid::from_u128(0x5e5e_0001_0000_4000_8000_000000000006);

fn s(v: &str) -> Option<String> {
    Some(v.to_string())
}

pub fn default_personal() -> Personal {
    Personal {
        name: s("Alex Doe"),
        email: s("alex.doe@example.com"),
        phone: s("123-456-7890"),
        linkedin: s("www.linkedin.com/in/alex-doe"),
        location: s("New York, NY"),
    }
}

pub fn default_styling() -> Styling {
    Styling {
        font_family: s("Inter"),
        font_size: s("0.9rem"),
        line_height: s("1.5"),
        text_align: s("left"),
    }
}

pub fn default_summary() -> String {
    "Innovative and results-driven Software Engineer with 5+ years of experience in \
     developing and scaling web applications. Proficient in JavaScript, React, and Node.js \
     with a proven ability to lead projects from conception to completion. Passionate about \
     creating efficient, user-friendly solutions and collaborating with cross-functional \
     teams to achieve business goals."
        .to_string()
}

pub fn default_projects() -> Vec<Project> {
    vec![Project {
        id: DEFAULT_PROJECT_ID,
        name: "AI Resume Builder".to_string(),
        project_type: s("Self-Project"),
        role: s("Lead Developer"),
        period: s("2023-Present"),
        description: "A personal portfolio website to showcase my projects and skills, \
                      built with Next.js and deployed on Vercel."
            .to_string(),
        preview: s("https://my-resume-builder.com"),
    }]
}

pub fn default_achievements() -> Vec<Achievement> {
    vec![Achievement {
        id: DEFAULT_ACHIEVEMENT_ID,
        achievement: "Innovator of the Year Award".to_string(),
        event: s("Annual Company Awards"),
        date: s("2023"),
        description: "Awarded for developing a new feature that increased user engagement \
                      by 20%."
            .to_string(),
    }]
}

pub fn default_leadership() -> Vec<Leadership> {
    vec![Leadership {
        id: DEFAULT_LEADERSHIP_ID,
        organization: "Tech-for-Good".to_string(),
        role: "Mentor".to_string(),
        date: s("2022-Present"),
        description: "Mentored junior developers from underrepresented backgrounds, helping \
                      them to start their careers in tech."
            .to_string(),
    }]
}

pub fn default_education() -> Vec<Education> {
    vec![Education {
        id: DEFAULT_EDUCATION_ID,
        degree: "Bachelor of Science in Computer Science".to_string(),
        school: "University of Technology".to_string(),
        location: s("New York, NY"),
        graduation_date: s("May 2019"),
        cgpa: s("3.8/4.0"),
    }]
}

pub fn default_skills() -> Skills {
    Skills {
        technical_skills: s("JavaScript, TypeScript, React, Next.js, Node.js, Express, \
                             PostgreSQL, Docker, Git, Agile Methodologies"),
        soft_skills: s("Communication, Teamwork, Problem Solving, Project Management"),
        language: s("English (Native), Spanish (Conversational)"),
    }
}

pub fn default_certificates() -> Vec<Certificate> {
    vec![Certificate {
        id: DEFAULT_CERTIFICATE_ID,
        name: "Certified Kubernetes Application Developer (CKAD)".to_string(),
        issuing_organization: s("The Linux Foundation"),
        date: s("2022"),
    }]
}

pub fn default_references() -> Vec<Reference> {
    vec![Reference {
        id: DEFAULT_REFERENCE_ID,
        name: "Jane Smith".to_string(),
        contact: "jane.smith@example.com".to_string(),
        relation: s("Former Manager at Tech Solutions Inc."),
    }]
}

/// A complete, valid document with placeholder content.
pub fn default_document() -> ResumeDocument {
    ResumeDocument {
        personal: default_personal(),
        styling: default_styling(),
        summary: default_summary(),
        projects: default_projects(),
        achievements: default_achievements(),
        leadership_and_volunteering: default_leadership(),
        education: default_education(),
        skills: default_skills(),
        certificates: default_certificates(),
        references: default_references(),
    }
}

pub fn default_order() -> SectionOrder {
    SectionOrder(SectionId::ALL.to_vec())
}
