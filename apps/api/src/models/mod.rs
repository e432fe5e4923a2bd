pub mod resume;
pub mod section;

pub use resume::{
    Achievement, Certificate, Education, Entry, Leadership, Personal, Project, Reference,
    ResumeDocument, Skills, Styling,
};
pub use section::{ListSection, SectionId, SectionOrder};
