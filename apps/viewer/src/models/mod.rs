pub mod resume;

pub use resume::{
    format_month, Education, EducationDescription, Experience, PersonalInfo, Project,
    ResumeDocument, SkillCategory, PRESENT,
};
