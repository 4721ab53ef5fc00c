//! Shared fixtures for in-module tests.

use crate::models::{
    Education, EducationDescription, Experience, PersonalInfo, Project, ResumeDocument,
    SkillCategory,
};

pub fn experience(id: &str, company: &str, technologies: &[&str]) -> Experience {
    Experience {
        id: id.to_string(),
        company: company.to_string(),
        role: "Software Engineer".to_string(),
        location: "Remote".to_string(),
        start_date: "2020-01".to_string(),
        end_date: "present".to_string(),
        description: String::new(),
        achievements: Vec::new(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        image_url: None,
    }
}

pub fn skill_category(category: &str, items: &[&str]) -> SkillCategory {
    SkillCategory {
        category: category.to_string(),
        items: items.iter().map(|i| i.to_string()).collect(),
    }
}

pub fn document(experience: Vec<Experience>, skills: Vec<SkillCategory>) -> ResumeDocument {
    ResumeDocument {
        personal_info: PersonalInfo {
            name: "Ali Nexon".to_string(),
            title: "Full Stack Developer".to_string(),
            ..PersonalInfo::default()
        },
        skills,
        experience,
        education: vec![Education {
            institution: "State University".to_string(),
            degree: "BSc Computer Science".to_string(),
            location: "Lagos".to_string(),
            start_date: "2014-09".to_string(),
            end_date: "2018-06".to_string(),
            description: EducationDescription::Text("Graduated with honours".to_string()),
            image_url: None,
        }],
        projects: vec![Project {
            name: "Portfolio".to_string(),
            description: "Personal site".to_string(),
            technologies: vec!["Next.js".to_string()],
            link: None,
        }],
    }
}

/// A small résumé with overlapping technologies and skills.
pub fn sample_document() -> ResumeDocument {
    let mut acme = experience("e1", "Acme Corp", &["React", "Node"]);
    acme.role = "Frontend Engineer".to_string();
    acme.description = "Built the customer dashboard".to_string();
    acme.achievements = vec!["Cut page load time by 40%".to_string()];

    let mut globex = experience("e2", "Globex", &["Go"]);
    globex.role = "Backend Engineer".to_string();
    globex.description = "Payment services".to_string();
    globex.achievements = vec!["Migrated billing to gRPC".to_string()];
    globex.end_date = "2019-12".to_string();
    globex.start_date = "2018-07".to_string();

    let mut initech = experience("e3", "Initech", &["React", "TypeScript", "Go"]);
    initech.role = "Intern".to_string();
    initech.description = "Internal tooling".to_string();

    document(
        vec![acme, globex, initech],
        vec![
            skill_category("Languages", &["Go", "Rust", "TypeScript"]),
            skill_category("Frontend", &["React", "Tailwind"]),
            skill_category("Tooling", &["Docker", "Go"]),
        ],
    )
}
