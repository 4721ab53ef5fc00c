use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel `end_date` value for a position that is still held.
pub const PRESENT: &str = "present";

/// Root aggregate of the résumé asset. Loaded once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

/// One employment record. `id` doubles as the key for expand/collapse state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub location: String,
    pub start_date: String,
    /// `YYYY-MM` or [`PRESENT`].
    pub end_date: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date == PRESENT
    }

    /// Human-readable tenure, e.g. `Jan 2021 - Present`.
    pub fn period_label(&self) -> String {
        format!(
            "{} - {}",
            format_month(&self.start_date),
            format_month(&self.end_date)
        )
    }
}

/// The asset stores education descriptions either as prose or as bullet lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EducationDescription {
    Text(String),
    Lines(Vec<String>),
}

impl EducationDescription {
    pub fn lines(&self) -> Vec<&str> {
        match self {
            EducationDescription::Text(text) => vec![text.as_str()],
            EducationDescription::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: EducationDescription,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Renders a `YYYY-MM` date as `Mar 2021` and the sentinel as `Present`.
/// Anything else is returned verbatim.
pub fn format_month(value: &str) -> String {
    if value == PRESENT {
        return "Present".to_string();
    }
    match NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => value.to_string(),
    }
}
