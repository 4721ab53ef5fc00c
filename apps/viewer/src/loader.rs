//! Loads the résumé asset and checks the invariants the query engine relies on.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::models::ResumeDocument;

/// Reads and validates the résumé JSON at `path`.
pub fn load_document(path: &Path) -> Result<ResumeDocument, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    let doc = parse_document(&raw)?;
    info!(
        path = %path.display(),
        experience = doc.experience.len(),
        skill_categories = doc.skills.len(),
        education = doc.education.len(),
        projects = doc.projects.len(),
        "Loaded resume document"
    );
    Ok(doc)
}

/// Parses the résumé from JSON text and validates it.
pub fn parse_document(raw: &str) -> Result<ResumeDocument, AppError> {
    let doc: ResumeDocument = serde_json::from_str(raw)?;
    validate_document(&doc)?;
    Ok(doc)
}

/// Experience ids key the expand/collapse state, so they must be unique.
pub fn validate_document(doc: &ResumeDocument) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for exp in &doc.experience {
        if !seen.insert(exp.id.as_str()) {
            return Err(AppError::DuplicateExperienceId(exp.id.clone()));
        }
    }
    Ok(())
}
