//! Free-text search across experience and skills.
//!
//! Matching is a case-insensitive substring test against the normalized query.
//! There is no index: results are recomputed on every query change.

use serde::{Deserialize, Serialize};

use crate::models::{Experience, ResumeDocument, SkillCategory};

/// The sub-document a query narrows the résumé to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
}

/// Trims surrounding whitespace and lowercases. An empty result means "match everything".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Searches experience and skills for `query`.
///
/// An experience entry matches when the query occurs in its company, role,
/// description, any single technology or any single achievement.
///
/// Skill items are evaluated one by one: an item survives if the query occurs
/// in the item itself or in its category label. Categories left with no items
/// are dropped. Every surviving sequence keeps its original order.
pub fn search(doc: &ResumeDocument, query: &str) -> SearchResults {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return SearchResults {
            experience: doc.experience.clone(),
            skills: doc.skills.clone(),
        };
    }

    let experience = doc
        .experience
        .iter()
        .filter(|exp| experience_matches(exp, &needle))
        .cloned()
        .collect();

    let skills = doc
        .skills
        .iter()
        .filter_map(|category| narrow_category(category, &needle))
        .collect();

    SearchResults { experience, skills }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn experience_matches(exp: &Experience, needle: &str) -> bool {
    contains_folded(&exp.company, needle)
        || contains_folded(&exp.role, needle)
        || contains_folded(&exp.description, needle)
        || exp.technologies.iter().any(|t| contains_folded(t, needle))
        || exp.achievements.iter().any(|a| contains_folded(a, needle))
}

fn narrow_category(category: &SkillCategory, needle: &str) -> Option<SkillCategory> {
    let label_hit = contains_folded(&category.category, needle);
    let items: Vec<String> = category
        .items
        .iter()
        .filter(|item| contains_folded(item, needle) || label_hit)
        .cloned()
        .collect();

    if items.is_empty() {
        return None;
    }
    Some(SkillCategory {
        category: category.category.clone(),
        items,
    })
}
