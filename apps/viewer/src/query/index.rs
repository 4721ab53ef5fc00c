//! Index extractors: the distinct, sorted vocabularies a filter UI is built from.

use std::collections::BTreeSet;

use crate::models::ResumeDocument;

/// Every technology referenced by any experience entry, de-duplicated by exact
/// string equality and sorted by code point.
pub fn technologies_of(doc: &ResumeDocument) -> Vec<String> {
    collect_sorted(doc.experience.iter().flat_map(|exp| exp.technologies.iter()))
}

/// Every skill item across all categories, de-duplicated and sorted.
pub fn skills_of(doc: &ResumeDocument) -> Vec<String> {
    collect_sorted(doc.skills.iter().flat_map(|category| category.items.iter()))
}

// UTF-8 byte order coincides with code point order, so BTreeSet<&str> sorts correctly.
fn collect_sorted<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    values
        .map(String::as_str)
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
