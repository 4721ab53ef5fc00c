//! Composition of search and technology filter into the visible résumé.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Experience, ResumeDocument, SkillCategory};
use crate::query::filter::filter_by_technologies;
use crate::query::search::search;

/// What a presentation layer renders for a given query and selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
}

/// Free-text search first, then the technology filter on its experience output.
/// The selection never narrows skills.
pub fn run_query<S: AsRef<str>>(
    doc: &ResumeDocument,
    query: &str,
    selected: &[S],
) -> QueryResult {
    let searched = search(doc, query);
    let experience = filter_by_technologies(&searched.experience, selected);

    debug!(
        query,
        selected = selected.len(),
        searched = searched.experience.len(),
        visible = experience.len(),
        skills = searched.skills.len(),
        "Evaluated resume query"
    );

    QueryResult {
        experience,
        skills: searched.skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{document, experience, sample_document};

    const NONE: &[&str] = &[];

    fn ids(result: &QueryResult) -> Vec<&str> {
        result.experience.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_no_query_no_selection_shows_everything() {
        let doc = sample_document();
        let result = run_query(&doc, "", NONE);
        assert_eq!(result.experience, doc.experience);
        assert_eq!(result.skills, doc.skills);
    }

    #[test]
    fn test_search_then_filter() {
        let doc = sample_document();
        // "react" keeps e1 and e3; the Go selection then keeps only e3.
        let result = run_query(&doc, "react", &["Go"]);
        assert_eq!(ids(&result), vec!["e3"]);
    }

    #[test]
    fn test_selection_cannot_resurrect_search_misses() {
        let doc = sample_document();
        let result = run_query(&doc, "acme", &["Go"]);
        assert!(result.experience.is_empty());
    }

    #[test]
    fn test_selection_does_not_affect_skills() {
        let doc = sample_document();
        let with = run_query(&doc, "go", &["Node"]);
        let without = run_query(&doc, "go", NONE);
        assert_eq!(with.skills, without.skills);
        assert_ne!(with.experience, without.experience);
    }

    #[test]
    fn test_search_matches_technology_substring_filter_needs_exact() {
        // Search hits "TypeScript" on a substring; the filter only accepts the exact tag.
        let doc = document(
            vec![
                experience("a", "A", &["TypeScript"]),
                experience("b", "B", &["Script"]),
            ],
            vec![],
        );
        assert_eq!(ids(&run_query(&doc, "script", NONE)), vec!["a", "b"]);
        assert_eq!(ids(&run_query(&doc, "script", &["Script"])), vec!["b"]);
    }
}
