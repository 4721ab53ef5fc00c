//! Technology filter over experience entries.

use crate::models::Experience;

/// Keeps the entries that use at least one of the selected technologies.
///
/// An empty selection means "no filter applied" and returns the input as-is,
/// which is distinct from a non-empty selection that matches nothing.
/// Matching is exact string equality; relative order is preserved.
pub fn filter_by_technologies<S: AsRef<str>>(
    experience: &[Experience],
    selected: &[S],
) -> Vec<Experience> {
    if selected.is_empty() {
        return experience.to_vec();
    }
    experience
        .iter()
        .filter(|exp| uses_any(exp, selected))
        .cloned()
        .collect()
}

fn uses_any<S: AsRef<str>>(exp: &Experience, selected: &[S]) -> bool {
    exp.technologies
        .iter()
        .any(|tech| selected.iter().any(|s| s.as_ref() == tech))
}
