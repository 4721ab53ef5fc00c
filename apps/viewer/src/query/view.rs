//! Presentation state a rendering surface owns: search text, technology
//! selection, expanded entries and layout mode.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::ResumeDocument;
use crate::query::pipeline::{run_query, QueryResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_query: String,
    /// Kept in the order the user picked them.
    pub selected_technologies: Vec<String>,
    /// Experience ids currently expanded.
    pub expanded: BTreeSet<String>,
    pub mode: ViewMode,
}

impl ViewState {
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Adds the technology to the selection, or removes it if already selected.
    pub fn toggle_technology(&mut self, tech: &str) {
        if let Some(pos) = self.selected_technologies.iter().position(|t| t == tech) {
            self.selected_technologies.remove(pos);
        } else {
            self.selected_technologies.push(tech.to_string());
        }
    }

    pub fn is_selected(&self, tech: &str) -> bool {
        self.selected_technologies.iter().any(|t| t == tech)
    }

    pub fn clear_technologies(&mut self) {
        self.selected_technologies.clear();
    }

    pub fn toggle_expanded(&mut self, experience_id: &str) {
        if !self.expanded.remove(experience_id) {
            self.expanded.insert(experience_id.to_string());
        }
    }

    pub fn is_expanded(&self, experience_id: &str) -> bool {
        self.expanded.contains(experience_id)
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ViewMode::Cards => ViewMode::Table,
            ViewMode::Table => ViewMode::Cards,
        };
    }

    /// Evaluates the query pipeline for the current search text and selection.
    pub fn visible(&self, doc: &ResumeDocument) -> QueryResult {
        run_query(doc, &self.search_query, &self.selected_technologies)
    }
}
