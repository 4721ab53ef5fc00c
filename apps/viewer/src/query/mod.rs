// Résumé query engine.
// Pure functions over an immutable `ResumeDocument`: indexing, technology
// filtering, free-text search and their composition. No I/O, no shared state.

pub mod filter;
pub mod index;
pub mod pipeline;
pub mod search;
pub mod view;

pub use filter::filter_by_technologies;
pub use index::{skills_of, technologies_of};
pub use pipeline::{run_query, QueryResult};
pub use search::{normalize_query, search, SearchResults};
pub use view::{ViewMode, ViewState};
