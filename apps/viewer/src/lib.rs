//! Authenticated résumé viewer core.
//!
//! The query engine (`query`) is a set of pure functions over an immutable
//! [`ResumeDocument`]. Everything around it (loading, the demo login gate,
//! toast notifications, configuration and logging) lives in sibling modules.

pub mod auth;
pub mod config;
pub mod errors;
pub mod loader;
pub mod models;
pub mod notify;
pub mod query;
pub mod state;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use errors::AppError;
pub use models::ResumeDocument;
pub use query::{filter_by_technologies, run_query, search, skills_of, technologies_of};
