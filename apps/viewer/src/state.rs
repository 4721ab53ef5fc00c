use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::auth::{
    self, AuthOutcome, Credentials, FileSessionStore, InMemorySessionStore, SessionStore,
};
use crate::config::Config;
use crate::loader::load_document;
use crate::models::ResumeDocument;
use crate::notify::Notifier;
use crate::query::{skills_of, technologies_of, QueryResult, ViewState};

/// Process-wide viewer context handed to the presentation layer.
#[derive(Clone)]
pub struct ViewerState {
    pub config: Config,
    /// Loaded once at startup, read-only afterwards.
    pub document: Arc<ResumeDocument>,
    pub session: Arc<dyn SessionStore>,
    pub notifier: Notifier,
}

impl ViewerState {
    pub fn new(config: Config, document: ResumeDocument, session: Arc<dyn SessionStore>) -> Self {
        let notifier = Notifier::new(config.toast_ttl, config.toast_capacity);
        Self {
            config,
            document: Arc::new(document),
            session,
            notifier,
        }
    }

    /// Loads the résumé and opens the configured session store.
    pub fn bootstrap(config: Config) -> Result<Self> {
        let document = load_document(&config.resume_data_path).with_context(|| {
            format!(
                "Failed to load resume from {}",
                config.resume_data_path.display()
            )
        })?;

        let session: Arc<dyn SessionStore> = match &config.session_store_path {
            Some(path) => {
                info!(path = %path.display(), "Using file-backed session store");
                Arc::new(FileSessionStore::new(path))
            }
            None => {
                info!("Using in-memory session store");
                Arc::new(InMemorySessionStore::new())
            }
        };

        Ok(Self::new(config, document, session))
    }

    /// Authenticates and publishes the matching toast.
    pub fn login(&self, credentials: &Credentials) -> AuthOutcome {
        let outcome = auth::authenticate(credentials, self.session.as_ref());
        match outcome.error.as_deref() {
            None => {
                self.notifier
                    .success("Login Successful", "Welcome! Redirecting to resume...");
            }
            Some(reason) => {
                self.notifier.error("Login Failed", reason);
            }
        }
        outcome
    }

    pub fn logout(&self) {
        auth::logout(self.session.as_ref());
    }

    pub fn is_authenticated(&self) -> bool {
        auth::is_authenticated(self.session.as_ref())
    }

    pub fn technologies(&self) -> Vec<String> {
        technologies_of(&self.document)
    }

    pub fn skills(&self) -> Vec<String> {
        skills_of(&self.document)
    }

    /// Visible résumé for the given view state, or `None` without a session.
    pub fn query(&self, view: &ViewState) -> Option<QueryResult> {
        if !self.is_authenticated() {
            return None;
        }
        Some(view.visible(&self.document))
    }
}
