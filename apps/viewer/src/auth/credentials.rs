use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::session::SessionStore;

/// Session marker key and the value that means "logged in".
pub const AUTH_KEY: &str = "resume_app_auth";
pub const AUTH_VALUE: &str = "authenticated";

const VALID_EMAIL: &str = "intern@demo.com";
const VALID_PASSWORD: &str = "pass123";
const MIN_PASSWORD_LEN: usize = 6;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const SHORT_PASSWORD_MESSAGE: &str = "Password must be at least 6 characters long";
pub const BAD_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const SESSION_UNAVAILABLE_MESSAGE: &str = "Could not start a session. Please try again.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Result of a login attempt. `error` is `Some` exactly when `success` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthOutcome {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn failure(reason: &str) -> Self {
        Self {
            success: false,
            error: Some(reason.to_string()),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least six characters, counted in UTF-16 code units as browsers count them.
pub fn is_valid_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LEN
}

/// Checks the credentials and, on success, writes the session marker.
///
/// Validation order: email format, then password length, then the credential
/// comparison. Each step short-circuits with its own reason.
pub fn authenticate(credentials: &Credentials, store: &dyn SessionStore) -> AuthOutcome {
    if !is_valid_email(&credentials.email) {
        return AuthOutcome::failure(INVALID_EMAIL_MESSAGE);
    }
    if !is_valid_password(&credentials.password) {
        return AuthOutcome::failure(SHORT_PASSWORD_MESSAGE);
    }
    if credentials.email != VALID_EMAIL || credentials.password != VALID_PASSWORD {
        warn!(email = %credentials.email, "Rejected login: credentials do not match");
        return AuthOutcome::failure(BAD_CREDENTIALS_MESSAGE);
    }

    if let Err(e) = store.set(AUTH_KEY, AUTH_VALUE) {
        warn!(error = %e, "Failed to persist session marker");
        return AuthOutcome::failure(SESSION_UNAVAILABLE_MESSAGE);
    }

    info!(email = %credentials.email, "Login succeeded");
    AuthOutcome::ok()
}

pub fn is_authenticated(store: &dyn SessionStore) -> bool {
    store.get(AUTH_KEY).as_deref() == Some(AUTH_VALUE)
}

/// Clears the session marker. Removing an absent marker is not an error.
pub fn logout(store: &dyn SessionStore) {
    match store.remove(AUTH_KEY) {
        Ok(()) => info!("Logged out"),
        Err(e) => warn!(error = %e, "Failed to clear session marker"),
    }
}

/// The fixed demo account, for pre-filling a login form.
pub fn demo_credentials() -> Credentials {
    Credentials::new(VALID_EMAIL, VALID_PASSWORD)
}
