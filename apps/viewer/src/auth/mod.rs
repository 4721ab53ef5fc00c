// Demo authentication gate.
// A fixed credential pair and a session marker kept in an injectable
// key-value store. Runs before the query engine; the engine never calls it.

pub mod credentials;
pub mod session;

pub use credentials::{
    authenticate, demo_credentials, is_authenticated, is_valid_email, is_valid_password, logout,
    AuthOutcome, Credentials, AUTH_KEY, AUTH_VALUE,
};
pub use session::{FileSessionStore, InMemorySessionStore, SessionStore};
