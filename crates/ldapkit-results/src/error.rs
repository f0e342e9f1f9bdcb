//! Error type for result post-processing.

use thiserror::Error;

use crate::client::Diagnostic;

/// The directory session reported a failure while fetching entries.
///
/// This is the only error this crate raises itself: every other operation
/// passes the underlying primitive's sentinel returns through untouched, and
/// callers interpret those directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ldap session error {code}: {message}")]
pub struct SessionError {
    /// Protocol result code reported by the session.
    pub code: i32,
    /// Diagnostic message reported by the session.
    pub message: String,
}

impl SessionError {
    /// Create a session error from a result code and message.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<Diagnostic> for SessionError {
    fn from(diag: Diagnostic) -> Self {
        Self {
            code: diag.code,
            message: diag.message,
        }
    }
}

/// Result type for operations that can fail with a [`SessionError`].
pub type SessionResult<T> = Result<T, SessionError>;
