//! Boundary to the external directory-protocol client.
//!
//! The session, search construction and wire protocol live outside this
//! crate. [`DirectoryClient`] models the raw post-search primitives that
//! layer exposes, one method per primitive, implemented on the session type.
//! Everything here is synchronous: the wrapper is a blocking, single-threaded
//! layer and timeouts belong to the session underneath.

use serde::{Deserialize, Serialize};

use crate::raw::RawEntry;

/// Out-parameters of the paged-results control response.
///
/// Both fields are populated on a best-effort basis; the primitive may leave
/// either unset regardless of whether the call itself succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedResponse {
    /// Opaque server cookie to resume the search with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<Vec<u8>>,

    /// Server's estimate of the remaining result size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated: Option<i64>,
}

impl PagedResponse {
    /// Create a paged response from the primitive's out-parameters.
    pub fn new(cookie: Option<Vec<u8>>, estimated: Option<i64>) -> Self {
        Self { cookie, estimated }
    }

    /// Whether the server handed back a cookie that can fetch another page.
    pub fn has_more(&self) -> bool {
        self.cookie.as_ref().is_some_and(|cookie| !cookie.is_empty())
    }
}

/// The session's last-error state, queried when a primitive signals failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Protocol result code.
    pub code: i32,
    /// Human-readable message reported by the session.
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic from a result code and message.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

/// Raw post-search primitives of the external directory client.
///
/// Implemented on the session type; `&self` is the shared session, while the
/// associated [`RawResult`](DirectoryClient::RawResult) is the exclusively
/// owned protocol-level result object a [`SearchResult`](crate::SearchResult)
/// holds and eventually releases.
pub trait DirectoryClient {
    /// Opaque protocol-level result object, released through
    /// [`release_result`](DirectoryClient::release_result).
    type RawResult;

    /// Fetch the complete raw entry tree for the result.
    ///
    /// `None` is the failure sentinel; the caller then queries
    /// [`last_error`](DirectoryClient::last_error).
    fn fetch_all_entries(&self, result: &Self::RawResult) -> Option<RawEntry>;

    /// Count the entries in the result.
    ///
    /// Returns the primitive's raw value, which may be a negative error
    /// sentinel.
    fn count_entries(&self, result: &Self::RawResult) -> i64;

    /// Read the paged-results control response for the result.
    fn paged_result_response(&self, result: &Self::RawResult) -> PagedResponse;

    /// Parse referral URIs out of a reference entry.
    fn parse_reference(&self, result: &Self::RawResult) -> Option<Vec<String>>;

    /// Sort the result entries client-side by the named attribute.
    ///
    /// Returns the primitive's success indicator.
    fn sort_entries(&self, result: &Self::RawResult, by: &str) -> bool;

    /// Release the result object. Never fails.
    fn release_result(&self, result: Self::RawResult);

    /// The session's last-error state.
    fn last_error(&self) -> Diagnostic;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_response_has_more() {
        assert!(!PagedResponse::default().has_more());
        assert!(!PagedResponse::new(Some(Vec::new()), None).has_more());
        assert!(PagedResponse::new(Some(vec![0x01, 0x02]), Some(40)).has_more());
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(32, "No such object");
        assert_eq!(diag.to_string(), "No such object (32)");
    }
}
