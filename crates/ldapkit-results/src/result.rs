//! Handle over one held search result.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::{DirectoryClient, PagedResponse};
use crate::entry::Entry;
use crate::error::SessionResult;
use crate::normalize::normalize;

/// A search result held against a shared session.
///
/// The handle shares the session (`Arc`) and exclusively owns one
/// protocol-level result object, released exactly once: either through an
/// explicit [`release`](SearchResult::release) or on drop. The result object
/// must not be shared across handles.
///
/// Apart from [`entries`](SearchResult::entries), every operation is a
/// passthrough to the corresponding client primitive, sentinel returns
/// included. After an explicit release the passthroughs report the
/// primitives' failure sentinels.
pub struct SearchResult<C: DirectoryClient> {
    session: Arc<C>,
    raw: Option<C::RawResult>,
}

impl<C: DirectoryClient> SearchResult<C> {
    /// Wrap a result object obtained from a search on `session`.
    pub fn new(session: Arc<C>, raw: C::RawResult) -> Self {
        Self {
            session,
            raw: Some(raw),
        }
    }

    /// Number of entries in the result, as reported by the client.
    ///
    /// The raw value is returned unmodified; a negative value is the
    /// client's own error sentinel and is not intercepted here.
    pub fn count_entries(&self) -> i64 {
        match &self.raw {
            Some(raw) => self.session.count_entries(raw),
            None => -1,
        }
    }

    /// Pagination cookie and size estimate from the paged-results control.
    pub fn paged_result_response(&self) -> PagedResponse {
        match &self.raw {
            Some(raw) => self.session.paged_result_response(raw),
            None => PagedResponse::default(),
        }
    }

    /// Referral URIs parsed from a reference entry, if any.
    pub fn parse_reference(&self) -> Option<Vec<String>> {
        self.raw
            .as_ref()
            .and_then(|raw| self.session.parse_reference(raw))
    }

    /// Sort the result entries client-side by the named attribute.
    pub fn sort(&self, by: &str) -> bool {
        match &self.raw {
            Some(raw) => {
                let ok = self.session.sort_entries(raw, by);
                if !ok {
                    warn!(attribute = by, "client-side sort failed");
                }
                ok
            }
            None => false,
        }
    }

    /// Fetch all entries and normalize them into a clean [`Entry`].
    ///
    /// Fails with a [`SessionError`](crate::SessionError) carrying the
    /// session's last-error state when the fetch primitive signals failure;
    /// never returns a partially normalized result.
    pub fn entries(&self) -> SessionResult<Entry> {
        let Some(raw) = &self.raw else {
            return Err(self.session.last_error().into());
        };

        match self.session.fetch_all_entries(raw) {
            Some(raw_entries) => {
                let clean = normalize(&raw_entries);
                debug!(slots = clean.len(), "normalized search result");
                Ok(clean)
            }
            None => {
                let diag = self.session.last_error();
                warn!(code = diag.code, "fetching entries failed");
                Err(diag.into())
            }
        }
    }

    /// Release the held result object.
    ///
    /// Idempotent and infallible; called automatically on drop, so an
    /// explicit call is only needed to give the result back early.
    pub fn release(&mut self) {
        if let Some(raw) = self.raw.take() {
            self.session.release_result(raw);
        }
    }
}

impl<C: DirectoryClient> Drop for SearchResult<C> {
    fn drop(&mut self) {
        self.release();
    }
}
