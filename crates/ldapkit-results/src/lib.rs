//! # LDAP result post-processing
//!
//! Wraps a held LDAP search result and exposes the post-search operations an
//! application needs: entry counting, pagination-cookie extraction, referral
//! parsing, client-side sorting, and normalization of the client's raw,
//! count-prefixed result representation into a clean nested [`Entry`].
//!
//! The underlying protocol client (connect, bind, search, transport, auth,
//! schema) is an external collaborator reached through the
//! [`DirectoryClient`] trait; this crate never speaks the wire itself.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ldapkit_results::SearchResult;
//!
//! // `session` implements DirectoryClient; `raw` came out of its search.
//! let result = SearchResult::new(Arc::clone(&session), raw);
//!
//! if result.sort("cn") {
//!     let entries = result.entries()?;
//!     for dn in entries.iter() {
//!         println!("{}: {:?}", dn.0, dn.1);
//!     }
//! }
//! let paging = result.paged_result_response();
//! // The result object is released when `result` goes out of scope.
//! ```
//!
//! ## Crate organization
//!
//! - [`client`] - boundary trait and out-parameter types of the external
//!   directory client
//! - [`raw`] - the client's count-prefixed wire shape as a tagged recursive
//!   type
//! - [`entry`] - the clean, normalized entry mapping
//! - [`normalize`] - the recursive normalization algorithm
//! - [`result`] - the result handle with scoped release
//! - [`error`] - the session error raised on fetch failure

pub mod client;
pub mod entry;
pub mod error;
pub mod normalize;
pub mod raw;
pub mod result;

pub use client::{Diagnostic, DirectoryClient, PagedResponse};
pub use entry::{Entry, Key, Value};
pub use error::{SessionError, SessionResult};
pub use normalize::normalize;
pub use raw::{RawElement, RawEntry, RawValues};
pub use result::SearchResult;
