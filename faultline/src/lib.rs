//! Error masking with cause preservation, structured context, and call-site
//! traces.
//!
//! A fault wraps any error once and is then extended, never replaced: the
//! original failure stays reachable as the *cause* no matter how many layers
//! re-wrap it, every wrap appends one `"file:line"` trace entry, and
//! key/value context accumulates in call order. The result renders as a flat
//! JSON document for debugging and operator-facing output.
//!
//! Applications declare one reusable marker per failure kind and match any
//! masked descendant of it with [`Fault::is`], which compares root causes by
//! instance identity. Two independently built markers with identical fields
//! never match.
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use faultline::Fault;
//!
//! static NOT_FOUND: LazyLock<Fault> = LazyLock::new(|| Fault::kind("notFoundError"));
//!
//! fn lookup(user: &str) -> Result<String, Fault> {
//!     Err(NOT_FOUND.clone().mask_with([("user", user)]))
//! }
//!
//! fn handle(user: &str) -> Result<String, Fault> {
//!     lookup(user).map_err(|err| err.mask())
//! }
//!
//! let err = handle("goose").unwrap_err();
//! assert!(err.is(&NOT_FOUND));
//! assert_eq!(err.to_string(), "not found error");
//! assert_eq!(err.report().map(|r| r.trace().len()), Some(2));
//! ```
//!
//! Masking is synchronous and lock-free. A wrap chain belongs to the call
//! path that produced it; markers may be read and matched from any number of
//! threads concurrently, and a chain whose handle was cloned is extended on
//! a private copy rather than through shared state.

mod fatal;
mod fault;
mod mask;
mod render;
mod report;
mod string_case;

pub use fatal::fatal;
pub use fault::{is, Fault};
pub use mask::mask;
pub use render::{json, json_pretty, stack};
pub use report::{Context, Report};
pub use string_case::to_phrase;
