//! The structured error value.
//!
//! A [`Report`] carries everything a failure accumulates on its way up the
//! call stack: a kind identifier, a free-form description, ordered key/value
//! context, the root cause, and the trace of call sites that masked it.

use std::error::Error as StdError;
use std::fmt;

use crate::fault::Fault;
use crate::string_case::to_phrase;

/// Fallback message for a report with neither kind nor description.
const GENERIC_MESSAGE: &str = "ERROR";

/// A single key/value annotation attached to a report.
///
/// Context entries are kept in insertion order and duplicate keys are
/// preserved, so repeated annotations along a wrap chain never shadow each
/// other.
#[derive(Clone, Eq, PartialEq, Debug, serde::Serialize)]
pub struct Context {
    pub key: String,
    pub value: String,
}

impl Context {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Context {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A structured, traceable error value.
///
/// Reports exist in one of two lifecycle states. A *fresh* report has no
/// cause yet; this is what applications declare as reusable failure-kind
/// markers. A *wrapped* report was produced by masking and carries the root
/// cause plus one trace entry per mask call. The transition between the two
/// happens exclusively inside the masking operation, which copies a fresh
/// report before touching it so the declared marker stays pristine.
///
/// The `cause` and `trace` fields are deliberately not public: they are
/// written only by masking and read through [`Report::cause`] and
/// [`Report::trace`].
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// camelCase identifier naming the failure category, e.g.
    /// `"alreadyExistsError"`. Drives the default human-readable message.
    pub kind: String,
    /// Explicit message or annotation; may be empty.
    pub description: String,
    /// Ordered diagnostic annotations, accumulated across wraps.
    pub context: Vec<Context>,

    pub(crate) cause: Option<Fault>,
    pub(crate) trace: Vec<String>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Report::default()
    }

    /// Create a report for the given failure kind.
    pub fn kind(kind: impl Into<String>) -> Self {
        Report {
            kind: kind.into(),
            ..Report::default()
        }
    }

    /// Create a report with an explicit description.
    pub fn description(description: impl Into<String>) -> Self {
        Report {
            description: description.into(),
            ..Report::default()
        }
    }

    /// Append a context entry, builder style.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push(Context::new(key, value));
        self
    }

    /// The root cause, if this report has been wrapped.
    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_ref()
    }

    /// The `"file:line"` call sites that masked this report, oldest first.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// The human-readable message for this report.
    ///
    /// An explicit description wins. Without one the kind identifier is
    /// rendered as a lowercase phrase, and when both are present the kind
    /// phrase (minus a trailing `" error"`) prefixes the description:
    /// `alreadyExistsError` annotated with `"some thing"` reads
    /// `"already exists: some thing"`.
    pub fn message(&self) -> String {
        match (self.kind.is_empty(), self.description.is_empty()) {
            (true, true) => GENERIC_MESSAGE.to_owned(),
            (true, false) => self.description.clone(),
            (false, true) => to_phrase(&self.kind),
            (false, false) => {
                let phrase = to_phrase(&self.kind);
                let prefix = phrase.strip_suffix(" error").unwrap_or(&phrase);
                format!("{prefix}: {}", self.description)
            }
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl StdError for Report {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(Fault::as_dyn)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests unwrap for brevity")]
mod tests;
