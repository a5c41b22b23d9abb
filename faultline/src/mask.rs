//! The masking state transition.
//!
//! Masking turns any [`Fault`] into a wrapped [`Report`] and records the
//! caller's source location. The transition rules are the heart of the
//! crate:
//!
//! - an adopted foreign error becomes a new report whose description is the
//!   foreign message and whose cause is the foreign error itself;
//! - a fresh report (a marker without a cause) is copied first, and the
//!   original instance becomes the copy's cause, so the marker is never
//!   mutated;
//! - an already wrapped report is extended in place.
//!
//! In all cases exactly one `"file:line"` trace entry is appended per call,
//! so masking is intentionally not idempotent. The cause is set once on the
//! first wrap and never overwritten afterwards.

use std::panic::Location;
use std::sync::Arc;

use crate::fault::Fault;
use crate::report::{Context, Report};

impl Fault {
    /// Wrap this fault, recording the caller's source location.
    #[track_caller]
    pub fn mask(self) -> Fault {
        Fault::Report(self.mask_at(Location::caller(), Vec::new()))
    }

    /// Wrap this fault with additional context entries.
    ///
    /// The pairs are appended after any context the fault already carries;
    /// duplicate keys are preserved in call order.
    #[track_caller]
    pub fn mask_with<I, K, V>(self, context: I) -> Fault
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs = context
            .into_iter()
            .map(|(key, value)| Context::new(key, value))
            .collect();
        Fault::Report(self.mask_at(Location::caller(), pairs))
    }

    /// Wrap this fault and annotate the result with a note.
    ///
    /// The note becomes the description of the wrapped report, or extends an
    /// existing description with `": note"`. Masking happens first so the
    /// annotation never touches the instance tracked as the cause.
    #[track_caller]
    pub fn annotate(self, note: impl Into<String>) -> Fault {
        let mut shared = self.mask_at(Location::caller(), Vec::new());
        let report = Arc::make_mut(&mut shared);
        let note = note.into();
        if report.description.is_empty() {
            report.description = note;
        } else {
            report.description = format!("{}: {note}", report.description);
        }
        Fault::Report(shared)
    }

    fn mask_at(self, location: &'static Location<'static>, mut context: Vec<Context>) -> Arc<Report> {
        let entry = format!("{}:{}", location.file(), location.line());

        match self {
            Fault::Opaque(cause) => {
                let report = Report {
                    kind: String::new(),
                    description: cause.to_string(),
                    context,
                    cause: Some(Fault::Opaque(cause)),
                    trace: vec![entry],
                };
                Arc::new(report)
            }
            Fault::Report(mut shared) => {
                if shared.cause.is_none() {
                    // First wrap of a fresh marker: work on a copy and track
                    // the untouched original as the cause. The clone owns its
                    // own context and trace storage, so later appends cannot
                    // reach back into the marker.
                    let mut copy = Report::clone(&shared);
                    copy.cause = Some(Fault::Report(Arc::clone(&shared)));
                    shared = Arc::new(copy);
                }

                // Unique owner: extend in place. A caller that kept another
                // handle to the chain gets a copy-on-write instead.
                let report = Arc::make_mut(&mut shared);
                report.context.append(&mut context);
                report.trace.push(entry);

                shared
            }
        }
    }
}

/// Wrap an optional fault; an absent error stays absent and records nothing.
#[track_caller]
pub fn mask(err: Option<Fault>) -> Option<Fault> {
    let location = Location::caller();
    err.map(|fault| Fault::Report(fault.mask_at(location, Vec::new())))
}
