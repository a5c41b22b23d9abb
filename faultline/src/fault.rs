//! The error currency of the crate.
//!
//! [`Fault`] is a closed variant over the two shapes an error can take here:
//! a foreign error adopted as-is, or a structured [`Report`]. Masking
//! pattern-matches on the variant instead of downcasting, and equality is
//! defined structurally through the root cause.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::report::Report;

/// Any error flowing through the crate.
///
/// Both variants hold their payload behind an [`Arc`], so a fault is a cheap
/// handle: cloning it shares the underlying error, and sharing is what gives
/// cause matching its identity semantics. Two faults are [`Fault::is`]-equal
/// exactly when their resolved causes are the same instance; independently
/// constructed values never match, no matter how similar their fields.
#[derive(Clone, Debug)]
pub enum Fault {
    /// A foreign error adopted unchanged.
    Opaque(Arc<dyn StdError + Send + Sync>),
    /// A structured, traceable report.
    Report(Arc<Report>),
}

impl Fault {
    /// Adopt an arbitrary error.
    ///
    /// The error is shared by reference from here on, which keeps it
    /// identity-comparable across every layer that masks it.
    pub fn adopt(err: impl StdError + Send + Sync + 'static) -> Self {
        Fault::Opaque(Arc::new(err))
    }

    /// Create a fresh failure-kind marker.
    ///
    /// Markers are meant to be declared once and reused, typically as
    /// `LazyLock<Fault>` statics. Masking never mutates a marker, so the
    /// same instance stays valid for matching across the whole program.
    pub fn kind(kind: impl Into<String>) -> Self {
        Fault::Report(Arc::new(Report::kind(kind)))
    }

    /// Create a fresh marker with an explicit description.
    pub fn describe(description: impl Into<String>) -> Self {
        Fault::Report(Arc::new(Report::description(description)))
    }

    /// Read access to the structured report, if this fault carries one.
    pub fn report(&self) -> Option<&Report> {
        match self {
            Fault::Report(report) => Some(report),
            Fault::Opaque(_) => None,
        }
    }

    /// The root cause, if this fault is a wrapped report.
    ///
    /// Fresh markers and adopted foreign errors have no cause; they *are*
    /// the cause.
    pub fn cause(&self) -> Option<&Fault> {
        self.report().and_then(Report::cause)
    }

    /// Whether two faults share the same root cause.
    ///
    /// Each side resolves to its cause (or to itself when it has none), and
    /// the resolved causes compare by instance identity. This lets matching
    /// code test any masked descendant of a marker without inspecting
    /// wrapped layers.
    pub fn is(&self, other: &Fault) -> bool {
        Fault::same(self.root(), other.root())
    }

    fn root(&self) -> &Fault {
        self.cause().unwrap_or(self)
    }

    fn same(a: &Fault, b: &Fault) -> bool {
        match (a, b) {
            (Fault::Opaque(x), Fault::Opaque(y)) => Arc::ptr_eq(x, y),
            (Fault::Report(x), Fault::Report(y)) => Arc::ptr_eq(x, y),
            _ => false,
        }
    }

    pub(crate) fn as_dyn(&self) -> &(dyn StdError + 'static) {
        match self {
            Fault::Opaque(err) => &**err,
            Fault::Report(report) => &**report,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Opaque(err) => fmt::Display::fmt(err, f),
            Fault::Report(report) => fmt::Display::fmt(report, f),
        }
    }
}

impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Fault::Opaque(err) => err.source(),
            Fault::Report(report) => report.source(),
        }
    }
}

impl From<Report> for Fault {
    fn from(report: Report) -> Self {
        Fault::Report(Arc::new(report))
    }
}

/// [`Fault::is`] lifted over absent errors: two absent errors are equal, an
/// absent and a present one never are.
pub fn is(a: Option<&Fault>, b: Option<&Fault>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.is(b),
        _ => false,
    }
}
