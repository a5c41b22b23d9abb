//! JSON rendering of faults.
//!
//! The wire shape is a flat document with `context`, `description`, and
//! `trace` fields, each omitted when empty. The cause itself is never
//! serialized; it only informs matching. A failure to encode is a
//! programming error and panics rather than propagating.

use serde::Serialize;

use crate::fault::Fault;
use crate::report::Context;

// Internal JSON representation, decoupled from the in-memory types.

#[derive(Serialize)]
struct ReportJson {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    context: Vec<Context>,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    trace: Vec<String>,
}

impl From<&Fault> for ReportJson {
    fn from(fault: &Fault) -> Self {
        match fault {
            // A foreign error renders as its message alone.
            Fault::Opaque(err) => ReportJson {
                context: Vec::new(),
                description: err.to_string(),
                trace: Vec::new(),
            },
            Fault::Report(report) => ReportJson {
                context: report.context.clone(),
                description: if report.kind.is_empty() && report.description.is_empty() {
                    String::new()
                } else {
                    report.message()
                },
                trace: report.trace().to_vec(),
            },
        }
    }
}

/// Render a fault as a compact JSON document, or `"{}"` for an absent error.
pub fn json(err: Option<&Fault>) -> String {
    let Some(fault) = err else {
        return "{}".to_owned();
    };

    match serde_json::to_string(&ReportJson::from(fault)) {
        Ok(doc) => doc,
        Err(err) => panic!("error report is not representable as JSON: {err}"),
    }
}

/// Render a fault as a 4-space indented JSON document.
///
/// Used by the fatal banner; the shape matches [`json`].
pub fn json_pretty(err: Option<&Fault>) -> String {
    let Some(fault) = err else {
        return "{}".to_owned();
    };

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if let Err(err) = ReportJson::from(fault).serialize(&mut ser) {
        panic!("error report is not representable as JSON: {err}");
    }

    match String::from_utf8(buf) {
        Ok(doc) => doc,
        Err(err) => panic!("error report rendered as invalid UTF-8: {err}"),
    }
}

/// Render only the trace of a fault as a JSON array.
///
/// An absent error renders as `"null"` and a foreign error, which carries no
/// trace, as `"[]"`.
pub fn stack(err: Option<&Fault>) -> String {
    match err {
        None => "null".to_owned(),
        Some(Fault::Opaque(_)) => "[]".to_owned(),
        Some(Fault::Report(report)) => match serde_json::to_string(report.trace()) {
            Ok(doc) => doc,
            Err(err) => panic!("trace is not representable as JSON: {err}"),
        },
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests unwrap for brevity")]
mod tests;
