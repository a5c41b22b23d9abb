use std::error::Error as StdError;

use pretty_assertions::assert_eq;

use super::{Context, Report};
use crate::fault::Fault;

#[derive(Debug, thiserror::Error)]
#[error("boom")]
struct Boom;

#[test]
fn message_falls_back_to_sentinel() {
    assert_eq!(Report::new().message(), "ERROR");
}

#[test]
fn message_uses_description_verbatim() {
    let report = Report::description("test error two description");
    assert_eq!(report.message(), "test error two description");
}

#[test]
fn message_derives_phrase_from_kind() {
    assert_eq!(Report::kind("testErrorTwo").message(), "test error two");
    assert_eq!(
        Report::kind("alreadyExistsError").message(),
        "already exists error"
    );
}

#[test]
fn message_combines_kind_phrase_and_description() {
    let mut report = Report::kind("alreadyExistsError");
    report.description = "some thing".to_owned();
    assert_eq!(report.message(), "already exists: some thing");

    // A kind phrase without the " error" suffix is kept whole.
    let mut report = Report::kind("testErrorTwo");
    report.description = "annotation".to_owned();
    assert_eq!(report.message(), "test error two: annotation");
}

#[test]
fn display_matches_message() {
    let report = Report::kind("authenticationError");
    assert_eq!(report.to_string(), report.message());
}

#[test]
fn context_builder_preserves_order_and_duplicates() {
    let report = Report::kind("requestError")
        .with_context("code", "X")
        .with_context("code", "Y");

    assert_eq!(
        report.context,
        vec![Context::new("code", "X"), Context::new("code", "Y")]
    );
}

#[test]
fn fresh_report_has_no_cause_or_trace() {
    let report = Report::kind("notFoundError");
    assert!(report.cause().is_none());
    assert!(report.trace().is_empty());
    assert!(report.source().is_none());
}

#[test]
fn source_reaches_the_adopted_cause() {
    let masked = Fault::adopt(Boom).mask();
    let report = masked.report().unwrap();

    let source = report.source().unwrap();
    assert!(source.downcast_ref::<Boom>().is_some());
}
