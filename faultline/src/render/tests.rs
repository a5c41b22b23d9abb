use pretty_assertions::assert_eq;
use serde_json::Value;

use super::{json, json_pretty, stack};
use crate::fault::Fault;
use crate::report::Report;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Plain(&'static str);

#[test]
fn an_absent_error_renders_as_an_empty_document() {
    assert_eq!(json(None), "{}");
    assert_eq!(json_pretty(None), "{}");
}

#[test]
fn a_foreign_error_renders_as_its_message_alone() {
    let fault = Fault::adopt(Plain("test error one message"));
    assert_eq!(json(Some(&fault)), r#"{"description":"test error one message"}"#);
}

#[test]
fn a_foreign_message_with_quotes_is_escaped() {
    let fault = Fault::adopt(Plain("executing \".github/dependabot.yaml\""));
    let doc: Value = serde_json::from_str(&json(Some(&fault))).unwrap();
    assert_eq!(doc["description"], "executing \".github/dependabot.yaml\"");
}

#[test]
fn an_empty_report_renders_as_an_empty_document() {
    let fault = Fault::from(Report::new());
    assert_eq!(json(Some(&fault)), "{}");
}

#[test]
fn a_fresh_marker_renders_its_derived_message() {
    let fault = Fault::kind("testErrorTwo");
    assert_eq!(json(Some(&fault)), r#"{"description":"test error two"}"#);
}

#[test]
fn a_wrapped_report_renders_context_description_and_trace() {
    let fault = Fault::kind("alreadyExistsError")
        .mask_with([("code", "invalidArgument")])
        .mask_with([("code", "X")]);

    let doc: Value = serde_json::from_str(&json(Some(&fault))).unwrap();
    assert_eq!(doc["description"], "already exists error");
    assert_eq!(
        doc["context"],
        serde_json::json!([
            { "key": "code", "value": "invalidArgument" },
            { "key": "code", "value": "X" },
        ])
    );

    let trace = doc["trace"].as_array().unwrap();
    assert_eq!(trace.len(), 2);
    for entry in trace {
        assert!(entry.as_str().unwrap().contains("render/tests.rs"));
    }
}

#[test]
fn the_cause_is_excluded_from_the_rendering() {
    let fault = Fault::adopt(Plain("root")).mask();
    let doc: Value = serde_json::from_str(&json(Some(&fault))).unwrap();
    assert!(doc.get("cause").is_none());
}

#[test]
fn pretty_rendering_indents_with_four_spaces() {
    let fault = Fault::kind("testErrorTwo").mask();
    let doc = json_pretty(Some(&fault));

    assert!(doc.starts_with("{\n    \""), "{doc}");
    assert!(doc.ends_with("\n}"), "{doc}");
}

#[test]
fn stack_renders_only_the_trace() {
    assert_eq!(stack(None), "null");
    assert_eq!(stack(Some(&Fault::adopt(Plain("boom")))), "[]");

    let fresh = Fault::kind("testErrorTwo");
    assert_eq!(stack(Some(&fresh)), "[]");

    let wrapped = fresh.mask().mask();
    let doc: Value = serde_json::from_str(&stack(Some(&wrapped))).unwrap();
    assert_eq!(doc.as_array().unwrap().len(), 2);
}
