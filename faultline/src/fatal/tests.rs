use super::write_banner;
use crate::fault::Fault;

#[test]
fn the_banner_carries_a_timestamp_and_the_indented_report() {
    let fault = Fault::kind("connectionError").mask_with([("port", "7777")]);

    let mut out = Vec::new();
    write_banner(&mut out, &fault).unwrap();
    let banner = String::from_utf8(out).unwrap();

    assert!(banner.starts_with("program panic at "), "{banner}");
    // The JSON block is indented by four spaces on top of its own indent.
    assert!(banner.contains("\n\n    {"), "{banner}");
    assert!(banner.contains("\n        \"context\""), "{banner}");
    assert!(banner.contains("\"connection error\""), "{banner}");
    assert!(banner.ends_with("\n\n"), "{banner}");
}
