use super::*;

#[test]
fn last_updated_display_formats_a_stored_stamp() {
    // 2025-01-01T00:00:00Z was a Wednesday.
    assert_eq!(last_updated_display("1735689600000").as_deref(), Some("Wed, Jan 1, 2025"));
}

#[test]
fn last_updated_display_hides_when_never_submitted() {
    assert_eq!(last_updated_display(""), None);
    assert_eq!(last_updated_display("not a number"), None);
}
