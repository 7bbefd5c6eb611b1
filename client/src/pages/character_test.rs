use super::*;

#[test]
fn go_back_is_offered_only_when_entered_from_results() {
    assert!(entered_from_results(Some("results")));
    assert!(!entered_from_results(Some("profile")));
    assert!(!entered_from_results(Some("")));
    assert!(!entered_from_results(None));
}
