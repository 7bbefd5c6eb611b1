use super::*;

#[test]
fn results_heading_quotes_the_query() {
    assert_eq!(results_heading("stitch"), "Results for: \"stitch\"");
}

#[test]
fn no_results_message_quotes_the_query() {
    assert_eq!(no_results_message("zurg"), "No results found for \"zurg\"");
}

#[test]
fn loaded_lookup_compares_by_contents() {
    assert_eq!(Lookup::Loaded(Vec::new()), Lookup::Loaded(Vec::new()));
    assert_ne!(Lookup::Loading, Lookup::Failed);
}
