use super::*;

#[test]
fn results_path_percent_encodes_the_query() {
    assert_eq!(results_path("stitch"), "/results/stitch");
    assert_eq!(results_path("Mickey Mouse"), "/results/Mickey%20Mouse");
}

#[test]
fn normalize_query_trims_and_requires_a_value() {
    assert_eq!(normalize_query("  stitch  "), Some("stitch".to_owned()));
    assert_eq!(normalize_query("   "), None);
    assert_eq!(normalize_query(""), None);
}
