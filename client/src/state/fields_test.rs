use super::*;
use std::collections::HashSet;

#[test]
fn catalog_covers_the_nine_editable_fields_with_unique_keys() {
    assert_eq!(PROFILE_FIELDS.len(), 9);
    let keys: HashSet<&str> = PROFILE_FIELDS.iter().map(|f| f.key).collect();
    assert_eq!(keys.len(), 9);
    assert!(!keys.contains(LAST_UPDATED_KEY));
}

#[test]
fn only_names_and_birth_date_are_required() {
    let required: Vec<&str> = PROFILE_FIELDS.iter().filter(|f| f.required).map(|f| f.key).collect();
    assert_eq!(required, vec!["userFirstName", "userLastName", "userBirthDate"]);
}

#[test]
fn view_defaults_match_the_documented_sentinels() {
    assert_eq!(FIRST_NAME.view_default, "John");
    assert_eq!(LAST_NAME.view_default, "Doe");
    for field in [CITY, STATE, FAVORITE_CHARACTER, FAVORITE_RIDE, FAVORITE_MOVIE, FAVORITE_PARK] {
        assert_eq!(field.view_default, "--");
    }
}

#[test]
fn form_defaults_seed_names_and_leave_the_rest_blank() {
    assert_eq!(FIRST_NAME.form_default, "John");
    assert_eq!(LAST_NAME.form_default, "Doe");
    for field in [BIRTH_DATE, CITY, STATE, FAVORITE_CHARACTER, FAVORITE_RIDE, FAVORITE_MOVIE, FAVORITE_PARK] {
        assert_eq!(field.form_default, "");
    }
}

#[test]
fn field_kinds_match_their_inputs() {
    assert_eq!(BIRTH_DATE.kind, FieldKind::Date);
    assert_eq!(STATE.kind, FieldKind::Enumerated);
    assert_eq!(FAVORITE_PARK.kind, FieldKind::Enumerated);
    assert_eq!(CITY.kind, FieldKind::Text);
}

#[test]
fn spec_looks_up_by_store_key() {
    assert_eq!(spec("userFavoriteRide"), Some(&FAVORITE_RIDE));
    assert_eq!(spec("userLastUpdated"), None);
    assert_eq!(spec(""), None);
}

#[test]
fn option_lists_lead_with_an_empty_value_placeholder() {
    assert_eq!(STATE_OPTIONS.len(), 51);
    assert_eq!(STATE_OPTIONS[0].value, "");
    assert_eq!(STATE_OPTIONS[0].label, "Select your state");
    assert!(STATE_OPTIONS[1..].iter().all(|opt| !opt.value.is_empty()));

    assert_eq!(PARK_OPTIONS.len(), 7);
    assert_eq!(PARK_OPTIONS[0].value, "");
    assert_eq!(PARK_OPTIONS[0].label, "Select your favorite Disney Park");
    assert!(PARK_OPTIONS[1..].iter().all(|opt| !opt.value.is_empty()));
}

#[test]
fn enumerated_options_label_their_own_value() {
    assert!(STATE_OPTIONS[1..].iter().all(|opt| opt.value == opt.label));
    assert!(PARK_OPTIONS[1..].iter().all(|opt| opt.value == opt.label));
}
