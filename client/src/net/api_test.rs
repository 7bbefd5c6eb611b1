use super::*;

#[test]
fn character_endpoint_formats_id_and_paging() {
    assert_eq!(
        character_endpoint("308"),
        "https://api.disneyapi.dev/character/308?page=1&pageSize=8"
    );
}

#[test]
fn search_endpoint_percent_encodes_the_query() {
    assert_eq!(
        search_endpoint("Mickey Mouse"),
        "https://api.disneyapi.dev/character?name=Mickey%20Mouse&page=1&pageSize=8"
    );
    assert_eq!(
        search_endpoint("donald&daisy"),
        "https://api.disneyapi.dev/character?name=donald%26daisy&page=1&pageSize=8"
    );
}

#[test]
fn lookup_failed_message_formats_status() {
    assert_eq!(lookup_failed_message(503), "character lookup failed: 503");
}
