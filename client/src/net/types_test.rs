use super::*;

const MICKEY: &str = r#"{
    "_id": 308,
    "films": ["Fantasia", "Fun and Fancy Free"],
    "tvShows": ["Mickey Mouse Clubhouse"],
    "parkAttractions": ["Meet Mickey"],
    "imageUrl": "https://static.example/mickey.png",
    "sourceUrl": "https://disney.fandom.com/wiki/Mickey_Mouse",
    "name": "Mickey Mouse",
    "updatedAt": "2021-12-20T20:39:18.033Z"
}"#;

#[test]
fn character_deserializes_camel_case_wire_names() {
    let character: Character = serde_json::from_str(MICKEY).expect("character");
    assert_eq!(character.id, 308);
    assert_eq!(character.name, "Mickey Mouse");
    assert_eq!(character.image_url.as_deref(), Some("https://static.example/mickey.png"));
    assert_eq!(character.source_url.as_deref(), Some("https://disney.fandom.com/wiki/Mickey_Mouse"));
    assert_eq!(character.updated_at.as_deref(), Some("2021-12-20T20:39:18.033Z"));
    assert_eq!(character.films.len(), 2);
    assert_eq!(character.tv_shows, vec!["Mickey Mouse Clubhouse"]);
    assert_eq!(character.park_attractions, vec!["Meet Mickey"]);
}

#[test]
fn character_defaults_missing_lists_and_urls() {
    let character: Character = serde_json::from_str(r#"{"_id": 1, "name": "Figment"}"#).expect("character");
    assert_eq!(character.id, 1);
    assert!(character.films.is_empty());
    assert!(character.tv_shows.is_empty());
    assert!(character.park_attractions.is_empty());
    assert_eq!(character.image_url, None);
    assert_eq!(character.updated_at, None);
}

#[test]
fn single_lookup_envelope_carries_one_character() {
    let body = format!(r#"{{"info": {{"count": 1}}, "data": {MICKEY}}}"#);
    let response: CharacterResponse = serde_json::from_str(&body).expect("envelope");
    assert_eq!(response.data.expect("character").name, "Mickey Mouse");
}

#[test]
fn single_lookup_envelope_tolerates_null_data() {
    let response: CharacterResponse = serde_json::from_str(r#"{"data": null}"#).expect("envelope");
    assert!(response.data.is_none());
}

#[test]
fn search_envelope_deserializes_a_list() {
    let body = format!(r#"{{"data": [{MICKEY}, {{"_id": 2, "name": "Pluto"}}]}}"#);
    let response: CharacterListResponse = serde_json::from_str(&body).expect("envelope");
    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[1].name, "Pluto");
}

#[test]
fn search_envelope_absorbs_a_single_hit_bare_object() {
    let body = format!(r#"{{"data": {MICKEY}}}"#);
    let response: CharacterListResponse = serde_json::from_str(&body).expect("envelope");
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].id, 308);
}

#[test]
fn search_envelope_treats_null_and_missing_data_as_empty() {
    let response: CharacterListResponse = serde_json::from_str(r#"{"data": null}"#).expect("envelope");
    assert!(response.data.is_empty());

    let response: CharacterListResponse = serde_json::from_str("{}").expect("envelope");
    assert!(response.data.is_empty());
}
