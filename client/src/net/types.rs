//! DTOs for the public character lookup API.
//!
//! DESIGN
//! ======
//! These types mirror the API's wire shapes so serde can stay schema-driven.
//! The search endpoint usually returns `data` as a list but collapses it to a
//! bare object for single-hit queries; the custom deserializer absorbs both.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A character record as returned by the lookup API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    /// Numeric identifier used in `/character/{id}` lookups.
    #[serde(rename = "_id")]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Portrait image URL, if any.
    pub image_url: Option<String>,
    /// Canonical source page for the character.
    pub source_url: Option<String>,
    /// RFC 3339 timestamp of the record's last modification.
    pub updated_at: Option<String>,
    /// Featured film titles.
    pub films: Vec<String>,
    /// TV show titles.
    pub tv_shows: Vec<String>,
    /// Park attraction names.
    pub park_attractions: Vec<String>,
}

/// Envelope for single-character lookups: `{ "data": { ... } }`.
///
/// `data` is `null` for unknown ids, so it stays optional.
#[derive(Clone, Debug, Deserialize)]
pub struct CharacterResponse {
    #[serde(default)]
    pub data: Option<Character>,
}

/// Envelope for name searches: `{ "data": [ ... ] }`, except single-hit
/// queries where the API returns a bare object instead of a one-item list.
#[derive(Clone, Debug, Deserialize)]
pub struct CharacterListResponse {
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub data: Vec<Character>,
}

fn deserialize_one_or_many<'de, D>(deserializer: D) -> Result<Vec<Character>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Character>),
        One(Box<Character>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::Many(characters)) => characters,
        Some(OneOrMany::One(character)) => vec![*character],
    })
}
