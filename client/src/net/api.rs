//! REST calls to the public character lookup API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning an error since lookups only happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics; any failure —
//! transport, non-OK status, or a body that does not decode — surfaces as a
//! message string the pages map to the generic retry prompt. There is no
//! retry policy and no response caching here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Character;
#[cfg(feature = "hydrate")]
use super::types::{CharacterListResponse, CharacterResponse};

/// Base URL of the public lookup API.
pub const API_BASE: &str = "https://api.disneyapi.dev";

/// Page requested on every lookup; the UI renders only the first page.
const PAGE: u32 = 1;
/// Result cap per lookup.
const PAGE_SIZE: u32 = 8;

#[cfg(any(test, feature = "hydrate"))]
fn character_endpoint(id: &str) -> String {
    format!("{API_BASE}/character/{}?page={PAGE}&pageSize={PAGE_SIZE}", urlencoding::encode(id))
}

#[cfg(any(test, feature = "hydrate"))]
fn search_endpoint(query: &str) -> String {
    format!("{API_BASE}/character?name={}&page={PAGE}&pageSize={PAGE_SIZE}", urlencoding::encode(query))
}

#[cfg(any(test, feature = "hydrate"))]
fn lookup_failed_message(status: u16) -> String {
    format!("character lookup failed: {status}")
}

/// Fetch one character by the id from the route.
///
/// `Ok(None)` means the service answered but knows no such character.
///
/// # Errors
///
/// Returns a message string if the HTTP request fails, the server responds
/// with a non-OK status, or the body cannot be decoded.
pub async fn fetch_character(id: &str) -> Result<Option<Character>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&character_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(lookup_failed_message(resp.status()));
        }
        let body: CharacterResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Search characters by name.
///
/// # Errors
///
/// Returns a message string if the HTTP request fails, the server responds
/// with a non-OK status, or the body cannot be decoded.
pub async fn search_characters(query: &str) -> Result<Vec<Character>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&search_endpoint(query))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(lookup_failed_message(resp.status()));
        }
        let body: CharacterListResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}
