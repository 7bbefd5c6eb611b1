//! Raw `document.cookie` access for profile persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize the web-sys cookie glue so the profile store can
//! stay a plain key-value interface. Values are percent-encoded on write and
//! decoded on read; cookies are written without an expiry and scoped to `/`.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use std::borrow::Cow;

/// Extract the raw (still percent-encoded) value for `name` from a cookie
/// header string such as `"a=1; b=2"`.
///
/// An entry with an empty value (`"a="`) yields `Some("")`, which is distinct
/// from the entry being absent.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then_some(value)
    })
}

/// Decode a percent-encoded cookie value; input that fails to decode comes
/// back verbatim.
pub fn decode_value(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), Cow::into_owned)
}

/// Read a cookie by name from the current document.
pub fn read_cookie(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let document: web_sys::HtmlDocument = document.dyn_into().ok()?;
        let header = document.cookie().ok()?;
        find_cookie(&header, name).map(decode_value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Write a cookie on the current document, overwriting any prior value.
pub fn write_cookie(name: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(document) = document.dyn_into::<web_sys::HtmlDocument>() else {
            return;
        };
        let encoded = urlencoding::encode(value);
        let _ = document.set_cookie(&format!("{name}={encoded}; path=/"));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, value);
    }
}
