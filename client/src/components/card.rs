//! Result-grid card linking to a character's detail page.

use leptos::prelude::*;

use crate::net::types::Character;

/// Clickable search-result card. The link carries `from=results` so the
/// detail page knows it can offer "Go Back".
#[component]
pub fn Card(character: Character) -> impl IntoView {
    let href = format!("/character/{}?from=results", character.id);
    let alt = character.name.clone();
    let image = character.image_url.unwrap_or_default();

    view! {
        <a class="card" href=href>
            <img class="card__image" src=image alt=alt/>
            <span class="card__name">{character.name}</span>
        </a>
    }
}
