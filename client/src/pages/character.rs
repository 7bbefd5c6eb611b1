//! Character detail page.

#[cfg(test)]
#[path = "character_test.rs"]
mod character_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::button::Button;
use crate::components::loading_indicator::LoadingIndicator;
use crate::net::types::Character;
use crate::pages::LOOKUP_ERROR_MESSAGE;
use crate::util::{browser, dates};

/// "Go Back" is offered on a successful load only when the detail page was
/// entered from the results grid.
fn entered_from_results(from: Option<&str>) -> bool {
    from == Some("results")
}

/// Lookup lifecycle for the detail view.
#[derive(Clone, Debug, PartialEq)]
enum Lookup {
    Loading,
    Loaded(Box<Character>),
    Failed,
}

#[component]
pub fn CharacterPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.get().get("id").unwrap_or_default());
    let queries = use_query_map();
    let from_results = Memo::new(move |_| entered_from_results(queries.get().get("from").as_deref()));

    let lookup = RwSignal::new(Lookup::Loading);
    // Sequence stamp, same contract as the results page: a response only
    // lands if no newer id-driven lookup has started since.
    let seq = StoredValue::new(0u64);

    Effect::new(move || {
        let id_value = id.get();
        let current = seq.get_value() + 1;
        seq.set_value(current);
        lookup.set(Lookup::Loading);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::net::api::fetch_character(&id_value).await {
                Ok(Some(character)) => Lookup::Loaded(Box::new(character)),
                Ok(None) | Err(_) => Lookup::Failed,
            };
            if seq.get_value() == current {
                lookup.set(outcome);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id_value;
    });

    view! {
        <section class="character-page">
            {move || match lookup.get() {
                Lookup::Loading => view! { <LoadingIndicator/> }.into_any(),
                Lookup::Failed => view! {
                    <div class="character-page__error">
                        <h3>{LOOKUP_ERROR_MESSAGE}</h3>
                        <Button
                            class="character-page__try-again"
                            label="Try Again"
                            on_press=Callback::new(move |()| browser::reload_page())
                        />
                        <Button
                            label="Go Back"
                            on_press=Callback::new(move |()| browser::history_back())
                        />
                    </div>
                }
                .into_any(),
                Lookup::Loaded(character) => character_view(*character, from_results.get()).into_any(),
            }}
        </section>
    }
}

/// Detail layout for a successfully loaded character.
fn character_view(character: Character, from_results: bool) -> impl IntoView {
    let Character {
        name,
        image_url,
        source_url,
        updated_at,
        films,
        tv_shows,
        park_attractions,
        ..
    } = character;

    let alt = name.clone();
    let image = image_url.unwrap_or_default();
    let updated = updated_at.as_deref().and_then(dates::format_character_updated);

    view! {
        <figure class="character-page__portrait">
            <img src=image alt=alt/>
        </figure>
        <article class="character-page__details">
            {from_results.then(|| view! {
                <Button
                    class="character-page__back"
                    label="Go Back"
                    on_press=Callback::new(move |()| browser::history_back())
                />
            })}
            <h2>{name}</h2>
            {updated.map(|timestamp| view! {
                <p class="character-page__updated">"Last Updated: "<time>{timestamp}</time></p>
            })}
            {list_section("Featured Films", films)}
            {list_section("TV Shows", tv_shows)}
            {list_section("Park Attractions", park_attractions)}
            {source_url.map(|url| view! {
                <Button href=url label="Explore More Character Details"/>
            })}
        </article>
    }
}

/// Bulleted section rendered only when the list has entries.
fn list_section(title: &'static str, items: Vec<String>) -> Option<impl IntoView> {
    if items.is_empty() {
        return None;
    }
    Some(view! {
        <h3>{title}</h3>
        <ul>
            {items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
        </ul>
    })
}
