//! Search results page: query-driven lookup rendered as a card grid.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::button::Button;
use crate::components::card::Card;
use crate::components::loading_indicator::LoadingIndicator;
use crate::net::types::Character;
use crate::pages::LOOKUP_ERROR_MESSAGE;
use crate::util::browser;

/// Heading shown above a non-empty result grid.
fn results_heading(query: &str) -> String {
    format!("Results for: \"{query}\"")
}

/// Message shown when the lookup succeeds with zero hits.
fn no_results_message(query: &str) -> String {
    format!("No results found for \"{query}\"")
}

/// Lookup lifecycle for the results grid.
#[derive(Clone, Debug, PartialEq)]
enum Lookup {
    Loading,
    Loaded(Vec<Character>),
    Failed,
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let params = use_params_map();
    let query = Memo::new(move |_| params.get().get("query").unwrap_or_default());

    let lookup = RwSignal::new(Lookup::Loading);
    // Sequence stamp for in-flight lookups; responses that lost the race to
    // a newer query are dropped instead of overwriting fresher results.
    let seq = StoredValue::new(0u64);

    Effect::new(move || {
        let query_value = query.get();
        let current = seq.get_value() + 1;
        seq.set_value(current);
        lookup.set(Lookup::Loading);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::net::api::search_characters(&query_value).await {
                Ok(characters) => Lookup::Loaded(characters),
                Err(_) => Lookup::Failed,
            };
            if seq.get_value() == current {
                lookup.set(outcome);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = query_value;
    });

    view! {
        <section class="results-page">
            {move || match lookup.get() {
                Lookup::Loading => view! { <LoadingIndicator/> }.into_any(),
                Lookup::Failed => view! {
                    <h3 class="results-page__headline">{LOOKUP_ERROR_MESSAGE}</h3>
                    <Button
                        label="Try Again"
                        on_press=Callback::new(move |()| browser::reload_page())
                    />
                }
                .into_any(),
                Lookup::Loaded(characters) => {
                    if characters.is_empty() {
                        view! {
                            <h3 class="results-page__headline">{no_results_message(&query.get())}</h3>
                        }
                        .into_any()
                    } else {
                        view! {
                            <h3 class="results-page__headline">{results_heading(&query.get())}</h3>
                            <div class="results-page__grid">
                                {characters
                                    .into_iter()
                                    .map(|character| view! { <Card character=character/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </section>
    }
}
