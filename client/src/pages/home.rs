//! Landing page with the character search form.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Route for a search query's results page.
fn results_path(query: &str) -> String {
    format!("/results/{}", urlencoding::encode(query))
}

/// Trim the raw search input; `None` blocks navigation on empty queries.
fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(query_value) = normalize_query(&query.get()) {
            navigate(&results_path(&query_value), NavigateOptions::default());
        }
    };

    view! {
        <section class="home-page">
            <h2 class="home-page__headline">"Find your favorite character"</h2>
            <form class="search-form" on:submit=on_submit>
                <input
                    class="search-form__input"
                    type="search"
                    placeholder="Search characters..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Search"</button>
            </form>
        </section>
    }
}
