//! Loading spinner shown while lookups are in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <span class="loading__spinner"></span>
            "Loading..."
        </div>
    }
}
