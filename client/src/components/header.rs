//! Top navigation bar with brand link and profile shortcut.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Character Finder"</a>
            <a class="site-header__profile" href="/profile">"My Profile"</a>
        </header>
    }
}
