//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{
    character::CharacterPage, home::HomePage, profile::ProfilePage,
    profile_edit::ProfileEditPage, results::ResultsPage,
};
use crate::state::store::ProfileStoreHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the profile store context and sets up client-side routing. The
/// cookie-backed store is the only channel between the profile view and the
/// edit form; there is no shared in-memory profile state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ProfileStoreHandle::cookie());

    view! {
        <Stylesheet id="leptos" href="/pkg/charfinder.css"/>
        <Title text="Character Finder"/>

        <Router>
            <Header/>
            <main class="page-shell">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("results"), ParamSegment("query")) view=ResultsPage/>
                    <Route path=(StaticSegment("character"), ParamSegment("id")) view=CharacterPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=(StaticSegment("profile"), StaticSegment("edit")) view=ProfileEditPage/>
                </Routes>
            </main>
        </Router>
    }
}
