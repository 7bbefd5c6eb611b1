//! Read-only profile view over the persisted record.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::Button;
use crate::state::profile::{self, ProfileView};
use crate::state::store::ProfileStoreHandle;
use crate::util::dates;

/// Derived "Last Updated" line; `None` when the profile was never submitted
/// (or the stored stamp is not a number, which the app never writes).
fn last_updated_display(raw_ms: &str) -> Option<String> {
    let epoch_ms: i64 = raw_ms.parse().ok()?;
    dates::format_last_updated(epoch_ms)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = expect_context::<ProfileStoreHandle>();
    let navigate = use_navigate();

    let record = RwSignal::new(ProfileView::default());

    // Cookies are read after hydration so the server-rendered markup and the
    // first client render agree.
    Effect::new(move || {
        record.set(profile::load_view(&*store));
    });

    let on_edit = Callback::new(move |()| navigate("/profile/edit", NavigateOptions::default()));

    view! {
        <section class="profile-page">
            <h2 class="profile-page__name">
                {move || format!("{} {}", record.get().first_name, record.get().last_name)}
            </h2>
            <Show when=move || last_updated_display(&record.get().last_updated).is_some()>
                <p class="profile-page__updated">
                    "Last Updated "
                    <time>
                        {move || last_updated_display(&record.get().last_updated).unwrap_or_default()}
                    </time>
                </p>
            </Show>
            <dl class="profile-page__facts">
                <div>
                    <dt>"Age:"</dt>
                    <dd>{move || profile::age_display(&record.get().birth_date, dates::today_utc())}</dd>
                </div>
                <div>
                    <dt>"Location:"</dt>
                    <dd>{move || format!("{} {}", record.get().city, record.get().state)}</dd>
                </div>
                <div>
                    <dt>"Favorite Character:"</dt>
                    <dd>{move || record.get().favorite_character}</dd>
                </div>
                <div>
                    <dt>"Favorite Ride:"</dt>
                    <dd>{move || record.get().favorite_ride}</dd>
                </div>
                <div>
                    <dt>"Favorite Movie:"</dt>
                    <dd>{move || record.get().favorite_movie}</dd>
                </div>
                <div>
                    <dt>"Favorite Disney Theme Park:"</dt>
                    <dd>{move || record.get().favorite_park}</dd>
                </div>
            </dl>
            <Button class="profile-page__edit" label="Edit Profile" on_press=on_edit/>
        </section>
    }
}
