//! Profile edit form: seed, validate, persist, navigate.
//!
//! The submit/cancel flow is a single synchronous unit: a valid submit
//! batch-writes every field through the injected store, stamps the
//! last-updated time, and navigates back to the view; cancel navigates
//! without writing anything.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonVariant};
use crate::components::custom_select::CustomSelect;
use crate::state::fields::{PARK_OPTIONS, STATE_OPTIONS, SelectOption};
use crate::state::profile::{self, FieldErrors, ProfileForm};
use crate::state::store::ProfileStoreHandle;
use crate::util::dates;

const REQUIRED_MESSAGE: &str = "This field is required";

#[component]
pub fn ProfileEditPage() -> impl IntoView {
    let store = expect_context::<ProfileStoreHandle>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let favorite_character = RwSignal::new(String::new());
    let favorite_ride = RwSignal::new(String::new());
    let favorite_movie = RwSignal::new(String::new());
    let favorite_park = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());

    // Seed inputs from the persisted record after hydration.
    {
        let store = store.clone();
        Effect::new(move || {
            let seeded = profile::seed_form(&*store);
            first_name.set(seeded.first_name);
            last_name.set(seeded.last_name);
            birth_date.set(seeded.birth_date);
            city.set(seeded.city);
            state.set(seeded.state);
            favorite_character.set(seeded.favorite_character);
            favorite_ride.set(seeded.favorite_ride);
            favorite_movie.set(seeded.favorite_movie);
            favorite_park.set(seeded.favorite_park);
        });
    }

    let current_form = move || ProfileForm {
        first_name: first_name.get(),
        last_name: last_name.get(),
        birth_date: birth_date.get(),
        city: city.get(),
        state: state.get(),
        favorite_character: favorite_character.get(),
        favorite_ride: favorite_ride.get(),
        favorite_movie: favorite_movie.get(),
        favorite_park: favorite_park.get(),
    };

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            match profile::submit(&*store, &current_form(), dates::now_ms()) {
                Ok(()) => navigate("/profile", NavigateOptions::default()),
                Err(flags) => errors.set(flags),
            }
        }
    };

    let on_cancel = Callback::new(move |()| navigate("/profile", NavigateOptions::default()));

    let state_options: &'static [SelectOption] = &STATE_OPTIONS;
    let park_options: &'static [SelectOption] = &PARK_OPTIONS;

    view! {
        <section class="profile-edit-page">
            <h2>"Edit Profile"</h2>
            <form class="profile-form" on:submit=on_submit>
                <div class="profile-form__row">
                    <TextField
                        label="First Name"
                        value=first_name
                        required=true
                        error=Signal::derive(move || errors.get().first_name)
                    />
                    <TextField
                        label="Last Name"
                        value=last_name
                        required=true
                        error=Signal::derive(move || errors.get().last_name)
                    />
                </div>
                <div class="profile-form__row">
                    <TextField
                        label="Birth Date"
                        value=birth_date
                        required=true
                        input_type="date"
                        error=Signal::derive(move || errors.get().birth_date)
                    />
                </div>
                <div class="profile-form__row">
                    <TextField label="City" value=city/>
                    <SelectField label="State" options=state_options value=state/>
                </div>
                <div class="profile-form__row">
                    <TextField label="Favorite Character" value=favorite_character wide=true/>
                </div>
                <div class="profile-form__row">
                    <TextField label="Favorite Ride" value=favorite_ride wide=true/>
                </div>
                <div class="profile-form__row">
                    <TextField label="Favorite Movie" value=favorite_movie wide=true/>
                </div>
                <div class="profile-form__row">
                    <SelectField
                        label="Favorite Disney Theme Park"
                        options=park_options
                        value=favorite_park
                    />
                </div>
                <div class="profile-form__row profile-form__actions">
                    <Button label="Update Profile" submit=true/>
                    <Button label="Cancel" variant=ButtonVariant::Secondary on_press=on_cancel/>
                </div>
            </form>
        </section>
    }
}

/// Labeled text input with optional required marker and inline error.
#[component]
fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: Option<Signal<bool>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    let field_class = if wide {
        "profile-form__field profile-form__field--wide"
    } else {
        "profile-form__field"
    };

    view! {
        <fieldset class=field_class>
            <label>
                {label}
                {required.then(|| view! { <span class="profile-form__required">" *"</span> })}
            </label>
            <input
                class="profile-form__input"
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {error.map(|error| view! {
                <Show when=move || error.get()>
                    <div class="profile-form__error" role="alert">{REQUIRED_MESSAGE}</div>
                </Show>
            })}
        </fieldset>
    }
}

/// Labeled enumerated select over a static option list.
#[component]
fn SelectField(
    #[prop(into)] label: String,
    options: &'static [SelectOption],
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <fieldset class="profile-form__field">
            <label>{label}</label>
            <CustomSelect options=options value=value/>
        </fieldset>
    }
}
