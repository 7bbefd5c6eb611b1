//! Profile record flow: view resolution, form seeding, validation, submit.
//!
//! DESIGN
//! ======
//! The page components are thin glue over the pure helpers here; everything
//! observable about the persistence flow (defaults, required checks, the
//! batch write plus timestamp stamp) lives in this module against the
//! injected [`ProfileStore`].

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use time::Date;

use crate::state::fields::{self, FieldSpec, LAST_UPDATED_KEY};
use crate::state::store::ProfileStore;
use crate::util::dates;

/// Resolved values for the read-only profile view. Absent (or cleared)
/// fields already carry their view defaults; `last_updated` is the raw
/// epoch-millisecond string, empty when the profile was never submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileView {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub city: String,
    pub state: String,
    pub favorite_character: String,
    pub favorite_ride: String,
    pub favorite_movie: String,
    pub favorite_park: String,
    pub last_updated: String,
}

/// In-flight values of the edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub city: String,
    pub state: String,
    pub favorite_character: String,
    pub favorite_ride: String,
    pub favorite_movie: String,
    pub favorite_park: String,
}

/// Per-field flags for the mandatory inputs; a set flag blocks submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub first_name: bool,
    pub last_name: bool,
    pub birth_date: bool,
}

impl FieldErrors {
    pub fn any(self) -> bool {
        self.first_name || self.last_name || self.birth_date
    }
}

/// A stored empty string counts as "nothing to show"; fall back to the
/// field's default, like the view and form have always done.
fn read_or(store: &dyn ProfileStore, field: &FieldSpec, default: &str) -> String {
    store
        .read(field.key)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// Read every registry field and resolve view defaults.
pub fn load_view(store: &dyn ProfileStore) -> ProfileView {
    ProfileView {
        first_name: read_or(store, &fields::FIRST_NAME, fields::FIRST_NAME.view_default),
        last_name: read_or(store, &fields::LAST_NAME, fields::LAST_NAME.view_default),
        birth_date: read_or(store, &fields::BIRTH_DATE, fields::BIRTH_DATE.view_default),
        city: read_or(store, &fields::CITY, fields::CITY.view_default),
        state: read_or(store, &fields::STATE, fields::STATE.view_default),
        favorite_character: read_or(store, &fields::FAVORITE_CHARACTER, fields::FAVORITE_CHARACTER.view_default),
        favorite_ride: read_or(store, &fields::FAVORITE_RIDE, fields::FAVORITE_RIDE.view_default),
        favorite_movie: read_or(store, &fields::FAVORITE_MOVIE, fields::FAVORITE_MOVIE.view_default),
        favorite_park: read_or(store, &fields::FAVORITE_PARK, fields::FAVORITE_PARK.view_default),
        last_updated: store.read(LAST_UPDATED_KEY).unwrap_or_default(),
    }
}

/// Seed the edit form from persisted values and form defaults.
///
/// A stored birth date that is not a parseable calendar date (the `"--"`
/// sentinel, or nothing at all) seeds an empty date input; the required
/// check then catches it at submit time.
pub fn seed_form(store: &dyn ProfileStore) -> ProfileForm {
    let birth_date = read_or(store, &fields::BIRTH_DATE, fields::BIRTH_DATE.form_default);
    let birth_date = if dates::parse_iso_date(&birth_date).is_some() {
        birth_date
    } else {
        String::new()
    };

    ProfileForm {
        first_name: read_or(store, &fields::FIRST_NAME, fields::FIRST_NAME.form_default),
        last_name: read_or(store, &fields::LAST_NAME, fields::LAST_NAME.form_default),
        birth_date,
        city: read_or(store, &fields::CITY, fields::CITY.form_default),
        state: read_or(store, &fields::STATE, fields::STATE.form_default),
        favorite_character: read_or(store, &fields::FAVORITE_CHARACTER, fields::FAVORITE_CHARACTER.form_default),
        favorite_ride: read_or(store, &fields::FAVORITE_RIDE, fields::FAVORITE_RIDE.form_default),
        favorite_movie: read_or(store, &fields::FAVORITE_MOVIE, fields::FAVORITE_MOVIE.form_default),
        favorite_park: read_or(store, &fields::FAVORITE_PARK, fields::FAVORITE_PARK.form_default),
    }
}

/// Check the mandatory fields; a set flag means "empty at submit time".
pub fn validate(form: &ProfileForm) -> FieldErrors {
    FieldErrors {
        first_name: form.first_name.is_empty(),
        last_name: form.last_name.is_empty(),
        birth_date: form.birth_date.is_empty(),
    }
}

/// Persist the whole form in one batch and stamp the last-updated time.
///
/// # Errors
///
/// Returns the per-field flags when a mandatory field is empty; nothing is
/// written in that case. Optional fields may be empty — submitting an empty
/// value is how a field is cleared.
pub fn submit(store: &dyn ProfileStore, form: &ProfileForm, now_ms: i64) -> Result<(), FieldErrors> {
    let errors = validate(form);
    if errors.any() {
        return Err(errors);
    }

    store.write_batch(&[
        (fields::FIRST_NAME.key, form.first_name.clone()),
        (fields::LAST_NAME.key, form.last_name.clone()),
        (fields::BIRTH_DATE.key, form.birth_date.clone()),
        (fields::CITY.key, form.city.clone()),
        (fields::STATE.key, form.state.clone()),
        (fields::FAVORITE_CHARACTER.key, form.favorite_character.clone()),
        (fields::FAVORITE_RIDE.key, form.favorite_ride.clone()),
        (fields::FAVORITE_MOVIE.key, form.favorite_movie.clone()),
        (fields::FAVORITE_PARK.key, form.favorite_park.clone()),
    ]);
    store.write(LAST_UPDATED_KEY, &now_ms.to_string());
    Ok(())
}

/// Age in whole years derived from the view's birth-date value, or the
/// `"--"` sentinel when no parseable birth date is stored.
pub fn age_display(birth_date: &str, today: Date) -> String {
    dates::parse_iso_date(birth_date).map_or_else(
        || "--".to_owned(),
        |birth| dates::age_in_years(birth, today).to_string(),
    )
}
