//! Static catalog of profile fields and enumerated option lists.
//!
//! DESIGN
//! ======
//! The catalog is the single source of truth for store keys, defaults, and
//! validation rules; both the profile view and the edit form consume it, so
//! no key literal is ever repeated in page code.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

/// How a profile field is captured in the edit form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text input.
    Text,
    /// ISO calendar date input.
    Date,
    /// One of a fixed option list.
    Enumerated,
}

/// One user-editable profile field.
///
/// `view_default` is what the read-only profile shows when no value (or an
/// empty value) is stored; `form_default` is what the edit form seeds inputs
/// with in the same situation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Store key, also the logical field identifier.
    pub key: &'static str,
    /// Human-facing label.
    pub label: &'static str,
    pub view_default: &'static str,
    pub form_default: &'static str,
    /// Enforced only by the edit form at submit time.
    pub required: bool,
    pub kind: FieldKind,
}

/// Reserved store key holding the last successful submit time in epoch
/// milliseconds. Not a form field; written only as a submit side effect.
pub const LAST_UPDATED_KEY: &str = "userLastUpdated";

pub const FIRST_NAME: FieldSpec = FieldSpec {
    key: "userFirstName",
    label: "First Name",
    view_default: "John",
    form_default: "John",
    required: true,
    kind: FieldKind::Text,
};

pub const LAST_NAME: FieldSpec = FieldSpec {
    key: "userLastName",
    label: "Last Name",
    view_default: "Doe",
    form_default: "Doe",
    required: true,
    kind: FieldKind::Text,
};

pub const BIRTH_DATE: FieldSpec = FieldSpec {
    key: "userBirthDate",
    label: "Birth Date",
    view_default: "--",
    form_default: "",
    required: true,
    kind: FieldKind::Date,
};

pub const CITY: FieldSpec = FieldSpec {
    key: "userCity",
    label: "City",
    view_default: "--",
    form_default: "",
    required: false,
    kind: FieldKind::Text,
};

pub const STATE: FieldSpec = FieldSpec {
    key: "userState",
    label: "State",
    view_default: "--",
    form_default: "",
    required: false,
    kind: FieldKind::Enumerated,
};

pub const FAVORITE_CHARACTER: FieldSpec = FieldSpec {
    key: "userFavoriteCharacter",
    label: "Favorite Character",
    view_default: "--",
    form_default: "",
    required: false,
    kind: FieldKind::Text,
};

pub const FAVORITE_RIDE: FieldSpec = FieldSpec {
    key: "userFavoriteRide",
    label: "Favorite Ride",
    view_default: "--",
    form_default: "",
    required: false,
    kind: FieldKind::Text,
};

pub const FAVORITE_MOVIE: FieldSpec = FieldSpec {
    key: "userFavoriteMovie",
    label: "Favorite Movie",
    view_default: "--",
    form_default: "",
    required: false,
    kind: FieldKind::Text,
};

pub const FAVORITE_PARK: FieldSpec = FieldSpec {
    key: "userFavoritePark",
    label: "Favorite Disney Theme Park",
    view_default: "--",
    form_default: "",
    required: false,
    kind: FieldKind::Enumerated,
};

/// Every editable field, in form order.
pub static PROFILE_FIELDS: [FieldSpec; 9] = [
    FIRST_NAME,
    LAST_NAME,
    BIRTH_DATE,
    CITY,
    STATE,
    FAVORITE_CHARACTER,
    FAVORITE_RIDE,
    FAVORITE_MOVIE,
    FAVORITE_PARK,
];

/// Look up a field by store key.
pub fn spec(key: &str) -> Option<&'static FieldSpec> {
    PROFILE_FIELDS.iter().find(|field| field.key == key)
}

/// A `{value, label}` pair for an enumerated select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str) -> SelectOption {
    SelectOption { value, label: value }
}

/// US states; the leading entry is the unselected placeholder.
pub static STATE_OPTIONS: [SelectOption; 51] = [
    SelectOption { value: "", label: "Select your state" },
    option("Alabama"),
    option("Alaska"),
    option("Arizona"),
    option("Arkansas"),
    option("California"),
    option("Colorado"),
    option("Connecticut"),
    option("Delaware"),
    option("Florida"),
    option("Georgia"),
    option("Hawaii"),
    option("Idaho"),
    option("Illinois"),
    option("Indiana"),
    option("Iowa"),
    option("Kansas"),
    option("Kentucky"),
    option("Louisiana"),
    option("Maine"),
    option("Maryland"),
    option("Massachusetts"),
    option("Michigan"),
    option("Minnesota"),
    option("Mississippi"),
    option("Missouri"),
    option("Montana"),
    option("Nebraska"),
    option("Nevada"),
    option("New Hampshire"),
    option("New Jersey"),
    option("New Mexico"),
    option("New York"),
    option("North Carolina"),
    option("North Dakota"),
    option("Ohio"),
    option("Oklahoma"),
    option("Oregon"),
    option("Pennsylvania"),
    option("Rhode Island"),
    option("South Carolina"),
    option("South Dakota"),
    option("Tennessee"),
    option("Texas"),
    option("Utah"),
    option("Vermont"),
    option("Virginia"),
    option("Washington"),
    option("West Virginia"),
    option("Wisconsin"),
    option("Wyoming"),
];

/// Disney parks; the leading entry is the unselected placeholder.
pub static PARK_OPTIONS: [SelectOption; 7] = [
    SelectOption { value: "", label: "Select your favorite Disney Park" },
    option("Magic Kingdom Park"),
    option("EPCOT"),
    option("Disney's Hollywood Studios"),
    option("Disney's Animal Kingdom Theme Park"),
    option("Disney's Typhoon Lagoon"),
    option("Disney's Blizzard Beach"),
];
