//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Lookup pages share the generic failure copy; the only
//! recovery actions offered are a full reload or going back.

pub mod character;
pub mod home;
pub mod profile;
pub mod profile_edit;
pub mod results;

/// Copy for the generic lookup failure state.
pub(crate) const LOOKUP_ERROR_MESSAGE: &str = "Oops! Something went wrong on our end. Please try again.";
