//! Network boundary for the external character lookup service.
//!
//! The service is consumed as an opaque collaborator: `types` mirrors its
//! wire shapes, `api` performs the requests.

pub mod api;
pub mod types;
