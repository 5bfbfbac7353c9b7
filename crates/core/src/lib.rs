//! Core of the ratings service.
//!
//! - [`storage`]: persisted entry type and the repository contract backends implement.
//! - [`rating`]: the domain core, its error taxonomy and the HTTP status mapping.
//! - [`api`]: JSON wire types shared by the server and the client.

pub mod api;
pub mod rating;
pub mod storage;
