//! Domain services used by the route handlers.

pub mod fixtures;
