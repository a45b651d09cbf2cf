//! Networking modules for the customers REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` re-exports the shared record schema, `repository` defines the
//! list/create capability the page depends on, and `api` implements it over
//! HTTP.

pub mod api;
pub mod repository;
pub mod types;
