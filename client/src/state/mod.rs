//! Client-side state containers.
//!
//! DESIGN
//! ======
//! State is split by concern: the customers page controller state, the
//! create-form draft with its reducer, and transient notices. Each is plain
//! data wrapped in `RwSignal` by whoever owns it.

pub mod customer_form;
pub mod customers;
pub mod notice;
