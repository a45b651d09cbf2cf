//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the customers screen and read/write state handed down
//! by the page or provided through Leptos context.

pub mod customer_form;
pub mod customer_table;
pub mod notice_stack;
