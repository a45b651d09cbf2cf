//! Customers page state: list, row selection, and the create-modal lifecycle.
//!
//! DESIGN
//! ======
//! The page controller owns one `CustomersState` for its lifetime; nothing
//! here is app-global. The modal is a two-state machine:
//!
//! ```text
//! Idle --open_modal--> Creating { submitting: false }
//! Creating { submitting: false } --begin_submit--> Creating { submitting: true }
//! Creating { submitting: true } --apply_created(current, ok)--> Idle
//! Creating { submitting: true } --apply_created(current, err)--> Creating { submitting: false }
//! Creating --close_modal--> Idle
//! ```
//!
//! Every create request gets an id from `begin_submit`. Closing the modal
//! detaches the outstanding id, so a late response still prepends its record
//! but never flips the state of a modal opened after it.
//!
//! [`submit_draft`] is the whole validate, send, fold sequence the page runs.
//! Results are folded back in through `apply_loaded` / `apply_created`, which
//! keeps every transition synchronous and testable.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use leptos::prelude::*;

use crate::net::repository::CustomerRepository;
use crate::net::types::{ApiError, CreateCustomerResponse, Customer, CustomerRow};
use crate::state::customer_form::{CustomerDraft, FieldError};

/// A listed customer plus the key its table row is addressed by.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomerEntry {
    pub key: String,
    pub customer: Customer,
}

impl CustomerEntry {
    /// Key rows by customer id; records without one get a random key.
    #[must_use]
    pub fn new(customer: Customer) -> Self {
        let key = if customer.id.is_empty() { uuid::Uuid::new_v4().to_string() } else { customer.id.clone() };
        Self { key, customer }
    }

    #[must_use]
    pub fn row(&self) -> CustomerRow {
        CustomerRow::from(&self.customer)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Idle,
    Creating {
        submitting: bool,
    },
}

/// Result of folding a create response into the page state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Record prepended and the modal that sent it closed.
    Created,
    /// Record prepended; the modal had been closed or reopened meanwhile and
    /// is left alone.
    Appended,
    /// Server answered with a non-null `err`.
    Rejected(String),
    /// Transport or decode failure.
    Failed(String),
    /// Nothing was sent: the modal was closed or a request was outstanding.
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct CustomersState {
    pub entries: Vec<CustomerEntry>,
    pub selected: Vec<String>,
    pub modal: ModalState,
    /// Id of the create request the open modal is waiting on.
    in_flight: Option<u64>,
    last_request: u64,
}

impl CustomersState {
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Creating { .. })
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.modal, ModalState::Creating { submitting: true })
    }

    /// True when the open modal may send a create request.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.modal == (ModalState::Creating { submitting: false })
    }

    pub fn open_modal(&mut self) {
        if self.modal == ModalState::Idle {
            self.modal = ModalState::Creating { submitting: false };
        }
    }

    /// Close the modal. A request still in flight is detached: its response
    /// will prepend on success but no longer drives the modal.
    pub fn close_modal(&mut self) {
        self.modal = ModalState::Idle;
        self.in_flight = None;
    }

    /// Mark a create request as in flight and return its id.
    ///
    /// Returns `None` when the modal is closed or a request is already
    /// outstanding, so a double click never sends twice.
    pub fn begin_submit(&mut self) -> Option<u64> {
        if !self.can_submit() {
            return None;
        }
        self.last_request += 1;
        self.in_flight = Some(self.last_request);
        self.modal = ModalState::Creating { submitting: true };
        Some(self.last_request)
    }

    /// Replace the list with the fetched customers.
    ///
    /// # Errors
    ///
    /// Passes the fetch error through; the current list is kept.
    pub fn apply_loaded(&mut self, result: Result<Vec<Customer>, ApiError>) -> Result<usize, ApiError> {
        let customers = result?;
        self.entries = customers.into_iter().map(CustomerEntry::new).collect();
        let entries = &self.entries;
        self.selected.retain(|key| entries.iter().any(|e| &e.key == key));
        Ok(self.entries.len())
    }

    /// Fold the response to request `request` in.
    ///
    /// A created record is always prepended. The modal only changes when
    /// `request` is the one it is waiting on: success closes it, failure
    /// re-enables the submit button.
    pub fn apply_created(&mut self, request: u64, result: Result<CreateCustomerResponse, ApiError>) -> CreateOutcome {
        if request == 0 || request > self.last_request {
            return CreateOutcome::Ignored;
        }
        let current = self.in_flight == Some(request);
        if current {
            self.in_flight = None;
        }
        let outcome = match result {
            Ok(CreateCustomerResponse { err: None, body: Some(customer) }) => {
                self.prepend(customer);
                if !current {
                    return CreateOutcome::Appended;
                }
                self.modal = ModalState::Idle;
                return CreateOutcome::Created;
            }
            Ok(CreateCustomerResponse { err: Some(err), .. }) => CreateOutcome::Rejected(err),
            Ok(CreateCustomerResponse { err: None, body: None }) => CreateOutcome::Failed("empty response".to_owned()),
            Err(e) => CreateOutcome::Failed(e.to_string()),
        };
        if current {
            self.modal = ModalState::Creating { submitting: false };
        }
        outcome
    }

    pub fn prepend(&mut self, customer: Customer) {
        self.entries.insert(0, CustomerEntry::new(customer));
    }

    /// Replace the selection, dropping keys that are not listed.
    pub fn set_selection(&mut self, keys: Vec<String>) {
        let entries = &self.entries;
        self.selected = keys.into_iter().filter(|k| entries.iter().any(|e| &e.key == k)).collect();
    }

    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key.clone()).collect()
    }
}

/// Validate `draft`, send it through `repo`, and fold the response into
/// `customers`.
///
/// The draft is validated before anything is marked in flight, so an invalid
/// draft never reaches the repository and leaves the modal untouched.
///
/// # Errors
///
/// Returns the failing fields in on-screen order.
pub async fn submit_draft(
    customers: RwSignal<CustomersState>,
    repo: &dyn CustomerRepository,
    draft: &CustomerDraft,
) -> Result<CreateOutcome, Vec<FieldError>> {
    if !customers.with_untracked(CustomersState::can_submit) {
        return Ok(CreateOutcome::Ignored);
    }
    let payload = draft.validate()?;

    let mut request = None;
    customers.update(|s| request = s.begin_submit());
    let Some(request) = request else {
        return Ok(CreateOutcome::Ignored);
    };

    let result = repo.create(&payload).await;
    let mut outcome = CreateOutcome::Ignored;
    customers.update(|s| outcome = s.apply_created(request, result));
    Ok(outcome)
}

/// Selection after clicking one row checkbox.
#[must_use]
pub fn toggle_key(selected: &[String], key: &str) -> Vec<String> {
    if selected.iter().any(|k| k == key) {
        selected.iter().filter(|k| *k != key).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(key.to_owned());
        next
    }
}

/// Selection after clicking the header checkbox: select all unless all are selected.
#[must_use]
pub fn toggle_all(selected: &[String], all_keys: &[String]) -> Vec<String> {
    if !all_keys.is_empty() && all_keys.iter().all(|k| selected.contains(k)) {
        Vec::new()
    } else {
        all_keys.to_vec()
    }
}
