//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Record shapes live in the shared `records` crate so the mock endpoint and
//! the UI decode the same JSON. This module adds the client-side error type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

pub use records::{
    BankAccount, Balance, CreateCustomerRequest, CreateCustomerResponse, Customer, CustomerRow, MetadataEntry,
    NewBalance, NewBankAccount, NewOrganization, Organization,
};

/// Failure talking to the customers API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}
