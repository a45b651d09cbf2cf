//! Customer repository capability.
//!
//! DESIGN
//! ======
//! The page controller depends only on this trait, so the HTTP implementation
//! in `api` can be swapped for an in-memory one in tests or for a different
//! backend without touching UI code.

use std::sync::Arc;

use async_trait::async_trait;

use super::types::{ApiError, CreateCustomerRequest, CreateCustomerResponse, Customer};

/// List and create customers.
///
/// Futures are `?Send`: in the browser they run on the single-threaded
/// `spawn_local` executor.
#[async_trait(?Send)]
pub trait CustomerRepository {
    /// Fetch every customer.
    async fn list(&self) -> Result<Vec<Customer>, ApiError>;

    /// Submit a new customer. A response with `err == None` carries the created record.
    async fn create(&self, payload: &CreateCustomerRequest) -> Result<CreateCustomerResponse, ApiError>;
}

/// Repository handle shared through Leptos context.
pub type SharedRepository = Arc<dyn CustomerRepository + Send + Sync>;
