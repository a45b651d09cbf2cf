//! Customer fixtures served by the mock endpoint.
//!
//! DESIGN
//! ======
//! A default fixture set is compiled into the binary so the server starts
//! with no files around. `FIXTURES_PATH` swaps in another set. Either set is
//! decoded into customer records once so a malformed file fails startup
//! instead of a request, but the JSON document itself is what gets served,
//! untouched.

use std::path::{Path, PathBuf};

use records::{RecordError, decode_customers};
use tracing::info;

/// Fixture set compiled into the binary.
pub const EMBEDDED_FIXTURES: &str = include_str!("../../fixtures/customers.json");

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixtures from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Decode(#[from] RecordError),
}

/// Validate the embedded fixture set and return its text.
///
/// # Errors
///
/// Returns [`FixtureError::Decode`] if the embedded JSON is malformed.
pub fn embedded() -> Result<String, FixtureError> {
    validate(EMBEDDED_FIXTURES.to_owned()).map(|(raw, _)| raw)
}

/// Load fixtures from `path`, or the embedded set when `None`.
///
/// # Errors
///
/// Returns [`FixtureError::Read`] if the file cannot be read and
/// [`FixtureError::Decode`] if it is not a JSON array of customers.
pub async fn load(path: Option<&Path>) -> Result<String, FixtureError> {
    let (document, count) = match path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| FixtureError::Read { path: path.to_path_buf(), source })?;
            validate(raw)?
        }
        None => validate(EMBEDDED_FIXTURES.to_owned())?,
    };
    info!(count, source = ?path, "customer fixtures loaded");
    Ok(document)
}

/// Check `raw` decodes as customer records and hand the text back unchanged
/// along with the record count.
fn validate(raw: String) -> Result<(String, usize), FixtureError> {
    let count = decode_customers(&raw)?.len();
    Ok((raw, count))
}

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod tests;
