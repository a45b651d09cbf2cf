//! Shared customer records for the customer desk.
//!
//! This crate owns the JSON shapes exchanged between `server` and `client`:
//! the full customer record served by `GET /api/v1/customers`, the table
//! projection, and the create request/response envelope used by
//! `POST /api/v1/customers`. Every field of the full record is optional on the
//! wire, and `null` reads as missing, so partially populated records (an
//! echoed create request carries no id or timestamps) still decode.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};


/// Error returned by [`decode_customers`].
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The payload is not a JSON array of customer records.
    #[error("failed to decode customer records: {0}")]
    Decode(#[from] serde_json::Error),
}

// =============================================================================
// FULL RECORD
// =============================================================================

/// A customer as returned by the customers endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deferral_days: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub org: Organization,
    #[serde(deserialize_with = "null_as_default")]
    pub balance: Balance,
    #[serde(deserialize_with = "deserialize_metadata")]
    pub metadata: Vec<MetadataEntry>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub invoice_prefix: String,
    #[serde(deserialize_with = "null_as_default")]
    pub invoice_emails: Vec<String>,
}

/// Legal entity details attached to a customer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub inn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kpp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ogrn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub addr: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bank_accounts: Vec<BankAccount>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A settlement account of the customer's organization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bik: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub corr_account_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_default: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Customer balance snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub credit_limit: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub available_amount: f64,
}

/// One free-form metadata pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

impl MetadataEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

// =============================================================================
// PROJECTION
// =============================================================================

/// Subset of [`Customer`] rendered by the customers table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub deferral_days: u32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.clone(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            deferral_days: customer.deferral_days,
            created_at: customer.created_at.clone(),
            updated_at: customer.updated_at.clone(),
        }
    }
}

// =============================================================================
// CREATE
// =============================================================================

/// Body of `POST /api/v1/customers`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub deferral_days: u32,
    pub balance: NewBalance,
    pub org: NewOrganization,
    pub bank_accounts: Vec<NewBankAccount>,
    pub invoice_emails: Vec<String>,
    pub metadata: Vec<MetadataEntry>,
}

impl CreateCustomerRequest {
    /// Number of bank accounts flagged as default. Valid requests have exactly one.
    #[must_use]
    pub fn default_account_count(&self) -> usize {
        self.bank_accounts.iter().filter(|a| a.is_default).count()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBalance {
    pub credit_limit: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrganization {
    pub name: String,
    pub inn: String,
    pub kpp: String,
    pub ogrn: String,
    pub addr: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBankAccount {
    pub name: String,
    pub account_number: String,
    pub bik: String,
    pub corr_account_number: String,
    pub is_default: bool,
}

/// Envelope returned by `POST /api/v1/customers`.
///
/// `err == None` means `body` holds the created record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerResponse {
    pub err: Option<String>,
    pub body: Option<Customer>,
}

/// Decode a JSON array of customer records.
///
/// # Errors
///
/// Returns [`RecordError::Decode`] if `json` is not an array of customer objects.
pub fn decode_customers(json: &str) -> Result<Vec<Customer>, RecordError> {
    Ok(serde_json::from_str(json)?)
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// METADATA WIRE FORMAT
// =============================================================================

/// Accept metadata either as a JSON object (`{"k": "v"}`) or as an array of
/// `{key, value}` pairs. Object entries keep document order.
fn deserialize_metadata<'de, D>(deserializer: D) -> Result<Vec<MetadataEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(MetadataVisitor)
}

struct MetadataVisitor;

impl<'de> Visitor<'de> for MetadataVisitor {
    type Value = Vec<MetadataEntry>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a metadata object or an array of key/value pairs")
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, serde_json::Value>()? {
            let value = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            entries.push(MetadataEntry { key, value });
        }
        Ok(entries)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(entry) = seq.next_element::<MetadataEntry>()? {
            entries.push(entry);
        }
        Ok(entries)
    }
}
