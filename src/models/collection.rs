//! Payment (collection) search models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::PaymentStatus;

/// One page of a collections search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage<T> {
    /// Position of this page in the full result set
    #[serde(default)]
    pub paging: Option<Paging>,
    /// Records on this page
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Paging metadata of a search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Total number of matching records
    pub total: u64,
    /// Page size the server applied
    pub limit: u64,
    /// Offset of the first record on this page
    pub offset: u64,
}

/// A payment record as returned by the collections search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentRecord {
    /// The payment itself
    pub collection: Collection,
    /// Remaining fields of the record
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A received payment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Collection {
    /// Payment id
    pub id: u64,
    /// Payment status
    #[serde(default)]
    pub status: Option<PaymentStatus>,
    /// Seller-side reference
    #[serde(default)]
    pub external_reference: Option<String>,
    /// Amount paid
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub transaction_amount: Option<Decimal>,
    /// ISO 4217 currency code
    #[serde(default)]
    pub currency_id: Option<String>,
    /// Creation timestamp as sent by the provider
    #[serde(default)]
    pub date_created: Option<String>,
    /// Remaining fields of the payment
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
