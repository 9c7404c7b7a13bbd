//! Preapproval (recurring payment) models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::{FrequencyType, PreapprovalStatus};
use super::primitives::PreapprovalId;

/// A recurring payment authorization to be created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreapprovalRequest {
    /// Email of the payer who will authorize the charges
    pub payer_email: String,
    /// Where the payer is sent after authorizing
    pub back_url: String,
    /// Description shown to the payer
    pub reason: String,
    /// Seller-side reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Charge schedule
    pub auto_recurring: AutoRecurring,
}

/// Schedule and amount of a recurring charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoRecurring {
    /// Charge every `frequency` units of `frequency_type`
    pub frequency: u32,
    /// Unit of `frequency`
    pub frequency_type: FrequencyType,
    /// Amount charged each period
    #[serde(with = "rust_decimal::serde::float")]
    pub transaction_amount: Decimal,
    /// ISO 4217 currency code
    pub currency_id: String,
    /// First charge date (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Last charge date (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// A preapproval as stored by MercadoPago.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preapproval {
    /// Preapproval id
    pub id: PreapprovalId,
    /// URL where the payer authorizes the preapproval
    #[serde(default)]
    pub init_point: Option<String>,
    /// Sandbox authorization URL
    #[serde(default)]
    pub sandbox_init_point: Option<String>,
    /// Current status
    #[serde(default)]
    pub status: Option<PreapprovalStatus>,
    /// Where the payer is sent after authorizing
    #[serde(default)]
    pub back_url: Option<String>,
    /// Email of the payer
    #[serde(default)]
    pub payer_email: Option<String>,
    /// Description shown to the payer
    #[serde(default)]
    pub reason: Option<String>,
    /// Seller-side reference
    #[serde(default)]
    pub external_reference: Option<String>,
    /// Charge schedule
    #[serde(default)]
    pub auto_recurring: Option<AutoRecurring>,
    /// Remaining fields of the provider payload
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Preapproval {
    /// Returns `true` once the preapproval has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.status == Some(PreapprovalStatus::Cancelled)
    }
}

/// Body of the status update that cancels a preapproval.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PreapprovalStatusUpdate {
    pub status: PreapprovalStatus,
}
