//! Enumeration types for the MercadoPago API.
//!
//! Wire values are lowercase snake_case strings. Statuses the provider may
//! add later deserialize to an `Unknown` variant instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Status of a payment (collection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// The user has not yet completed the payment process
    Pending,
    /// The payment has been approved and accredited
    Approved,
    /// The payment has been authorized but not captured yet
    Authorized,
    /// Payment is being reviewed
    InProcess,
    /// Users have initiated a dispute
    InMediation,
    /// Payment was rejected
    Rejected,
    /// Payment was cancelled by one of the parties or expired
    Cancelled,
    /// Payment was refunded to the user
    Refunded,
    /// A chargeback was made on the buyer's credit card
    ChargedBack,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    /// The wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Approved => "approved",
            PaymentStatus::Authorized => "authorized",
            PaymentStatus::InProcess => "in_process",
            PaymentStatus::InMediation => "in_mediation",
            PaymentStatus::Rejected => "rejected",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::ChargedBack => "charged_back",
            PaymentStatus::Unknown => "unknown",
        }
    }

    /// Returns `true` if money is no longer with the collector.
    pub fn is_reversed(&self) -> bool {
        matches!(self, PaymentStatus::Refunded | PaymentStatus::ChargedBack)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a preapproval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreapprovalStatus {
    /// Waiting for the payer to authorize
    Pending,
    /// Authorized and charging on schedule
    Authorized,
    /// Temporarily suspended
    Paused,
    /// Cancelled; no further charges
    Cancelled,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

/// Unit of the recurrence interval of a preapproval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyType {
    /// Charge every N days
    Days,
    /// Charge every N months
    Months,
}

/// Topic of an IPN notification.
///
/// The topic decides which resource a notification id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTopic {
    /// A payment (collection) notification
    #[default]
    Payment,
    /// A merchant order notification
    MerchantOrder,
}

impl NotificationTopic {
    /// The wire representation of this topic.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationTopic::Payment => "payment",
            NotificationTopic::MerchantOrder => "merchant_order",
        }
    }
}

impl fmt::Display for NotificationTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationTopic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "payment" => Ok(NotificationTopic::Payment),
            "merchant_order" => Ok(NotificationTopic::MerchantOrder),
            other => Err(Error::InvalidInput(format!(
                "Unknown notification topic: {}",
                other
            ))),
        }
    }
}

/// Sort direction for searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriteria {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}
