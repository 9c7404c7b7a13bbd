//! Data models for the MercadoPago API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Resource identifiers
//! - [`enums`] - Statuses, notification topics, recurrence units
//! - [`response`] - The success-or-provider-error envelope
//! - [`checkout`] - Checkout preferences
//! - [`preapproval`] - Recurring payment authorizations
//! - [`collection`] - Payment search results

pub mod primitives;
pub mod enums;
pub mod response;
pub mod checkout;
pub mod preapproval;
pub mod collection;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use response::*;
pub use checkout::*;
pub use preapproval::*;
pub use collection::*;
