//! API service modules for MercadoPago endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the MercadoPago API.

mod checkout;
mod collections;
mod notifications;
mod preapproval;

pub use checkout::CheckoutService;
pub use collections::{CollectionsService, SearchFilter};
pub use notifications::NotificationsService;
pub use preapproval::PreapprovalService;
