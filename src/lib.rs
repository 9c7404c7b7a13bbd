//! # mercadopago-rs
//!
//! An async Rust client for the MercadoPago payments API.
//!
//! ## Features
//!
//! - **Authentication**: OAuth2 client-credentials grant and token refresh
//! - **Checkout**: Create and fetch checkout preferences
//! - **Subscriptions**: Create and cancel preapprovals (recurring payments)
//! - **Search**: Payment search with optional automatic pagination
//! - **Notifications**: Resolve IPN notifications into payments or merchant orders
//! - **Inspectable errors**: Provider error payloads are returned as data,
//!   not raised
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mercadopago_rs::{Credentials, MercadoPagoClient};
//! use mercadopago_rs::models::{Item, PaymentRequest, Payer};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> mercadopago_rs::Result<()> {
//!     // Fails with Error::Access if the credentials are rejected
//!     let client = MercadoPagoClient::new(Credentials::from_env()?).await?;
//!
//!     let request = PaymentRequest {
//!         external_reference: Some("OPERATION-ID-1234".to_string()),
//!         items: vec![Item::new("Example T-Shirt", 1, dec!(0.50), "BRL")],
//!         payer: Some(Payer::new("buyer@email.com")),
//!         ..Default::default()
//!     };
//!
//!     // Everything after construction returns the provider's answer as data
//!     match client.create_preference(&request).await?.into_result() {
//!         Ok(preference) => println!("Checkout at {:?}", preference.init_point),
//!         Err(body) => println!("Rejected: {} ({})", body.message, body.error),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Paginated Search
//!
//! ```rust,no_run
//! use mercadopago_rs::{Credentials, MercadoPagoClient};
//! use mercadopago_rs::api::SearchFilter;
//! use mercadopago_rs::models::PaymentStatus;
//!
//! #[tokio::main]
//! async fn main() -> mercadopago_rs::Result<()> {
//!     let mut client = MercadoPagoClient::new(Credentials::from_env()?).await?;
//!     client.set_auto_paginate(true);
//!
//!     let refunded = client
//!         .search(&SearchFilter::new().status(PaymentStatus::Refunded))
//!         .await?;
//!
//!     for record in refunded.success().into_iter().flatten() {
//!         println!("{}: {:?}", record.collection.id, record.collection.transaction_amount);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::{ApiErrorBody, ApiResponse, PreapprovalId, PreferenceId};
pub use client::{ClientConfig, Credentials, MercadoPagoClient};
pub use auth::{Authentication, Session, TokenResponse};

/// Prelude module for convenient imports.
///
/// ```rust
/// use mercadopago_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Envelope
        ApiErrorBody, ApiResponse,
        // Identifiers
        PreapprovalId, PreferenceId,
        // Enums
        FrequencyType, NotificationTopic, PaymentStatus, PreapprovalStatus, SortCriteria,
        // Checkout
        BackUrls, Item, Payer, PaymentRequest, Preference,
        // Preapprovals
        AutoRecurring, Preapproval, PreapprovalRequest,
        // Search
        Collection, Paging, PaymentRecord, SearchPage,
    };
    pub use crate::api::SearchFilter;
    pub use crate::client::{ClientConfig, Credentials, MercadoPagoClient};
    pub use crate::auth::{Authentication, Session, TokenResponse};
}
