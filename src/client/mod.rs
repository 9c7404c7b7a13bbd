//! HTTP client and service layer for the MercadoPago API.
//!
//! This module provides the main entry point [`MercadoPagoClient`] for
//! interacting with the MercadoPago API.
//!
//! # Example
//!
//! ```no_run
//! use mercadopago_rs::{ClientConfig, Credentials, MercadoPagoClient};
//! use mercadopago_rs::models::PreferenceId;
//!
//! # async fn example() -> mercadopago_rs::Result<()> {
//! let client = MercadoPagoClient::with_config(
//!     Credentials::new("client-id", "client-secret"),
//!     ClientConfig::from_env()?,
//! ).await?;
//!
//! let preference = client.get_preference(&PreferenceId::new("123-abc")).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;

pub use config::{ClientConfig, Credentials, DEFAULT_API_URL};
pub use http::MercadoPagoClient;
pub use paginated::{collect_pages, DEFAULT_PAGE_SIZE};
pub(crate) use http::{ClientInner, Transport};
