//! Authentication and session management for the MercadoPago API.
//!
//! [`Authentication`] talks to the OAuth2 token endpoint and returns its
//! answers as data, failures included. [`Session`] keeps the token pair of
//! an authenticated [`MercadoPagoClient`](crate::MercadoPagoClient).
//!
//! ```no_run
//! use mercadopago_rs::{Credentials, MercadoPagoClient};
//!
//! # async fn example() -> mercadopago_rs::Result<()> {
//! let client = MercadoPagoClient::new(Credentials::new("client-id", "client-secret")).await?;
//!
//! // Later, swap the token pair for a fresh one
//! let refreshed = client.refresh_access_token().await?;
//! assert!(refreshed.is_success());
//! # Ok(())
//! # }
//! ```

mod oauth;
mod session;

pub use oauth::{Authentication, TokenResponse};
pub use session::Session;
