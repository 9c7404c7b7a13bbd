//! Checkout preferences service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{ApiResponse, PaymentRequest, Preference, PreferenceId};
use crate::Result;

/// Service for checkout preference operations.
///
/// # Example
///
/// ```no_run
/// use mercadopago_rs::models::{Item, PaymentRequest};
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: mercadopago_rs::MercadoPagoClient) -> mercadopago_rs::Result<()> {
/// let request = PaymentRequest {
///     items: vec![Item::new("Example T-Shirt", 1, dec!(0.50), "BRL")],
///     ..Default::default()
/// };
///
/// match client.checkout().create(&request).await?.into_result() {
///     Ok(preference) => println!("Send the buyer to {:?}", preference.init_point),
///     Err(body) => println!("Rejected: {}", body),
/// }
/// # Ok(())
/// # }
/// ```
pub struct CheckoutService {
    inner: Arc<ClientInner>,
}

impl CheckoutService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a checkout preference.
    pub async fn create(&self, request: &PaymentRequest) -> Result<ApiResponse<Preference>> {
        self.inner.post("/checkout/preferences", request).await
    }

    /// Get a checkout preference by id.
    pub async fn get(&self, id: &PreferenceId) -> Result<ApiResponse<Preference>> {
        self.inner.get(&Self::path(id)).await
    }

    /// Replace the mutable fields of an existing preference.
    pub async fn update(
        &self,
        id: &PreferenceId,
        request: &PaymentRequest,
    ) -> Result<ApiResponse<Preference>> {
        self.inner.put(&Self::path(id), request).await
    }

    fn path(id: &PreferenceId) -> String {
        format!("/checkout/preferences/{}", urlencoding::encode(id.as_str()))
    }
}
