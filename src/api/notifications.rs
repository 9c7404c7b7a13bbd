//! IPN notifications service.

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{ApiResponse, NotificationTopic};
use crate::Result;

/// Service that resolves IPN notifications into the resource they announce.
///
/// MercadoPago notifies with just an id and a topic; the payload has to be
/// fetched. Its shape depends on the topic, so it is returned as raw JSON.
///
/// # Example
///
/// ```no_run
/// use mercadopago_rs::models::NotificationTopic;
///
/// # async fn example(client: mercadopago_rs::MercadoPagoClient) -> mercadopago_rs::Result<()> {
/// // From an IPN request like `?id=849707350&topic=payment`
/// let topic: NotificationTopic = "payment".parse()?;
/// let payload = client.notifications().get(849707350u64, topic).await?;
/// # Ok(())
/// # }
/// ```
pub struct NotificationsService {
    inner: Arc<ClientInner>,
}

impl NotificationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the resource a notification refers to.
    pub async fn get(
        &self,
        id: impl Display,
        topic: NotificationTopic,
    ) -> Result<ApiResponse<Value>> {
        self.inner.get(&Self::path(&id, topic)).await
    }

    fn path(id: &dyn Display, topic: NotificationTopic) -> String {
        let id = id.to_string();
        let id = urlencoding::encode(&id);
        match topic {
            NotificationTopic::Payment => format!("/collections/notifications/{}", id),
            NotificationTopic::MerchantOrder => format!("/merchant_orders/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_by_topic() {
        assert_eq!(
            NotificationsService::path(&849707350u64, NotificationTopic::Payment),
            "/collections/notifications/849707350"
        );
        assert_eq!(
            NotificationsService::path(&61166827u64, NotificationTopic::MerchantOrder),
            "/merchant_orders/61166827"
        );
    }

    #[test]
    fn test_path_escapes_id() {
        assert_eq!(
            NotificationsService::path(&"123#frag", NotificationTopic::Payment),
            "/collections/notifications/123%23frag"
        );
    }
}
