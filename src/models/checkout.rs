//! Checkout preference models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::primitives::PreferenceId;

/// A checkout preference to be created.
///
/// # Example
///
/// ```
/// use mercadopago_rs::models::{BackUrls, Item, Payer, PaymentRequest};
/// use rust_decimal_macros::dec;
///
/// let request = PaymentRequest {
///     external_reference: Some("OPERATION-ID-1234".to_string()),
///     items: vec![Item::new("Example T-Shirt", 1, dec!(0.50), "BRL")],
///     payer: Some(Payer::new("buyer@email.com")),
///     back_urls: Some(BackUrls {
///         success: Some("http://www.site.com/success".to_string()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Seller-side reference to correlate payments with orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Items being paid for
    #[serde(default)]
    pub items: Vec<Item>,
    /// Buyer information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<Payer>,
    /// Where to send the buyer after checkout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_urls: Option<BackUrls>,
    /// `approved` to redirect automatically on approval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_return: Option<String>,
    /// URL that receives IPN notifications for this preference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
}

/// A line item of a checkout preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Seller-side item code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Item title shown at checkout
    pub title: String,
    /// Longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of units
    pub quantity: u32,
    /// Price per unit
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// ISO 4217 currency code, e.g. `BRL` or `ARS`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    /// Image shown at checkout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

impl Item {
    /// Create an item with the required fields.
    pub fn new(
        title: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
        currency_id: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            quantity,
            unit_price,
            currency_id: Some(currency_id.into()),
            picture_url: None,
        }
    }

    /// Total price of this line (`quantity * unit_price`).
    pub fn total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Buyer information attached to a preference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payer {
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Payer {
    /// Create a payer identified by email only.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }
}

/// Redirect targets after checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackUrls {
    /// Used while the payment is still pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<String>,
    /// Used after an approved payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    /// Used after a rejected or cancelled payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// A checkout preference as stored by MercadoPago.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preference {
    /// Preference id
    pub id: PreferenceId,
    /// Checkout URL to send the buyer to
    #[serde(default)]
    pub init_point: Option<String>,
    /// Checkout URL for sandbox testing
    #[serde(default)]
    pub sandbox_init_point: Option<String>,
    /// Seller-side reference
    #[serde(default)]
    pub external_reference: Option<String>,
    /// Items of the preference
    #[serde(default)]
    pub items: Vec<Item>,
    /// Buyer information
    #[serde(default)]
    pub payer: Option<Payer>,
    /// Redirect targets
    #[serde(default)]
    pub back_urls: Option<BackUrls>,
    /// Remaining fields of the provider payload
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_payment_request_wire_shape() {
        let request = PaymentRequest {
            external_reference: Some("OPERATION-ID-1234".to_string()),
            items: vec![Item {
                id: Some("Código 123".to_string()),
                description: Some("Red XL T-Shirt".to_string()),
                ..Item::new("Example T-Shirt", 1, dec!(0.50), "BRL")
            }],
            payer: Some(Payer {
                name: Some("John".to_string()),
                surname: Some("Mikel".to_string()),
                email: Some("buyer@email.com".to_string()),
            }),
            back_urls: Some(BackUrls {
                pending: Some("https://www.site.com/pending".to_string()),
                success: None,
                failure: None,
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "external_reference": "OPERATION-ID-1234",
                "items": [{
                    "id": "Código 123",
                    "title": "Example T-Shirt",
                    "description": "Red XL T-Shirt",
                    "quantity": 1,
                    "unit_price": 0.5,
                    "currency_id": "BRL"
                }],
                "payer": {"name": "John", "surname": "Mikel", "email": "buyer@email.com"},
                "back_urls": {"pending": "https://www.site.com/pending"}
            })
        );
    }

    #[test]
    fn test_item_total() {
        let item = Item::new("Mug", 3, dec!(12.99), "ARS");
        assert_eq!(item.total(), dec!(38.97));
    }

    #[test]
    fn test_preference_keeps_unknown_fields() {
        let preference: Preference = serde_json::from_value(json!({
            "id": "123-abc",
            "init_point": "https://www.mercadopago.com/mlb/checkout/start?pref_id=123-abc",
            "collector_id": 202809963,
            "items": [{"title": "Mug", "quantity": 1, "unit_price": 10.5}]
        }))
        .unwrap();

        assert_eq!(preference.id.as_str(), "123-abc");
        assert_eq!(preference.items[0].unit_price, dec!(10.5));
        assert_eq!(preference.extra.get("collector_id"), Some(&json!(202809963)));
    }
}
