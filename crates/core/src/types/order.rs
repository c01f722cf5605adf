//! Order snapshot types.
//!
//! An [`Order`] is ephemeral checkout output: it is constructed once per
//! successful submission, displayed for the rest of the session, and handed
//! off over WhatsApp. It is never persisted.

use serde::{Deserialize, Serialize};

use super::cart::CartItem;
use super::price::Rupees;

/// Payment method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Pay in cash when the courier arrives.
    #[default]
    CashOnDelivery,
    /// SOLO app QR payment, confirmed out-of-band.
    SoloApp,
    /// Card payments are not live yet; this option can never complete a
    /// submission.
    Card,
}

impl PaymentMethod {
    /// Human-readable label used in the outbound order message.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CashOnDelivery => "Cash on Delivery",
            Self::SoloApp => "SOLO App",
            Self::Card => "Online Payment",
        }
    }

    /// Whether the customer can actually pick this method.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !matches!(self, Self::Card)
    }
}

/// Customer shipping details captured by the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    /// Delivery district, one of the pricing-table regions.
    pub district: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Customer {
    /// Full display name, `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A finalized order snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Human-correlation number, `ORD-` plus six random digits.
    pub order_number: String,
    /// Estimated delivery date, pre-formatted for display
    /// (e.g. "Monday, September 1").
    pub delivery_date: String,
    /// Cart contents at the moment of submission.
    pub items: Vec<CartItem>,
    pub subtotal: Rupees,
    pub delivery_fee: Rupees,
    /// Always `subtotal + delivery_fee`.
    pub grand_total: Rupees,
    pub customer: Customer,
    pub payment: PaymentMethod,
    /// SOLO payment reference (`SOLO-` plus four digits); `None` for cash
    /// on delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_labels() {
        assert_eq!(PaymentMethod::CashOnDelivery.label(), "Cash on Delivery");
        assert_eq!(PaymentMethod::SoloApp.label(), "SOLO App");
        assert_eq!(PaymentMethod::Card.label(), "Online Payment");
    }

    #[test]
    fn test_card_is_not_selectable() {
        assert!(PaymentMethod::CashOnDelivery.is_selectable());
        assert!(PaymentMethod::SoloApp.is_selectable());
        assert!(!PaymentMethod::Card.is_selectable());
    }

    #[test]
    fn test_customer_full_name() {
        let customer = Customer {
            first_name: "Kasun".to_string(),
            last_name: "Perera".to_string(),
            phone: "071 234 5678".to_string(),
            address: "12 Galle Road".to_string(),
            city: "Nugegoda".to_string(),
            district: "Colombo (Suburb)".to_string(),
            email: None,
        };
        assert_eq!(customer.full_name(), "Kasun Perera");
    }
}
