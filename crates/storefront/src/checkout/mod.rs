//! Checkout flow.
//!
//! Drives a cart through shipping details, payment selection, and the final
//! WhatsApp hand-off. Cash on delivery completes in one step; SOLO app
//! payment parks the flow awaiting an out-of-band confirmation, and the cart
//! is only cleared once an order actually completes.

pub mod delivery;
pub mod whatsapp;

use chrono::{Days, NaiveDate, Utc};
use rand::Rng;
use thiserror::Error;
use tracing::{info, instrument};
use url::Url;

use deneth_core::{Customer, Order, PaymentMethod, Rupees};

use crate::cart::{CartStore, StorageError};

/// Days between order confirmation and estimated delivery.
const DELIVERY_LEAD_DAYS: u64 = 3;

/// Errors raised while driving the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// One or more required shipping fields are blank.
    #[error("missing required shipping fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),

    /// Submission with nothing in the cart.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// The selected payment method cannot complete an order yet.
    #[error("payment method {} is not available", .0.label())]
    PaymentMethodUnavailable(PaymentMethod),

    /// Payment confirmation outside the awaiting-payment step.
    #[error("no payment is awaiting confirmation")]
    NotAwaitingPayment,

    /// The cart snapshot could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The configured WhatsApp number does not form a valid link.
    #[error("invalid WhatsApp link: {0}")]
    InvalidLink(#[from] url::ParseError),
}

/// Shipping details captured by the checkout form.
///
/// Email is the only optional field; district defaults to the store's
/// primary delivery zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub email: Option<String>,
}

impl Default for ShippingForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            district: delivery::DEFAULT_DISTRICT.to_string(),
            email: None,
        }
    }
}

impl ShippingForm {
    /// Names of required fields that are blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
        ];
        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    fn to_customer(&self) -> Customer {
        Customer {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            district: self.district.clone(),
            email: self
                .email
                .as_deref()
                .map(str::trim)
                .filter(|email| !email.is_empty())
                .map(ToString::to_string),
        }
    }
}

/// Where the flow currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    /// Customer is filling in shipping and payment details.
    Editing,
    /// A SOLO payment is pending; the cart stays intact until confirmed.
    AwaitingPaymentConfirmation { reference: String },
    /// Order placed and handed off.
    Complete(Box<Order>),
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// SOLO payment started; confirm or cancel next.
    AwaitingPayment { reference: String },
    /// Order finalized; the link opens WhatsApp with the order message.
    Completed { order: Order, whatsapp_link: Url },
}

/// One checkout session over a cart.
#[derive(Debug)]
pub struct CheckoutFlow {
    form: ShippingForm,
    payment: PaymentMethod,
    whatsapp_number: String,
    state: CheckoutState,
}

impl CheckoutFlow {
    /// Start a fresh checkout session.
    #[must_use]
    pub fn new(whatsapp_number: impl Into<String>) -> Self {
        Self {
            form: ShippingForm::default(),
            payment: PaymentMethod::default(),
            whatsapp_number: whatsapp_number.into(),
            state: CheckoutState::Editing,
        }
    }

    #[must_use]
    pub const fn form(&self) -> &ShippingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ShippingForm {
        &mut self.form
    }

    #[must_use]
    pub const fn state(&self) -> &CheckoutState {
        &self.state
    }

    #[must_use]
    pub const fn payment(&self) -> PaymentMethod {
        self.payment
    }

    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment = method;
    }

    /// Delivery fee for the district currently on the form.
    #[must_use]
    pub fn delivery_fee(&self) -> Rupees {
        delivery::fee_for(&self.form.district)
    }

    /// Cart subtotal plus the current delivery fee.
    #[must_use]
    pub fn grand_total(&self, cart: &CartStore) -> Rupees {
        cart.total() + self.delivery_fee()
    }

    /// Submit the order.
    ///
    /// Cash on delivery finalizes immediately and clears the cart. SOLO app
    /// payment issues a reference and parks the flow in
    /// [`CheckoutState::AwaitingPaymentConfirmation`] without touching the
    /// cart. Card is offered on the form but cannot complete yet.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are blank, the cart is empty, the
    /// payment method is unavailable, or the cleared cart cannot be
    /// persisted.
    #[instrument(skip(self, cart))]
    pub fn submit(&mut self, cart: &mut CartStore) -> Result<Submission, CheckoutError> {
        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            return Err(CheckoutError::MissingRequiredFields(missing));
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        match self.payment {
            PaymentMethod::Card => Err(CheckoutError::PaymentMethodUnavailable(self.payment)),
            PaymentMethod::SoloApp => {
                let reference = generate_solo_reference();
                info!(reference, "SOLO payment started");
                self.state = CheckoutState::AwaitingPaymentConfirmation {
                    reference: reference.clone(),
                };
                Ok(Submission::AwaitingPayment { reference })
            }
            PaymentMethod::CashOnDelivery => self.finalize(cart, None),
        }
    }

    /// Confirm an awaited SOLO payment and finalize the order.
    ///
    /// # Errors
    ///
    /// Returns an error if no payment is awaiting confirmation or the
    /// cleared cart cannot be persisted.
    #[instrument(skip(self, cart))]
    pub fn confirm_payment(&mut self, cart: &mut CartStore) -> Result<Submission, CheckoutError> {
        let reference = match &self.state {
            CheckoutState::AwaitingPaymentConfirmation { reference } => reference.clone(),
            _ => return Err(CheckoutError::NotAwaitingPayment),
        };
        self.finalize(cart, Some(reference))
    }

    /// Abandon an awaited SOLO payment and return to editing.
    ///
    /// The cart is untouched; the customer can switch method and resubmit.
    pub fn cancel_payment(&mut self) {
        if matches!(self.state, CheckoutState::AwaitingPaymentConfirmation { .. }) {
            self.state = CheckoutState::Editing;
        }
    }

    fn finalize(
        &mut self,
        cart: &mut CartStore,
        payment_reference: Option<String>,
    ) -> Result<Submission, CheckoutError> {
        let subtotal = cart.total();
        let delivery_fee = self.delivery_fee();
        let order = Order {
            order_number: generate_order_number(),
            delivery_date: format_delivery_date(estimated_delivery_date()),
            items: cart.items().to_vec(),
            subtotal,
            delivery_fee,
            grand_total: subtotal + delivery_fee,
            customer: self.form.to_customer(),
            payment: self.payment,
            payment_reference,
        };

        let whatsapp_link = whatsapp::order_link(&self.whatsapp_number, &order)?;

        cart.clear()?;
        info!(
            order_number = %order.order_number,
            total = %order.grand_total,
            payment = order.payment.label(),
            "Order placed"
        );
        self.state = CheckoutState::Complete(Box::new(order.clone()));

        Ok(Submission::Completed {
            order,
            whatsapp_link,
        })
    }
}

/// `ORD-` plus six random digits.
fn generate_order_number() -> String {
    format!("ORD-{}", rand::rng().random_range(100_000..1_000_000))
}

/// `SOLO-` plus four random digits.
fn generate_solo_reference() -> String {
    format!("SOLO-{}", rand::rng().random_range(1_000..10_000))
}

fn estimated_delivery_date() -> NaiveDate {
    Utc::now().date_naive() + Days::new(DELIVERY_LEAD_DAYS)
}

/// Format a delivery date for display, e.g. `"Monday, September 1"`.
#[must_use]
pub fn format_delivery_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}
