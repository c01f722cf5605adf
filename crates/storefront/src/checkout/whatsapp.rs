//! WhatsApp order hand-off.
//!
//! The store takes orders over WhatsApp: a finalized order is rendered as a
//! WhatsApp-formatted text message (asterisks for bold) and wrapped in a
//! `wa.me` deep link the customer opens to send it.

use url::Url;

use deneth_core::{Order, PaymentMethod};

/// Render an order as the outbound WhatsApp message body.
///
/// SOLO orders carry the payment reference and a pending-confirmation status
/// line so staff know to verify the transfer before dispatch.
#[must_use]
pub fn order_message(order: &Order) -> String {
    let heading = match order.payment {
        PaymentMethod::SoloApp => format!("*New Order (SOLO Payment): {}*", order.order_number),
        _ => format!("*New Order: {}*", order.order_number),
    };

    let items = order
        .items
        .iter()
        .map(|item| {
            format!(
                "- {} ({}, {}) x{}",
                item.product.name, item.size, item.color, item.quantity
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut message = format!(
        "{heading}\n\n\
         *Customer:* {name}\n\
         *Phone:* {phone}\n\
         *Address:* {address}, {city}, {district}\n\n\
         *Order Details:*\n{items}\n\n\
         *Subtotal:* {subtotal}\n\
         *Delivery ({district}):* {fee}\n\
         *Total Amount:* {total}\n\n\
         *Payment Method:* {payment}",
        name = order.customer.full_name(),
        phone = order.customer.phone,
        address = order.customer.address,
        city = order.customer.city,
        district = order.customer.district,
        subtotal = order.subtotal,
        fee = order.delivery_fee,
        total = order.grand_total,
        payment = order.payment.label(),
    );

    if let Some(reference) = &order.payment_reference {
        message.push_str(&format!(
            "\n*SOLO Reference:* {reference}\n*Status:* Payment Pending Confirmation"
        ));
    }

    message
}

/// Build the `wa.me` deep link that opens WhatsApp with the message prefilled.
///
/// # Errors
///
/// Returns an error if the configured number does not form a valid URL.
pub fn order_link(whatsapp_number: &str, order: &Order) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("https://wa.me/{whatsapp_number}"))?;
    url.query_pairs_mut()
        .append_pair("text", &order_message(order));
    Ok(url)
}
