//! Owner notification
//!
//! Builds the pre-filled WhatsApp deep link for a submitted order. Nothing is
//! sent from the server; the diner's own WhatsApp client sends the message
//! after they tap the link.

use rust_decimal::Decimal;
use shared::models::display_amount;
use shared::{CartLine, Order};

const WHATSAPP_BASE: &str = "https://wa.me";

/// Plain-text message for the owner
///
/// ```text
/// New Order!
/// Table: 4
/// Name: Aisyah
/// Details:
/// 2x Kopi O
/// Total: Rs. 240
/// ```
pub fn compose_message(table: &str, customer_name: &str, lines: &[CartLine], total: Decimal) -> String {
    let details = lines
        .iter()
        .map(|line| format!("{}x {}", line.quantity, line.name))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "New Order!\nTable: {}\nName: {}\nDetails:\n{}\nTotal: Rs. {}",
        table,
        customer_name,
        details,
        display_amount(total)
    )
}

/// `https://wa.me/{number}?text={percent-encoded message}`
pub fn whatsapp_link(owner_number: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE,
        owner_number,
        urlencoding::encode(message)
    )
}

/// Deep link announcing `order` to the owner
pub fn order_link(owner_number: &str, order: &Order) -> String {
    let message = compose_message(
        &order.table_number,
        &order.customer_name,
        &order.lines,
        order.total,
    );
    whatsapp_link(owner_number, &message)
}
