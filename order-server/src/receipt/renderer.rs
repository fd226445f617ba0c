//! Customer receipt renderer
//!
//! Renders an Order into a one-page (or longer) A4 PDF.

use kopi_pdf::{Align, Font, PdfBuilder, Rgb};
use shared::Order;
use shared::models::display_amount;

const BACKGROUND: Rgb = Rgb(245, 245, 245);
const TITLE_BLUE: Rgb = Rgb(0, 102, 204);
const LABEL_WIDTH: f64 = 50.0;
const VALUE_WIDTH: f64 = 100.0;
const ROW_HEIGHT: f64 = 10.0;

/// Receipt renderer
#[derive(Debug, Clone)]
pub struct ReceiptRenderer {
    restaurant_name: String,
}

impl ReceiptRenderer {
    pub fn new(restaurant_name: impl Into<String>) -> Self {
        Self {
            restaurant_name: restaurant_name.into(),
        }
    }

    /// Render an order to PDF bytes
    pub fn render(&self, order: &Order) -> Vec<u8> {
        let mut b = PdfBuilder::new();
        b.page_background(BACKGROUND, 5.0);

        self.render_header(&mut b);
        self.render_details(&mut b, order);
        self.render_items(&mut b, order);
        self.render_footer(&mut b);

        tracing::debug!(
            table = %order.table_number,
            lines = order.lines.len(),
            pages = b.page_count(),
            "Receipt rendered"
        );
        b.build()
    }

    fn render_header(&self, b: &mut PdfBuilder) {
        b.font(Font::Bold, 18.0);
        b.text_color(TITLE_BLUE);
        b.cell_ln(0.0, 20.0, "Payment Receipt", Align::Center);
        b.text_color(Rgb::BLACK);
        b.ln(10.0);
    }

    fn render_details(&self, b: &mut PdfBuilder, order: &Order) {
        b.font(Font::Regular, 14.0);
        let rows = [
            ("Name:", order.customer_name.clone()),
            ("Table:", order.table_number.clone()),
            ("Order Date:", order.date.format("%Y-%m-%d").to_string()),
            ("Amount Paid:", format!("Rs. {}", display_amount(order.total))),
        ];
        for (label, value) in rows {
            b.cell(LABEL_WIDTH, ROW_HEIGHT, label, Align::Left);
            b.cell_ln(VALUE_WIDTH, ROW_HEIGHT, &value, Align::Left);
        }
        b.ln(5.0);
    }

    fn render_items(&self, b: &mut PdfBuilder, order: &Order) {
        b.font(Font::Bold, 14.0);
        b.cell_ln(0.0, ROW_HEIGHT, "Order Details:", Align::Left);

        b.font(Font::Regular, 12.0);
        for line in order.summary_lines() {
            b.multi_cell(ROW_HEIGHT, &format!("- {}", line));
        }
    }

    fn render_footer(&self, b: &mut PdfBuilder) {
        b.ln(10.0);
        b.font(Font::Italic, 12.0);
        b.cell_ln(
            0.0,
            ROW_HEIGHT,
            &format!("Thank you for ordering from {}!", self.restaurant_name),
            Align::Left,
        );
    }
}
