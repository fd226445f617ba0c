//! 点单页面渲染
//!
//! 页面是服务端拼接的 HTML，每次 GET / 时根据会话状态整页渲染：
//!
//! 1. 没有桌号时显示桌号输入框 (POST /table)
//! 2. 未配置店主号码时显示警告，点单流程整体禁用
//! 3. 当前分类的菜品 (勾选框 + 数量) 和翻页按钮 (POST /items)
//! 4. 订单汇总
//! 5. 姓名/日期和提交按钮 (POST /order)，以及提交后的收据下载和 WhatsApp 链接
//!
//! 3-5 在同一个表单里，提交订单时当前分类的勾选状态一起提交。

mod html;

pub use html::escape_html;

use axum::response::Html;
use chrono::NaiveDate;
use shared::Menu;
use shared::models::display_amount;

use crate::session::controls::{checkbox_field, quantity_field};
use crate::session::{Notice, OrderSession};
use html::{STYLE, checked_attr, disabled_attr, notice};

pub const OWNER_MISSING_WARNING: &str =
    "Set OWNER_WHATSAPP_NUMBER in .env file to enable WhatsApp messaging.";
pub const ORDERING_UNAVAILABLE: &str =
    "Please enter table number and ensure OWNER_WHATSAPP_NUMBER is set in .env.";
pub const EXPLORE_HINT: &str = "Explore more dishes by going to the arrow →";
pub const EMPTY_CART: &str = "No items selected yet.";

/// Everything one render needs
pub struct PageView<'a> {
    pub restaurant_name: &'a str,
    pub ordering_enabled: bool,
    pub menu: &'a Menu,
    pub session: &'a OrderSession,
    /// Pre-filled order date when the diner has not picked one
    pub today: NaiveDate,
}

impl PageView<'_> {
    pub fn render(&self) -> Html<String> {
        Html(render_page(self))
    }
}

pub fn render_page(view: &PageView<'_>) -> String {
    let title = escape_html(&format!("{} Order", view.restaurant_name));
    let mut body = format!("<h1>{}</h1>", escape_html(view.restaurant_name));

    let table = view.session.table_number.as_deref();
    if table.is_none() {
        body.push_str(&table_form());
    }
    if !view.ordering_enabled {
        body.push_str(&notice("warning", OWNER_MISSING_WARNING));
    }

    match table {
        Some(table) if view.ordering_enabled => {
            body.push_str(&format!("<h2>Table: {}</h2>", escape_html(table)));
            body.push_str(&notice("info", EXPLORE_HINT));
            body.push_str("<form method=\"post\" action=\"/items\">");
            body.push_str(&category_controls(view));
            body.push_str(&order_summary(view.session));
            body.push_str(&details_fields(view));
            body.push_str("</form>");
            body.push_str(&error_notice(view.session));
            body.push_str(&confirmation_links(view.session));
        }
        _ => {
            body.push_str(&error_notice(view.session));
            body.push_str(&notice("warning", ORDERING_UNAVAILABLE));
        }
    }

    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{}</title><style>{}</style></head><body>{}</body></html>",
        title, STYLE, body
    )
}

fn table_form() -> String {
    "<form method=\"post\" action=\"/table\">\
<label for=\"table\">Enter your table number:</label> \
<input id=\"table\" name=\"table\" type=\"text\" placeholder=\"e.g. 4\" required> \
<button type=\"submit\">OK</button></form>"
        .to_string()
}

fn category_controls(view: &PageView<'_>) -> String {
    let session = view.session;
    let navigator = &session.navigator;
    let Some(category) = navigator.current(view.menu) else {
        return String::new();
    };
    let max = session.cart.max_quantity();

    let mut form = format!("<h3>{}</h3>", escape_html(&category.name));
    for item in &category.items {
        let control = session.control(item.id);
        form.push_str(&format!(
            "<div class=\"item\"><label><input type=\"checkbox\" name=\"{checkbox}\"{checked}> {name} - Rs. {price}</label>\
<input type=\"number\" name=\"{qty}\" min=\"0\" max=\"{max}\" value=\"{value}\" aria-label=\"Qty (for {name})\"></div>",
            checkbox = checkbox_field(item.id),
            checked = checked_attr(control.selected),
            name = escape_html(&item.name),
            price = display_amount(item.price),
            qty = quantity_field(item.id),
            max = max,
            value = control.quantity.min(max),
        ));
    }
    // 第一个提交按钮是回车时的默认动作
    form.push_str(&format!(
        "<div class=\"nav\">\
<button type=\"submit\" name=\"action\" value=\"update\">Update order</button>\
<button type=\"submit\" name=\"action\" value=\"prev\"{}>← Previous</button>\
<button type=\"submit\" name=\"action\" value=\"next\"{}>Next →</button>\
</div>",
        disabled_attr(!navigator.has_previous()),
        disabled_attr(!navigator.has_next()),
    ));
    form
}

fn order_summary(session: &OrderSession) -> String {
    if session.cart.is_empty() {
        return notice("info", EMPTY_CART);
    }
    let items: String = session
        .cart
        .summary_lines()
        .map(|line| format!("<li>{}</li>", escape_html(&line)))
        .collect();
    format!(
        "<h3>Order Summary</h3><ul>{}</ul><p class=\"total\">Total: Rs. {}</p>",
        items,
        display_amount(session.cart.total())
    )
}

fn details_fields(view: &PageView<'_>) -> String {
    let session = view.session;
    let date = session.order_date.unwrap_or(view.today);
    format!(
        "<h2>Enter Your Details for Receipt</h2>\
<p><label for=\"name\">Name</label> <input id=\"name\" name=\"name\" type=\"text\" value=\"{}\"></p>\
<p><label for=\"date\">Order Date</label> <input id=\"date\" name=\"date\" type=\"date\" value=\"{}\"></p>\
<button type=\"submit\" name=\"action\" value=\"order\" formaction=\"/order\">\
Generate Receipt &amp; Send to Owner</button>",
        escape_html(&session.customer_name),
        date.format("%Y-%m-%d")
    )
}

fn error_notice(session: &OrderSession) -> String {
    match &session.notice {
        Some(Notice::Error(message)) => notice("error", message),
        None => String::new(),
    }
}

fn confirmation_links(session: &OrderSession) -> String {
    let mut out = String::new();
    if let Some(confirmation) = &session.confirmation {
        out.push_str(&format!(
            "<p><a href=\"/receipt.pdf\" download=\"receipt.pdf\">Download Receipt PDF</a></p>\
<p><a href=\"{}\" target=\"_blank\" rel=\"noopener\">Send order to Owner on WhatsApp 📲</a></p>",
            escape_html(&confirmation.whatsapp_link)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Confirmation, ItemControl};
    use rust_decimal::Decimal;

    const MENU: &str = r#"{
        "Drinks": [
            {"id": 1, "name": "Kopi O", "price": 120},
            {"id": 2, "name": "Teh <Tarik>", "price": 80.50}
        ],
        "Toast": [
            {"id": 3, "name": "Kaya Toast", "price": 90}
        ]
    }"#;

    fn menu() -> Menu {
        Menu::from_json_str(MENU).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn render(menu: &Menu, session: &OrderSession, ordering_enabled: bool) -> String {
        render_page(&PageView {
            restaurant_name: "The Kopi Spot",
            ordering_enabled,
            menu,
            session,
            today: today(),
        })
    }

    #[test]
    fn test_prompts_for_table() {
        let menu = menu();
        let session = OrderSession::new(menu.len(), 10);
        let page = render(&menu, &session, true);

        assert!(page.contains("<title>The Kopi Spot Order</title>"));
        assert!(page.contains("action=\"/table\""));
        assert!(page.contains(ORDERING_UNAVAILABLE));
        assert!(!page.contains("action=\"/items\""));
    }

    #[test]
    fn test_degraded_without_owner() {
        let menu = menu();
        let mut session = OrderSession::new(menu.len(), 10);
        session.set_table("4");
        let page = render(&menu, &session, false);

        assert!(page.contains(OWNER_MISSING_WARNING));
        assert!(page.contains(ORDERING_UNAVAILABLE));
        assert!(!page.contains("action=\"/table\""));
        assert!(!page.contains("formaction=\"/order\""));
    }

    #[test]
    fn test_items_and_details_share_one_form() {
        let menu = menu();
        let mut session = OrderSession::new(menu.len(), 10);
        session.set_table("4");
        let page = render(&menu, &session, true);

        let start = page.find("action=\"/items\"").unwrap();
        let end = start + page[start..].find("</form>").unwrap();
        let form = &page[start..end];
        assert!(form.contains("name=\"item-1\""));
        assert!(form.contains("name=\"qty-2\""));
        assert!(form.contains("name=\"name\""));
        assert!(form.contains("name=\"date\""));
        assert!(form.contains("value=\"order\" formaction=\"/order\""));
        assert_eq!(page.matches("<form").count(), 1);
    }

    #[test]
    fn test_notice_shown_without_table() {
        let menu = menu();
        let mut session = OrderSession::new(menu.len(), 10);
        session.notice = Some(Notice::Error("Please enter your table number first.".into()));
        let page = render(&menu, &session, true);

        assert!(page.contains("<div class=\"notice error\">Please enter your table number first.</div>"));
        assert!(page.contains("action=\"/table\""));
    }

    #[test]
    fn test_first_category() {
        let menu = menu();
        let mut session = OrderSession::new(menu.len(), 10);
        session.set_table("4");
        let page = render(&menu, &session, true);

        assert!(page.contains("<h2>Table: 4</h2>"));
        assert!(page.contains(EXPLORE_HINT));
        assert!(page.contains("<h3>Drinks</h3>"));
        assert!(page.contains("Kopi O - Rs. 120"));
        assert!(page.contains("Teh &lt;Tarik&gt; - Rs. 80.5"));
        assert!(!page.contains("Kaya Toast"));
        assert!(page.contains("name=\"qty-1\" min=\"0\" max=\"10\" value=\"0\""));
        assert!(page.contains("value=\"prev\" disabled>"));
        assert!(page.contains("value=\"next\">"));
        assert!(page.contains(EMPTY_CART));
        assert!(page.contains("value=\"2024-06-01\""));
    }

    #[test]
    fn test_controls_and_summary_rendered() {
        let menu = menu();
        let mut session = OrderSession::new(menu.len(), 10);
        session.set_table("4");
        session.controls.insert(
            1,
            ItemControl {
                selected: true,
                quantity: 2,
            },
        );
        let kopi = menu.item(1).unwrap().clone();
        session.cart.set_item(&kopi, true, 2);

        let page = render(&menu, &session, true);
        assert!(page.contains("name=\"item-1\" checked>"));
        assert!(page.contains("name=\"qty-1\" min=\"0\" max=\"10\" value=\"2\""));
        assert!(page.contains("<li>2 x Kopi O @ Rs. 120</li>"));
        assert!(page.contains("Total: Rs. 240"));
        assert_eq!(session.cart.total(), Decimal::from(240));
    }

    #[test]
    fn test_last_category_disables_next() {
        let menu = menu();
        let mut session = OrderSession::new(menu.len(), 10);
        session.set_table("4");
        session.navigator.next();
        let page = render(&menu, &session, true);

        assert!(page.contains("<h3>Toast</h3>"));
        assert!(page.contains("value=\"prev\">"));
        assert!(page.contains("value=\"next\" disabled>"));
    }

    #[test]
    fn test_notice_and_confirmation() {
        let menu = menu();
        let mut session = OrderSession::new(menu.len(), 10);
        session.set_table("4");
        session.customer_name = "Tan \"Ah\" Kow".into();
        session.notice = Some(Notice::Error("Please enter your name.".into()));
        session.confirmation = Some(Confirmation {
            whatsapp_link: "https://wa.me/60?text=a%20b&x=1".into(),
        });
        let page = render(&menu, &session, true);

        assert!(page.contains("<div class=\"notice error\">Please enter your name.</div>"));
        assert!(page.contains("value=\"Tan &quot;Ah&quot; Kow\""));
        assert!(page.contains("href=\"/receipt.pdf\""));
        assert!(page.contains("href=\"https://wa.me/60?text=a%20b&amp;x=1\""));
    }
}
