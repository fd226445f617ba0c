//! Ordering Page Handlers

use axum::{
    Extension, Form,
    extract::{Query, State},
    response::{Html, Redirect, Response},
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use shared::{AppError, AppResult};

use crate::core::ServerState;
use crate::notify;
use crate::page::PageView;
use crate::receipt::receipt_response;
use crate::session::controls::form_field;
use crate::session::{Confirmation, ItemsForm, Notice, OrderSession, SessionId};

pub const INVALID_DATE: &str = "Please enter a valid order date.";

/// `?table=` (QR 链接带入)
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    table: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TableForm {
    #[serde(default)]
    table: String,
}

/// GET / - 点单页面
pub async fn index(
    State(state): State<ServerState>,
    Extension(id): Extension<SessionId>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let today = Local::now().date_naive();
    state.sessions.with_session(&id, |session| {
        if let Some(table) = query.table.as_deref()
            && session.set_table(table)
        {
            tracing::debug!(session = %id, table = %table.trim(), "Table from link");
        }

        let page = PageView {
            restaurant_name: &state.config.restaurant_name,
            ordering_enabled: state.config.ordering_enabled(),
            menu: &state.menu,
            session,
            today,
        }
        .render();

        session.clear_one_shot();
        page
    })
}

/// POST /table - 手动输入桌号
pub async fn set_table(
    State(state): State<ServerState>,
    Extension(id): Extension<SessionId>,
    Form(form): Form<TableForm>,
) -> Redirect {
    state.sessions.with_session(&id, |session| {
        if session.set_table(&form.table) {
            tracing::info!(session = %id, table = %form.table.trim(), "Table entered");
        }
    });
    Redirect::to("/")
}

/// POST /items - 保存当前分类的勾选/数量，然后按 action 翻页
///
/// 同一个表单里还有姓名和日期，翻页时一并记住。
pub async fn update_items(
    State(state): State<ServerState>,
    Extension(id): Extension<SessionId>,
    Form(fields): Form<Vec<(String, String)>>,
) -> AppResult<Redirect> {
    state.owner_number()?;

    state.sessions.with_session(&id, |session| {
        if session.require_table().is_err() {
            tracing::debug!(session = %id, "Item update without table");
            return;
        }
        if let Some(category) = session.navigator.current(&state.menu) {
            let form = ItemsForm::parse(&fields, category, state.config.max_quantity);
            session.apply_items(category, &form);
        }

        if let Some(name) = form_field(&fields, "name") {
            session.customer_name = name.trim().to_string();
        }
        if let Some(date) = form_field(&fields, "date")
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
        {
            session.order_date = Some(date);
        }
    });
    Ok(Redirect::to("/"))
}

/// POST /order - 提交订单，生成 WhatsApp 链接
///
/// 先保存随表单提交的当前分类勾选/数量，再验证。验证失败 (没有桌号、
/// 姓名为空、购物车为空、日期无效) 时写入会话提示。
pub async fn submit_order(
    State(state): State<ServerState>,
    Extension(id): Extension<SessionId>,
    Form(fields): Form<Vec<(String, String)>>,
) -> AppResult<Redirect> {
    let owner = state.owner_number()?;
    let today = Local::now().date_naive();
    let name = form_field(&fields, "name").unwrap_or_default();

    state.sessions.with_session(&id, |session| {
        session.confirmation = None;
        if session.require_table().is_err() {
            tracing::debug!(session = %id, "Order without table");
            return;
        }
        apply_submitted_items(&state, session, &fields);

        let date = match parse_order_date(form_field(&fields, "date").unwrap_or_default(), today) {
            Ok(date) => date,
            Err(e) => {
                session.customer_name = name.trim().to_string();
                session.notice = Some(Notice::Error(e.to_string()));
                return;
            }
        };

        match session.submit(name, date) {
            Ok(order) => {
                tracing::info!(
                    session = %id,
                    table = %order.table_number,
                    lines = order.lines.len(),
                    total = %order.total,
                    "Order submitted"
                );
                session.confirmation = Some(Confirmation {
                    whatsapp_link: notify::order_link(owner, &order),
                });
            }
            Err(e) => tracing::debug!(session = %id, error = %e, "Order rejected"),
        }
    });
    Ok(Redirect::to("/"))
}

/// 把随订单提交的当前分类控件写入购物车 (表单里没有这些字段时不动)
fn apply_submitted_items(state: &ServerState, session: &mut OrderSession, fields: &[(String, String)]) {
    if let Some(category) = session.navigator.current(&state.menu)
        && ItemsForm::is_present(fields, category)
    {
        let form = ItemsForm::parse(fields, category, state.config.max_quantity);
        session.apply_items(category, &form);
    }
}

/// GET /receipt.pdf - 下载最近一次提交的收据
pub async fn download_receipt(
    State(state): State<ServerState>,
    Extension(id): Extension<SessionId>,
) -> AppResult<Response> {
    let order = state
        .sessions
        .with_session(&id, |session| session.last_order.clone())
        .ok_or_else(|| AppError::not_found("No receipt has been generated yet"))?;

    Ok(receipt_response(state.receipts.render(&order)))
}

/// 表单日期 (`YYYY-MM-DD`)；为空时使用今天
pub fn parse_order_date(raw: &str, today: NaiveDate) -> AppResult<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(today);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| AppError::validation(INVALID_DATE))
}
