//! HTML 片段工具

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<div class="notice {kind}">..</div>`
pub(crate) fn notice(kind: &str, text: &str) -> String {
    format!(
        "<div class=\"notice {}\">{}</div>",
        kind,
        escape_html(text)
    )
}

pub(crate) fn disabled_attr(disabled: bool) -> &'static str {
    if disabled { " disabled" } else { "" }
}

pub(crate) fn checked_attr(checked: bool) -> &'static str {
    if checked { " checked" } else { "" }
}

pub(crate) const STYLE: &str = "body{font-family:sans-serif;max-width:640px;margin:0 auto;padding:1rem;}\
.notice{padding:.6rem .8rem;border-radius:6px;margin:.6rem 0;}\
.warning{background:#fff4e5;color:#8a4b00;}\
.info{background:#e8f1fb;color:#0b4f8a;}\
.error{background:#fdecea;color:#8a1c12;}\
.item{display:flex;justify-content:space-between;align-items:center;margin:.4rem 0;}\
.item input[type=number]{width:4rem;}\
.nav{display:flex;gap:.5rem;margin-top:.8rem;}\
.total{font-weight:bold;}";
