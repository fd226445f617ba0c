//! Table URL shape
//!
//! The QR generator and the ordering page only agree on this: a table's
//! QR code points at `{base_url}/?table={n}`.

/// Query parameter carrying the table number
pub const TABLE_QUERY_PARAM: &str = "table";

/// Build the ordering page URL for a table
///
/// A trailing `/` on `base_url` is dropped so the result never contains `//?`.
pub fn table_url(base_url: &str, table: u32) -> String {
    format!(
        "{}/?{}={}",
        base_url.trim_end_matches('/'),
        TABLE_QUERY_PARAM,
        table
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url() {
        assert_eq!(
            table_url("http://localhost:8501", 4),
            "http://localhost:8501/?table=4"
        );
    }

    #[test]
    fn test_table_url_trailing_slash() {
        assert_eq!(
            table_url("https://kopi.example.com/", 12),
            "https://kopi.example.com/?table=12"
        );
    }
}
