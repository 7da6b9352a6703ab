//! HTML-entity escaping and lenient date parsing for submitted strings.

/// Escape the characters that are significant in HTML markup.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('/', "&#x2F;")
        .replace('\\', "&#x5C;")
        .replace('`', "&#96;")
}

/// Parse a historical date field.
///
/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp. Blank or
/// unparseable input is treated as absent.
pub fn parse_optional_date(raw: Option<&str>) -> Option<chrono::NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
