//! String formatting utilities for UI rendering.

use uuid::Uuid;

/// Characters of an entry id shown in tables and receipts.
pub const SHORT_ID_LEN: usize = 8;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// First eight hex digits of an entry id.
pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..SHORT_ID_LEN].to_string()
}

/// Placeholder for optional text columns such as customer phone.
pub fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// Make text safe for one table cell.
pub fn single_line(s: &str) -> String {
    s.replace(['\n', '\t'], " ").replace('\r', "")
}
