// ============================================================
// SHEET TYPES
// ============================================================
// Tabular result payload and export-URL derivation
// No I/O, no async

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parsed contents of a fetched sheet, ready for JSON emission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetTable {
    /// Header row, in sheet order
    pub columns: Vec<String>,

    /// One object per data row; keys follow `columns`, values are
    /// always strings (missing cells become `""`, never null)
    pub data: Vec<Map<String, Value>>,
}

/// Rewrite a caller-supplied sheet reference into a CSV export URL.
///
/// The reference may be a full browser URL or a bare spreadsheet id.
/// Rules are plain substring splits, applied in order:
/// 1. contains `/edit`  -> truncate there, append `/export?format=csv`
/// 2. contains `/view`  -> same split on `/view`
/// 3. longer than 20 chars and not starting with `http` -> treat as a
///    bare id under `docs.google.com/spreadsheets/d/`
/// 4. anything else passes through unchanged
///
/// A `/edit` buried in a query string or fragment still triggers rule 1.
pub fn export_url(reference: &str) -> String {
    if let Some(idx) = reference.find("/edit") {
        return format!("{}/export?format=csv", &reference[..idx]);
    }

    if let Some(idx) = reference.find("/view") {
        return format!("{}/export?format=csv", &reference[..idx]);
    }

    if reference.len() > 20 && !reference.starts_with("http") {
        return format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=csv",
            reference
        );
    }

    reference.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_url_truncation() {
        assert_eq!(
            export_url("https://docs.google.com/spreadsheets/d/ABC123/edit#gid=0"),
            "https://docs.google.com/spreadsheets/d/ABC123/export?format=csv"
        );
    }

    #[test]
    fn test_view_url_truncation() {
        assert_eq!(
            export_url("https://docs.google.com/spreadsheets/d/ABC123/view"),
            "https://docs.google.com/spreadsheets/d/ABC123/export?format=csv"
        );
    }

    #[test]
    fn test_edit_wins_over_view() {
        assert_eq!(
            export_url("https://example.com/d/X/view/edit"),
            "https://example.com/d/X/view/export?format=csv"
        );
    }

    #[test]
    fn test_edit_in_query_still_triggers() {
        assert_eq!(
            export_url("https://example.com/sheet?mode=/edit"),
            "https://example.com/sheet?mode=/export?format=csv"
        );
    }

    #[test]
    fn test_bare_id_expansion() {
        assert_eq!(
            export_url("1a2b3c4d5e6f7g8h9i0jKLMNOPQRSTUVWXYZ"),
            "https://docs.google.com/spreadsheets/d/1a2b3c4d5e6f7g8h9i0jKLMNOPQRSTUVWXYZ/export?format=csv"
        );
    }

    #[test]
    fn test_short_reference_passthrough() {
        assert_eq!(export_url("shortid"), "shortid");
    }

    #[test]
    fn test_http_url_without_markers_passthrough() {
        assert_eq!(
            export_url("https://example.com/some/long/path/data.csv"),
            "https://example.com/some/long/path/data.csv"
        );
    }
}
