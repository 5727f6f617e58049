// src/parse/mod.rs
mod keyed;
mod split;

pub use keyed::key_rows;
pub use split::split_quoted;

/// Cell separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Convert `\r\n` line endings to `\n`.
///
/// `parse_table` splits records on `\n` alone, so callers must run their
/// text through this first.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Split table text into records, then each record into cells.
///
/// Both levels use the quote-aware splitter, so a separator or newline
/// inside a quoted field is never treated as a boundary. Records that are
/// empty or whitespace-only are dropped; cell content is never trimmed.
pub fn parse_table(text: &str, separator: &str) -> Vec<Vec<String>> {
    split_quoted(text, "\n")
        .into_iter()
        .filter(|record| !record.trim().is_empty())
        .map(|record| split_quoted(&record, separator))
        .collect()
}
