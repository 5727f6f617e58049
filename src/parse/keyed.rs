// src/parse/keyed.rs
use std::collections::HashMap;

/// Pair each row's cells positionally with the header names.
///
/// Cells past the end of the header are dropped and short rows simply leave
/// the trailing keys absent. A cell whose trimmed value is empty is omitted
/// entirely, so a keyed row never carries a blank value: an absent key means
/// "the cell was empty", not "the column did not exist". Duplicate header
/// names are inserted left to right, so later columns overwrite earlier ones.
pub fn key_rows(rows: &[Vec<String>], header: &[String]) -> Vec<HashMap<String, String>> {
    rows.iter()
        .map(|row| {
            let mut keyed = HashMap::new();
            for (name, cell) in header.iter().zip(row) {
                if !cell.trim().is_empty() {
                    keyed.insert(name.clone(), cell.clone());
                }
            }
            keyed
        })
        .collect()
}
