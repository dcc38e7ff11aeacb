//! Case-insensitive resolution of logical column names to row positions.

use std::collections::HashMap;

use crate::tokenize::split_line;

/// Lookup from logical column name to zero-based position, built from the
/// header line of an export.
///
/// Matching is a case-insensitive exact match on the trimmed, unquoted
/// header string. When the same header appears twice, the lowest index wins;
/// duplicate headers are implementation-defined upstream, so the tie-break
/// is fixed here rather than reported.
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Builds the index from the raw first line of a file.
    ///
    /// A leading U+FEFF byte-order mark (a common artifact of spreadsheet
    /// exports) is stripped before tokenizing.
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        let line = line.strip_prefix('\u{feff}').unwrap_or(line);

        let mut positions = HashMap::new();
        for (idx, field) in split_line(line).iter().enumerate() {
            positions.entry(field.to_lowercase()).or_insert(idx);
        }

        Self { positions }
    }

    /// Returns the value of `logical` in `tokens`, or `""` when the column
    /// is unknown or the row is shorter than the header.
    ///
    /// Missing columns never fail: human-produced exports routinely omit or
    /// reorder columns, and the caller substitutes defaults.
    #[must_use]
    pub fn resolve<'a>(&self, tokens: &'a [String], logical: &str) -> &'a str {
        self.positions
            .get(&logical.to_lowercase())
            .and_then(|&idx| tokens.get(idx))
            .map_or("", String::as_str)
    }

    /// Like [`HeaderIndex::resolve`], but substitutes `default` when the
    /// value is missing *or* empty.
    ///
    /// This is the single "missing means default" primitive; pushing the
    /// fallback policy here keeps the record builder free of per-field
    /// error-handling branches.
    #[must_use]
    pub fn resolve_or<'a>(&self, tokens: &'a [String], logical: &str, default: &'a str) -> &'a str {
        let value = self.resolve(tokens, logical);
        if value.is_empty() {
            default
        } else {
            value
        }
    }
}
