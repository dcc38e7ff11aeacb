//! Quote-aware splitting of one delimited line into field values.
//!
//! The source format is a hand-exported spreadsheet, not strict RFC 4180:
//! fields may be double-quoted to protect embedded commas, but there is no
//! doubled-quote escape convention for a quote inside a quoted field. That
//! limitation is part of the contract and deliberately not papered over —
//! behavior for malformed quoting is unspecified upstream.

/// Splits one line into its ordered field values.
///
/// A comma is a field separator only when an even number of `"` characters
/// precede it on the line (i.e. it is not inside an open quote). Each field
/// is trimmed, then a single surrounding quote pair is stripped when both
/// ends carry one.
#[must_use]
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut quotes = 0u32;

    for (idx, ch) in line.char_indices() {
        match ch {
            '"' => quotes += 1,
            ',' if quotes % 2 == 0 => {
                fields.push(clean_field(&line[start..idx]));
                start = idx + 1;
            }
            _ => {}
        }
    }
    fields.push(clean_field(&line[start..]));

    fields
}

/// Trims whitespace, then strips one leading and one trailing `"` if both
/// are present.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields() {
        assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(split_line(" a , b ,c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn quoted_field_keeps_embedded_comma() {
        assert_eq!(
            split_line("\"Smith, Corp\",100"),
            vec!["Smith, Corp", "100"]
        );
    }

    #[test]
    fn quoted_field_in_the_middle() {
        assert_eq!(
            split_line("x,\"a, b, c\",y"),
            vec!["x", "a, b, c", "y"]
        );
    }

    #[test]
    fn surrounding_quotes_are_stripped() {
        assert_eq!(split_line("\"a\",\"b\""), vec!["a", "b"]);
    }

    #[test]
    fn lone_leading_quote_is_kept() {
        // Only a full surrounding pair is stripped.
        assert_eq!(split_line("\"a,b")[0], "\"a,b");
    }

    #[test]
    fn lone_quote_field_is_kept() {
        assert_eq!(split_line("\",x"), vec!["\",x"]);
    }

    #[test]
    fn empty_fields_survive() {
        assert_eq!(split_line("a,,c"), vec!["a", "", "c"]);
        assert_eq!(split_line(",,"), vec!["", "", ""]);
    }

    #[test]
    fn single_field_line() {
        assert_eq!(split_line("solo"), vec!["solo"]);
    }

    #[test]
    fn non_ascii_content() {
        assert_eq!(
            split_line("Análisis,Liquidación de Operación"),
            vec!["Análisis", "Liquidación de Operación"]
        );
    }
}
