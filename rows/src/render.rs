//! Plain-text rendering of display rows.

use crate::DisplayRow;

/// Render rows one per line, with a blank line before every header except
/// the first.
pub fn render_rows(rows: &[DisplayRow]) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if row.is_header() && i > 0 {
            out.push('\n');
        }
        out.push_str(&row.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headers_and_values() {
        let rows = vec![
            DisplayRow::header("document"),
            DisplayRow::key_value("number", Some("N123".into())),
            DisplayRow::key_value("names", None),
            DisplayRow::key_value("  [0]", Some("SOK".into())),
            DisplayRow::header("status"),
            DisplayRow::key_value("", Some("done".into())),
        ];
        assert_eq!(
            render_rows(&rows),
            "[document]\nnumber: N123\nnames:\n  [0]: SOK\n\n[status]\n: done\n"
        );
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_rows(&[]), "");
    }
}
