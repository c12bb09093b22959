//! Row/cell extraction from a table chunk.

use scraper::{Html, Selector};
use std::sync::LazyLock;

static TR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("tr")
        .expect("BUG: hardcoded selector 'tr' is statically valid")
});

static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("td, th")
        .expect("BUG: hardcoded selector 'td, th' is statically valid")
});

/// Row-major grid of cell inner HTML. Rows may differ in length.
pub type RowMatrix = Vec<Vec<String>>;

/// Parse a table fragment into rows of cell inner HTML.
///
/// Rows and cells are taken in document order; header and data cells are
/// treated alike. Blank input yields an empty matrix. The HTML parser
/// recovers from any markup, so there is no failure case.
#[must_use]
pub fn extract_rows(table_html: &str) -> RowMatrix {
    if table_html.trim().is_empty() {
        return Vec::new();
    }

    let fragment = Html::parse_fragment(table_html);
    let rows: RowMatrix = fragment
        .select(&TR_SELECTOR)
        .map(|row| {
            row.select(&CELL_SELECTOR)
                .map(|cell| cell.inner_html())
                .collect()
        })
        .collect();

    tracing::trace!(rows = rows.len(), "extracted table rows");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_header_and_data_cells_in_order() {
        let html = r#"<table class="table table-striped">
  <tbody>
    <tr>
      <td>Laws</td>
      <th>Followed By them (true or false)</th>
      <td>teeny tiny column</td>
    </tr>
    <tr>
      <td>Insurance</td>
      <td>false</td>
      <td></td>
    </tr>
  </tbody>
</table>"#;

        let rows = extract_rows(html);
        assert_eq!(
            rows,
            vec![
                vec![
                    "Laws".to_string(),
                    "Followed By them (true or false)".to_string(),
                    "teeny tiny column".to_string(),
                ],
                vec!["Insurance".to_string(), "false".to_string(), String::new()],
            ]
        );
    }

    #[test]
    fn test_keeps_inline_markup() {
        let rows = extract_rows("<table><tr><td><strong>bold</strong> text</td></tr></table>");
        assert_eq!(rows, vec![vec!["<strong>bold</strong> text".to_string()]]);
    }

    #[test]
    fn test_irregular_rows_are_kept_ragged() {
        let rows = extract_rows("<table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 1);
    }

    #[test]
    fn test_blank_or_rowless_input_is_empty() {
        assert!(extract_rows("").is_empty());
        assert!(extract_rows("   ").is_empty());
        assert!(extract_rows("<table></table>").is_empty());
        assert!(extract_rows("<<<not html").is_empty());
    }
}
