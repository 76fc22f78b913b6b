//! HTML table scraper.
//!
//! The upstream table-browsing endpoint returns rendered HTML instead of
//! JSON, so generic table views have to be recovered by parsing the markup.
//! This is a workaround for that one endpoint, not a designed data contract;
//! the parser is deliberately forgiving and never hard-fails.

use scraper::{Html, Selector};
use std::collections::BTreeMap;

/// One scraped row: field name → trimmed cell text, always strings.
pub type TableRow = BTreeMap<String, String>;

/// A parsed table: header-derived field names plus row records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTable {
    /// Field names in source column order (lowercased, spaces replaced
    /// with underscores).
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl ParsedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Parse the first table in `html` into row records.
///
/// Header cell text is lowercased with whitespace runs collapsed to `_` to
/// form field names. Body cell text is trimmed. A row with fewer cells than
/// headers simply lacks the trailing fields; extra cells are dropped. If no
/// `<table>` element is present the result is empty and a warning is
/// logged, never an error.
pub fn parse_table(html: &str) -> ParsedTable {
    // Selectors are literals; parse failures here would be programmer error.
    let table_sel = Selector::parse("table").unwrap();
    let header_sel = Selector::parse("thead tr th").unwrap();
    let any_th_sel = Selector::parse("tr th").unwrap();
    let row_sel = Selector::parse("tbody tr").unwrap();
    let cell_sel = Selector::parse("td").unwrap();

    let document = Html::parse_document(html);

    let Some(table) = document.select(&table_sel).next() else {
        tracing::warn!("No table element found in HTML response");
        return ParsedTable::default();
    };

    let mut headers: Vec<String> = table
        .select(&header_sel)
        .map(|cell| field_name(&cell.text().collect::<String>()))
        .collect();
    if headers.is_empty() {
        // Some renderings skip <thead> and put <th> cells in the first row.
        headers = table
            .select(&any_th_sel)
            .map(|cell| field_name(&cell.text().collect::<String>()))
            .collect();
    }

    let rows = table
        .select(&row_sel)
        .filter_map(|row| {
            let record: TableRow = headers
                .iter()
                .zip(row.select(&cell_sel))
                .map(|(header, cell)| {
                    (
                        header.clone(),
                        cell.text().collect::<String>().trim().to_string(),
                    )
                })
                .collect();
            // Header-only rows (e.g. a <tr><th>..</th></tr> inside tbody)
            // produce no td cells and are skipped.
            if record.is_empty() && row.select(&cell_sel).next().is_none() {
                None
            } else {
                Some(record)
            }
        })
        .collect();

    ParsedTable { headers, rows }
}

/// Lowercase and underscore a header cell into a field name.
fn field_name(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
