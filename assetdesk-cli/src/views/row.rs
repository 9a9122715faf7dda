//! TableRow trait: how a record renders as a line of text.

use assetdesk_core::{HeaderCheckbox, Record};

use super::column::Column;

/// Gap between cells.
const CELL_GAP: &str = "  ";

/// Records that can be displayed as rows in a [`TableView`](super::TableView).
///
/// Implementors describe their columns and the text of each cell; the
/// default [`render_row`](TableRow::render_row) lays cells out behind a
/// selection indicator.
pub trait TableRow: Record {
    /// Column layout, shared by every row of the type.
    fn columns() -> Vec<Column>;

    /// Text of cell `column`, or `None` past the last column.
    fn render_cell(&self, column: usize) -> Option<String>;

    /// Lay out the cells of one row.
    fn render_row(&self, columns: &[Column], selected: bool) -> String {
        let cells = columns
            .iter()
            .enumerate()
            .map(|(i, column)| column.fit(&self.render_cell(i).unwrap_or_default()));
        join_line(Self::selection_indicator(selected), cells)
    }

    /// Checkbox glyph for a row.
    fn selection_indicator(selected: bool) -> &'static str {
        if selected { "■" } else { "□" }
    }
}

/// Checkbox glyph for the "select all" header.
pub fn header_indicator(header: HeaderCheckbox) -> &'static str {
    match header {
        HeaderCheckbox::Unchecked => "□",
        HeaderCheckbox::Indeterminate => "▣",
        HeaderCheckbox::Checked => "■",
    }
}

/// Header line: the select-all checkbox followed by column titles.
pub fn render_header(columns: &[Column], header: HeaderCheckbox) -> String {
    let titles = columns.iter().map(|column| column.fit(&column.header));
    join_line(header_indicator(header), titles)
}

fn join_line(indicator: &str, cells: impl Iterator<Item = String>) -> String {
    let mut line = String::from(indicator);
    for cell in cells {
        line.push_str(CELL_GAP);
        line.push_str(&cell);
    }
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::Alignment;

    struct Part {
        id: String,
        qty: u32,
    }

    impl Record for Part {
        fn id(&self) -> &str {
            &self.id
        }
    }

    impl TableRow for Part {
        fn columns() -> Vec<Column> {
            vec![Column::new("ID", 4), Column::new("Qty", 3).align(Alignment::Right)]
        }

        fn render_cell(&self, column: usize) -> Option<String> {
            match column {
                0 => Some(self.id.clone()),
                1 => Some(self.qty.to_string()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_render_row_with_indicator() {
        let part = Part { id: "p1".into(), qty: 7 };
        let columns = Part::columns();
        assert_eq!(part.render_row(&columns, false), "□  p1      7");
        assert_eq!(part.render_row(&columns, true), "■  p1      7");
    }

    #[test]
    fn test_header_reflects_checkbox() {
        let columns = Part::columns();
        assert_eq!(render_header(&columns, HeaderCheckbox::Indeterminate), "▣  ID    Qty");
        assert_eq!(header_indicator(HeaderCheckbox::Checked), "■");
    }
}
