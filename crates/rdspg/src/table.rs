use prettytable::format::{FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};

/// Text shown for a cell whose value is absent
pub const ABSENT: &str = "-";

fn table_format(with_header: bool) -> TableFormat {
    let builder = FormatBuilder::new().column_separator(' ').padding(0, 1);

    if with_header {
        builder
            .separator(LinePosition::Title, LineSeparator::new('-', ' ', ' ', ' '))
            .build()
    } else {
        builder.build()
    }
}

pub fn new_table(with_header: bool) -> Table {
    let mut table = Table::new();
    table.set_format(table_format(with_header));
    table
}

/// Render rows as an aligned text table
///
/// Absent cells are printed as [`ABSENT`] so they stay distinguishable from
/// empty strings. With `no_header` the header line and its separator are left out.
pub fn render_table<H: AsRef<str>>(
    headers: &[H],
    rows: &[Vec<Option<String>>],
    no_header: bool,
) -> String {
    let mut table = new_table(!no_header);

    if !no_header {
        table.set_titles(Row::new(
            headers.iter().map(|h| Cell::new(h.as_ref())).collect(),
        ));
    }

    for row in rows {
        table.add_row(Row::new(
            row.iter()
                .map(|cell| Cell::new(cell.as_deref().unwrap_or(ABSENT)))
                .collect(),
        ));
    }

    table.to_string()
}
