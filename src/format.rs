use std::fmt::Display;

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};

/// Empty table with bold headers, rows are added by the caller.
pub(crate) fn new_table<I, S>(headers: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(
        headers
            .into_iter()
            .map(|h| Cell::new(Into::<String>::into(h)).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

pub(crate) fn to_cells<T: Display>(values: &[T]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub(crate) fn to_notations<T: Display>(values: &[T]) -> String {
    format!("({})", to_cells(values).join(", "))
}

/// Cells of every rendered row (header first), with borders and padding removed.
#[cfg(test)]
pub(crate) fn rendered_rows(rendered: &str) -> Vec<Vec<String>> {
    rendered
        .lines()
        .filter(|line| line.starts_with('│'))
        .map(|line| {
            line.trim_matches('│')
                .split('┆')
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect()
}
