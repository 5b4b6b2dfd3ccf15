//! RST simple-table rendering.
//!
//! Layout follows the `rst` format of Python's `tabulate`, which the
//! documentation build has always consumed:
//!
//! ```text
//! ========  ============
//! Format    Attributes
//! ========  ============
//! PSF       bonds, names
//! ========  ============
//! ```
//!
//! Each column is at least two characters wider than its heading. Cells are
//! left-aligned and emitted verbatim, so Sphinx roles pass through as text.

use super::table::Table;

const MIN_PADDING: usize = 2;
const SEPARATOR: &str = "  ";

fn width(s: &str) -> usize {
    s.chars().count()
}

fn column_widths(table: &Table) -> Vec<usize> {
    table
        .headings
        .iter()
        .enumerate()
        .map(|(i, heading)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| width(cell))
                .fold(width(heading) + MIN_PADDING, usize::max)
        })
        .collect()
}

fn render_line<'s>(cells: impl Iterator<Item = &'s str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    line.trim_end().to_string()
}

impl Table {
    /// Render as an RST simple table, newline-terminated.
    pub fn to_rst(&self) -> String {
        let widths = column_widths(self);
        let rule = widths
            .iter()
            .map(|w| "=".repeat(*w))
            .collect::<Vec<_>>()
            .join(SEPARATOR);

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(rule.clone());
        lines.push(render_line(self.headings.iter().map(String::as_str), &widths));
        lines.push(rule.clone());
        for row in &self.rows {
            lines.push(render_line(row.iter().map(String::as_str), &widths));
        }
        lines.push(rule);

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
