//! Generic table assembly.
//!
//! A `TableSpec` binds each column heading to a function that formats one
//! input row into that column's cell. Building a spec over a list of rows
//! yields a `Table`: headings plus formatted string rows, already in their
//! final order. Rendering to text is a separate step (see `rst`).

use serde::{Deserialize, Serialize};

/// One column: heading and per-row cell formatter.
pub struct Column<'a, R> {
    pub heading: &'static str,
    format: Box<dyn Fn(&R) -> String + 'a>,
}

impl<'a, R> Column<'a, R> {
    pub fn new(heading: &'static str, format: impl Fn(&R) -> String + 'a) -> Self {
        Self {
            heading,
            format: Box::new(format),
        }
    }

    pub fn cell(&self, row: &R) -> String {
        (self.format)(row)
    }
}

/// Declarative description of one output table.
pub struct TableSpec<'a, R> {
    filename: &'static str,
    sort: bool,
    columns: Vec<Column<'a, R>>,
}

impl<'a, R> TableSpec<'a, R> {
    /// New spec writing to `filename` (relative to the output root).
    /// Rows keep their input order unless [`sorted`](Self::sorted) is set.
    pub fn new(filename: &'static str) -> Self {
        Self {
            filename,
            sort: false,
            columns: Vec::new(),
        }
    }

    /// Sort formatted rows lexicographically, first column first.
    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Append a column.
    pub fn column(mut self, heading: &'static str, format: impl Fn(&R) -> String + 'a) -> Self {
        self.columns.push(Column::new(heading, format));
        self
    }

    pub fn headings(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.heading.to_string()).collect()
    }

    /// Format every input row through every column.
    pub fn build<I>(&self, input: I) -> Table
    where
        I: IntoIterator<Item = R>,
    {
        let mut rows: Vec<Vec<String>> = input
            .into_iter()
            .map(|row| self.columns.iter().map(|c| c.cell(&row)).collect())
            .collect();

        if self.sort {
            rows.sort();
        }

        Table {
            filename: self.filename.to_string(),
            headings: self.headings(),
            rows,
        }
    }
}

/// A fully formatted table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Output path relative to the documentation source root
    pub filename: String,
    pub headings: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Cells of one column, in row order.
    pub fn column(&self, heading: &str) -> Option<Vec<&str>> {
        let idx = self.headings.iter().position(|h| h == heading)?;
        Some(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }
}

/// Join already-sorted values with `", "`.
pub fn comma_join<'s>(values: impl IntoIterator<Item = &'s str>) -> String {
    values.into_iter().collect::<Vec<_>>().join(", ")
}
