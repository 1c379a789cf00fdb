//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{display_width, pad_right};

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column widths fit the widest visible cell, header included.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                for line in cell.lines() {
                    widths[i] = widths[i].max(display_width(line));
                }
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&pad_right(h, widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push_str("  ");
        }
        out.push('\n');

        for row in &self.rows {
            // A cell may span several lines (wrapped notes); lay the row
            // out line by line so columns stay aligned.
            let height = row.iter().map(|c| c.lines().count().max(1)).max().unwrap_or(1);

            for line_no in 0..height {
                for (i, cell) in row.iter().enumerate() {
                    let line = cell.lines().nth(line_no).unwrap_or("");
                    out.push_str(&pad_right(line, widths[i]));
                    out.push_str("  ");
                }
                out.push('\n');
            }
        }

        out
    }
}
