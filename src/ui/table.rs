//! Table rendering for formatted output.
//!
//! Widths are measured in terminal columns, so course names in wide
//! scripts and pre-styled cells line up.

use console::{measure_text_width, pad_str, Alignment};

/// A simple table for formatted output.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
    numeric: Vec<bool>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();
        let numeric = vec![false; headers.len()];

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
            numeric,
        }
    }

    /// Right-align the given column.
    pub fn align_right(mut self, column: usize) -> Self {
        if let Some(flag) = self.numeric.get_mut(column) {
            *flag = true;
        }
        self
    }

    /// Add a row to the table.
    pub fn add_row<S: AsRef<str>>(&mut self, row: Vec<S>) {
        let row: Vec<String> = row.iter().map(|s| s.as_ref().to_string()).collect();

        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
            }
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_border('┌', '┬', '┐'));
        output.push('\n');

        output.push_str(&self.render_row(&self.headers, false));
        output.push('\n');

        output.push_str(&self.render_border('├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row, true));
            output.push('\n');
        }

        output.push_str(&self.render_border('└', '┴', '┘'));

        output
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let mut s = String::new();
        s.push(left);

        for (i, width) in self.column_widths.iter().enumerate() {
            s.push_str(&"─".repeat(width + 2));
            if i < self.column_widths.len() - 1 {
                s.push(mid);
            }
        }

        s.push(right);
        s
    }

    fn render_row(&self, row: &[String], body: bool) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            let align = if body && self.numeric[i] {
                Alignment::Right
            } else {
                Alignment::Left
            };
            s.push(' ');
            s.push_str(&pad_str(cell, *width, align, None));
            s.push_str(" │");
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty() {
        let table = Table::new(vec!["A", "B"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn table_with_rows() {
        let mut table = Table::new(vec!["Category", "Earned"]);
        table.add_row(vec!["General", "20"]);
        table.add_row(vec!["Major", "48"]);

        assert_eq!(table.row_count(), 2);

        let output = table.render();
        assert!(output.contains("General"));
        assert!(output.contains("48"));
    }

    #[test]
    fn table_measures_wide_characters() {
        let mut table = Table::new(vec!["Name"]);
        table.add_row(vec!["微分積分学"]);
        table.add_row(vec!["Calculus"]);

        let output = table.render();
        let widths: Vec<_> = output.lines().map(measure_text_width).collect();

        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn table_right_aligns_numeric_columns() {
        let mut table = Table::new(vec!["Name", "Credits"]).align_right(1);
        table.add_row(vec!["a", "4"]);

        let output = table.render();
        assert!(output.contains("│       4 │"));
    }

    #[test]
    fn table_handles_missing_cells() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(vec!["only", "two"]);

        let output = table.render();
        assert!(output.contains("only"));
        assert!(output.contains("two"));
    }

    #[test]
    fn table_render_consistency() {
        let mut table = Table::new(vec!["Category", "Earned", "Required"]);
        table.add_row(vec!["General", "20", "24"]);
        table.add_row(vec!["Major", "48", "60"]);
        table.add_row(vec!["Free", "8", "8"]);

        let output = table.render();
        let lines: Vec<_> = output.lines().collect();

        // top border, header, separator, 3 data rows, bottom border
        assert_eq!(lines.len(), 7);
        assert!(output.contains("┬"));
        assert!(output.contains("┴"));
    }
}
