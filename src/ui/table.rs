//! Table rendering for `venvy list`.

/// A simple box-drawn table.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| h.chars().count()).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(cell.chars().count());
        }
        self.rows.push(row);
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = vec![
            self.render_border('┌', '┬', '┐'),
            self.render_row(&self.headers),
            self.render_border('├', '┼', '┤'),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row)));
        lines.push(self.render_border('└', '┴', '┘'));
        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let inner = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect::<Vec<_>>()
            .join(&mid.to_string());
        format!("{}{}{}", left, inner, right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");
        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(cell.chars().count());
            s.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_still_has_headers() {
        let table = Table::new(vec!["NAME", "PATH"]);
        let output = table.render();
        assert!(output.contains("NAME"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn columns_widen_to_fit() {
        let mut table = Table::new(vec!["NAME", "SOURCE"]);
        table.add_row(vec!["analytics".to_string(), "named".to_string()]);
        table.add_row(vec!["api".to_string(), "project".to_string()]);

        let output = table.render();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines
            .iter()
            .all(|l| l.chars().count() == lines[0].chars().count()));
    }

    #[test]
    fn missing_cells_render_blank() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(vec!["only".to_string()]);
        assert!(table.render().contains("│ only │"));
    }
}
