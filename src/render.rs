//! Plain-text rendering of page state.

use std::fmt::{self, Write};

pub trait Render {
    fn render(&self) -> String;
}

/// Column-aligned text table.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        if i > 0 {
            line.push_str(" | ");
        }
        write!(line, "{:<width$}", cell, width = *width)?;
    }
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_row(f, &self.headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

/// Page heading followed by its subtitle.
pub fn heading(title: &str, subtitle: &str) -> String {
    format!("{}\n{}\n\n", title, subtitle)
}

pub fn loading() -> String {
    "Loading...\n".to_owned()
}

pub fn empty_state(title: &str, hint: &str) -> String {
    format!("{}\n{}\n", title, hint)
}

/// A labelled statistic with a short caption.
pub fn card(out: &mut String, label: &str, value: &str, caption: &str) {
    let _ = writeln!(out, "{:<20} {:>12}  {}", label, value, caption);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_padded_to_widest_cell() {
        let mut table = Table::new(["Name", "SKU"]);
        table.push(["Widget", "W-1"]);
        table.push(["Nut", "NUT-0042"]);
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name   | SKU");
        assert_eq!(lines[1], "-------+---------");
        assert_eq!(lines[2], "Widget | W-1");
        assert_eq!(lines[3], "Nut    | NUT-0042");
    }
}
