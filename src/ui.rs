//! Terminal UI utilities.

use colored::*;
use console::{Term, measure_text_width, truncate_str};
use std::cmp;

/// Auto-sizing table with Unicode box-drawing borders.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    pub fn print(&self) {
        if self.headers.is_empty() {
            return;
        }

        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| measure_text_width(h))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = cmp::max(widths[i], measure_text_width(cell));
            }
        }

        // Shrink the widest column until the table fits the terminal.
        let (_, term_cols) = Term::stdout().size();
        let overhead = 2 + 3 * widths.len() + 1;
        let available = (term_cols as usize).saturating_sub(overhead);
        while widths.iter().sum::<usize>() > available {
            let (idx, &max) = widths
                .iter()
                .enumerate()
                .max_by_key(|(_, w)| **w)
                .unwrap();
            if max <= 8 {
                break;
            }
            widths[idx] = max - 1;
        }

        let border = |left: &str, mid: &str, right: &str| {
            let spans: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("  {}{}{}", left, spans.join(mid), right)
        };

        println!("{}", border("┌", "┬", "┐"));

        print!("  │");
        for (header, width) in self.headers.iter().zip(&widths) {
            print!(" {} │", pad_cell(&header.bold().to_string(), *width));
        }
        println!();

        println!("{}", border("├", "┼", "┤"));

        for row in &self.rows {
            print!("  │");
            for (cell, width) in row.iter().zip(&widths) {
                print!(" {} │", pad_cell(cell, *width));
            }
            println!();
        }

        println!("{}", border("└", "┴", "┘"));
    }
}

fn pad_cell(cell: &str, width: usize) -> String {
    let shown = truncate_str(cell, width, "...");
    let fill = width.saturating_sub(measure_text_width(&shown));
    format!("{}{}", shown, " ".repeat(fill))
}
