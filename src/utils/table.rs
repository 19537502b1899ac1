//! Table rendering utilities for CLI outputs.
//!
//! Widths are display widths, so Thai and other combining text lines up.

use unicode_width::UnicodeWidthStr;

pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
    /// Wrap cell text at this display width.
    pub wrap: Option<usize>,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
            wrap: None,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
            wrap: None,
        }
    }

    pub fn wrapped(mut self, width: usize) -> Self {
        self.wrap = Some(width.max(8));
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        // each cell split into physical lines
        let cells: Vec<Vec<Vec<String>>> = self
            .rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .enumerate()
                    .map(|(i, col)| {
                        let text = row.get(i).map(String::as_str).unwrap_or("");
                        split_cell(text, col.wrap)
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                cells
                    .iter()
                    .flat_map(|row| row[i].iter())
                    .map(|l| l.width())
                    .chain(std::iter::once(col.header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.push_line(&mut out, &header, &widths);

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        self.push_line(&mut out, &rule, &widths);

        for row in &cells {
            let height = row.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                let parts: Vec<String> = row
                    .iter()
                    .map(|c| c.get(line).cloned().unwrap_or_default())
                    .collect();
                self.push_line(&mut out, &parts, &widths);
            }
        }

        out
    }

    fn push_line(&self, out: &mut String, parts: &[String], widths: &[usize]) {
        let mut line = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            let text = &parts[i];
            let pad = " ".repeat(widths[i].saturating_sub(text.width()));
            match col.align {
                Align::Left => {
                    line.push_str(text);
                    line.push_str(&pad);
                }
                Align::Right => {
                    line.push_str(&pad);
                    line.push_str(text);
                }
            }
            line.push_str("  ");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

fn split_cell(text: &str, wrap: Option<usize>) -> Vec<String> {
    let lines: Vec<String> = match wrap {
        Some(w) => text
            .lines()
            .flat_map(|l| textwrap::wrap(l, w))
            .map(|c| c.into_owned())
            .collect(),
        None => text.lines().map(str::to_string).collect(),
    };

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
