// gfscalc is a backup storage and retention calculator
// Copyright (C) 2025  Javier Lancha Vázquez <javier.lancha@gmail.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Length of a string as shown in a terminal, ignoring ANSI escape codes.
fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if in_escape {
            // Escape sequences used here end with 'm'
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            len += 1;
        }
    }
    len
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

enum Row {
    Values(Vec<String>),
    Separator,
}

/// A plain text table for terminal output.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
    alignments: Vec<Alignment>,
    padding: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self::new_with_alignments(Vec::new())
    }

    /// Columns without an explicit alignment are left-aligned.
    pub fn new_with_alignments(alignments: Vec<Alignment>) -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            alignments,
            padding: 1,
        }
    }

    pub fn set_headers(&mut self, headers: Vec<String>) {
        self.headers = headers;
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(Row::Values(row));
    }

    pub fn add_separator(&mut self) {
        self.rows.push(Row::Separator);
    }

    pub fn num_columns(&self) -> usize {
        self.rows
            .iter()
            .map(|row| match row {
                Row::Values(items) => items.len(),
                Row::Separator => 0,
            })
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.num_columns()];

        let cells = self
            .rows
            .iter()
            .filter_map(|row| match row {
                Row::Values(items) => Some(items),
                Row::Separator => None,
            })
            .chain(std::iter::once(&self.headers));

        for items in cells {
            for (i, cell) in items.iter().enumerate() {
                widths[i] = widths[i].max(visible_len(cell));
            }
        }
        widths
    }

    fn alignment(&self, column: usize) -> Alignment {
        self.alignments
            .get(column)
            .copied()
            .unwrap_or(Alignment::Left)
    }

    fn render_cells(&self, items: &[String], widths: &[usize], output: &mut String) {
        for (i, cell) in items.iter().enumerate() {
            let extra = widths[i] + self.padding * 2 - visible_len(cell);
            let (before, after) = match self.alignment(i) {
                Alignment::Left => (self.padding, extra - self.padding),
                Alignment::Right => (extra - self.padding, self.padding),
                Alignment::Center => (extra / 2, extra - extra / 2),
            };

            output.push_str(&" ".repeat(before));
            output.push_str(cell);
            output.push_str(&" ".repeat(after));

            if i + 1 < items.len() {
                output.push_str("  ");
            }
        }
        output.push('\n');
    }

    fn horizontal_line(&self, widths: &[usize]) -> String {
        let content: usize = widths.iter().map(|w| w + self.padding * 2).sum();
        let separators = widths.len().saturating_sub(1) * 2;
        format!("{}\n", "-".repeat(content + separators))
    }

    /// Renders the table to a String.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let line = self.horizontal_line(&widths);
        let mut output = String::new();

        if self.headers.is_empty() && self.rows.is_empty() {
            return output;
        }

        output.push_str(&line);
        if !self.headers.is_empty() {
            self.render_cells(&self.headers, &widths, &mut output);
            output.push_str(&line);
        }

        for row in &self.rows {
            match row {
                Row::Values(items) => self.render_cells(items, &widths, &mut output),
                Row::Separator => output.push_str(&line),
            }
        }

        if !self.rows.is_empty() {
            output.push_str(&line);
        }
        output
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}
