/*
 * Copyright (c) 2025. Mark Barrett
 * This file is part of Boxtab.
 * Boxtab is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
 * Boxtab is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 * You should have received a copy of the GNU Affero General Public License along with Boxtab. If not, see <https://www.gnu.org/licenses/>.
 */
mod border;
mod cell;
mod column;
mod fmt;
mod row;

pub use border::BorderGlyphs;
pub use cell::{Cell, CellRef, DisplayCell};
pub use row::Row;

use crate::error::BoxtabResult;
use crate::table::border::Rule;
use crate::table::column::ColumnWidths;
use crate::table::fmt::GridFormatter;

/// Horizontal alignment of cell content within its padded width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// A bordered plaintext table with an optional header row.
///
/// Cells are borrowed for the lifetime of the table and rendered on demand; widths are
/// recomputed on every print.
#[derive(Default)]
pub struct Table<'c> {
    rows: Vec<Row<'c>>,
    labels: Option<Row<'c>>,
    alignment: Alignment,
}

impl<'c> Table<'c> {
    pub fn push_row<R: Into<Row<'c>>>(&mut self, row: R) {
        self.rows.push(row.into());
    }

    pub fn push_rows<R, I>(&mut self, rows: I)
    where
        R: Into<Row<'c>>,
        I: IntoIterator<Item = R>,
    {
        self.rows.extend(rows.into_iter().map(Into::into));
    }

    /// Sets the header row. An empty labels row is treated as absent.
    pub fn set_labels<R: Into<Row<'c>>>(&mut self, labels: R) {
        self.labels = Some(labels.into());
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn rows(&self) -> &[Row<'c>] {
        &self.rows
    }

    /// Writes the table to `writer`, validating the row shape first.
    ///
    /// Every line above the bottom rule ends with a newline; the bottom rule itself
    /// carries none.
    pub fn print<W: std::fmt::Write>(&self, writer: &mut W) -> BoxtabResult<()> {
        let labels = self.labels.as_ref().filter(|l| !l.is_empty());
        let widths = ColumnWidths::measure(labels, &self.rows)?;
        trace!(
            "printing table: {} columns, {} rows, header: {}",
            widths.len(),
            self.rows.len(),
            labels.is_some()
        );

        let mut grid = GridFormatter::new(writer, &BorderGlyphs::SINGLE, self.alignment);
        grid.rule(&widths, Rule::Top)?;
        grid.newline()?;
        if let Some(labels) = labels {
            grid.content(labels, &widths)?;
            grid.newline()?;
            grid.rule(&widths, Rule::Middle)?;
            grid.newline()?;
        }
        for row in &self.rows {
            grid.content(row, &widths)?;
            grid.newline()?;
        }
        grid.rule(&widths, Rule::Bottom)?;
        Ok(())
    }

    pub fn render(&self) -> BoxtabResult<String> {
        let mut out = String::new();
        self.print(&mut out)?;
        Ok(out)
    }
}

/// Renders `rows` as a bordered table in one call.
///
/// `labels`, when present and non-empty, becomes a header row separated from the data
/// rows by a middle rule and counts towards the column widths. `centered` selects
/// center alignment; the default left alignment keeps a single-space left margin.
pub fn render<'c, R, L>(rows: Vec<R>, labels: Option<L>, centered: bool) -> BoxtabResult<String>
where
    R: Into<Row<'c>>,
    L: Into<Row<'c>>,
{
    let mut table = Table::default();
    table.push_rows(rows);
    if let Some(labels) = labels {
        table.set_labels(labels);
    }
    table.set_alignment(if centered { Alignment::Center } else { Alignment::Left });
    table.render()
}
