/*
 * Copyright (c) 2025. Mark Barrett
 * This file is part of Boxtab.
 * Boxtab is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
 * Boxtab is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 * You should have received a copy of the GNU Affero General Public License along with Boxtab. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::table::Alignment;
use crate::table::border::{BorderGlyphs, Rule};
use crate::table::cell::Cell;
use crate::table::column::ColumnWidths;
use crate::table::row::Row;
use itertools::{Itertools, Position};
use std::fmt;
use std::fmt::Write;

/// Space added to each column's content width, leaving at least one space of margin on
/// either side of the widest cell.
pub(crate) const CELL_PADDING: usize = 2;

/// Writes the lines of a bordered grid to the underlying writer.
///
/// Methods emit line content only; the caller owns the newline discipline.
pub(crate) struct GridFormatter<'w> {
    writer: &'w mut dyn Write,
    glyphs: &'w BorderGlyphs,
    alignment: Alignment,
}

impl<'w> GridFormatter<'w> {
    pub fn new(writer: &'w mut dyn Write, glyphs: &'w BorderGlyphs, alignment: Alignment) -> Self {
        Self { writer, glyphs, alignment }
    }

    pub fn newline(&mut self) -> fmt::Result {
        writeln!(self.writer)
    }

    /// Writes a horizontal rule: a run of the horizontal glyph per column, joined by
    /// junction glyphs and capped by corner glyphs. Empty for a zero-column table.
    pub fn rule(&mut self, widths: &ColumnWidths, rule: Rule) -> fmt::Result {
        if widths.is_empty() {
            return Ok(());
        }
        let (left, junction, right) = self.glyphs.rule_glyphs(rule);
        write!(self.writer, "{left}")?;
        for (position, width) in widths.iter().with_position() {
            for _ in 0..width + CELL_PADDING {
                write!(self.writer, "{}", self.glyphs.horizontal)?;
            }
            match position {
                Position::Last | Position::Only => write!(self.writer, "{right}")?,
                _ => write!(self.writer, "{junction}")?,
            }
        }
        Ok(())
    }

    /// Writes one content line: each cell padded to its column's width, between
    /// vertical glyphs. Empty for a zero-column table.
    pub fn content(&mut self, row: &Row<'_>, widths: &ColumnWidths) -> fmt::Result {
        if widths.is_empty() {
            return Ok(());
        }
        write!(self.writer, "{}", self.glyphs.vertical)?;
        for (cell, width) in row.iter().zip(widths.iter()) {
            self.padded(cell, width)?;
            write!(self.writer, "{}", self.glyphs.vertical)?;
        }
        Ok(())
    }

    /// Pads the cell's content to `width + CELL_PADDING` characters. Centered content
    /// splits the leftover space evenly, with an odd remainder going to the right.
    /// Left-aligned content keeps a fixed single-space left margin.
    fn padded(&mut self, cell: &dyn Cell, width: usize) -> fmt::Result {
        let total = width + CELL_PADDING;
        let padding = total.saturating_sub(cell.width());
        let (left, right) = match self.alignment {
            Alignment::Center => (padding / 2, padding - padding / 2),
            Alignment::Left => {
                let margin = (CELL_PADDING / 2).min(padding);
                (margin, padding - margin)
            }
        };
        for _ in 0..left {
            write!(self.writer, " ")?;
        }
        cell.print(self.writer)?;
        for _ in 0..right {
            write!(self.writer, " ")?;
        }
        Ok(())
    }
}
