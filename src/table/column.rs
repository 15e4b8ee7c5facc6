/*
 * Copyright (c) 2025. Mark Barrett
 * This file is part of Boxtab.
 * Boxtab is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
 * Boxtab is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 * You should have received a copy of the GNU Affero General Public License along with Boxtab. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::error::{BoxtabError, BoxtabResult};
use crate::table::row::Row;
use smallvec::{SmallVec, smallvec};

/// The content width of each column in characters, excluding padding and borders.
#[derive(Debug)]
pub(crate) struct ColumnWidths {
    widths: SmallVec<[usize; 16]>,
}

impl ColumnWidths {
    /// Measures the widest cell of every column, including the label cell when labels
    /// are supplied. The column count is that of the first row; rows of any other
    /// length are rejected.
    pub fn measure(labels: Option<&Row<'_>>, rows: &[Row<'_>]) -> BoxtabResult<Self> {
        let columns = rows.first().ok_or(BoxtabError::EmptyTable)?.len();
        let mut widths: SmallVec<[usize; 16]> = smallvec![0; columns];

        if let Some(labels) = labels {
            if labels.len() != columns {
                return Err(BoxtabError::LabelCount { expected: columns, found: labels.len() });
            }
            for (width, cell) in widths.iter_mut().zip(labels.iter()) {
                *width = cell.width();
            }
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(BoxtabError::RaggedRow {
                    row: index,
                    expected: columns,
                    found: row.len(),
                });
            }
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.width());
            }
        }

        Ok(Self { widths })
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.widths.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}
