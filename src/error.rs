/*
 * Copyright (c) 2025. Mark Barrett
 * This file is part of Boxtab.
 * Boxtab is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
 * Boxtab is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 * You should have received a copy of the GNU Affero General Public License along with Boxtab. If not, see <https://www.gnu.org/licenses/>.
 */
use std::error::Error;
use std::fmt;

pub type BoxtabResult<T> = Result<T, BoxtabError>;

/// Errors raised when the table's shape cannot be rendered, or when the output
/// sink fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxtabError {
    /// No rows were supplied. The column count is inferred from the first row,
    /// so an empty table has no defined width.
    EmptyTable,
    /// A row's length differs from the first row's.
    RaggedRow { row: usize, expected: usize, found: usize },
    /// Labels were supplied whose length differs from the column count.
    LabelCount { expected: usize, found: usize },
    /// The underlying writer reported an error.
    Format(fmt::Error),
}

impl fmt::Display for BoxtabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxtabError::EmptyTable => write!(f, "table has no rows"),
            BoxtabError::RaggedRow { row, expected, found } => {
                write!(f, "row {row} has {found} columns where {expected} were expected")
            }
            BoxtabError::LabelCount { expected, found } => {
                write!(f, "{found} labels were supplied for {expected} columns")
            }
            BoxtabError::Format(e) => e.fmt(f),
        }
    }
}

impl Error for BoxtabError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BoxtabError::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl From<fmt::Error> for BoxtabError {
    fn from(e: fmt::Error) -> Self {
        BoxtabError::Format(e)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::BoxtabError;

    #[test]
    fn test_display() {
        assert_eq!(BoxtabError::EmptyTable.to_string(), "table has no rows");
        assert_eq!(
            BoxtabError::RaggedRow { row: 3, expected: 4, found: 2 }.to_string(),
            "row 3 has 2 columns where 4 were expected"
        );
        assert_eq!(
            BoxtabError::LabelCount { expected: 2, found: 5 }.to_string(),
            "5 labels were supplied for 2 columns"
        );
    }
}
