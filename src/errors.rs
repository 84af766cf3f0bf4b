// This file is part of the chess-rules library.
// Copyright (C) 2024 The chess-rules authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{error::Error, fmt};

use crate::{m::Move, role::Role};

/// Error when a column or row is outside of `0..8`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoordinatesOutOfBounds {
    pub column: i32,
    pub row: i32,
}

impl fmt::Display for CoordinatesOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coordinates out of bounds: column {}, row {}",
            self.column, self.row
        )
    }
}

impl Error for CoordinatesOutOfBounds {}

/// Error when a piece type is not acceptable in the given context.
///
/// Raised when a pawn is promoted to something other than a knight, bishop,
/// rook or queen, and when an integer tag does not name a piece type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IncorrectPieceType {
    /// The rejected piece type, or `None` if no (valid) type was given.
    pub role: Option<Role>,
}

impl fmt::Display for IncorrectPieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Some(role) => write!(f, "incorrect piece type: {role:?}"),
            None => f.write_str("missing or unknown piece type"),
        }
    }
}

impl Error for IncorrectPieceType {}

/// Error when playing a move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlayError {
    /// The move is not legal in the position: it is not among the piece's
    /// candidate moves, castles through an attacked square, or leaves the
    /// own king in check.
    InvalidMove {
        #[allow(missing_docs)]
        m: Move,
    },
    /// The move promotes, but the promotion choice is unacceptable.
    IncorrectPieceType(IncorrectPieceType),
}

impl PlayError {
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, PlayError::InvalidMove { .. })
    }
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::InvalidMove { m } => write!(f, "invalid move: {m}"),
            PlayError::IncorrectPieceType(err) => write!(f, "cannot promote: {err}"),
        }
    }
}

impl Error for PlayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlayError::IncorrectPieceType(err) => Some(err),
            PlayError::InvalidMove { .. } => None,
        }
    }
}

impl From<IncorrectPieceType> for PlayError {
    fn from(err: IncorrectPieceType) -> PlayError {
        PlayError::IncorrectPieceType(err)
    }
}

/// Error when parsing a board dump.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseBoardError {
    /// The dump does not have exactly 8 rows.
    RowCount {
        #[allow(missing_docs)]
        rows: usize,
    },
    /// A row holds something other than 8 cells of 3 columns each.
    RowWidth {
        #[allow(missing_docs)]
        row: usize,
    },
    /// A cell is neither blank nor a piece code like `Q1`.
    InvalidPiece {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
    },
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParseBoardError::RowCount { rows } => write!(f, "expected 8 rows, got {rows}"),
            ParseBoardError::RowWidth { row } => write!(f, "invalid width of row {row}"),
            ParseBoardError::InvalidPiece { row, column } => {
                write!(f, "invalid piece code in row {row}, column {column}")
            }
        }
    }
}

impl Error for ParseBoardError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_play_error_source() {
        let err = PlayError::from(IncorrectPieceType {
            role: Some(Role::King),
        });
        assert!(err.source().is_some());
        assert!(!err.is_invalid_move());

        let err = PlayError::InvalidMove {
            m: Move::from_squares(Square::E2, Square::E5),
        };
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "invalid move: e2 move to e5");
    }
}
