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

use std::fmt;

use crate::{errors::CoordinatesOutOfBounds, square::Square};

/// A move from one square to another.
///
/// The move does not record which piece moves or what it captures. Both
/// are read from the board when the move is played. Equality is
/// structural on the two squares.
///
/// # Display
///
/// `Move` implements [`Display`](fmt::Display) as a minimal debug form,
/// e.g. `e2 move to e4`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub start: Square,
    pub end: Square,
}

impl Move {
    /// Creates a move from coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatesOutOfBounds`] if any of the four coordinates is
    /// not in `0..8`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::{Move, Square};
    ///
    /// let m = Move::new(4, 1, 4, 3)?;
    /// assert_eq!(m, Move::from_squares(Square::E2, Square::E4));
    ///
    /// assert!(Move::new(4, 1, 4, 8).is_err());
    /// # Ok::<_, chess_rules::CoordinatesOutOfBounds>(())
    /// ```
    pub fn new(
        start_column: i32,
        start_row: i32,
        end_column: i32,
        end_row: i32,
    ) -> Result<Move, CoordinatesOutOfBounds> {
        Ok(Move {
            start: Square::from_coords(start_column, start_row)?,
            end: Square::from_coords(end_column, end_row)?,
        })
    }

    #[inline]
    pub const fn from_squares(start: Square, end: Square) -> Move {
        Move { start, end }
    }

    /// Signed column distance, positive towards the h-file.
    #[inline]
    pub fn column_delta(self) -> i32 {
        i32::from(self.end.column()) - i32::from(self.start.column())
    }

    /// Signed row distance, positive towards the eighth rank.
    #[inline]
    pub fn row_delta(self) -> i32 {
        i32::from(self.end.row()) - i32::from(self.start.row())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} move to {}", self.start, self.end)
    }
}

/// A list of moves.
///
/// Boards set up by hand may hold far more pieces than a game ever does,
/// so the list grows as needed. The candidates of a single piece fit
/// inline, see [`attacks::Candidates`](crate::attacks::Candidates).
///
/// # Example
///
/// ```
/// use chess_rules::{Position, Square};
///
/// let pos = Position::default();
/// let mut moves = pos.legal_moves();
/// moves.retain(|m| m.start == Square::G1);
/// assert_eq!(moves.len(), 2);
/// ```
pub type MoveList = Vec<Move>;

#[cfg(test)]
mod tests {
    use std::mem;

    use super::*;

    #[test]
    fn test_move_size() {
        assert!(mem::size_of::<Move>() <= 2);
    }

    #[test]
    fn test_deltas() {
        let m = Move::from_squares(Square::E1, Square::C1);
        assert_eq!(m.column_delta(), -2);
        assert_eq!(m.row_delta(), 0);

        let m = Move::from_squares(Square::D7, Square::D5);
        assert_eq!(m.row_delta(), -2);
        assert_eq!(m.to_string(), "d7 move to d5");
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(
            Move::new(0, 0, -1, 0),
            Err(CoordinatesOutOfBounds { column: -1, row: 0 })
        );
    }
}
