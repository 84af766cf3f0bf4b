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

use crate::errors::CoordinatesOutOfBounds;

/// A square of the board, identified by column (0 is the a-file) and row
/// (0 is the first rank).
///
/// # Examples
///
/// ```
/// use chess_rules::Square;
///
/// let sq = Square::from_coords(4, 3)?;
/// assert_eq!(sq, Square::E4);
/// assert_eq!(sq.column(), 4);
/// assert_eq!(sq.row(), 3);
/// assert_eq!(sq.to_string(), "e4");
///
/// assert!(Square::from_coords(8, 0).is_err());
/// # Ok::<_, chess_rules::CoordinatesOutOfBounds>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Square(u8);

impl Square {
    /// Tries to get a square from column and row, each in `0..8`.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatesOutOfBounds`] if either coordinate is out of
    /// range.
    pub fn from_coords(column: i32, row: i32) -> Result<Square, CoordinatesOutOfBounds> {
        if (0..8).contains(&column) && (0..8).contains(&row) {
            Ok(Square((column + 8 * row) as u8))
        } else {
            Err(CoordinatesOutOfBounds { column, row })
        }
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.0 & 7
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 >> 3
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Moves the square by the given number of columns and rows, or `None`
    /// if that leaves the board.
    pub fn offset(self, columns: i32, rows: i32) -> Option<Square> {
        Square::from_coords(i32::from(self.column()) + columns, i32::from(self.row()) + rows).ok()
    }

    /// The same square with a different row.
    #[must_use]
    pub const fn with_row(self, row: u8) -> Square {
        Square((self.0 & 7) | ((row & 7) << 3))
    }

    /// The same square with a different column.
    #[must_use]
    pub const fn with_column(self, column: u8) -> Square {
        Square((self.0 & !7) | (column & 7))
    }

    /// All 64 squares, a1 first, row by row.
    pub fn all() -> impl Iterator<Item = Square> + Clone {
        (0..64).map(Square)
    }
}

macro_rules! named_squares {
    ($($name:ident = $index:expr,)+) => {
        #[allow(missing_docs)]
        impl Square {
            $(pub const $name: Square = Square($index);)+
        }
    }
}

named_squares! {
    A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
    A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}

impl TryFrom<u8> for Square {
    type Error = CoordinatesOutOfBounds;

    fn try_from(index: u8) -> Result<Square, CoordinatesOutOfBounds> {
        Square::from_coords(i32::from(index & 7), i32::from(index >> 3))
    }
}

impl From<Square> for u8 {
    #[inline]
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.column()),
            char::from(b'1' + self.row())
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        for column in 0..8 {
            for row in 0..8 {
                let sq = Square::from_coords(column, row).unwrap();
                assert_eq!(i32::from(sq.column()), column);
                assert_eq!(i32::from(sq.row()), row);
            }
        }
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(
            Square::from_coords(-1, 1),
            Err(CoordinatesOutOfBounds { column: -1, row: 1 })
        );
        assert!(Square::from_coords(0, 8).is_err());
        assert!(Square::try_from(64).is_err());
    }

    #[test]
    fn test_offset() {
        assert_eq!(Square::E2.offset(0, 2), Some(Square::E4));
        assert_eq!(Square::B1.offset(-1, 2), Some(Square::A3));
        assert_eq!(Square::H4.offset(1, 0), None);
        assert_eq!(Square::A1.offset(0, -1), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::H8.to_string(), "h8");
        assert_eq!(format!("{:?}", Square::D5), "D5");
        assert_eq!(Square::all().count(), 64);
    }
}
