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

//! Piece positions on a board.
//!
//! # Examples
//!
//! ```
//! use chess_rules::{Board, Side, Square};
//!
//! let board = Board::standard(Side::First);
//! let piece = board.piece_at(Square::E1).expect("king on e1");
//! assert_eq!(piece.to_string(), "K1");
//!
//! // Text dump, rank 8 first.
//! assert_eq!(board.to_string(), "\
//! R2 N2 B2 Q2 K2 B2 N2 R2 \n\
//! P2 P2 P2 P2 P2 P2 P2 P2 \n\
//! \x20                       \n\
//! \x20                       \n\
//! \x20                       \n\
//! \x20                       \n\
//! P1 P1 P1 P1 P1 P1 P1 P1 \n\
//! R1 N1 B1 Q1 K1 B1 N1 R1 \n");
//! ```

use std::fmt;

use crate::{
    errors::ParseBoardError,
    piece::{Kind, Piece},
    role::Role,
    side::{BySide, Side},
    square::Square,
};

const BACKRANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// An 8×8 grid of optional pieces.
///
/// A board is a plain value: copying it yields a fully independent board,
/// so positions derived from each other never share mutable state. Every
/// piece is stored at its own [`Piece::square`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    grid: [Option<Piece>; 64],
}

impl Board {
    pub const fn empty() -> Board {
        Board { grid: [None; 64] }
    }

    /// The standard initial layout. The `white` side starts on rows 0 and 1.
    pub fn standard(white: Side) -> Board {
        let mut board = Board::empty();
        for side in Side::ALL {
            let (backrank, pawn_row) = if side == white { (0, 1) } else { (7, 6) };
            for (column, role) in (0u8..).zip(BACKRANK) {
                let square = Square::A1.with_column(column);
                board.set_piece(Piece {
                    side,
                    square: square.with_row(backrank),
                    kind: Kind::fresh(role),
                });
                board.set_piece(Piece {
                    side,
                    square: square.with_row(pawn_row),
                    kind: Kind::fresh(Role::Pawn),
                });
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.index()]
    }

    #[inline]
    pub fn side_at(&self, sq: Square) -> Option<Side> {
        self.piece_at(sq).map(|piece| piece.side)
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.grid[sq.index()].is_some()
    }

    /// Puts a piece on its square, returning whatever stood there before.
    pub fn set_piece(&mut self, piece: Piece) -> Option<Piece> {
        self.grid[piece.square.index()].replace(piece)
    }

    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.index()].take()
    }

    /// Iterates over all pieces, a1 first, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.iter().flatten().copied()
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.side == side)
    }

    /// Finds the king of `side`. If there are multiple, the first one
    /// from a1 is returned.
    pub fn king_of(&self, side: Side) -> Option<Square> {
        self.pieces_of(side)
            .find(|piece| piece.role() == Role::King)
            .map(|piece| piece.square)
    }

    /// Counts the pieces of the given role for each side.
    pub fn count(&self, role: Role) -> BySide<usize> {
        let mut counts = BySide::default();
        for piece in self.pieces().filter(|piece| piece.role() == role) {
            *counts.get_mut(piece.side) += 1;
        }
        counts
    }

    /// Parses a text dump as produced by [`Display`](fmt::Display).
    ///
    /// Movement flags are inferred as in a game that has not touched the
    /// pieces yet: pawns on their starting row may advance two squares,
    /// kings on column 4 and rooks in the corners of their back rank may
    /// castle. The back rank of `white` is row 0. Lines may omit trailing
    /// blanks, and a single leading newline is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError`] if the text does not have 8 rows of at
    /// most 8 cells, or a cell is not blank or a piece code.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::{Board, Role, Side, Square};
    ///
    /// let board = Board::from_ascii("
    /// K2
    ///
    ///
    ///
    ///
    ///
    ///             P1
    /// K1
    /// ", Side::First)?;
    ///
    /// let pawn = board.piece_at(Square::E2).expect("pawn on e2");
    /// assert_eq!(pawn.role(), Role::Pawn);
    /// assert!(pawn.kind.can_double_step());
    /// assert_eq!(board.king_of(Side::Second), Some(Square::A8));
    /// # Ok::<_, chess_rules::ParseBoardError>(())
    /// ```
    pub fn from_ascii(text: &str, white: Side) -> Result<Board, ParseBoardError> {
        let text = text.strip_prefix('\n').unwrap_or(text);
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() != 8 {
            return Err(ParseBoardError::RowCount { rows: lines.len() });
        }

        let mut board = Board::empty();

        for (line_index, line) in lines.into_iter().enumerate() {
            let row = 7 - line_index;
            let cells = line.trim_end().as_bytes();
            if cells.len() > 24 || !line.is_ascii() {
                return Err(ParseBoardError::RowWidth { row });
            }

            for (column, cell) in cells.chunks(3).enumerate() {
                let code = match cell {
                    [b' ', b' ', ..] | [b' '] => continue,
                    [letter, digit] | [letter, digit, b' '] => (*letter, *digit),
                    _ => return Err(ParseBoardError::InvalidPiece { row, column }),
                };

                let (role, side) = match (
                    Role::from_char(char::from(code.0)).filter(|_| code.0.is_ascii_uppercase()),
                    Side::from_char(char::from(code.1)),
                ) {
                    (Some(role), Some(side)) => (role, side),
                    _ => return Err(ParseBoardError::InvalidPiece { row, column }),
                };

                let square = Square::A1.with_row(row as u8).with_column(column as u8);
                board.set_piece(Piece {
                    side,
                    square,
                    kind: inferred_kind(role, side, square, white),
                });
            }
        }

        Ok(board)
    }
}

fn inferred_kind(role: Role, side: Side, square: Square, white: Side) -> Kind {
    let (backrank, pawn_row) = if side == white { (0, 1) } else { (7, 6) };
    let fresh = match role {
        Role::Pawn => square.row() == pawn_row,
        Role::King => square.row() == backrank && square.column() == 4,
        Role::Rook => square.row() == backrank && (square.column() == 0 || square.column() == 7),
        _ => true,
    };
    if fresh {
        Kind::fresh(role)
    } else {
        Kind::moved(role)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::standard(Side::First)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            for sq in Square::all().skip(row * 8).take(8) {
                match self.piece_at(sq) {
                    Some(piece) => write!(f, "{piece} ")?,
                    None => f.write_str("   ")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Board(\n")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}
