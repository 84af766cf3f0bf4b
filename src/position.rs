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

use bitflags::bitflags;

use crate::{
    attacks,
    board::Board,
    errors::PlayError,
    m::{Move, MoveList},
    piece::{Kind, Piece},
    role::Role,
    side::Side,
    square::Square,
};

/// Outcome of a finished game.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Decisive { winner: Side },
    Draw,
}

impl Outcome {
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Decisive { winner } => Some(winner),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Decisive { winner } => write!(f, "{winner} side wins"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

bitflags! {
    /// Reasons for a [`Position`] to be unreachable in play.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct PositionErrorKinds: u32 {
        /// There are no pieces on the board.
        const EMPTY_BOARD = 1 << 0;

        /// A side has no king.
        const MISSING_KING = 1 << 1;

        /// A side has more than one king.
        const TOO_MANY_KINGS = 1 << 2;

        /// There are pawns on their own or the opposing back rank.
        const PAWNS_ON_BACKRANK = 1 << 3;

        /// The side waiting for its turn is in check.
        const OPPOSITE_CHECK = 1 << 4;
    }
}

/// Error when validating a [`Position`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionError {
    kinds: PositionErrorKinds,
}

impl PositionError {
    pub fn kinds(&self) -> PositionErrorKinds {
        self.kinds
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("illegal position")?;

        let mut reasons = self.kinds.iter_names().map(|(name, _)| name);
        if let Some(first) = reasons.next() {
            write!(f, ": {}", first.to_lowercase().replace('_', " "))?;
            for reason in reasons {
                write!(f, ", {}", reason.to_lowercase().replace('_', " "))?;
            }
        }
        Ok(())
    }
}

impl Error for PositionError {}

/// A chess position: the board, the side to move, and the side playing
/// white.
///
/// Positions are immutable. [`Position::make_move()`] returns a new
/// position and leaves `self` untouched.
///
/// # Examples
///
/// ```
/// use chess_rules::{Move, Position, Side, Square};
///
/// let pos = Position::new(Side::First);
/// assert_eq!(pos.legal_moves().len(), 20);
///
/// // 1. e4
/// let e4 = Move::from_squares(Square::E2, Square::E4);
/// let after = pos.make_move(e4, None)?;
/// assert_eq!(after.side_to_move(), Side::Second);
/// assert_eq!(pos.side_to_move(), Side::First);
/// # Ok::<_, chess_rules::PlayError>(())
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    board: Board,
    turn: Side,
    white: Side,
}

impl Position {
    /// The standard initial position. `white` moves first.
    pub fn new(white: Side) -> Position {
        Position {
            board: Board::standard(white),
            turn: white,
            white,
        }
    }

    /// Sets up an arbitrary position. Nothing is validated: positions
    /// that cannot arise in play are allowed, e.g., for tests. See
    /// [`Position::validate()`].
    pub fn from_board(board: Board, turn: Side, white: Side) -> Position {
        Position { board, turn, white }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn side_waiting(&self) -> Side {
        !self.turn
    }

    #[inline]
    pub fn white_side(&self) -> Side {
        self.white
    }

    /// Checks for conditions that cannot occur in play.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] with all detected problems.
    pub fn validate(&self) -> Result<(), PositionError> {
        let mut kinds = PositionErrorKinds::empty();

        if self.board.pieces().next().is_none() {
            kinds |= PositionErrorKinds::EMPTY_BOARD;
        }

        let kings = self.board.count(Role::King);
        if kings.any(|&n| n == 0) {
            kinds |= PositionErrorKinds::MISSING_KING;
        }
        if kings.any(|&n| n > 1) {
            kinds |= PositionErrorKinds::TOO_MANY_KINGS;
        }

        if self
            .board
            .pieces()
            .any(|piece| piece.role() == Role::Pawn && matches!(piece.square.row(), 0 | 7))
        {
            kinds |= PositionErrorKinds::PAWNS_ON_BACKRANK;
        }

        if is_in_check(&self.board, self.side_waiting(), self.white) {
            kinds |= PositionErrorKinds::OPPOSITE_CHECK;
        }

        if kinds.is_empty() {
            Ok(())
        } else {
            Err(PositionError { kinds })
        }
    }

    /// Checks if the side to move owns a piece on `sq`.
    pub fn is_a_piece_of_side_to_move(&self, sq: Square) -> bool {
        self.board.side_at(sq) == Some(self.turn)
    }

    /// Candidate moves of all pieces of the side to move, ignoring the
    /// safety of the own king.
    pub fn candidate_moves(&self) -> MoveList {
        self.board
            .pieces_of(self.turn)
            .flat_map(|piece| attacks::candidate_moves(&self.board, piece, self.white))
            .collect()
    }

    fn legal_moves_of(&self, piece: Piece) -> impl Iterator<Item = Move> + '_ {
        attacks::candidate_moves(&self.board, piece, self.white)
            .into_iter()
            .filter(move |m| self.is_legal(*m))
    }

    /// Tests a move for legality.
    ///
    /// The move is played speculatively. Promotions are tried with a
    /// queen, since the choice of piece never affects the own king.
    pub fn is_legal(&self, m: Move) -> bool {
        self.make_move(m, Some(Role::Queen)).is_ok()
    }

    /// Generates all legal moves.
    ///
    /// Every candidate move is played speculatively and kept only if
    /// [`Position::make_move()`] accepts it. Pins, discovered checks and
    /// castling through check are all handled by that single check.
    pub fn legal_moves(&self) -> MoveList {
        self.board
            .pieces_of(self.turn)
            .flat_map(|piece| self.legal_moves_of(piece))
            .collect()
    }

    /// Legal moves of the piece on `sq`. Empty if there is no piece of
    /// the side to move.
    pub fn legal_moves_for(&self, sq: Square) -> MoveList {
        self.board
            .piece_at(sq)
            .filter(|piece| piece.side == self.turn)
            .map_or_else(MoveList::new, |piece| self.legal_moves_of(piece).collect())
    }

    /// Checks if the move is a pawn reaching its last row, so that a
    /// promotion choice is required.
    pub fn is_promotion(&self, m: Move) -> bool {
        self.board.piece_at(m.start).is_some_and(|piece| {
            piece.role() == Role::Pawn
                && m.end.row() == attacks::promotion_row(piece.side, self.white)
        })
    }

    /// Validates and plays a move, returning the resulting position.
    ///
    /// `promotion` is only looked at when the move is a promotion (see
    /// [`Position::is_promotion()`]).
    ///
    /// # Errors
    ///
    /// * [`PlayError::InvalidMove`] if there is no piece of the side to
    ///   move on the start square, the move does not match the movement
    ///   rules of that piece, castling passes through an attacked square,
    ///   or the move leaves the own king in check.
    /// * [`PlayError::IncorrectPieceType`] if the move is a promotion and
    ///   `promotion` is not a knight, bishop, rook or queen.
    pub fn make_move(&self, m: Move, promotion: Option<Role>) -> Result<Position, PlayError> {
        let side = self.turn;
        let invalid = PlayError::InvalidMove { m };

        // En passant only ever protected the move just before.
        let mut board = self.board;
        expire_en_passant(&mut board, side);

        let piece = board
            .piece_at(m.start)
            .filter(|piece| piece.side == side)
            .ok_or_else(|| invalid.clone())?;

        if !attacks::candidate_moves(&board, piece, self.white).contains(&m) {
            return Err(invalid);
        }

        let mut after = board;
        after.remove_piece_at(m.start);

        let placed = match piece.kind {
            Kind::Pawn { .. } => {
                if m.column_delta() != 0 && !board.is_occupied(m.end) {
                    after.remove_piece_at(m.start.with_column(m.end.column()));
                }

                if m.end.row() == attacks::promotion_row(side, self.white) {
                    Piece {
                        side,
                        square: m.end,
                        kind: Kind::moved(Role::promotion(promotion)?),
                    }
                } else if m.row_delta().abs() == 2 {
                    Piece {
                        side,
                        square: m.end,
                        kind: Kind::Pawn {
                            can_double_step: false,
                            en_passant: true,
                        },
                    }
                } else {
                    piece.moved_to(m.end)
                }
            }
            Kind::King { .. } if m.column_delta().abs() == 2 => {
                let (rook_from, rook_to) = if m.column_delta() > 0 { (7, 5) } else { (0, 3) };

                let mut transit = m.start.column().min(m.end.column())
                    ..=m.start.column().max(m.end.column());
                if transit.any(|column| {
                    attacks::is_attacked(&board, m.start.with_column(column), !side, self.white)
                }) {
                    return Err(invalid);
                }

                if let Some(rook) = after.remove_piece_at(m.start.with_column(rook_from)) {
                    after.set_piece(rook.moved_to(m.start.with_column(rook_to)));
                }
                piece.moved_to(m.end)
            }
            _ => piece.moved_to(m.end),
        };
        after.set_piece(placed);

        if is_in_check(&after, side, self.white) {
            return Err(invalid);
        }

        // The opponent's double steps can no longer be answered.
        expire_en_passant(&mut after, !side);

        Ok(Position {
            board: after,
            turn: !side,
            white: self.white,
        })
    }

    /// Checks if the side to move is in check.
    pub fn is_check(&self) -> bool {
        is_in_check(&self.board, self.turn, self.white)
    }

    /// Checks if the side to move has no legal moves. This is the case
    /// after checkmate and stalemate.
    pub fn is_finished(&self) -> bool {
        self.board
            .pieces_of(self.turn)
            .all(|piece| self.legal_moves_of(piece).next().is_none())
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && self.is_finished()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && self.is_finished()
    }

    /// The winner after checkmate: the side waiting. `None` after
    /// stalemate and while the game is not finished.
    pub fn winner(&self) -> Option<Side> {
        self.outcome().and_then(Outcome::winner)
    }

    /// The outcome of the game, or `None` while the side to move still
    /// has legal moves.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_finished() {
            None
        } else if self.is_check() {
            Some(Outcome::Decisive {
                winner: self.side_waiting(),
            })
        } else {
            Some(Outcome::Draw)
        }
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new(Side::First)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

/// A side without a king is never in check.
fn is_in_check(board: &Board, side: Side, white: Side) -> bool {
    board
        .king_of(side)
        .is_some_and(|king| attacks::is_attacked(board, king, !side, white))
}

fn expire_en_passant(board: &mut Board, side: Side) {
    for sq in Square::all() {
        if let Some(pawn) = board
            .piece_at(sq)
            .filter(|piece| piece.side == side && piece.kind.is_en_passant_target())
        {
            board.set_piece(pawn.with_kind(Kind::Pawn {
                can_double_step: pawn.kind.can_double_step(),
                en_passant: false,
            }));
        }
    }
}
