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

//! Movement rules of the individual pieces.
//!
//! These rules are purely geometric: they look at the board but not at
//! the safety of the own king. Filtering out moves that leave the king in
//! check is the job of [`Position`](crate::Position).
//!
//! # Example
//!
//! ```
//! use chess_rules::{attacks, Board, Side, Square};
//!
//! let board = Board::default();
//! let knight = board.piece_at(Square::G1).expect("knight on g1");
//! let targets = attacks::attacks(&board, knight, Side::First);
//! // . . . . . . . .
//! // . . . . . . . .
//! // . . . . . . . .
//! // . . . . . . . .
//! // . . . . . . . .
//! // . . . . . 1 . 1
//! // . . . . . . . .
//! // . . . . . . N .
//!
//! assert_eq!(targets.as_slice(), &[Square::F3, Square::H3]);
//! ```

use arrayvec::ArrayVec;

use crate::{
    board::Board,
    m::Move,
    piece::{Kind, Piece},
    role::Role,
    side::Side,
    square::Square,
};

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];
const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
    (1, -1),
];
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_OFFSETS: [(i32, i32); 8] = QUEEN_DIRECTIONS;

/// Target squares of a single piece. A queen in the middle of an empty
/// board has the most: 27.
pub type Targets = ArrayVec<Square, 32>;

/// Candidate moves of a single piece: at most 27 for a queen, 10 for a
/// king that may castle both ways.
pub type Candidates = ArrayVec<Move, 32>;

/// Row direction in which pawns of `side` advance: `1` for the side
/// playing white, `-1` for the other.
#[inline]
pub fn pawn_direction(side: Side, white: Side) -> i32 {
    if side == white {
        1
    } else {
        -1
    }
}

/// Row on which pawns of `side` promote.
#[inline]
pub fn promotion_row(side: Side, white: Side) -> u8 {
    if side == white {
        7
    } else {
        0
    }
}

fn push_rays(board: &Board, piece: Piece, directions: &[(i32, i32)], targets: &mut Targets) {
    for &(columns, rows) in directions {
        let mut sq = piece.square;
        while let Some(next) = sq.offset(columns, rows) {
            match board.side_at(next) {
                None => targets.push(next),
                Some(side) => {
                    if side != piece.side {
                        targets.push(next);
                    }
                    break;
                }
            }
            sq = next;
        }
    }
}

fn push_steps(board: &Board, piece: Piece, offsets: &[(i32, i32)], targets: &mut Targets) {
    for &(columns, rows) in offsets {
        if let Some(to) = piece.square.offset(columns, rows) {
            if board.side_at(to) != Some(piece.side) {
                targets.push(to);
            }
        }
    }
}

/// Squares attacked by `piece`, i.e., squares where it could capture an
/// opposing piece.
///
/// For all pieces except pawns these are exactly the destinations of
/// their ordinary (non-castling) moves. Pawns attack their two forward
/// diagonals, whether or not something stands there.
pub fn attacks(board: &Board, piece: Piece, white: Side) -> Targets {
    let mut targets = Targets::new();
    match piece.kind {
        Kind::Pawn { .. } => {
            let direction = pawn_direction(piece.side, white);
            targets.extend(
                [-1, 1]
                    .into_iter()
                    .filter_map(|columns| piece.square.offset(columns, direction)),
            );
        }
        Kind::Knight => push_steps(board, piece, &KNIGHT_OFFSETS, &mut targets),
        Kind::Bishop => push_rays(board, piece, &BISHOP_DIRECTIONS, &mut targets),
        Kind::Rook { .. } => push_rays(board, piece, &ROOK_DIRECTIONS, &mut targets),
        Kind::Queen => push_rays(board, piece, &QUEEN_DIRECTIONS, &mut targets),
        Kind::King { .. } => push_steps(board, piece, &KING_OFFSETS, &mut targets),
    }
    targets
}

/// Tests if any piece of `by` attacks `sq`.
pub fn is_attacked(board: &Board, sq: Square, by: Side, white: Side) -> bool {
    board
        .pieces_of(by)
        .any(|piece| attacks(board, piece, white).contains(&sq))
}

fn push_pawn_moves(board: &Board, piece: Piece, white: Side, moves: &mut Candidates) {
    let from = piece.square;
    let direction = pawn_direction(piece.side, white);

    if let Some(single) = from.offset(0, direction) {
        if !board.is_occupied(single) {
            moves.push(Move::from_squares(from, single));

            if piece.kind.can_double_step() {
                if let Some(double) = from.offset(0, 2 * direction) {
                    if !board.is_occupied(double) {
                        moves.push(Move::from_squares(from, double));
                    }
                }
            }
        }
    }

    for columns in [-1, 1] {
        let Some(diagonal) = from.offset(columns, direction) else {
            continue;
        };
        match board.piece_at(diagonal) {
            Some(target) => {
                if target.side != piece.side {
                    moves.push(Move::from_squares(from, diagonal));
                }
            }
            None => {
                let en_passant = from
                    .offset(columns, 0)
                    .and_then(|beside| board.piece_at(beside))
                    .is_some_and(|beside| {
                        beside.side != piece.side && beside.kind.is_en_passant_target()
                    });
                if en_passant {
                    moves.push(Move::from_squares(from, diagonal));
                }
            }
        }
    }
}

fn push_castling_moves(board: &Board, king: Piece, moves: &mut Candidates) {
    if !king.kind.can_castle() || king.square.column() != 4 {
        return;
    }

    // (rook column, columns that must be empty, king destination column)
    let candidates: [(u8, &[u8], u8); 2] = [(7, &[5, 6], 6), (0, &[1, 2, 3], 2)];

    for (rook_column, between, king_to) in candidates {
        let rook_ready = board
            .piece_at(king.square.with_column(rook_column))
            .is_some_and(|rook| {
                rook.side == king.side && rook.role() == Role::Rook && rook.kind.can_castle()
            });

        if rook_ready
            && between
                .iter()
                .all(|&column| !board.is_occupied(king.square.with_column(column)))
        {
            moves.push(Move::from_squares(
                king.square,
                king.square.with_column(king_to),
            ));
        }
    }
}

/// Generates the candidate moves of `piece`: every move consistent with
/// its movement pattern, ignoring whether it leaves the own king in
/// check.
///
/// Castling candidates are included when the king and rook have not
/// moved and the squares between them are empty. Whether the king passes
/// through an attacked square is not checked here.
pub fn candidate_moves(board: &Board, piece: Piece, white: Side) -> Candidates {
    let mut moves = Candidates::new();
    match piece.kind {
        Kind::Pawn { .. } => push_pawn_moves(board, piece, white, &mut moves),
        Kind::King { .. } => {
            moves.extend(
                attacks(board, piece, white)
                    .into_iter()
                    .map(|to| Move::from_squares(piece.square, to)),
            );
            push_castling_moves(board, piece, &mut moves);
        }
        _ => moves.extend(
            attacks(board, piece, white)
                .into_iter()
                .map(|to| Move::from_squares(piece.square, to)),
        ),
    }
    moves
}
