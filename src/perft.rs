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

//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use chess_rules::{perft, Position};
//!
//! let pos = Position::default();
//! assert_eq!(perft(&pos, 1), 20);
//! assert_eq!(perft(&pos, 2), 400);
//! ```

use crate::{position::Position, role::Role};

/// Counts legal move paths of a given length.
///
/// Each promotion choice counts as a separate path. Paths ending early in
/// checkmate or stalemate are not counted. Useful for comparing, testing
/// and debugging move generation correctness and performance.
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    pos.legal_moves()
        .into_iter()
        .map(|m| {
            if pos.is_promotion(m) {
                Role::PROMOTIONS
                    .into_iter()
                    .filter_map(|role| pos.make_move(m, Some(role)).ok())
                    .map(|child| perft(&child, depth - 1))
                    .sum::<u64>()
            } else {
                pos.make_move(m, None)
                    .map_or(0, |child| perft(&child, depth - 1))
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Side};

    #[test]
    fn test_depth_zero() {
        assert_eq!(perft(&Position::default(), 0), 1);
    }

    #[test]
    fn test_promotions_count_separately() {
        let board = Board::from_ascii(
            "
K2
      P1





K1
",
            Side::First,
        )
        .unwrap();
        let pos = Position::from_board(board, Side::First, Side::First);
        // 4 promotions of the pawn, 3 king moves.
        assert_eq!(perft(&pos, 1), 7);
    }

    #[test]
    fn test_checkmate_ends_paths() {
        let board = Board::from_ascii(
            "
K2 Q1




         K1


",
            Side::First,
        )
        .unwrap();
        let pos = Position::from_board(board, Side::Second, Side::First);
        // Kxb8 is the only move, the queen is unprotected.
        assert_eq!(perft(&pos, 1), 1);
    }
}
