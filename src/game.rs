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

//! A game in progress.
//!
//! [`Game`] holds the current [`Position`] and replaces it whenever a
//! move is accepted. This is the surface a user interface talks to.
//!
//! # Examples
//!
//! ```
//! use chess_rules::{Game, Move, Outcome, Side, Square};
//!
//! let mut game = Game::default();
//! for (start, end) in [
//!     (Square::F2, Square::F3),
//!     (Square::E7, Square::E5),
//!     (Square::G2, Square::G4),
//!     (Square::D8, Square::H4),
//! ] {
//!     game.make_move(Move::from_squares(start, end), None)?;
//! }
//!
//! assert!(game.is_finished());
//! assert_eq!(game.outcome(), Some(Outcome::Decisive { winner: Side::Second }));
//! assert_eq!(game.history().len(), 4);
//! # Ok::<_, chess_rules::PlayError>(())
//! ```

use tracing::{debug, trace};

use crate::{
    errors::PlayError,
    m::{Move, MoveList},
    position::{Outcome, Position},
    role::Role,
    side::Side,
    square::Square,
};

/// A game session: the current position, the moves played so far, and
/// whether a side resigned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    position: Position,
    history: Vec<Move>,
    resigned: Option<Side>,
}

impl Game {
    /// Starts a game from the standard layout. `white` moves first.
    pub fn new(white: Side) -> Game {
        Game {
            position: Position::new(white),
            history: Vec::new(),
            resigned: None,
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The side that resigned, if any.
    pub fn resigned(&self) -> Option<Side> {
        self.resigned
    }

    pub fn side_to_move(&self) -> Side {
        self.position.side_to_move()
    }

    pub fn white_side(&self) -> Side {
        self.position.white_side()
    }

    pub fn is_a_piece_of_side_to_move(&self, sq: Square) -> bool {
        self.position.is_a_piece_of_side_to_move(sq)
    }

    pub fn is_promotion(&self, m: Move) -> bool {
        self.position.is_promotion(m)
    }

    /// Legal moves of the piece on `sq`. Empty once the game is over.
    pub fn legal_moves_for(&self, sq: Square) -> MoveList {
        if self.resigned.is_some() {
            MoveList::new()
        } else {
            self.position.legal_moves_for(sq)
        }
    }

    /// Plays a move. On error the game is left unchanged.
    ///
    /// # Errors
    ///
    /// See [`Position::make_move()`]. After a resignation every move is
    /// rejected with [`PlayError::InvalidMove`].
    pub fn make_move(&mut self, m: Move, promotion: Option<Role>) -> Result<(), PlayError> {
        let side = self.side_to_move();

        let result = if self.resigned.is_some() {
            Err(PlayError::InvalidMove { m })
        } else {
            self.position.make_move(m, promotion)
        };

        match result {
            Ok(position) => {
                debug!(%side, %m, ?promotion, "move played");
                self.position = position;
                self.history.push(m);
                Ok(())
            }
            Err(error) => {
                trace!(%side, %m, %error, "move rejected");
                Err(error)
            }
        }
    }

    /// The side to move concedes. Does nothing if the game is already
    /// over.
    pub fn resign(&mut self) {
        if self.is_finished() {
            return;
        }
        let side = self.side_to_move();
        debug!(%side, "resigned");
        self.resigned = Some(side);
    }

    /// Back to the initial position with the same white side.
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "game reset");
        *self = Game::new(self.white_side());
    }

    /// Checks if the game is over by checkmate, stalemate or resignation.
    pub fn is_finished(&self) -> bool {
        self.resigned.is_some() || self.position.is_finished()
    }

    pub fn winner(&self) -> Option<Side> {
        self.outcome().and_then(Outcome::winner)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.resigned {
            Some(side) => Some(Outcome::Decisive { winner: !side }),
            None => self.position.outcome(),
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new(Side::First)
    }
}

impl From<Position> for Game {
    /// Continues a game from an arbitrary position, with empty history.
    fn from(position: Position) -> Game {
        Game {
            position,
            history: Vec::new(),
            resigned: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e4() -> Move {
        Move::from_squares(Square::E2, Square::E4)
    }

    #[test]
    fn test_make_move() {
        let mut game = Game::default();
        game.make_move(e4(), None).unwrap();
        assert_eq!(game.side_to_move(), Side::Second);
        assert_eq!(game.history(), &[e4()]);
        assert!(game.is_a_piece_of_side_to_move(Square::E7));
        assert!(!game.is_a_piece_of_side_to_move(Square::E4));
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::default();
        let before = game.clone();
        let m = Move::from_squares(Square::E2, Square::E5);
        assert_eq!(game.make_move(m, None), Err(PlayError::InvalidMove { m }));
        assert_eq!(game, before);
    }

    #[test]
    fn test_resign() {
        let mut game = Game::default();
        game.make_move(e4(), None).unwrap();
        game.resign();

        assert_eq!(game.resigned(), Some(Side::Second));
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Side::First));
        assert!(game.legal_moves_for(Square::E7).is_empty());

        let m = Move::from_squares(Square::E7, Square::E5);
        assert!(game.make_move(m, None).unwrap_err().is_invalid_move());
        assert_eq!(game.history().len(), 1);

        // Resigning again does not change the result.
        game.resign();
        assert_eq!(game.resigned(), Some(Side::Second));
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new(Side::Second);
        game.make_move(e4(), None).unwrap();
        game.resign();
        game.reset();

        assert_eq!(game, Game::new(Side::Second));
        assert_eq!(game.side_to_move(), Side::Second);
        assert!(game.history().is_empty());
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_from_position() {
        let mut game = Game::from(Position::new(Side::Second));
        assert_eq!(game.white_side(), Side::Second);
        assert_eq!(game.legal_moves_for(Square::G1).len(), 2);
        assert!(!game.is_promotion(e4()));
        game.make_move(e4(), None).unwrap();
        assert_eq!(game.position().side_to_move(), Side::First);
    }
}
