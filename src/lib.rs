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

//! Standard chess rules: legal moves, move application, check, checkmate
//! and stalemate.
//!
//! The two players are [`Side::First`] and [`Side::Second`]. Either one
//! may play white, i.e., own row 0 (rank 1) and move first.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use chess_rules::Position;
//!
//! let pos = Position::default();
//! let legals = pos.legal_moves();
//! assert_eq!(legals.len(), 20);
//! ```
//!
//! Play moves:
//!
//! ```
//! use chess_rules::{Move, Position, Side, Square};
//!
//! let pos = Position::new(Side::Second);
//!
//! // 1. e4, played by the second side
//! let pos = pos.make_move(Move::from_squares(Square::E2, Square::E4), None)?;
//! assert_eq!(pos.side_to_move(), Side::First);
//! # Ok::<_, chess_rules::PlayError>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! # use chess_rules::Position;
//! # let pos = Position::default();
//! assert!(!pos.is_checkmate());
//! assert!(!pos.is_stalemate());
//! assert_eq!(pos.outcome(), None); // no winner yet
//! ```
//!
//! A [`Game`] keeps track of the current position for a user interface,
//! with history and resignation.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   the vocabulary types.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//!
//! # Logging
//!
//! [`Game`] emits [`tracing`](https://docs.rs/tracing/0.1) events when
//! moves are played or rejected, and on resignation or reset. No
//! subscriber is installed.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod errors;
mod game;
mod m;
mod perft;
mod piece;
mod position;
mod role;
mod side;
mod square;

pub mod attacks;
pub mod board;

pub use board::Board;
pub use errors::{CoordinatesOutOfBounds, IncorrectPieceType, ParseBoardError, PlayError};
pub use game::Game;
pub use m::{Move, MoveList};
pub use perft::perft;
pub use piece::{Kind, Piece};
pub use position::{Outcome, Position, PositionError, PositionErrorKinds};
pub use role::Role;
pub use side::{BySide, Side};
pub use square::Square;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Side {}
