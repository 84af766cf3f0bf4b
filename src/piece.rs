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

use crate::{errors::CoordinatesOutOfBounds, role::Role, side::Side, square::Square};

/// Piece type together with the movement flags only that type carries.
///
/// Flags only ever go from `true` to `false` during play: a pawn loses
/// `can_double_step` on its first move, rooks and kings lose `can_castle`
/// when they move. `en_passant` marks a pawn that has just advanced two
/// squares.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Pawn {
        can_double_step: bool,
        en_passant: bool,
    },
    Knight,
    Bishop,
    Rook {
        can_castle: bool,
    },
    Queen,
    King {
        can_castle: bool,
    },
}

impl Kind {
    pub const fn role(self) -> Role {
        match self {
            Kind::Pawn { .. } => Role::Pawn,
            Kind::Knight => Role::Knight,
            Kind::Bishop => Role::Bishop,
            Kind::Rook { .. } => Role::Rook,
            Kind::Queen => Role::Queen,
            Kind::King { .. } => Role::King,
        }
    }

    /// A piece type that has not moved yet.
    pub const fn fresh(role: Role) -> Kind {
        match role {
            Role::Pawn => Kind::Pawn {
                can_double_step: true,
                en_passant: false,
            },
            Role::Knight => Kind::Knight,
            Role::Bishop => Kind::Bishop,
            Role::Rook => Kind::Rook { can_castle: true },
            Role::Queen => Kind::Queen,
            Role::King => Kind::King { can_castle: true },
        }
    }

    /// A piece type that has moved: all flags cleared.
    pub const fn moved(role: Role) -> Kind {
        match role {
            Role::Pawn => Kind::Pawn {
                can_double_step: false,
                en_passant: false,
            },
            Role::Knight => Kind::Knight,
            Role::Bishop => Kind::Bishop,
            Role::Rook => Kind::Rook { can_castle: false },
            Role::Queen => Kind::Queen,
            Role::King => Kind::King { can_castle: false },
        }
    }

    #[inline]
    pub const fn can_castle(self) -> bool {
        matches!(
            self,
            Kind::Rook { can_castle: true } | Kind::King { can_castle: true }
        )
    }

    #[inline]
    pub const fn can_double_step(self) -> bool {
        matches!(
            self,
            Kind::Pawn {
                can_double_step: true,
                ..
            }
        )
    }

    /// Checks if this is a pawn that may be captured en passant.
    #[inline]
    pub const fn is_en_passant_target(self) -> bool {
        matches!(self, Kind::Pawn { en_passant: true, .. })
    }
}

/// A piece of a [`Side`] standing on a [`Square`].
///
/// Pieces are plain values. Whenever a flag must change, the piece is
/// replaced rather than modified in place.
///
/// # Examples
///
/// ```
/// use chess_rules::{Piece, Role, Side, Square};
///
/// let rook = Piece::new(Role::Rook, Side::Second, 0, 7)?;
/// assert_eq!(rook.square, Square::A8);
/// assert!(rook.kind.can_castle());
/// assert_eq!(rook.to_string(), "R2");
///
/// assert!(Piece::new(Role::Pawn, Side::First, -1, 1).is_err());
/// # Ok::<_, chess_rules::CoordinatesOutOfBounds>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub side: Side,
    pub square: Square,
    pub kind: Kind,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatesOutOfBounds`] if the column or row is not in
    /// `0..8`.
    pub fn new(
        role: Role,
        side: Side,
        column: i32,
        row: i32,
    ) -> Result<Piece, CoordinatesOutOfBounds> {
        Ok(Piece {
            side,
            square: Square::from_coords(column, row)?,
            kind: Kind::fresh(role),
        })
    }

    #[inline]
    pub const fn role(self) -> Role {
        self.kind.role()
    }

    #[must_use]
    pub const fn with_kind(self, kind: Kind) -> Piece {
        Piece { kind, ..self }
    }

    /// The piece after moving to `square`, with all flags cleared.
    #[must_use]
    pub const fn moved_to(self, square: Square) -> Piece {
        Piece {
            side: self.side,
            square,
            kind: Kind::moved(self.kind.role()),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.role().upper_char(), self.side.char())
    }
}
