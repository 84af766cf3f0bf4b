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

use crate::errors::IncorrectPieceType;

/// Piece types: `Pawn`, `Knight`, `Bishop`, `Rook`, `Queen`, `King`.
///
/// Unlike [`Kind`](crate::Kind), a role carries no movement flags. It is
/// what a caller names when choosing a promotion.
///
/// # Examples
///
/// ```
/// use chess_rules::Role;
///
/// // Piece types are indexed from 1 to 6.
/// assert_eq!(u8::from(Role::Pawn), 1);
/// assert_eq!(Role::try_from(6), Ok(Role::King));
/// assert!(Role::try_from(7).is_err());
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl Role {
    /// Gets the piece type from its English letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::Role;
    ///
    /// assert_eq!(Role::from_char('K'), Some(Role::King));
    /// assert_eq!(Role::from_char('n'), Some(Role::Knight));
    ///
    /// assert_eq!(Role::from_char('X'), None);
    /// ```
    pub const fn from_char(ch: char) -> Option<Role> {
        match ch {
            'P' | 'p' => Some(Role::Pawn),
            'N' | 'n' => Some(Role::Knight),
            'B' | 'b' => Some(Role::Bishop),
            'R' | 'r' => Some(Role::Rook),
            'Q' | 'q' => Some(Role::Queen),
            'K' | 'k' => Some(Role::King),
            _ => None,
        }
    }

    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    /// Gets the uppercase letter, as used in piece codes like `Q1`.
    pub const fn upper_char(self) -> char {
        match self {
            Role::Pawn => 'P',
            Role::Knight => 'N',
            Role::Bishop => 'B',
            Role::Rook => 'R',
            Role::Queen => 'Q',
            Role::King => 'K',
        }
    }

    /// Checks if a pawn may promote to this piece type.
    pub const fn is_promotion_role(self) -> bool {
        matches!(self, Role::Knight | Role::Bishop | Role::Rook | Role::Queen)
    }

    /// Validates a promotion choice.
    ///
    /// # Errors
    ///
    /// Returns [`IncorrectPieceType`] if no choice was made or the choice
    /// is a pawn or king.
    pub fn promotion(choice: Option<Role>) -> Result<Role, IncorrectPieceType> {
        match choice {
            Some(role) if role.is_promotion_role() => Ok(role),
            role => Err(IncorrectPieceType { role }),
        }
    }

    /// `Pawn`, `Knight`, `Bishop`, `Rook`, `Queen`, and `King`, in this order.
    pub const ALL: [Role; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    /// Valid promotion choices, strongest first.
    pub const PROMOTIONS: [Role; 4] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight];
}

impl From<Role> for u8 {
    #[inline]
    fn from(role: Role) -> u8 {
        role as u8
    }
}

impl TryFrom<u8> for Role {
    type Error = IncorrectPieceType;

    fn try_from(value: u8) -> Result<Role, IncorrectPieceType> {
        Ok(match value {
            1 => Role::Pawn,
            2 => Role::Knight,
            3 => Role::Bishop,
            4 => Role::Rook,
            5 => Role::Queen,
            6 => Role::King,
            _ => return Err(IncorrectPieceType { role: None }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_order() {
        assert!(Role::Pawn < Role::Knight);
        assert!(Role::Knight < Role::Bishop);
        assert!(Role::Queen < Role::King);
    }

    #[test]
    fn test_char_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_char(role.char()), Some(role));
            assert_eq!(Role::from_char(role.upper_char()), Some(role));
            assert_eq!(Role::try_from(u8::from(role)), Ok(role));
        }
    }

    #[test]
    fn test_promotion() {
        for role in Role::PROMOTIONS {
            assert_eq!(Role::promotion(Some(role)), Ok(role));
        }
        assert_eq!(
            Role::promotion(Some(Role::King)),
            Err(IncorrectPieceType {
                role: Some(Role::King)
            })
        );
        assert_eq!(
            Role::promotion(None),
            Err(IncorrectPieceType { role: None })
        );
        assert!(Role::promotion(Some(Role::Pawn)).is_err());
        assert!(Role::try_from(0).is_err());
    }
}
