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

use std::{fmt, ops};

/// One of the two players.
///
/// Sides are identities, not colors: either side may play white. The
/// side playing white is recorded by the [`Position`](crate::Position).
///
/// # Examples
///
/// ```
/// use chess_rules::Side;
///
/// assert_eq!(!Side::First, Side::Second);
/// assert_eq!(Side::Second.char(), '2');
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    #[inline]
    pub fn fold<T>(self, first: T, second: T) -> T {
        match self {
            Side::First => first,
            Side::Second => second,
        }
    }

    /// Digit used for the side in piece codes like `K1`.
    pub const fn char(self) -> char {
        match self {
            Side::First => '1',
            Side::Second => '2',
        }
    }

    pub const fn from_char(ch: char) -> Option<Side> {
        match ch {
            '1' => Some(Side::First),
            '2' => Some(Side::Second),
            _ => None,
        }
    }

    /// `First` and `Second`, in this order.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];
}

impl ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.fold(Side::Second, Side::First)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold("first", "second"))
    }
}

/// Container with values for each [`Side`].
#[derive(Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct BySide<T> {
    pub first: T,
    pub second: T,
}

impl<T> BySide<T> {
    #[inline]
    pub fn new_with<F>(mut init: F) -> BySide<T>
    where
        F: FnMut(Side) -> T,
    {
        BySide {
            first: init(Side::First),
            second: init(Side::Second),
        }
    }

    #[inline]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }

    #[inline]
    pub fn map<U, F>(self, mut f: F) -> BySide<U>
    where
        F: FnMut(T) -> U,
    {
        BySide {
            first: f(self.first),
            second: f(self.second),
        }
    }

    #[inline]
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        predicate(&self.first) || predicate(&self.second)
    }

    #[inline]
    pub fn find<F>(&self, mut predicate: F) -> Option<Side>
    where
        F: FnMut(&T) -> bool,
    {
        if predicate(&self.first) {
            Some(Side::First)
        } else if predicate(&self.second) {
            Some(Side::Second)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not() {
        for side in Side::ALL {
            assert_ne!(side, !side);
            assert_eq!(side, !!side);
        }
    }

    #[test]
    fn test_char() {
        for side in Side::ALL {
            assert_eq!(Side::from_char(side.char()), Some(side));
        }
        assert_eq!(Side::from_char('3'), None);
    }

    #[test]
    fn test_by_side() {
        let mut counts = BySide::new_with(|side| side.fold(1, 2));
        *counts.get_mut(Side::Second) += 1;
        assert_eq!(counts, BySide { first: 1, second: 3 });
        assert_eq!(counts.find(|&c| c > 2), Some(Side::Second));
        assert!(!counts.map(|c| c * 10).any(|&c| c == 3));
    }
}
