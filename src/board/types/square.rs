//! Board coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate on the 8x8 board.
///
/// `x` is the rank index counted from the Player's side of the board
/// (Player back rank is x=0, Opponent back rank x=7), `y` is the file.
/// Occupancy lives on [`Board`](crate::board::Board); a `Square` is a plain
/// coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    pub x: usize,
    pub y: usize,
}

impl Square {
    /// Create a square with bounds checking
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Square { x, y })
        } else {
            None
        }
    }

    /// Create a square without bounds checking; only for literal in-range coordinates
    #[inline]
    #[must_use]
    pub const fn at(x: usize, y: usize) -> Self {
        Square { x, y }
    }

    /// The square displaced by (dx, dy), or `None` if off the board
    #[inline]
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Square> {
        let x = self.x as isize + dx;
        let y = self.y as isize + dy;
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Square {
                x: x as usize,
                y: y as usize,
            })
        } else {
            None
        }
    }

    /// Flat index (0-63), x-major
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.x * 8 + self.y
    }

    /// Iterate every square in scan order (x outer, y inner)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|x| (0..8).map(move |y| Square { x, y }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.y as u8 + b'a') as char, self.x + 1)
    }
}
