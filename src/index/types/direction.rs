//! Sliding direction vectors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::index::error::DirectionError;

/// Greatest common divisor of two magnitudes. `gcd(0, 0) == 0`.
#[inline]
pub(crate) const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// A configured sliding direction `(dx, dy)`, never `(0, 0)`.
///
/// Components are restricted to `i64::MIN + 1 ..= i64::MAX` so that negation
/// never overflows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(i64, i64)", into = "(i64, i64)")
)]
pub struct Direction {
    dx: i64,
    dy: i64,
}

/// Slope class of a direction. Vertical directions have no numeric slope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SlopeClass {
    Vertical,
    /// `dy / dx` in lowest terms with `dx > 0`
    Ratio { dy: i64, dx: i64 },
}

impl Direction {
    pub const HORIZONTAL: Direction = Direction { dx: 1, dy: 0 };
    pub const VERTICAL: Direction = Direction { dx: 0, dy: 1 };
    pub const DIAGONAL: Direction = Direction { dx: 1, dy: 1 };
    pub const ANTI_DIAGONAL: Direction = Direction { dx: 1, dy: -1 };

    /// Construct from components known to be valid.
    pub(super) const fn raw(dx: i64, dy: i64) -> Self {
        Direction { dx, dy }
    }

    /// Create a direction, rejecting the zero vector.
    pub const fn new(dx: i64, dy: i64) -> Result<Self, DirectionError> {
        if dx == 0 && dy == 0 {
            return Err(DirectionError::Zero);
        }
        if dx == i64::MIN || dy == i64::MIN {
            return Err(DirectionError::ComponentOutOfRange);
        }
        Ok(Direction { dx, dy })
    }

    #[inline]
    #[must_use]
    pub const fn dx(self) -> i64 {
        self.dx
    }

    #[inline]
    #[must_use]
    pub const fn dy(self) -> i64 {
        self.dy
    }

    #[inline]
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        self.dx == 0
    }

    /// Divide both components by their gcd.
    #[must_use]
    pub const fn reduced(self) -> Self {
        let g = gcd(self.dx.unsigned_abs(), self.dy.unsigned_abs()) as i64;
        Direction {
            dx: self.dx / g,
            dy: self.dy / g,
        }
    }

    /// Representative of `{self, -self}` with `dx > 0`, or `dx == 0 && dy > 0`.
    ///
    /// A direction and its negation sweep the same lines.
    #[must_use]
    pub const fn canonical(self) -> Self {
        if self.dx < 0 || (self.dx == 0 && self.dy < 0) {
            Direction {
                dx: -self.dx,
                dy: -self.dy,
            }
        } else {
            self
        }
    }

    #[must_use]
    pub const fn slope_class(self) -> SlopeClass {
        if self.dx == 0 {
            return SlopeClass::Vertical;
        }
        let r = self.reduced().canonical();
        SlopeClass::Ratio { dy: r.dy, dx: r.dx }
    }

    /// True if both directions share a slope class.
    ///
    /// Compares cross products in `i128` rather than dividing.
    #[inline]
    #[must_use]
    pub const fn is_colinear_with(self, other: Direction) -> bool {
        if self.is_vertical() || other.is_vertical() {
            return self.is_vertical() && other.is_vertical();
        }
        (self.dy as i128) * (other.dx as i128) == (self.dx as i128) * (other.dy as i128)
    }
}

impl TryFrom<(i64, i64)> for Direction {
    type Error = DirectionError;

    fn try_from((dx, dy): (i64, i64)) -> Result<Self, Self::Error> {
        Direction::new(dx, dy)
    }
}

impl From<Direction> for (i64, i64) {
    fn from(d: Direction) -> Self {
        (d.dx, d.dy)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.dx, self.dy)
    }
}
