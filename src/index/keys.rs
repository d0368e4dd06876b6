//! Coordinate and line keys.
//!
//! A line through `p` with direction `d` satisfies `dy·x − dx·y = −C`, with
//! `C = dx·p.y − dy·p.x`. Points sharing `C` are parallel-collinear, but a
//! non-reduced direction such as `(2,0)` only reaches every other point of
//! that geometric line, so the key also carries the residue of the stepping
//! axis modulo the step.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Coordinate, Direction};

/// Injective key for a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordinateKey(pub i64, pub i64);

impl fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

/// Canonical identifier of one infinite line for a given direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineId {
    /// `dx·y − dy·x`, constant along the line
    pub offset: i128,
    /// Smallest non-negative residue of `x mod |dx|`, or of `y mod |dy|` for vertical lines
    pub residue: i64,
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.offset, self.residue)
    }
}

#[inline]
#[must_use]
pub const fn key_of(coord: Coordinate) -> CoordinateKey {
    CoordinateKey(coord.x, coord.y)
}

/// Identify the line through `point` along `direction`.
///
/// Two points share an id iff one is reachable from the other by whole steps of `direction`.
#[inline]
#[must_use]
pub const fn line_id(direction: Direction, point: Coordinate) -> LineId {
    let dx = direction.dx();
    let dy = direction.dy();
    let offset = (dx as i128) * (point.y as i128) - (dy as i128) * (point.x as i128);
    let residue = if dx == 0 {
        point.y.rem_euclid(dy.abs())
    } else {
        point.x.rem_euclid(dx.abs())
    };
    LineId { offset, residue }
}
