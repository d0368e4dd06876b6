//! Coordinate type.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Direction;
use crate::index::error::CoordinateError;

/// A square on the unbounded board, as signed `(x, y)`.
///
/// Ordered by `x`, then `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    #[inline]
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Coordinate { x, y }
    }

    /// Step `n` times along `direction`.
    ///
    /// # Panics
    /// If the result leaves the `i64` range. See [`checked_offset`](Self::checked_offset).
    #[inline]
    #[must_use]
    pub const fn offset(self, direction: Direction, n: i64) -> Self {
        match self.checked_offset(direction, n) {
            Some(coord) => coord,
            None => panic!("coordinate offset overflowed i64"),
        }
    }

    /// Step `n` times along `direction`, or `None` if the result leaves the
    /// `i64` range. Intermediate products are taken in `i128`.
    #[must_use]
    pub const fn checked_offset(self, direction: Direction, n: i64) -> Option<Self> {
        let x = self.x as i128 + direction.dx() as i128 * n as i128;
        let y = self.y as i128 + direction.dy() as i128 * n as i128;
        let (min, max) = (i64::MIN as i128, i64::MAX as i128);
        if x < min || x > max || y < min || y > max {
            return None;
        }
        Some(Coordinate::new(x as i64, y as i64))
    }

    /// `(self.x - other.x, self.y - other.y)`, exact for any pair.
    #[inline]
    #[must_use]
    pub const fn delta(self, other: Coordinate) -> (i128, i128) {
        (
            self.x as i128 - other.x as i128,
            self.y as i128 - other.y as i128,
        )
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Coordinate::new(x, y)
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, rhs: Direction) -> Coordinate {
        self.offset(rhs, 1)
    }
}

impl Sub<Direction> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn sub(self, rhs: Direction) -> Coordinate {
        self.offset(rhs, -1)
    }
}

impl Sub for Coordinate {
    type Output = (i128, i128);

    #[inline]
    fn sub(self, rhs: Coordinate) -> (i128, i128) {
        self.delta(rhs)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| CoordinateError::InvalidFormat {
                input: s.to_string(),
            })?;
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| CoordinateError::InvalidComponent {
                    component: part.trim().to_string(),
                })
        };
        Ok(Coordinate::new(parse(x)?, parse(y)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let c = Coordinate::new(-12, 4000000000);
        assert_eq!(c.to_string(), "-12,4000000000");
        assert_eq!("-12,4000000000".parse::<Coordinate>(), Ok(c));
        assert_eq!(" 3 , -7 ".parse::<Coordinate>(), Ok(Coordinate::new(3, -7)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "37".parse::<Coordinate>(),
            Err(CoordinateError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "3,x".parse::<Coordinate>(),
            Err(CoordinateError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn test_offset() {
        let d = Direction::new(1, 2).unwrap();
        let c = Coordinate::new(5, 5);
        assert_eq!(c + d, Coordinate::new(6, 7));
        assert_eq!(c - d, Coordinate::new(4, 3));
        assert_eq!(c.offset(d, -3), Coordinate::new(2, -1));
        assert_eq!(Coordinate::new(6, 7) - c, (1, 2));
    }

    #[test]
    fn test_offset_at_i64_edges() {
        let right = Coordinate::new(i64::MAX, 0);
        assert_eq!(right.checked_offset(Direction::HORIZONTAL, 1), None);
        assert_eq!(
            right.checked_offset(Direction::VERTICAL, 1),
            Some(Coordinate::new(i64::MAX, 1))
        );
        assert_eq!(
            right.checked_offset(Direction::HORIZONTAL, -1),
            Some(Coordinate::new(i64::MAX - 1, 0))
        );
        assert_eq!(
            Coordinate::new(0, i64::MIN) - Direction::new(0, -1).unwrap(),
            Coordinate::new(0, i64::MIN + 1)
        );

        // The step product overflows i64 but the landing square does not.
        let far = Direction::new(i64::MAX, 0).unwrap();
        assert_eq!(
            Coordinate::new(i64::MIN, 0).checked_offset(far, 2),
            Some(Coordinate::new(i64::MAX - 1, 0))
        );
        assert_eq!(Coordinate::ORIGIN.checked_offset(far, 2), None);
    }

    #[test]
    #[should_panic(expected = "overflowed")]
    fn test_add_past_i64_max_panics() {
        let _ = Coordinate::new(i64::MAX, 0) + Direction::HORIZONTAL;
    }

    #[test]
    fn test_delta_is_exact() {
        assert_eq!(
            Coordinate::new(i64::MAX, 0) - Coordinate::new(-1, 0),
            (i64::MAX as i128 + 1, 0)
        );
        assert_eq!(
            Coordinate::new(i64::MIN, i64::MAX).delta(Coordinate::new(i64::MAX, i64::MIN)),
            (-(u64::MAX as i128), u64::MAX as i128)
        );
    }

    #[test]
    fn test_ordering() {
        let mut coords = vec![
            Coordinate::new(1, 0),
            Coordinate::new(0, 5),
            Coordinate::new(0, -5),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, -5),
                Coordinate::new(0, 5),
                Coordinate::new(1, 0)
            ]
        );
    }
}
