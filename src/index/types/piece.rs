//! Piece kind, color and piece types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Coordinate, Direction};
use crate::index::error::PieceCodeError;

const ORTHOGONAL: [Direction; 2] = [Direction::raw(1, 0), Direction::raw(0, 1)];
const DIAGONAL: [Direction; 2] = [Direction::raw(1, 1), Direction::raw(1, -1)];
const ROYAL: [Direction; 4] = [
    Direction::raw(1, 0),
    Direction::raw(0, 1),
    Direction::raw(1, 1),
    Direction::raw(1, -1),
];
const KNIGHTWISE: [Direction; 4] = [
    Direction::raw(1, 2),
    Direction::raw(1, -2),
    Direction::raw(2, 1),
    Direction::raw(2, -1),
];

/// Piece kinds known to the index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Knightrider,
    Chancellor,
    Archbishop,
    Amazon,
    Obstacle,
}

impl PieceKind {
    /// All piece kinds in declaration order
    pub const ALL: [PieceKind; 11] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Knightrider,
        PieceKind::Chancellor,
        PieceKind::Archbishop,
        PieceKind::Amazon,
        PieceKind::Obstacle,
    ];

    /// Lowercase notation code (`p`, `n`, `b`, `r`, `q`, `k`, `nr`, `ch`, `ar`, `am`, `ob`)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            PieceKind::Pawn => "p",
            PieceKind::Knight => "n",
            PieceKind::Bishop => "b",
            PieceKind::Rook => "r",
            PieceKind::Queen => "q",
            PieceKind::King => "k",
            PieceKind::Knightrider => "nr",
            PieceKind::Chancellor => "ch",
            PieceKind::Archbishop => "ar",
            PieceKind::Amazon => "am",
            PieceKind::Obstacle => "ob",
        }
    }

    /// Parse a kind from its code, ignoring case.
    #[must_use]
    pub fn from_code(code: &str) -> Option<PieceKind> {
        let lower = code.to_ascii_lowercase();
        PieceKind::ALL.into_iter().find(|k| k.code() == lower)
    }

    /// Canonical lines this kind slides along; empty for leapers and steppers.
    ///
    /// Each entry stands for both `d` and `-d`.
    #[must_use]
    pub const fn slide_directions(self) -> &'static [Direction] {
        match self {
            PieceKind::Rook | PieceKind::Chancellor => &ORTHOGONAL,
            PieceKind::Bishop | PieceKind::Archbishop => &DIAGONAL,
            PieceKind::Queen | PieceKind::Amazon => &ROYAL,
            PieceKind::Knightrider => &KNIGHTWISE,
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King | PieceKind::Obstacle => &[],
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        !self.slide_directions().is_empty()
    }
}

/// Piece owners. `Neutral` owns obstacles that nobody can capture.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Color {
    White,
    Black,
    Neutral,
}

impl Color {
    /// Colors that can own promotable pieces
    pub const PLAYERS: [Color; 2] = [Color::White, Color::Black];

    pub const ALL: [Color; 3] = [Color::White, Color::Black, Color::Neutral];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
            Color::Neutral => write!(f, "Neutral"),
        }
    }
}

/// A kind paired with its owner; the unit the slot stores are organised by.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceType {
    pub kind: PieceKind,
    pub color: Color,
}

impl PieceType {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        PieceType { kind, color }
    }

    /// Parse notation: uppercase is White, lowercase Black, `ob` always Neutral.
    pub fn from_code(code: &str) -> Result<Self, PieceCodeError> {
        let first = code.chars().next().ok_or(PieceCodeError::Empty)?;
        let kind = PieceKind::from_code(code).ok_or_else(|| PieceCodeError::UnknownCode {
            code: code.to_string(),
        })?;
        let color = if kind == PieceKind::Obstacle {
            Color::Neutral
        } else if first.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(PieceType::new(kind, color))
    }
}

impl FromStr for PieceType {
    type Err = PieceCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceType::from_code(s)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.kind.code();
        if self.color == Color::White {
            write!(f, "{}", code.to_ascii_uppercase())
        } else {
            write!(f, "{code}")
        }
    }
}

/// A placed piece. While on the board its identity is its coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub piece_type: PieceType,
    pub coord: Coordinate,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(piece_type: PieceType, coord: Coordinate) -> Self {
        Piece { piece_type, coord }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.piece_type, self.coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(PieceKind::from_code("xx"), None);
    }

    #[test]
    fn test_piece_type_from_code() {
        assert_eq!(
            PieceType::from_code("R"),
            Ok(PieceType::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(
            PieceType::from_code("nr"),
            Ok(PieceType::new(PieceKind::Knightrider, Color::Black))
        );
        assert_eq!(
            PieceType::from_code("OB"),
            Ok(PieceType::new(PieceKind::Obstacle, Color::Neutral))
        );
        assert_eq!(PieceType::from_code(""), Err(PieceCodeError::Empty));
        assert!(matches!(
            "zz".parse::<PieceType>(),
            Err(PieceCodeError::UnknownCode { .. })
        ));
    }

    #[test]
    fn test_display() {
        let p = Piece::new(
            PieceType::new(PieceKind::Chancellor, Color::White),
            Coordinate::new(-1, 8),
        );
        assert_eq!(p.to_string(), "CH-1,8");
        assert_eq!(
            PieceType::new(PieceKind::Queen, Color::Black).to_string(),
            "q"
        );
    }

    #[test]
    fn test_slide_directions() {
        assert_eq!(PieceKind::Rook.slide_directions().len(), 2);
        assert_eq!(PieceKind::Amazon.slide_directions().len(), 4);
        assert!(PieceKind::Knightrider.is_slider());
        assert!(!PieceKind::Knight.is_slider());
        assert!(!PieceKind::Obstacle.is_slider());
        for kind in PieceKind::ALL {
            for d in kind.slide_directions() {
                assert_eq!(*d, d.reduced().canonical());
            }
        }
    }
}
