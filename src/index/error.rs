//! Error types for index operations.

use std::fmt;

use super::types::{Coordinate, Direction, PieceType};

/// Error type for coordinator, index and slot-store operations.
///
/// Variants fall in two classes: configuration errors (the index was used
/// before it was set up, or with something outside its catalogue) and
/// corruption errors (the caller's event sequence disagrees with the index).
/// See [`IndexError::is_corruption`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// An operation ran before `rebuild_all` seeded the index
    NotInitialized,
    /// Piece type is not part of the game's type catalogue
    UnknownPieceType { piece_type: PieceType },
    /// Direction is not one of the configured sliding directions
    UnknownDirection { direction: Direction },
    /// A piece was added on an occupied coordinate
    DuplicateCoordinate {
        coord: Coordinate,
        occupant: PieceType,
    },
    /// A piece was removed from an empty coordinate
    MissingCoordinate { coord: Coordinate },
    /// The coordinate holds a different piece type than the one removed
    TypeMismatch {
        coord: Coordinate,
        expected: PieceType,
        found: PieceType,
    },
    /// A line index had no entry for a piece it should contain
    MissingLineEntry {
        direction: Direction,
        coord: Coordinate,
    },
    /// A slot was released twice
    SlotAlreadyFree { piece_type: PieceType, slot: usize },
    /// A slot index beyond the store's length
    SlotOutOfRange {
        piece_type: PieceType,
        slot: usize,
        len: usize,
    },
    /// Cross-index audit found a disagreement
    Inconsistent { detail: String },
}

impl IndexError {
    /// Returns true for desync/corruption errors, false for configuration errors.
    #[must_use]
    pub const fn is_corruption(&self) -> bool {
        !matches!(
            self,
            IndexError::NotInitialized
                | IndexError::UnknownPieceType { .. }
                | IndexError::UnknownDirection { .. }
        )
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::NotInitialized => {
                write!(f, "Index used before it was seeded with an occupancy snapshot")
            }
            IndexError::UnknownPieceType { piece_type } => {
                write!(f, "Piece type {piece_type} is not in the type catalogue")
            }
            IndexError::UnknownDirection { direction } => {
                write!(f, "Direction {direction} is not a configured sliding direction")
            }
            IndexError::DuplicateCoordinate { coord, occupant } => {
                write!(f, "Index corruption: ({coord}) already holds {occupant}")
            }
            IndexError::MissingCoordinate { coord } => {
                write!(f, "Index corruption: no piece at ({coord})")
            }
            IndexError::TypeMismatch {
                coord,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Index corruption: expected {expected} at ({coord}), found {found}"
                )
            }
            IndexError::MissingLineEntry { direction, coord } => {
                write!(
                    f,
                    "Index corruption: line index {direction} has no entry for ({coord})"
                )
            }
            IndexError::SlotAlreadyFree { piece_type, slot } => {
                write!(f, "Index corruption: slot {slot} of {piece_type} is already free")
            }
            IndexError::SlotOutOfRange {
                piece_type,
                slot,
                len,
            } => {
                write!(
                    f,
                    "Index corruption: slot {slot} of {piece_type} out of range (len {len})"
                )
            }
            IndexError::Inconsistent { detail } => {
                write!(f, "Index corruption: {detail}")
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// Error type for coordinate parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// Input is not of the form `x,y`
    InvalidFormat { input: String },
    /// A component is not a valid integer
    InvalidComponent { component: String },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::InvalidFormat { input } => {
                write!(f, "Invalid coordinate '{input}', expected 'x,y'")
            }
            CoordinateError::InvalidComponent { component } => {
                write!(f, "Invalid coordinate component '{component}'")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Error type for direction construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionError {
    /// Both components are zero
    Zero,
    /// A component equals `i64::MIN`
    ComponentOutOfRange,
}

impl fmt::Display for DirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionError::Zero => write!(f, "Direction vector must not be (0,0)"),
            DirectionError::ComponentOutOfRange => {
                write!(f, "Direction component must be greater than i64::MIN")
            }
        }
    }
}

impl std::error::Error for DirectionError {}

/// Error type for piece code parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceCodeError {
    /// Empty piece code
    Empty,
    /// Code does not name a known piece kind
    UnknownCode { code: String },
}

impl fmt::Display for PieceCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceCodeError::Empty => write!(f, "Empty piece code"),
            PieceCodeError::UnknownCode { code } => {
                write!(f, "Unknown piece code '{code}'")
            }
        }
    }
}

impl std::error::Error for PieceCodeError {}

/// Error type for snapshot notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Token has no coordinate after the piece code
    MissingCoordinate { token: String },
    /// Piece code in a token is invalid
    Piece { token: String, source: PieceCodeError },
    /// Coordinate in a token is invalid
    Coordinate {
        token: String,
        source: CoordinateError,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::MissingCoordinate { token } => {
                write!(f, "Snapshot token '{token}' has no coordinate")
            }
            SnapshotError::Piece { token, source } => {
                write!(f, "Snapshot token '{token}': {source}")
            }
            SnapshotError::Coordinate { token, source } => {
                write!(f, "Snapshot token '{token}': {source}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::MissingCoordinate { .. } => None,
            SnapshotError::Piece { source, .. } => Some(source),
            SnapshotError::Coordinate { source, .. } => Some(source),
        }
    }
}
