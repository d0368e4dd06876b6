//! Core value types.
//!
//! - `Coordinate` - a signed, unbounded board position
//! - `Direction` - a sliding direction vector and its slope class
//! - `PieceKind`, `Color`, `PieceType`, `Piece` - what stands on a coordinate

mod coord;
mod direction;
mod piece;

pub use coord::Coordinate;
pub use direction::{Direction, SlopeClass};
pub use piece::{Color, Piece, PieceKind, PieceType};
