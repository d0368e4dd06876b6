//! Positional indexes for an unbounded chess board.
//!
//! Keeps three views of the pieces on the board in lockstep:
//! - an occupancy map from coordinate to piece type,
//! - one line index per configured sliding direction, grouping collinear pieces,
//! - one slot store per piece type, giving every live piece a stable slot.
//!
//! All mutation goes through [`IndexCoordinator`].
//!
//! # Example
//! ```
//! use board_index::index::{Color, Coordinate, Direction, IndexBuilder, PieceKind, PieceType};
//!
//! let rook = PieceType::new(PieceKind::Rook, Color::White);
//! let index = IndexBuilder::new()
//!     .piece(Coordinate::new(0, 0), rook)
//!     .build()
//!     .unwrap();
//!
//! let horizontal = Direction::new(1, 0).unwrap();
//! let pieces = index.line_pieces_through(horizontal, Coordinate::new(100, 0)).unwrap();
//! assert_eq!(pieces.len(), 1);
//! ```

mod builder;
mod config;
mod coordinator;
mod error;
mod keys;
mod lines;
mod occupancy;
pub mod prelude;
mod slots;
mod types;

#[cfg(test)]
mod tests;

pub use builder::{parse_snapshot, IndexBuilder};
pub use config::{GameRules, IndexConfig, DEFAULT_RESERVE_FLOOR};
pub use coordinator::IndexCoordinator;
pub use error::{CoordinateError, DirectionError, IndexError, PieceCodeError, SnapshotError};
pub use keys::{key_of, line_id, CoordinateKey, LineId};
pub use lines::{colinear_pairs_exist, LineIndex};
pub use occupancy::OccupancyIndex;
pub use slots::{Slot, SlotStore};
pub use types::{Color, Coordinate, Direction, Piece, PieceKind, PieceType, SlopeClass};
