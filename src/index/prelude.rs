//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use board_index::index::prelude::*;
//! ```

pub use super::{
    colinear_pairs_exist, line_id, Color, Coordinate, Direction, GameRules, IndexBuilder,
    IndexConfig, IndexCoordinator, IndexError, LineId, Piece, PieceKind, PieceType,
};
