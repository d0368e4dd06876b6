//! Fluent builder for seeding an index.
//!
//! Collects rules, directions and an initial snapshot, then hands them to
//! [`IndexCoordinator::rebuild_all`].
//!
//! # Example
//! ```
//! use board_index::index::{Coordinate, IndexBuilder, PieceType};
//!
//! let index = IndexBuilder::from_notation("K5,1|k5,8|R1,1+|ob0,0")
//!     .unwrap()
//!     .reserve_floor(2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(index.piece_count(), 4);
//! assert_eq!(
//!     index.get(Coordinate::new(1, 1)).unwrap(),
//!     Some(PieceType::from_code("R").unwrap())
//! );
//! ```

use super::{
    Color, Coordinate, CoordinateError, Direction, GameRules, IndexConfig, IndexCoordinator,
    IndexError, PieceKind, PieceType, SnapshotError,
};

/// Parse a `|`-separated piece list such as `R1,1|k5,8|ob0,0`.
///
/// Each token is a piece code followed by `x,y`. A trailing `+` (special
/// move rights in the notation) is accepted and ignored. Empty tokens are skipped.
pub fn parse_snapshot(notation: &str) -> Result<Vec<(Coordinate, PieceType)>, SnapshotError> {
    let mut pieces = Vec::new();
    for token in notation.split('|').map(str::trim).filter(|t| !t.is_empty()) {
        let body = token.strip_suffix('+').unwrap_or(token);
        let split = body
            .find(|c: char| c == '-' || c.is_ascii_digit())
            .ok_or_else(|| SnapshotError::MissingCoordinate {
                token: token.to_string(),
            })?;
        let (code, coord) = body.split_at(split);
        let piece_type = PieceType::from_code(code).map_err(|source| SnapshotError::Piece {
            token: token.to_string(),
            source,
        })?;
        let coord = coord
            .parse::<Coordinate>()
            .map_err(|source: CoordinateError| SnapshotError::Coordinate {
                token: token.to_string(),
                source,
            })?;
        pieces.push((coord, piece_type));
    }
    Ok(pieces)
}

/// A fluent builder for constructing a seeded [`IndexCoordinator`].
#[derive(Clone, Debug)]
pub struct IndexBuilder {
    pieces: Vec<(Coordinate, PieceType)>,
    rules: GameRules,
    directions: Option<Vec<Direction>>,
    config: IndexConfig,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexBuilder {
    /// Empty board, orthodox rules, directions derived from the rules.
    #[must_use]
    pub fn new() -> Self {
        IndexBuilder {
            pieces: Vec::new(),
            rules: GameRules::orthodox(),
            directions: None,
            config: IndexConfig::default(),
        }
    }

    /// Builder seeded from piece-list notation.
    pub fn from_notation(notation: &str) -> Result<Self, SnapshotError> {
        let mut builder = Self::new();
        for (coord, piece_type) in parse_snapshot(notation)? {
            builder = builder.piece(coord, piece_type);
        }
        Ok(builder)
    }

    /// Place a piece, replacing whatever the builder had on `coord`.
    ///
    /// Neutral obstacles on the board join the catalogue at [`build`](Self::build),
    /// whatever rules are set.
    #[must_use]
    pub fn piece(mut self, coord: Coordinate, piece_type: PieceType) -> Self {
        self.pieces.retain(|(c, _)| *c != coord);
        self.pieces.push((coord, piece_type));
        self
    }

    #[must_use]
    pub fn clear(mut self, coord: Coordinate) -> Self {
        self.pieces.retain(|(c, _)| *c != coord);
        self
    }

    #[must_use]
    pub fn rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    /// Override the direction set derived from the rules.
    #[must_use]
    pub fn directions(mut self, directions: impl IntoIterator<Item = Direction>) -> Self {
        self.directions = Some(directions.into_iter().collect());
        self
    }

    #[must_use]
    pub fn config(mut self, config: IndexConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn reserve_floor(mut self, floor: usize) -> Self {
        self.config.reserve_floor = floor;
        self
    }

    /// Build and seed the coordinator.
    pub fn build(self) -> Result<IndexCoordinator, IndexError> {
        let mut rules = self.rules;
        for &(_, piece_type) in &self.pieces {
            if piece_type.kind == PieceKind::Obstacle && piece_type.color == Color::Neutral {
                rules = rules.with_type(piece_type);
            }
        }
        let directions = self
            .directions
            .unwrap_or_else(|| rules.sliding_directions());
        let mut index = IndexCoordinator::new(rules, self.config);
        index.rebuild_all(self.pieces, directions)?;
        Ok(index)
    }
}
