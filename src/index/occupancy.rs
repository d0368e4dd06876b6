//! Coordinate to piece-type occupancy map.

use rustc_hash::FxHashMap;

use super::error::IndexError;
use super::types::{Coordinate, PieceType};

/// Single source of truth for "is this square occupied".
#[derive(Clone, Debug, Default)]
pub struct OccupancyIndex {
    squares: FxHashMap<Coordinate, PieceType>,
}

impl OccupancyIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `piece_type` at `coord`. The square must be empty.
    pub fn put(&mut self, coord: Coordinate, piece_type: PieceType) -> Result<(), IndexError> {
        if let Some(&occupant) = self.squares.get(&coord) {
            return Err(IndexError::DuplicateCoordinate { coord, occupant });
        }
        self.squares.insert(coord, piece_type);
        Ok(())
    }

    /// Clear `coord`, returning what stood there. The square must be occupied.
    pub fn remove(&mut self, coord: Coordinate) -> Result<PieceType, IndexError> {
        self.squares
            .remove(&coord)
            .ok_or(IndexError::MissingCoordinate { coord })
    }

    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coordinate) -> Option<PieceType> {
        self.squares.get(&coord).copied()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.squares.contains_key(&coord)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, PieceType)> + '_ {
        self.squares.iter().map(|(c, t)| (*c, *t))
    }

    pub fn clear(&mut self) {
        self.squares.clear();
    }
}
