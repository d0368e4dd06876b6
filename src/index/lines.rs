//! Per-direction line indexes.
//!
//! One `LineIndex` exists for each configured sliding direction. It maps a
//! [`LineId`] to the pieces standing on that line, in insertion order. Lines
//! with no pieces are dropped so the map stays sparse on an unbounded board.

use rustc_hash::FxHashMap;

use super::error::IndexError;
use super::keys::{line_id, LineId};
use super::types::{Coordinate, Direction, Piece};

#[derive(Clone, Debug)]
pub struct LineIndex {
    direction: Direction,
    lines: FxHashMap<LineId, Vec<Piece>>,
    len: usize,
}

impl LineIndex {
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        LineIndex {
            direction,
            lines: FxHashMap::default(),
            len: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of indexed pieces.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of non-empty lines.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    #[must_use]
    pub fn line_id(&self, coord: Coordinate) -> LineId {
        line_id(self.direction, coord)
    }

    #[must_use]
    pub fn contains_line(&self, id: LineId) -> bool {
        self.lines.contains_key(&id)
    }

    /// Pieces on line `id`, empty if the line holds none.
    #[must_use]
    pub fn pieces(&self, id: LineId) -> &[Piece] {
        self.lines.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn insert(&mut self, piece: Piece) {
        let id = self.line_id(piece.coord);
        self.lines.entry(id).or_default().push(piece);
        self.len += 1;
    }

    /// Remove the piece at `coord` from its line.
    pub fn remove(&mut self, coord: Coordinate) -> Result<Piece, IndexError> {
        let id = self.line_id(coord);
        let missing = IndexError::MissingLineEntry {
            direction: self.direction,
            coord,
        };
        let line = self.lines.get_mut(&id).ok_or_else(|| missing.clone())?;
        let pos = line
            .iter()
            .position(|p| p.coord == coord)
            .ok_or(missing)?;
        let piece = line.remove(pos);
        if line.is_empty() {
            self.lines.remove(&id);
        }
        self.len -= 1;
        Ok(piece)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LineId, &[Piece])> + '_ {
        self.lines.iter().map(|(id, pieces)| (*id, pieces.as_slice()))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.len = 0;
    }
}

/// True if any two of `directions` share a slope class.
///
/// When this holds, a discovered-check shortcut that assumes one line index
/// per slope is unsound.
#[must_use]
pub fn colinear_pairs_exist(directions: &[Direction]) -> bool {
    directions.iter().enumerate().any(|(i, a)| {
        directions[i + 1..]
            .iter()
            .any(|b| a.is_colinear_with(*b))
    })
}
