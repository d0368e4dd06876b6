//! Keeps occupancy, line indexes and slot stores in lockstep.
//!
//! The coordinator is the only writer. A piece event is validated against the
//! occupancy map before anything is touched, so configuration errors and the
//! common desync cases (adding onto an occupied square, removing from an empty
//! one) leave every index unchanged. A failure after validation means the
//! indexes already disagreed and is reported as corruption.

use rustc_hash::FxHashMap;

use super::config::{GameRules, IndexConfig};
use super::error::IndexError;
use super::keys::{line_id, LineId};
use super::lines::{colinear_pairs_exist, LineIndex};
use super::occupancy::OccupancyIndex;
use super::slots::{Slot, SlotStore};
use super::types::{Coordinate, Direction, Piece, PieceType};

#[derive(Clone, Debug)]
pub struct IndexCoordinator {
    rules: GameRules,
    config: IndexConfig,
    store_of: FxHashMap<PieceType, usize>,
    stores: Vec<SlotStore>,
    occupancy: OccupancyIndex,
    lines: Vec<LineIndex>,
    initialized: bool,
}

impl IndexCoordinator {
    /// Create an unseeded coordinator. Call [`rebuild_all`](Self::rebuild_all) before use.
    #[must_use]
    pub fn new(rules: GameRules, config: IndexConfig) -> Self {
        let stores: Vec<SlotStore> = rules.piece_types().map(SlotStore::new).collect();
        let store_of = stores
            .iter()
            .enumerate()
            .map(|(i, s)| (s.piece_type(), i))
            .collect();
        IndexCoordinator {
            rules,
            config,
            store_of,
            stores,
            occupancy: OccupancyIndex::new(),
            lines: Vec::new(),
            initialized: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Configured sliding directions, in the order given to `rebuild_all`.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.lines.iter().map(LineIndex::direction)
    }

    /// Discard every index and seed them from `snapshot` with a fresh direction set.
    ///
    /// The snapshot is validated first: unknown piece types and repeated
    /// coordinates are rejected without mutating anything. Every promotable
    /// type ends with at least `reserve_floor` free slots, including types
    /// with no piece on the board yet.
    pub fn rebuild_all(
        &mut self,
        snapshot: impl IntoIterator<Item = (Coordinate, PieceType)>,
        directions: impl IntoIterator<Item = Direction>,
    ) -> Result<(), IndexError> {
        let snapshot: Vec<(Coordinate, PieceType)> = snapshot.into_iter().collect();
        let mut seen = OccupancyIndex::new();
        for &(coord, piece_type) in &snapshot {
            self.store_index(piece_type)?;
            seen.put(coord, piece_type)?;
        }

        let mut unique: Vec<Direction> = Vec::new();
        for d in directions {
            if !unique.contains(&d) {
                unique.push(d);
            }
        }

        for store in &mut self.stores {
            store.clear();
        }
        self.occupancy.clear();
        self.lines = unique.into_iter().map(LineIndex::new).collect();
        self.initialized = true;

        for (coord, piece_type) in snapshot {
            self.insert_piece(piece_type, coord, true)?;
        }
        let floor = self.config.reserve_floor;
        for store in &mut self.stores {
            if self.rules.is_promotable(store.piece_type()) {
                store.ensure_reserve(floor);
            }
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "rebuilt index: {} pieces, {} directions, colinear={}",
            self.occupancy.len(),
            self.lines.len(),
            colinear_pairs_exist(&self.directions().collect::<Vec<_>>())
        );
        Ok(())
    }

    /// Place a piece and return its slot in `piece_type`'s store.
    pub fn add_piece(
        &mut self,
        piece_type: PieceType,
        coord: Coordinate,
    ) -> Result<usize, IndexError> {
        self.insert_piece(piece_type, coord, false)
    }

    fn insert_piece(
        &mut self,
        piece_type: PieceType,
        coord: Coordinate,
        seeding: bool,
    ) -> Result<usize, IndexError> {
        self.ensure_initialized()?;
        let store = self.store_index(piece_type)?;
        if let Some(occupant) = self.occupancy.get(coord) {
            return Err(self.corruption(IndexError::DuplicateCoordinate { coord, occupant }));
        }

        let (slot, grew) = self.stores[store]
            .allocate(coord)
            .map_err(|e| self.corruption(e))?;
        self.occupancy
            .put(coord, piece_type)
            .map_err(|e| self.corruption(e))?;
        let piece = Piece::new(piece_type, coord);
        for line in &mut self.lines {
            line.insert(piece);
        }

        if self.rules.is_promotable(piece_type) {
            #[cfg(feature = "logging")]
            if grew && !seeding {
                log::warn!("{piece_type} slot store grew to {} on add", self.stores[store].len());
            }
            self.stores[store].ensure_reserve(self.config.reserve_floor);
        }
        #[cfg(not(feature = "logging"))]
        let _ = (grew, seeding);

        #[cfg(feature = "logging")]
        log::trace!("add {piece_type} at ({coord}) -> slot {slot}");
        Ok(slot)
    }

    /// Remove a piece and return the slot it released.
    ///
    /// The occupant of `coord` must be `piece_type`.
    pub fn remove_piece(
        &mut self,
        piece_type: PieceType,
        coord: Coordinate,
    ) -> Result<usize, IndexError> {
        self.ensure_initialized()?;
        let store = self.store_index(piece_type)?;
        match self.occupancy.get(coord) {
            None => return Err(self.corruption(IndexError::MissingCoordinate { coord })),
            Some(found) if found != piece_type => {
                return Err(self.corruption(IndexError::TypeMismatch {
                    coord,
                    expected: piece_type,
                    found,
                }))
            }
            Some(_) => {}
        }

        for i in 0..self.lines.len() {
            self.lines[i]
                .remove(coord)
                .map_err(|e| self.corruption(e))?;
        }
        self.occupancy
            .remove(coord)
            .map_err(|e| self.corruption(e))?;
        let slot = self.stores[store]
            .release_at(coord)
            .map_err(|e| self.corruption(e))?;

        #[cfg(feature = "logging")]
        log::trace!("remove {piece_type} at ({coord}) <- slot {slot}");
        Ok(slot)
    }

    /// Occupant of `coord`, if any.
    pub fn get(&self, coord: Coordinate) -> Result<Option<PieceType>, IndexError> {
        self.ensure_initialized()?;
        Ok(self.occupancy.get(coord))
    }

    /// Pieces on line `id` of `direction`, in insertion order.
    pub fn line_pieces(&self, direction: Direction, id: LineId) -> Result<&[Piece], IndexError> {
        Ok(self.line_index(direction)?.pieces(id))
    }

    /// Pieces on the `direction` line through `coord`.
    pub fn line_pieces_through(
        &self,
        direction: Direction,
        coord: Coordinate,
    ) -> Result<&[Piece], IndexError> {
        self.line_pieces(direction, line_id(direction, coord))
    }

    pub fn line_index(&self, direction: Direction) -> Result<&LineIndex, IndexError> {
        self.ensure_initialized()?;
        self.lines
            .iter()
            .find(|l| l.direction() == direction)
            .ok_or(IndexError::UnknownDirection { direction })
    }

    /// True iff `piece_type` is promotable and has no free slot left.
    pub fn needs_replenishment(&self, piece_type: PieceType) -> Result<bool, IndexError> {
        let store = self.store(piece_type)?;
        Ok(self.rules.is_promotable(piece_type) && store.free_count() == 0)
    }

    /// Grow `piece_type`'s store until `minimum` slots are free; returns slots appended.
    pub fn ensure_reserve(
        &mut self,
        piece_type: PieceType,
        minimum: usize,
    ) -> Result<usize, IndexError> {
        self.ensure_initialized()?;
        let store = self.store_index(piece_type)?;
        Ok(self.stores[store].ensure_reserve(minimum))
    }

    /// True if two configured directions share a slope class.
    pub fn colinear_pairs_exist(&self) -> Result<bool, IndexError> {
        self.ensure_initialized()?;
        let directions: Vec<Direction> = self.directions().collect();
        Ok(colinear_pairs_exist(&directions))
    }

    pub fn store(&self, piece_type: PieceType) -> Result<&SlotStore, IndexError> {
        self.ensure_initialized()?;
        Ok(&self.stores[self.store_index(piece_type)?])
    }

    pub fn slot_of(
        &self,
        piece_type: PieceType,
        coord: Coordinate,
    ) -> Result<Option<usize>, IndexError> {
        Ok(self.store(piece_type)?.slot_of(coord))
    }

    #[inline]
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.occupancy.len()
    }

    /// Every placed piece, in no particular order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.occupancy
            .iter()
            .map(|(coord, piece_type)| Piece::new(piece_type, coord))
    }

    /// Audit the cross-index invariant: each occupied coordinate sits in
    /// exactly one occupied slot of its type and exactly once in every line
    /// index, and no index holds anything else.
    pub fn check_consistency(&self) -> Result<(), IndexError> {
        self.ensure_initialized()?;
        let total = self.occupancy.len();

        let stored: usize = self.stores.iter().map(SlotStore::occupied_count).sum();
        if stored != total {
            return Err(self.inconsistent(format!(
                "{stored} occupied slots for {total} occupied squares"
            )));
        }
        for line in &self.lines {
            if line.len() != total {
                return Err(self.inconsistent(format!(
                    "line index {} holds {} pieces, occupancy holds {total}",
                    line.direction(),
                    line.len()
                )));
            }
        }

        for (coord, piece_type) in self.occupancy.iter() {
            let store = &self.stores[self.store_index(piece_type)?];
            let slot_ok = store
                .slot_of(coord)
                .is_some_and(|i| store.slot(i) == Some(Slot::Occupied(coord)));
            if !slot_ok {
                return Err(self.inconsistent(format!(
                    "{piece_type} at ({coord}) has no occupied slot"
                )));
            }
            let piece = Piece::new(piece_type, coord);
            for line in &self.lines {
                let hits = line
                    .pieces(line.line_id(coord))
                    .iter()
                    .filter(|p| p.coord == coord)
                    .collect::<Vec<_>>();
                if hits.len() != 1 || *hits[0] != piece {
                    return Err(self.inconsistent(format!(
                        "line index {} has {} entries for {piece}",
                        line.direction(),
                        hits.len()
                    )));
                }
            }
        }
        Ok(())
    }

    fn ensure_initialized(&self) -> Result<(), IndexError> {
        if self.initialized {
            Ok(())
        } else {
            Err(IndexError::NotInitialized)
        }
    }

    fn store_index(&self, piece_type: PieceType) -> Result<usize, IndexError> {
        self.store_of
            .get(&piece_type)
            .copied()
            .ok_or(IndexError::UnknownPieceType { piece_type })
    }

    fn inconsistent(&self, detail: String) -> IndexError {
        self.corruption(IndexError::Inconsistent { detail })
    }

    #[allow(clippy::unused_self)]
    fn corruption(&self, err: IndexError) -> IndexError {
        #[cfg(feature = "logging")]
        log::error!("{err}");
        err
    }
}
