//! Per-type slot store with recycled indices.
//!
//! Each live piece of a type holds a stable slot index, which the renderer
//! uses as a buffer offset. Released slots become placeholders and are handed
//! out again in ascending order. Storage only grows through `allocate` on a
//! full store or through [`SlotStore::ensure_reserve`].

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use super::error::IndexError;
use super::types::{Coordinate, PieceType};

/// State of one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Free,
    Occupied(Coordinate),
}

#[derive(Clone, Debug)]
pub struct SlotStore {
    piece_type: PieceType,
    slots: Vec<Slot>,
    free: BTreeSet<usize>,
    by_coord: FxHashMap<Coordinate, usize>,
}

impl SlotStore {
    #[must_use]
    pub fn new(piece_type: PieceType) -> Self {
        SlotStore {
            piece_type,
            slots: Vec::new(),
            free: BTreeSet::new(),
            by_coord: FxHashMap::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    /// Total slots, free and occupied.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    #[inline]
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    #[must_use]
    pub fn slot_of(&self, coord: Coordinate) -> Option<usize> {
        self.by_coord.get(&coord).copied()
    }

    /// Free slot indices in ascending order.
    pub fn free_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.free.iter().copied()
    }

    /// `(slot, coordinate)` for every occupied slot, in slot order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, Coordinate)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| match slot {
            Slot::Occupied(coord) => Some((i, *coord)),
            Slot::Free => None,
        })
    }

    /// Place `coord` in the lowest free slot, appending one if none is free.
    ///
    /// Returns `(slot, grew)`, where `grew` is true when the backing storage
    /// had to be extended.
    pub fn allocate(&mut self, coord: Coordinate) -> Result<(usize, bool), IndexError> {
        if self.by_coord.contains_key(&coord) {
            return Err(IndexError::DuplicateCoordinate {
                coord,
                occupant: self.piece_type,
            });
        }
        let (index, grew) = match self.free.pop_first() {
            Some(index) => {
                self.slots[index] = Slot::Occupied(coord);
                (index, false)
            }
            None => {
                self.slots.push(Slot::Occupied(coord));
                (self.slots.len() - 1, true)
            }
        };
        self.by_coord.insert(coord, index);
        Ok((index, grew))
    }

    /// Free an occupied slot. Releasing a free or unknown slot is corruption.
    pub fn release(&mut self, index: usize) -> Result<Coordinate, IndexError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(IndexError::SlotOutOfRange {
                piece_type: self.piece_type,
                slot: index,
                len,
            })?;
        let Slot::Occupied(coord) = *slot else {
            return Err(IndexError::SlotAlreadyFree {
                piece_type: self.piece_type,
                slot: index,
            });
        };
        *slot = Slot::Free;
        self.free.insert(index);
        self.by_coord.remove(&coord);
        Ok(coord)
    }

    /// Free the slot holding `coord`.
    pub fn release_at(&mut self, coord: Coordinate) -> Result<usize, IndexError> {
        let index = self
            .slot_of(coord)
            .ok_or(IndexError::MissingCoordinate { coord })?;
        self.release(index)?;
        Ok(index)
    }

    /// Append placeholder slots until at least `minimum` are free.
    ///
    /// Returns the number of slots appended.
    pub fn ensure_reserve(&mut self, minimum: usize) -> usize {
        let missing = minimum.saturating_sub(self.free.len());
        let start = self.slots.len();
        self.slots.resize(start + missing, Slot::Free);
        self.free.extend(start..start + missing);
        missing
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.by_coord.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{Color, PieceKind};

    fn store() -> SlotStore {
        SlotStore::new(PieceType::new(PieceKind::Queen, Color::White))
    }

    #[test]
    fn test_allocate_appends_when_full() {
        let mut s = store();
        assert_eq!(s.allocate(Coordinate::new(0, 0)), Ok((0, true)));
        assert_eq!(s.allocate(Coordinate::new(1, 0)), Ok((1, true)));
        assert_eq!(s.len(), 2);
        assert_eq!(s.free_count(), 0);
    }

    #[test]
    fn test_reuses_lowest_free_slot() {
        let mut s = store();
        for x in 0..3 {
            s.allocate(Coordinate::new(x, 0)).unwrap();
        }
        assert_eq!(s.release(1), Ok(Coordinate::new(1, 0)));
        assert_eq!(s.allocate(Coordinate::new(9, 9)), Ok((1, false)));
        assert_eq!(s.len(), 3);
        assert_eq!(s.slot(1), Some(Slot::Occupied(Coordinate::new(9, 9))));
    }

    #[test]
    fn test_free_list_stays_sorted() {
        let mut s = store();
        for x in 0..5 {
            s.allocate(Coordinate::new(x, 0)).unwrap();
        }
        s.release(4).unwrap();
        s.release(0).unwrap();
        s.release(2).unwrap();
        assert_eq!(s.free_slots().collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(s.allocate(Coordinate::new(10, 0)).unwrap().0, 0);
        assert_eq!(s.allocate(Coordinate::new(11, 0)).unwrap().0, 2);
    }

    #[test]
    fn test_double_release_fails() {
        let mut s = store();
        s.allocate(Coordinate::new(0, 0)).unwrap();
        s.release(0).unwrap();
        assert!(matches!(
            s.release(0),
            Err(IndexError::SlotAlreadyFree { slot: 0, .. })
        ));
        assert!(matches!(
            s.release(5),
            Err(IndexError::SlotOutOfRange { slot: 5, len: 1, .. })
        ));
    }

    #[test]
    fn test_duplicate_coordinate_rejected() {
        let mut s = store();
        s.allocate(Coordinate::new(3, 3)).unwrap();
        assert!(matches!(
            s.allocate(Coordinate::new(3, 3)),
            Err(IndexError::DuplicateCoordinate { .. })
        ));
        assert_eq!(s.occupied_count(), 1);
    }

    #[test]
    fn test_release_at() {
        let mut s = store();
        s.allocate(Coordinate::new(0, 0)).unwrap();
        s.allocate(Coordinate::new(5, 5)).unwrap();
        assert_eq!(s.release_at(Coordinate::new(5, 5)), Ok(1));
        assert_eq!(s.slot_of(Coordinate::new(5, 5)), None);
        assert!(matches!(
            s.release_at(Coordinate::new(5, 5)),
            Err(IndexError::MissingCoordinate { .. })
        ));
    }

    #[test]
    fn test_ensure_reserve() {
        let mut s = store();
        s.allocate(Coordinate::new(0, 0)).unwrap();
        assert_eq!(s.ensure_reserve(5), 5);
        assert_eq!(s.free_count(), 5);
        assert_eq!(s.len(), 6);
        assert_eq!(s.ensure_reserve(5), 0);
        assert_eq!(s.ensure_reserve(3), 0);
        assert_eq!(s.free_slots().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_iter_occupied_in_slot_order() {
        let mut s = store();
        s.ensure_reserve(2);
        s.allocate(Coordinate::new(7, 7)).unwrap();
        s.allocate(Coordinate::new(-1, 2)).unwrap();
        s.release(0).unwrap();
        assert_eq!(
            s.iter_occupied().collect::<Vec<_>>(),
            vec![(1, Coordinate::new(-1, 2))]
        );
    }
}
