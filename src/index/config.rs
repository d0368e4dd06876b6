//! Game rules and tuning consumed by the coordinator.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Color, Direction, PieceKind, PieceType};

/// Free slots kept in reserve for each promotable type
pub const DEFAULT_RESERVE_FLOOR: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexConfig {
    pub reserve_floor: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            reserve_floor: DEFAULT_RESERVE_FLOOR,
        }
    }
}

/// The parts of a ruleset the index cares about: which piece types exist and
/// which kinds each color may promote to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameRules {
    piece_types: BTreeSet<PieceType>,
    promotions: BTreeMap<Color, BTreeSet<PieceKind>>,
}

impl GameRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Orthodox piece set for both players, promoting to N, B, R or Q.
    #[must_use]
    pub fn orthodox() -> Self {
        let kinds = [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ];
        let promotes_to = [
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
        ];
        let mut rules = GameRules::new();
        for color in Color::PLAYERS {
            rules = rules
                .with_kinds(color, kinds)
                .with_promotions(color, promotes_to);
        }
        rules
    }

    #[must_use]
    pub fn with_type(mut self, piece_type: PieceType) -> Self {
        self.piece_types.insert(piece_type);
        self
    }

    #[must_use]
    pub fn with_kinds(mut self, color: Color, kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        self.piece_types
            .extend(kinds.into_iter().map(|kind| PieceType::new(kind, color)));
        self
    }

    /// Allow `color` to promote to `kinds`. Promotion targets join the catalogue.
    #[must_use]
    pub fn with_promotions(
        mut self,
        color: Color,
        kinds: impl IntoIterator<Item = PieceKind>,
    ) -> Self {
        let entry = self.promotions.entry(color).or_default();
        for kind in kinds {
            entry.insert(kind);
            self.piece_types.insert(PieceType::new(kind, color));
        }
        self
    }

    /// Piece types in catalogue order.
    pub fn piece_types(&self) -> impl Iterator<Item = PieceType> + '_ {
        self.piece_types.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, piece_type: PieceType) -> bool {
        self.piece_types.contains(&piece_type)
    }

    /// Kinds `color` may promote to.
    pub fn promotions_allowed(&self, color: Color) -> impl Iterator<Item = PieceKind> + '_ {
        self.promotions
            .get(&color)
            .into_iter()
            .flat_map(|kinds| kinds.iter().copied())
    }

    /// True if some piece of the same color can promote into `piece_type`.
    #[must_use]
    pub fn is_promotable(&self, piece_type: PieceType) -> bool {
        self.promotions
            .get(&piece_type.color)
            .is_some_and(|kinds| kinds.contains(&piece_type.kind))
    }

    /// Canonical sliding directions of every kind in the catalogue, without
    /// duplicates, in order of first appearance.
    #[must_use]
    pub fn sliding_directions(&self) -> Vec<Direction> {
        let mut directions: Vec<Direction> = Vec::new();
        for piece_type in &self.piece_types {
            for &d in piece_type.kind.slide_directions() {
                if !directions.contains(&d) {
                    directions.push(d);
                }
            }
        }
        directions
    }
}
