//! Property-based tests using proptest.

use crate::index::{
    line_id, Color, Coordinate, Direction, GameRules, IndexBuilder, PieceKind, PieceType,
};
use proptest::prelude::*;

/// Strategy for a random event sequence length
fn event_count_strategy() -> impl Strategy<Value = usize> {
    1..=200usize
}

/// Strategy for a random seed driving event selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    (-6i64..=6, -6i64..=6)
        .prop_filter("zero vector", |(dx, dy)| *dx != 0 || *dy != 0)
        .prop_map(|(dx, dy)| Direction::new(dx, dy).unwrap())
}

fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
    (-1_000_000i64..=1_000_000, -1_000_000i64..=1_000_000)
        .prop_map(|(x, y)| Coordinate::new(x, y))
}

/// True if `q - p` is a whole number of steps of `d`.
fn reachable(d: Direction, p: Coordinate, q: Coordinate) -> bool {
    let (ex, ey) = q - p;
    let (dx, dy) = (i128::from(d.dx()), i128::from(d.dy()));
    if dx == 0 {
        return ex == 0 && ey % dy == 0;
    }
    ex % dx == 0 && ey == (ex / dx) * dy
}

fn catalogue() -> Vec<PieceType> {
    GameRules::new()
        .with_kinds(
            Color::White,
            [PieceKind::Rook, PieceKind::Queen, PieceKind::Knightrider],
        )
        .with_kinds(Color::Black, [PieceKind::Bishop, PieceKind::King])
        .piece_types()
        .collect()
}

proptest! {
    /// Property: any valid add/remove sequence keeps every index in agreement
    #[test]
    fn prop_indexes_stay_consistent(seed in seed_strategy(), num_events in event_count_strategy()) {
        use rand::prelude::*;

        let types = catalogue();
        let mut rules = GameRules::new().with_promotions(Color::White, [PieceKind::Queen]);
        for &t in &types {
            rules = rules.with_type(t);
        }
        let mut index = IndexBuilder::new()
            .rules(rules)
            .reserve_floor(2)
            .directions([
                Direction::HORIZONTAL,
                Direction::VERTICAL,
                Direction::DIAGONAL,
                Direction::ANTI_DIAGONAL,
                Direction::new(1, 2).unwrap(),
                Direction::new(2, 0).unwrap(),
            ])
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut placed: Vec<(Coordinate, PieceType)> = Vec::new();

        for _ in 0..num_events {
            if placed.is_empty() || rng.gen_bool(0.6) {
                let coord = Coordinate::new(rng.gen_range(-8..8), rng.gen_range(-8..8));
                if placed.iter().any(|(c, _)| *c == coord) {
                    continue;
                }
                let piece_type = types[rng.gen_range(0..types.len())];
                index.add_piece(piece_type, coord).unwrap();
                placed.push((coord, piece_type));
            } else {
                let (coord, piece_type) = placed.swap_remove(rng.gen_range(0..placed.len()));
                index.remove_piece(piece_type, coord).unwrap();
            }

            prop_assert!(index.check_consistency().is_ok());
            prop_assert_eq!(index.piece_count(), placed.len());
            for &(coord, piece_type) in &placed {
                prop_assert_eq!(index.get(coord).unwrap(), Some(piece_type));
            }
        }

        let queen = PieceType::new(PieceKind::Queen, Color::White);
        prop_assert!(index.store(queen).unwrap().free_count() >= 2);
    }

    /// Property: line ids agree exactly when one point steps onto the other
    #[test]
    fn prop_line_id_matches_reachability(
        d in direction_strategy(),
        p in coordinate_strategy(),
        dx in -40i64..=40,
        dy in -40i64..=40,
    ) {
        let q = Coordinate::new(p.x + dx, p.y + dy);
        prop_assert_eq!(line_id(d, p) == line_id(d, q), reachable(d, p, q));
    }

    /// Property: every point reached by stepping shares the line id
    #[test]
    fn prop_steps_preserve_line_id(
        d in direction_strategy(),
        p in coordinate_strategy(),
        n in -1000i64..=1000,
    ) {
        prop_assert_eq!(line_id(d, p), line_id(d, p.offset(d, n)));
    }

    /// Property: colinearity is symmetric and matches slope classes
    #[test]
    fn prop_colinear_matches_slope_class(a in direction_strategy(), b in direction_strategy()) {
        prop_assert_eq!(a.is_colinear_with(b), b.is_colinear_with(a));
        prop_assert_eq!(a.is_colinear_with(b), a.slope_class() == b.slope_class());
    }
}
