//! Direction tables and precomputed leaper targets.

use once_cell::sync::Lazy;

use super::Position;

/// (rank delta, file delta) for the four rook directions.
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// (rank delta, file delta) for the four bishop directions.
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// All eight compass directions: queen rays and king steps.
pub(crate) const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

fn leaper_targets(deltas: &[(i8, i8)]) -> Vec<Vec<Position>> {
    Position::all()
        .map(|from| {
            deltas
                .iter()
                .filter_map(|&(dr, df)| from.offset(dr, df))
                .collect()
        })
        .collect()
}

/// On-board knight destinations per square index, before occupancy.
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Position>>> =
    Lazy::new(|| leaper_targets(&KNIGHT_JUMPS));

/// On-board king destinations per square index, before occupancy.
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Position>>> =
    Lazy::new(|| leaper_targets(&ALL_DIRECTIONS));
