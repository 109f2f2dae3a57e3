//! Precomputed destination tables for leaper pieces (knights, kings).

use once_cell::sync::Lazy;

use super::super::Square;

fn leaper_targets(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    let mut table: [Vec<Square>; 64] = std::array::from_fn(|_| Vec::new());
    for sq in Square::all() {
        let targets = &mut table[sq.index()];
        for &(dx, dy) in deltas {
            if let Some(to) = sq.offset(dx, dy) {
                targets.push(to);
            }
        }
    }
    table
}

/// The eight L-shaped knight destinations per square, clipped to the board
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    leaper_targets(&[
        (2, 1),
        (2, -1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (1, -2),
        (-1, -2),
    ])
});

/// The eight adjacent king destinations per square, clipped to the board
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    leaper_targets(&[
        (1, 1),
        (0, 1),
        (1, 0),
        (-1, 1),
        (1, -1),
        (-1, -1),
        (-1, 0),
        (0, -1),
    ])
});
