//! Movement geometry tables, as `(ranks, files)` deltas.
//!
//! Keeping the per-kind geometry as data keyed by piece kind (rather than
//! behavior spread across piece types) lets attack detection and move
//! generation share one exhaustive rule table.

/// The eight L-shaped knight jumps
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// The eight single-square king steps
pub const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// The directions a rook slides in
pub const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The directions a bishop slides in
pub const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The deltas a white pawn captures along (distinct from its forward push)
pub const WHITE_PAWN_CAPTURES: [(i8, i8); 2] = [(1, 1), (1, -1)];

/// The deltas a black pawn captures along
pub const BLACK_PAWN_CAPTURES: [(i8, i8); 2] = [(-1, 1), (-1, -1)];
