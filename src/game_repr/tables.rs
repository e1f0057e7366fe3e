//! Offset tables shared by move generation and attack detection.
//!
//! Offsets are `(file delta, rank delta)` pairs; rank grows toward Black.

/// Rook directions: north, south, east, west
pub const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Bishop directions: north-east, south-west, north-west, south-east
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];

/// All eight L-shaped knight jumps
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
];

/// The eight squares adjacent to a king
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// File deltas of the two squares a pawn captures on
pub const PAWN_CAPTURE_FILES: [i8; 2] = [-1, 1];
