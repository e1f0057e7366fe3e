use std::fmt;

use super::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    pub const ALL: [Type; 6] = [
        Type::King,
        Type::Queen,
        Type::Rook,
        Type::Bishop,
        Type::Knight,
        Type::Pawn,
    ];

    /// Letter used in piece labels and text boards (`N` for knight).
    pub fn letter(&self) -> char {
        match self {
            Type::King => 'K',
            Type::Queen => 'Q',
            Type::Rook => 'R',
            Type::Bishop => 'B',
            Type::Knight => 'N',
            Type::Pawn => 'P',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Rank step a pawn of this color advances by.
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// Rank the pawns of this color start on.
    pub fn pawn_rank(&self) -> u8 {
        match self {
            Self::White => 1,
            Self::Black => 6,
        }
    }

    /// Rank the pieces of this color start on.
    pub fn back_rank(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Stable identity of a piece for the lifetime of a position.
///
/// Ids index the position's piece arena and are never reused, so two
/// pieces compare equal only if they are the same piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A piece on (or taken off) the board.
///
/// Captured pieces keep their record so undo can put them back exactly;
/// `square` is `None` while `captured` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub piece_type: Type,
    pub color: Color,
    pub square: Option<Square>,
    pub move_count: u32,
    pub captured: bool,
    /// Per color and type counter used for the label, `WP3` is ordinal 3.
    pub ordinal: u8,
}

impl Piece {
    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }

    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    /// Human readable label such as `WK1` or `BP0`.
    pub fn name(&self) -> String {
        let prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        format!("{}{}{}", prefix, self.piece_type.letter(), self.ordinal)
    }
}
