use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A board cell addressed by file (a..h → 0..7) and rank (1..8 → 0..7).
///
/// Rank 0 is White's back rank. Text form is algebraic, `e4` is file 4,
/// rank 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Build a square from signed coordinates, `None` when off the board.
    pub fn from_coords(file: i8, rank: i8) -> Option<Square> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Index 0..64 with a1 = 0 and h8 = 63.
    pub fn from_index(idx: usize) -> Option<Square> {
        if idx < 64 {
            Some(Square {
                file: (idx % 8) as u8,
                rank: (idx / 8) as u8,
            })
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn coords(&self) -> (u8, u8) {
        (self.file, self.rank)
    }

    /// The square `(df, dr)` away, or `None` if that leaves the board.
    pub fn offset(&self, df: i8, dr: i8) -> Option<Square> {
        Square::from_coords(self.file as i8 + df, self.rank as i8 + dr)
    }

    /// All 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILES[self.file as usize], self.rank + 1)
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ChessError::InvalidSquare(s.to_string()));
        };

        let file = FILES
            .iter()
            .position(|&f| f == file_ch.to_ascii_lowercase())
            .ok_or_else(|| ChessError::InvalidSquare(s.to_string()))?;
        let rank = rank_ch
            .to_digit(10)
            .filter(|r| (1..=8).contains(r))
            .ok_or_else(|| ChessError::InvalidSquare(s.to_string()))?;

        Ok(Square {
            file: file as u8,
            rank: (rank - 1) as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_text_and_coords_agree() {
        for square in Square::all() {
            let text = square.to_string();
            assert_eq!(sq(&text), square, "{} should parse back", text);
            let (file, rank) = square.coords();
            assert_eq!(Square::from_coords(file as i8, rank as i8), Some(square));
        }
    }

    #[test]
    fn test_algebraic_orientation() {
        assert_eq!(sq("a1").coords(), (0, 0));
        assert_eq!(sq("e4").coords(), (4, 3));
        assert_eq!(sq("h8").coords(), (7, 7));
        assert_eq!(sq("E2"), sq("e2"));
        assert_eq!(sq("a1").index(), 0);
        assert_eq!(sq("h8").index(), 63);
    }

    #[test]
    fn test_off_board_coords() {
        assert_eq!(Square::from_coords(-1, 0), None);
        assert_eq!(Square::from_coords(0, 8), None);
        assert_eq!(Square::from_index(64), None);
        assert_eq!(sq("h8").offset(1, 0), None);
        assert_eq!(sq("a1").offset(1, 2), Some(sq("b3")));
    }

    #[test]
    fn test_malformed_text() {
        for bad in ["", "e", "e9", "e0", "i4", "e44", "44"] {
            assert!(bad.parse::<Square>().is_err(), "{:?} should be rejected", bad);
        }
    }
}
