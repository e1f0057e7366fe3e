mod attacks;
mod moves;
mod piece;
mod piece_moves;
mod position;
mod square;
pub mod tables;

#[cfg(test)]
mod tests;

pub use moves::*;
pub use piece::*;
pub use piece_moves::*;
pub use position::*;
pub use square::*;
