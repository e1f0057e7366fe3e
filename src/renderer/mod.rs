use crate::board::GameResult;
use crate::error::ChessError;
use crate::game_repr::{Color, Piece, Square};

pub mod text_renderer;

/// Highlight state of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    #[default]
    Neutral,
    Hovered,
    Selected,
    LegalDestination,
    KingInCheck,
}

/// Everything a display surface needs to draw one frame.
#[derive(Debug, Clone)]
pub struct BoardView {
    /// Pieces still on the board
    pub pieces: Vec<Piece>,
    /// One entry per square, indexed like `Square::index`
    pub tiles: [TileState; 64],
    pub side_to_move: Color,
    /// Side whose king is attacked, if any
    pub in_check: Option<Color>,
    pub result: Option<GameResult>,
}

impl BoardView {
    pub fn tile(&self, square: Square) -> TileState {
        self.tiles[square.index()]
    }

    pub fn piece_on(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square == Some(square))
    }
}

/// Pixel layout of a square board: top-left origin and tile edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub origin: (f64, f64),
    pub tile_size: f64,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            origin: (50.0, 60.0),
            tile_size: 75.0,
        }
    }
}

impl BoardGeometry {
    /// Map a pixel to the square under it. `pov` is the side drawn at the bottom.
    pub fn pixel_to_square(&self, coords: (f64, f64), pov: Color) -> Option<Square> {
        let col = ((coords.0 - self.origin.0) / self.tile_size).floor();
        let row = ((coords.1 - self.origin.1) / self.tile_size).floor();
        if !(0.0..8.0).contains(&col) || !(0.0..8.0).contains(&row) {
            return None;
        }

        let (col, row) = (col as i8, row as i8);
        match pov {
            Color::White => Square::from_coords(col, 7 - row),
            Color::Black => Square::from_coords(7 - col, row),
        }
    }

    /// Top-left pixel of `square`, where a piece sprite is drawn.
    pub fn square_to_pixel(&self, square: Square, pov: Color) -> (f64, f64) {
        let (file, rank) = square.coords();
        let (col, row) = match pov {
            Color::White => (file, 7 - rank),
            Color::Black => (7 - file, rank),
        };
        (
            self.origin.0 + col as f64 * self.tile_size,
            self.origin.1 + row as f64 * self.tile_size,
        )
    }
}

/// Trait for drawing the chess board.
/// This abstraction keeps the rules engine independent of any display backend.
pub trait Renderer {
    /// Draw the current board
    ///
    /// # Arguments
    /// * `view` - Pieces and per-square highlights
    /// * `pov` - Point of view (White or Black) - determines board orientation
    fn draw_position(&mut self, view: &BoardView, pov: Color) -> Result<(), ChessError>;

    /// Draw the final board together with the game result
    fn draw_game_end(&mut self, view: &BoardView, pov: Color, result: GameResult) -> Result<(), ChessError>;

    /// Convert screen coordinates to a board square
    ///
    /// # Returns
    /// * `Some(Square)` - if the click was on the board
    /// * `None` - if the click was outside the board
    fn coord_to_tile(&self, coords: (f64, f64), pov: Color) -> Option<Square>;
}
