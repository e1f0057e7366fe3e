use std::io::Write;

use crate::assets::glyph;
use crate::board::GameResult;
use crate::error::ChessError;
use crate::game_repr::{Color, Square};

use super::{BoardGeometry, BoardView, Renderer, TileState};

/// Draws the board as a character grid, one three character cell per square.
///
/// ```text
///  8  r  n  b  q  k  b  n  r
///  7  p  p  p  p  p  p  p  p
///  ...
///     a  b  c  d  e  f  g  h
/// ```
///
/// Cells are decorated by their tile state: `[P]` selected, ` * ` an empty
/// destination, `(p)` a capturable piece, `!K!` a king in check and `<.>`
/// the hovered square.
pub struct TextRenderer<W: Write> {
    out: W,
    unicode: bool,
    geometry: BoardGeometry,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, unicode: bool) -> Self {
        Self {
            out,
            unicode,
            geometry: BoardGeometry::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn cell(&self, view: &BoardView, square: Square) -> String {
        let piece = view.piece_on(square);
        let c = match piece {
            Some(p) => glyph(p, self.unicode),
            None => '.',
        };

        match (view.tile(square), piece) {
            (TileState::KingInCheck, _) => format!("!{}!", c),
            (TileState::Selected, _) => format!("[{}]", c),
            (TileState::LegalDestination, None) => " * ".to_string(),
            (TileState::LegalDestination, Some(_)) => format!("({})", c),
            (TileState::Hovered, _) => format!("<{}>", c),
            (TileState::Neutral, _) => format!(" {} ", c),
        }
    }

    fn write_grid(&mut self, view: &BoardView, pov: Color) -> Result<(), ChessError> {
        let (ranks, files): (Vec<u8>, Vec<u8>) = match pov {
            Color::White => ((0..8).rev().collect(), (0..8).collect()),
            Color::Black => ((0..8).collect(), (0..8).rev().collect()),
        };

        for &rank in &ranks {
            let mut line = format!("{:>2} ", rank + 1);
            for &file in &files {
                if let Some(square) = Square::from_coords(file as i8, rank as i8) {
                    line.push_str(&self.cell(view, square));
                }
            }
            writeln!(self.out, "{}", line)?;
        }

        let labels: String = files
            .iter()
            .map(|&f| format!(" {} ", (b'a' + f) as char))
            .collect();
        writeln!(self.out, "   {}", labels)?;
        Ok(())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw_position(&mut self, view: &BoardView, pov: Color) -> Result<(), ChessError> {
        self.write_grid(view, pov)?;

        let mut status = format!("{} to move", view.side_to_move);
        if let Some(color) = view.in_check {
            status.push_str(&format!(", {} is in check", color));
        }
        writeln!(self.out, "{}", status)?;
        self.out.flush()?;
        Ok(())
    }

    fn draw_game_end(&mut self, view: &BoardView, pov: Color, result: GameResult) -> Result<(), ChessError> {
        self.write_grid(view, pov)?;
        writeln!(self.out, "game over: {}", result)?;
        self.out.flush()?;
        Ok(())
    }

    fn coord_to_tile(&self, coords: (f64, f64), pov: Color) -> Option<Square> {
        self.geometry.pixel_to_square(coords, pov)
    }
}
