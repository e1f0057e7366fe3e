use std::fmt;

use log::{debug, info, warn};

use crate::error::ChessError;
use crate::game_repr::{Color, Command, Destinations, Piece, PieceId, Position, Square};
use crate::renderer::{BoardView, Renderer, TileState};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    /// The side to move has no legal move and is not in check
    Stalemate,
}

impl GameResult {
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Stalemate => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::WhiteWins => write!(f, "white wins"),
            GameResult::BlackWins => write!(f, "black wins"),
            GameResult::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Click state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected(PieceId),
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move is now selected
    Selected(PieceId),
    /// The selected piece moved, possibly taking `captured`
    Moved {
        piece: PieceId,
        from: Square,
        to: Square,
        captured: Option<PieceId>,
    },
    /// The selection was dropped without moving
    Deselected,
    /// Nothing changed (empty click while idle, or the game is over)
    Ignored,
}

/// Board component: one game session driven by square clicks.
///
/// The Board wraps the rules engine (`Position`) and a display surface
/// (`Renderer`). It owns the UI state the engine knows nothing about:
/// which piece is selected, whose turn it is, the hovered square and the
/// final result.
///
/// # State machine
///
/// ```text
/// Idle --click own piece--> Selected(piece)
/// Selected --click legal destination--> move, flip side --> Idle
/// Selected --click other own piece--> Selected(other)
/// Selected --click anything else--> Idle
/// ```
///
/// Once checkmate or stalemate is reached clicks are ignored until a move
/// is undone.
///
/// # Usage
///
/// ```rust,ignore
/// let mut board = Board::new(Box::new(TextRenderer::new(std::io::stdout(), false)));
///
/// board.click("e2".parse()?);
/// board.click("e4".parse()?);
/// board.draw()?;
///
/// board.undo();
/// ```
pub struct Board {
    /// The current chess position (game state)
    position: Position,

    /// Renderer responsible for drawing the board
    renderer: Box<dyn Renderer>,

    selection: Selection,

    /// Legal destinations for the selected piece.
    /// Updated whenever the selection changes
    legal_moves_cache: Destinations,

    side_to_move: Color,

    hovered: Option<Square>,

    /// Side whose king is currently attacked
    check: Option<Color>,

    result: Option<GameResult>,

    /// Point of view - which color is shown at the bottom of the board
    pov: Color,
}

impl Board {
    /// Create a new board with the standard starting position, White to move.
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self::from_position(Position::standard(), Color::White, renderer)
    }

    /// Create a board around an arbitrary position.
    ///
    /// Check and game end are evaluated immediately, so a position that is
    /// already mate starts out finished.
    pub fn from_position(position: Position, side_to_move: Color, renderer: Box<dyn Renderer>) -> Self {
        let mut board = Self {
            position,
            renderer,
            selection: Selection::Idle,
            legal_moves_cache: Destinations::new(),
            side_to_move,
            hovered: None,
            check: None,
            result: None,
            pov: Color::White,
        };
        board.refresh_status();
        board
    }

    // ===========================
    // Game State Access (Read-Only)
    // ===========================

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.position.piece_at(square)
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Cached legal destinations of the selected piece; empty when idle.
    pub fn legal_moves_for_selection(&self) -> &[Square] {
        &self.legal_moves_cache
    }

    /// Side whose king is attacked, if any.
    pub fn in_check(&self) -> Option<Color> {
        self.check
    }

    /// `None` while the game is still being played.
    pub fn status(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Every legal (piece, destination) pair for `color`.
    pub fn legal_moves_for(&mut self, color: Color) -> Vec<(PieceId, Square)> {
        self.position.legal_moves_for(color)
    }

    // ===========================
    // UI Interaction
    // ===========================

    /// Feed one clicked square into the selection state machine.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if let Some(result) = self.result {
            debug!("click on {} ignored, game already ended ({})", square, result);
            return ClickOutcome::Ignored;
        }

        if let Selection::Selected(id) = self.selection {
            if self.legal_moves_cache.contains(&square) {
                return self.play(id, square);
            }
        }

        let own_piece = self
            .position
            .piece_at(square)
            .filter(|p| p.is(self.side_to_move))
            .map(|p| p.id);

        match (self.selection, own_piece) {
            (Selection::Selected(current), Some(id)) if current == id => {
                debug!("deselected piece on {}", square);
                self.clear_selection();
                ClickOutcome::Deselected
            }
            (_, Some(id)) => {
                self.select(id);
                ClickOutcome::Selected(id)
            }
            (Selection::Selected(_), None) => {
                debug!("{} is not a legal destination, selection cleared", square);
                self.clear_selection();
                ClickOutcome::Deselected
            }
            (Selection::Idle, None) => ClickOutcome::Ignored,
        }
    }

    /// Translate a pixel position through the renderer, then click it.
    pub fn click_at(&mut self, coords: (f64, f64)) -> ClickOutcome {
        match self.renderer.coord_to_tile(coords, self.pov) {
            Some(square) => self.click(square),
            None => {
                debug!("click at ({}, {}) is off the board", coords.0, coords.1);
                ClickOutcome::Ignored
            }
        }
    }

    /// Record the square under the pointer, for highlighting only.
    pub fn hover(&mut self, square: Option<Square>) {
        self.hovered = square;
    }

    pub fn hovered(&self) -> Option<Square> {
        self.hovered
    }

    /// Take back the last move-unit and hand the turn back.
    ///
    /// Returns `false` (and changes nothing) when no move has been played.
    pub fn undo(&mut self) -> bool {
        if !self.position.undo() {
            debug!("nothing to undo");
            return false;
        }

        self.side_to_move = self.side_to_move.opposite();
        self.clear_selection();
        self.result = None;
        self.refresh_status();
        info!("move undone, {} to move", self.side_to_move);
        true
    }

    fn select(&mut self, id: PieceId) {
        self.selection = Selection::Selected(id);
        self.legal_moves_cache = self.position.legal_moves(id);

        if let Some(piece) = self.position.piece(id) {
            debug!(
                "selected {} with {} legal destination(s)",
                piece.name(),
                self.legal_moves_cache.len()
            );
        }
    }

    fn clear_selection(&mut self) {
        self.selection = Selection::Idle;
        self.legal_moves_cache.clear();
    }

    fn play(&mut self, id: PieceId, to: Square) -> ClickOutcome {
        let Some(from) = self.position.square_of(id) else {
            self.clear_selection();
            return ClickOutcome::Deselected;
        };

        if !self.position.make_move(id, to) {
            warn!("move to {} was rejected by the position", to);
            self.clear_selection();
            return ClickOutcome::Deselected;
        }

        let captured = match self.position.log().iter().next_back() {
            Some(Command::Capture { piece, .. }) => Some(*piece),
            _ => None,
        };

        if let Some(mover) = self.position.piece(id) {
            match captured.and_then(|c| self.position.piece(c)) {
                Some(victim) => info!("{} {} -> {} takes {}", mover.name(), from, to, victim.name()),
                None => info!("{} {} -> {}", mover.name(), from, to),
            }
        }

        self.clear_selection();
        self.side_to_move = self.side_to_move.opposite();
        self.refresh_status();

        ClickOutcome::Moved { piece: id, from, to, captured }
    }

    /// Recompute check and game end for the side to move.
    fn refresh_status(&mut self) {
        self.check = [self.side_to_move, self.side_to_move.opposite()]
            .into_iter()
            .find(|&color| self.position.is_in_check(color));

        if self.position.has_legal_moves(self.side_to_move) {
            return;
        }

        let result = if self.check == Some(self.side_to_move) {
            GameResult::from_winner(self.side_to_move.opposite())
        } else {
            GameResult::Stalemate
        };
        info!("game over: {}", result);
        self.result = Some(result);
    }

    // ===========================
    // Rendering
    // ===========================

    /// Snapshot of everything a renderer needs for one frame.
    pub fn view(&self) -> BoardView {
        let mut tiles = [TileState::Neutral; 64];

        // Later writes win: KingInCheck > Selected > LegalDestination > Hovered
        if let Some(square) = self.hovered {
            tiles[square.index()] = TileState::Hovered;
        }
        for square in &self.legal_moves_cache {
            tiles[square.index()] = TileState::LegalDestination;
        }
        if let Selection::Selected(id) = self.selection {
            if let Some(square) = self.position.square_of(id) {
                tiles[square.index()] = TileState::Selected;
            }
        }
        if let Some(square) = self.check.and_then(|c| self.position.king_square(c)) {
            tiles[square.index()] = TileState::KingInCheck;
        }

        BoardView {
            pieces: self.position.pieces().copied().collect(),
            tiles,
            side_to_move: self.side_to_move,
            in_check: self.check,
            result: self.result,
        }
    }

    /// Draw the current board, or the final board once the game has ended.
    pub fn draw(&mut self) -> Result<(), ChessError> {
        let view = self.view();
        match self.result {
            Some(result) => self.renderer.draw_game_end(&view, self.pov, result),
            None => self.renderer.draw_position(&view, self.pov),
        }
    }

    /// Set the point of view for rendering.
    ///
    /// This determines which color is shown at the bottom of the board.
    pub fn set_pov(&mut self, pov: Color) {
        self.pov = pov;
    }

    pub fn pov(&self) -> Color {
        self.pov
    }
}
