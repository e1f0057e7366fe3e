/*===============================================================*/
/*===================== TERMINAL GAME SESSION ====================*/
/*===============================================================*/

use std::error::Error;
use std::io::{self, BufRead, Write};

use chess_rules::board::Board;
use chess_rules::config::GameConfig;
use chess_rules::input::Input;
use chess_rules::renderer::text_renderer::TextRenderer;
use log::{info, warn};

fn main() -> Result<(), Box<dyn Error>> {
    let config = GameConfig::from_env()?;

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .init();

    let renderer = TextRenderer::new(io::stdout(), config.unicode);
    let mut board = Board::new(Box::new(renderer));
    board.set_pov(config.pov);

    info!("new game, {} at the bottom", config.pov);
    board.draw()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let input = match line.parse::<Input>() {
            Ok(input) => input,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        match input {
            Input::Quit => break,
            Input::Click(square) => {
                board.click(square);
            }
            Input::ClickAt(x, y) => {
                board.click_at((x, y));
            }
            Input::Hover(square) => board.hover(square),
            Input::Undo => {
                board.undo();
            }
            Input::Flip => {
                let pov = board.pov().opposite();
                board.set_pov(pov);
            }
        }

        board.draw()?;
    }

    if let Some(result) = board.status() {
        info!("session closed: {}", result);
    }
    io::stdout().flush()?;
    Ok(())
}
