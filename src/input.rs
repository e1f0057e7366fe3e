//! Terminal input events.
//!
//! Each line typed at the prompt becomes one [`Input`]:
//!
//! | line            | event                        |
//! |-----------------|------------------------------|
//! | `e2`            | click on e2                  |
//! | `at 120 340`    | click at pixel (120, 340)    |
//! | `hover e4`      | pointer over e4              |
//! | `hover`         | pointer left the board       |
//! | `undo` / `u`    | take back the last move      |
//! | `flip`          | swap the point of view       |
//! | `quit` / `q`    | end the session              |

use std::str::FromStr;

use crate::error::ChessError;
use crate::game_repr::Square;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Click(Square),
    ClickAt(f64, f64),
    Hover(Option<Square>),
    Undo,
    Flip,
    Quit,
}

impl FromStr for Input {
    type Err = ChessError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ChessError::UnknownCommand(line.to_string()));
        };
        let rest: Vec<&str> = words.collect();

        let input = match (head.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("undo" | "u", []) => Input::Undo,
            ("flip", []) => Input::Flip,
            ("quit" | "q" | "exit", []) => Input::Quit,
            ("hover", []) => Input::Hover(None),
            ("hover", [square]) => Input::Hover(Some(square.parse()?)),
            ("at", [x, y]) => {
                let parse = |v: &str| {
                    v.parse::<f64>()
                        .map_err(|_| ChessError::UnknownCommand(line.to_string()))
                };
                Input::ClickAt(parse(*x)?, parse(*y)?)
            }
            (_, []) => Input::Click(head.parse()?),
            _ => return Err(ChessError::UnknownCommand(line.to_string())),
        };

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("e2".parse::<Input>().unwrap(), Input::Click(Square::from_coords(4, 1).unwrap()));
        assert_eq!(" UNDO ".parse::<Input>().unwrap(), Input::Undo);
        assert_eq!("q".parse::<Input>().unwrap(), Input::Quit);
        assert_eq!("flip".parse::<Input>().unwrap(), Input::Flip);
        assert_eq!("hover".parse::<Input>().unwrap(), Input::Hover(None));
        assert_eq!(
            "hover h8".parse::<Input>().unwrap(),
            Input::Hover(Square::from_coords(7, 7))
        );
        assert_eq!("at 120 340.5".parse::<Input>().unwrap(), Input::ClickAt(120.0, 340.5));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<Input>(), Err(ChessError::UnknownCommand(_))));
        assert!(matches!("z9".parse::<Input>(), Err(ChessError::InvalidSquare(_))));
        assert!(matches!("hover e4 e5".parse::<Input>(), Err(ChessError::UnknownCommand(_))));
        assert!(matches!("at x 3".parse::<Input>(), Err(ChessError::UnknownCommand(_))));
    }
}
