/*-------COMMAND LOG--------*/

// A move-unit is pushed as
//
// |  Capture  |  <- top, only when something was taken
// |   Move    |
// |   ...     |
//
// and undone from the top until a Move has been reversed.

use super::{PieceId, Square};

/// A reversible change to the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Relocate `piece` from `from` to `to`, bumping its move count.
    Move {
        piece: PieceId,
        from: Square,
        to: Square,
    },
    /// Take `piece` off the board; `square` is where it stood.
    Capture { piece: PieceId, square: Square },
}

impl Command {
    pub fn piece(&self) -> PieceId {
        match *self {
            Command::Move { piece, .. } | Command::Capture { piece, .. } => piece,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Command::Move { .. })
    }
}

/// LIFO stack of executed commands. The log owns its commands exclusively.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    commands: Vec<Command>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn pop(&mut self) -> Option<Command> {
        self.commands.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Number of move-units on the log.
    pub fn move_units(&self) -> usize {
        self.commands.iter().filter(|c| c.is_move()).count()
    }

    /// The most recent Move command, skipping a Capture sitting above it.
    pub fn last_move(&self) -> Option<Command> {
        self.commands.iter().rev().find(|c| c.is_move()).copied()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Command> {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_last_move_skips_capture() {
        let mut log = CommandLog::new();
        assert!(log.last_move().is_none());

        log.push(Command::Move { piece: PieceId(1), from: sq("e2"), to: sq("e4") });
        log.push(Command::Move { piece: PieceId(9), from: sq("d7"), to: sq("d5") });
        log.push(Command::Capture { piece: PieceId(1), square: sq("d5") });

        assert_eq!(log.len(), 3);
        assert_eq!(log.move_units(), 2);
        assert_eq!(
            log.last_move(),
            Some(Command::Move { piece: PieceId(9), from: sq("d7"), to: sq("d5") })
        );
    }

    #[test]
    fn test_pop_is_lifo() {
        let mut log = CommandLog::new();
        log.push(Command::Move { piece: PieceId(0), from: sq("a2"), to: sq("a3") });
        log.push(Command::Capture { piece: PieceId(5), square: sq("a3") });

        assert_eq!(log.pop().map(|c| c.piece()), Some(PieceId(5)));
        assert_eq!(log.pop().map(|c| c.piece()), Some(PieceId(0)));
        assert!(log.pop().is_none());
        assert!(log.is_empty());
    }
}
