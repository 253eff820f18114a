//! A player driven by a human typing in the terminal

use std::io::{self, Write};

use board::{Board, LongAlgebraicNotationMove};
use mailbox::MailboxRepresentation;

/// An input for a human typing coordinate moves in the terminal
pub struct TerminalUIPlayer {
    board: MailboxRepresentation,
}

impl TerminalUIPlayer {
    /// Create a new player with the initial board state
    pub const fn new() -> Self {
        Self {
            board: MailboxRepresentation::INITIAL_STATE,
        }
    }
}

impl players::Player for TerminalUIPlayer {
    fn from_position(fen: &str, moves: &[LongAlgebraicNotationMove]) -> Self {
        let mut board = MailboxRepresentation::from_fen(fen).expect("failed to parse position");
        for mv in moves {
            board.make_move(*mv).expect("failed to make move");
        }
        Self { board }
    }

    fn react_to_move(&mut self, opponent_move: LongAlgebraicNotationMove) {
        println!("Opponent made move: {opponent_move}");
        self.board
            .make_move(opponent_move)
            .expect("failed to make opponent move");
    }

    fn make_move(&mut self) -> LongAlgebraicNotationMove {
        println!("{}", self.board);
        // An illegal or malformed move is never fatal: report it and ask
        // again.
        loop {
            print!("Your move (e.g. e2e4, a7a8q): ");
            let _ = io::stdout().flush();
            let mut buffer = String::new();
            io::stdin()
                .read_line(&mut buffer)
                .expect("error reading human input");
            let mv = match buffer.trim().parse::<LongAlgebraicNotationMove>() {
                Ok(mv) => mv,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };
            match self.board.make_move(mv) {
                Ok(()) => return mv,
                Err(e) => println!("{e}"),
            }
        }
    }
}

impl Default for TerminalUIPlayer {
    fn default() -> Self {
        Self::new()
    }
}
