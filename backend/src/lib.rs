//! The game loop: queries moves from two players until the game is done

use board::{Board, Color, GameOutcome};
use mailbox::MailboxRepresentation;
use players::Player;

/// A backend which queries moves from the two players until the game is done
pub struct Backend<White, Black> {
    /// The authoritative state of the board
    gamestate: MailboxRepresentation,
    /// The white player
    white_player: White,
    /// The black player
    black_player: Black,
}

impl<White: Player, Black: Player> Backend<White, Black> {
    /// Create a new instance with the chess starting board
    pub fn new() -> Self {
        const DEFAULT_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let white_player = White::from_position(DEFAULT_FEN, &[]);
        let black_player = Black::from_position(DEFAULT_FEN, &[]);
        Self {
            gamestate: MailboxRepresentation::INITIAL_STATE,
            white_player,
            black_player,
        }
    }

    /// Query whoever's turn it is to make a move
    ///
    /// The move is validated against the authoritative board and the other
    /// player is informed that it was made.
    pub fn play_half_move(&mut self) {
        let mv = match self.gamestate.side_to_move() {
            Color::White => self.white_player.make_move(),
            Color::Black => self.black_player.make_move(),
        };
        self.gamestate
            .make_move(mv)
            .expect("player provided an illegal move");
        match self.gamestate.side_to_move() {
            Color::White => self.white_player.react_to_move(mv),
            Color::Black => self.black_player.react_to_move(mv),
        };
    }

    /// Play the game until it ends, returning the outcome
    pub fn play_game(&mut self) -> GameOutcome {
        loop {
            let outcome = self.gamestate.game_outcome();
            if outcome != GameOutcome::InProgress {
                return outcome;
            }
            self.play_half_move();
        }
    }

    /// Get the state of the game right now
    pub fn game_state(&self) -> &MailboxRepresentation {
        &self.gamestate
    }
}

impl<White: Player, Black: Player> Default for Backend<White, Black> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board::LongAlgebraicNotationMove;
    use core::str::FromStr;

    /// A player that replays a fixed move list
    struct Scripted {
        board: MailboxRepresentation,
        moves: std::vec::IntoIter<LongAlgebraicNotationMove>,
    }

    impl Scripted {
        fn from_script(script: &str) -> Self {
            Self {
                board: MailboxRepresentation::INITIAL_STATE,
                moves: script
                    .split_ascii_whitespace()
                    .map(|m| LongAlgebraicNotationMove::from_str(m).unwrap())
                    .collect::<Vec<_>>()
                    .into_iter(),
            }
        }
    }

    impl Player for Scripted {
        fn from_position(fen: &str, moves: &[LongAlgebraicNotationMove]) -> Self {
            let mut board = MailboxRepresentation::from_fen(fen).unwrap();
            for mv in moves {
                board.make_move(*mv).unwrap();
            }
            Self {
                board,
                moves: Vec::new().into_iter(),
            }
        }

        fn make_move(&mut self) -> LongAlgebraicNotationMove {
            let mv = self.moves.next().expect("script ran out of moves");
            self.board.make_move(mv).unwrap();
            mv
        }

        fn react_to_move(&mut self, opponent_move: LongAlgebraicNotationMove) {
            self.board.make_move(opponent_move).unwrap();
        }
    }

    #[test]
    fn test_scripted_scholars_mate() {
        let mut backend: Backend<Scripted, Scripted> = Backend {
            gamestate: MailboxRepresentation::INITIAL_STATE,
            white_player: Scripted::from_script("e2e4 f1c4 d1h5 h5f7"),
            black_player: Scripted::from_script("e7e5 b8c6 g8f6"),
        };
        assert_eq!(backend.play_game(), GameOutcome::Won(Color::White));
        assert!(backend.game_state().legal_moves().is_empty());
    }
}
