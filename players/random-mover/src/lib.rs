//! A player which makes purely random moves

use board::{Board, LongAlgebraicNotationMove};
use mailbox::MailboxRepresentation;

use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

/// A player which picks uniformly from the legal moves
#[derive(Debug)]
pub struct RandomMoverPlayer {
    /// The state of the board
    board: MailboxRepresentation,
    /// How we decide what to do
    rng: SmallRng,
}

impl RandomMoverPlayer {
    /// Create a new player with the initial board state.
    pub fn new() -> Self {
        Self {
            board: MailboxRepresentation::INITIAL_STATE,
            rng: SmallRng::from_entropy(),
        }
    }
}

impl players::Player for RandomMoverPlayer {
    fn from_position(fen: &str, moves: &[LongAlgebraicNotationMove]) -> Self {
        let mut board = MailboxRepresentation::from_fen(fen).expect("failed to parse position");
        for mv in moves {
            board.make_move(*mv).expect("failed to make move");
        }
        Self {
            board,
            rng: SmallRng::from_entropy(),
        }
    }

    fn react_to_move(&mut self, opponent_move: LongAlgebraicNotationMove) {
        self.board
            .make_move(opponent_move)
            .expect("failed to make opponent move");
    }

    fn make_move(&mut self) -> LongAlgebraicNotationMove {
        let moves = self.board.legal_moves();
        let mv = *moves
            .choose(&mut self.rng)
            .expect("no legal moves available");
        self.board.apply(mv).expect("generated move was rejected");
        mv.into()
    }
}

impl Default for RandomMoverPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use players::Player;

    #[test]
    fn test_plays_twenty_opening_moves() {
        let mut player = RandomMoverPlayer::from_position(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            &[],
        );
        // Whatever it picks must be one of the twenty legal openers.
        let mv = player.make_move();
        let mut check = MailboxRepresentation::INITIAL_STATE;
        assert!(check.make_move(mv).is_ok());
    }
}
