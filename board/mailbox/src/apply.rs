//! Applying moves to the board

use board::{BoardSquare, Color, LongAlgebraicNotationMove, Piece, PieceKind};

use crate::{Error, MailboxRepresentation, Move, MoveFlags, Result};

impl MailboxRepresentation {
    /// Apply the given move if it is legal right now
    ///
    /// A move that is not in [`Self::legal_moves`] is rejected with
    /// [`Error::IllegalMove`] and the board is left untouched, so the caller
    /// can simply ask for another move.
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        if !self.legal_moves().contains(&mv) {
            return Err(Error::IllegalMove);
        }
        self.apply_unchecked(mv);
        Ok(())
    }

    /// Resolve coordinate notation against the legal moves, then apply it
    ///
    /// The flags the text cannot express (capture, en passant, castling,
    /// double push) are recovered from the generated move.
    pub fn make_long_move(&mut self, mv: LongAlgebraicNotationMove) -> Result<()> {
        let chosen = self
            .legal_moves()
            .into_iter()
            .find(|m| m.from == mv.source && m.to == mv.target && m.promotion == mv.promotion)
            .ok_or(Error::IllegalMove)?;
        self.apply_unchecked(chosen);
        Ok(())
    }

    /// Do the move without checking that it is legal
    ///
    /// Every cell written here is constructed outright from the move and the
    /// piece that made it; nothing is swapped or left to be overwritten
    /// later.
    pub(crate) fn apply_unchecked(&mut self, mv: Move) {
        let Some(piece) = self.get(mv.from) else {
            debug_assert!(false, "no piece on move source {}", mv.from);
            return;
        };
        let mover = piece.color;

        // The arriving piece, after any promotion.
        let placed = Piece::new(mv.promotion.unwrap_or(piece.kind), mover);
        self.set(mv.from, None);
        self.set(mv.to, Some(placed));

        if mv.flags.contains(MoveFlags::EN_PASSANT) {
            // The captured pawn sits beside the destination square, on the
            // rank the capturing pawn came from.
            self.set(mv.to.offset(-mover.pawn_direction(), 0), None);
        }
        if mv.flags.contains(MoveFlags::CASTLE_KINGSIDE) {
            let home = mover.home_rank();
            self.set(BoardSquare::from_rank_file(home, 7), None);
            self.set(
                BoardSquare::from_rank_file(home, 5),
                Some(Piece::new(PieceKind::Rook, mover)),
            );
        }
        if mv.flags.contains(MoveFlags::CASTLE_QUEENSIDE) {
            let home = mover.home_rank();
            self.set(BoardSquare::from_rank_file(home, 0), None);
            self.set(
                BoardSquare::from_rank_file(home, 3),
                Some(Piece::new(PieceKind::Rook, mover)),
            );
        }

        self.castles = self.castles.after_move(piece, mv.from, mv.to);

        self.en_passant_target = if mv.flags.contains(MoveFlags::DOUBLE_PAWN_PUSH) {
            Some(mv.from.offset(mover.pawn_direction(), 0))
        } else {
            None
        };

        if piece.kind == PieceKind::Pawn || mv.flags.contains(MoveFlags::CAPTURE) {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if mover == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = mover.other();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CastleRights;
    use board::Board;
    use core::str::FromStr;

    fn played(moves: &str) -> MailboxRepresentation {
        MailboxRepresentation::from_move_sequence(
            moves
                .split_ascii_whitespace()
                .map(|m| LongAlgebraicNotationMove::from_str(m).unwrap()),
        )
        .unwrap()
    }

    fn at(board: &MailboxRepresentation, square: &str) -> Option<Piece> {
        board.get(BoardSquare::from_str(square).unwrap())
    }

    #[test]
    fn test_four_ply_opening() {
        let board = played("e2e4 e7e5 g1f3 b8c6");
        assert_eq!(
            at(&board, "f3"),
            Some(Piece::new(PieceKind::Knight, Color::White)),
        );
        assert_eq!(
            at(&board, "c6"),
            Some(Piece::new(PieceKind::Knight, Color::Black)),
        );
        assert_eq!(at(&board, "g1"), None);
        assert_eq!(at(&board, "b8"), None);
        assert_eq!(board.side_to_move(), Color::White);
        // Two knight plies since the last pawn move.
        assert_eq!(board.halfmove_clock(), 2);
        assert_eq!(board.fullmove_number(), 3);
    }

    #[test]
    fn test_capture_resets_halfmove_clock() {
        let board = played("e2e4 d7d5 e4d5");
        assert_eq!(
            at(&board, "d5"),
            Some(Piece::new(PieceKind::Pawn, Color::White)),
        );
        assert_eq!(at(&board, "e4"), None);
        assert_eq!(board.halfmove_clock(), 0);
    }

    #[test]
    fn test_en_passant_removes_the_passed_pawn() {
        let mut board = played("e2e4 a7a6 e4e5 d7d5");
        board
            .make_long_move(LongAlgebraicNotationMove::from_str("e5d6").unwrap())
            .unwrap();
        assert_eq!(
            at(&board, "d6"),
            Some(Piece::new(PieceKind::Pawn, Color::White)),
        );
        // The victim stood beside the destination, not on it.
        assert_eq!(at(&board, "d5"), None);
        assert_eq!(at(&board, "e5"), None);
    }

    #[test]
    fn test_promotion_replaces_the_pawn() {
        let mut board = MailboxRepresentation::from_fen("8/P7/8/8/8/8/k7/7K w - - 0 1").unwrap();
        board
            .make_long_move(LongAlgebraicNotationMove::from_str("a7a8n").unwrap())
            .unwrap();
        assert_eq!(
            at(&board, "a8"),
            Some(Piece::new(PieceKind::Knight, Color::White)),
        );
        assert_eq!(at(&board, "a7"), None);
    }

    #[test]
    fn test_castling_relocates_the_rook() {
        let mut board =
            MailboxRepresentation::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        board
            .make_long_move(LongAlgebraicNotationMove::from_str("e1g1").unwrap())
            .unwrap();
        assert_eq!(
            at(&board, "g1"),
            Some(Piece::new(PieceKind::King, Color::White)),
        );
        assert_eq!(
            at(&board, "f1"),
            Some(Piece::new(PieceKind::Rook, Color::White)),
        );
        assert_eq!(at(&board, "e1"), None);
        assert_eq!(at(&board, "h1"), None);
        assert!(!board.castle_rights().intersects(CastleRights::WHITE));
        assert!(board.castle_rights().contains(CastleRights::BLACK));

        board
            .make_long_move(LongAlgebraicNotationMove::from_str("e8c8").unwrap())
            .unwrap();
        assert_eq!(
            at(&board, "c8"),
            Some(Piece::new(PieceKind::King, Color::Black)),
        );
        assert_eq!(
            at(&board, "d8"),
            Some(Piece::new(PieceKind::Rook, Color::Black)),
        );
        assert_eq!(at(&board, "a8"), None);
        assert!(board.castle_rights().is_empty());
    }

    #[test]
    fn test_king_shuffle_permanently_revokes_rights() {
        // The king comes straight back, but the rights stay gone.
        let board = played("e2e4 e7e5 e1e2 d7d6 e2e1 d6d5");
        assert!(!board.castle_rights().intersects(CastleRights::WHITE));
        assert!(board.castle_rights().contains(CastleRights::BLACK));
    }

    #[test]
    fn test_rook_move_revokes_one_right() {
        let board = played("h2h4 e7e5 h1h3 d7d6");
        assert!(!board.castle_rights().contains(CastleRights::WHITE_KINGSIDE));
        assert!(board.castle_rights().contains(CastleRights::WHITE_QUEENSIDE));
    }

    #[test]
    fn test_capturing_a_home_rook_revokes_its_right() {
        let mut board =
            MailboxRepresentation::from_fen("r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1").unwrap();
        board
            .make_long_move(LongAlgebraicNotationMove::from_str("g2h1").unwrap())
            .unwrap();
        assert!(!board.castle_rights().contains(CastleRights::WHITE_KINGSIDE));
        assert!(board.castle_rights().contains(CastleRights::WHITE_QUEENSIDE));
    }

    #[test]
    fn test_illegal_move_leaves_the_board_unchanged() {
        let mut board = MailboxRepresentation::INITIAL_STATE;
        let before = board.clone();
        for text in ["e2e5", "e7e5", "g1g3", "e1g1", "d1h5", "e3e4"] {
            let mv = LongAlgebraicNotationMove::from_str(text).unwrap();
            assert!(
                matches!(board.make_long_move(mv), Err(Error::IllegalMove)),
                "{text} was accepted",
            );
            assert_eq!(board, before, "{text} mutated the board");
        }
    }

    #[test]
    fn test_apply_rejects_forged_moves() {
        let mut board = MailboxRepresentation::INITIAL_STATE;
        // A move value the generator would never produce for this position.
        let forged = Move::new(BoardSquare::E1, BoardSquare::E8, MoveFlags::CAPTURE);
        assert!(matches!(board.apply(forged), Err(Error::IllegalMove)));
        assert_eq!(board, MailboxRepresentation::INITIAL_STATE);
    }

    #[test]
    fn test_fullmove_number_increments_after_black() {
        let mut board = MailboxRepresentation::INITIAL_STATE;
        assert_eq!(board.fullmove_number(), 1);
        board
            .make_long_move(LongAlgebraicNotationMove::from_str("e2e4").unwrap())
            .unwrap();
        assert_eq!(board.fullmove_number(), 1);
        board
            .make_long_move(LongAlgebraicNotationMove::from_str("e7e5").unwrap())
            .unwrap();
        assert_eq!(board.fullmove_number(), 2);
    }
}
