//! Move generation: pseudo-legal per piece geometry, then filtered for
//! king safety.

use board::{geometry, BoardSquare, Color, Piece, PieceKind};

use crate::{CastleRights, MailboxRepresentation, Move, MoveFlags};

impl MailboxRepresentation {
    /// All moves for the side to move obeying per-piece geometry and board
    /// occupancy, without asking whether the mover's king is left in check.
    ///
    /// Castling moves are included only when the rights flag is held, the
    /// squares between king and rook are empty, and the king's start,
    /// transit, and destination squares are unattacked. En-passant captures
    /// are included only onto the board's current en-passant target.
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for square in BoardSquare::all_squares() {
            let Some(piece) = self.get(square) else {
                continue;
            };
            if piece.color != self.side_to_move {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => self.pawn_moves(square, piece.color, &mut moves),
                PieceKind::Knight => {
                    self.leaper_moves(square, piece.color, &geometry::KNIGHT_JUMPS, &mut moves)
                }
                PieceKind::Bishop => {
                    self.slider_moves(square, piece.color, &geometry::BISHOP_RAYS, &mut moves)
                }
                PieceKind::Rook => {
                    self.slider_moves(square, piece.color, &geometry::ROOK_RAYS, &mut moves)
                }
                PieceKind::Queen => {
                    self.slider_moves(square, piece.color, &geometry::ROOK_RAYS, &mut moves);
                    self.slider_moves(square, piece.color, &geometry::BISHOP_RAYS, &mut moves);
                }
                PieceKind::King => {
                    self.leaper_moves(square, piece.color, &geometry::KING_STEPS, &mut moves);
                    self.castle_moves(square, piece.color, &mut moves);
                }
            }
        }
        moves
    }

    /// The moves the side to move may actually make
    ///
    /// Each pseudo-legal move is simulated on a scoped copy of the board and
    /// kept only if the mover's own king is not left in check; the copy is
    /// discarded, so the authoritative board never holds an intermediate
    /// position. The result is ordered by ascending source square, then
    /// ascending destination square, for reproducibility.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self
            .pseudo_legal_moves()
            .into_iter()
            .filter(|&mv| {
                let mut scratch = self.clone();
                scratch.apply_unchecked(mv);
                !scratch.is_in_check(self.side_to_move)
            })
            .collect();
        // The sort is stable, so the four promotions of one pawn move keep
        // their queen, rook, bishop, knight generation order.
        moves.sort_by_key(|mv| (mv.from.0, mv.to.0));
        moves
    }

    /// Moves for pieces that jump straight to a tabled destination
    fn leaper_moves(
        &self,
        from: BoardSquare,
        color: Color,
        table: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(ranks, files) in table {
            let to = from.offset(ranks, files);
            if !to.is_valid() {
                continue;
            }
            match self.get(to) {
                None => moves.push(Move::new(from, to, MoveFlags::empty())),
                Some(piece) if piece.color != color => {
                    moves.push(Move::new(from, to, MoveFlags::CAPTURE))
                }
                Some(_) => {}
            }
        }
    }

    /// Moves for pieces that slide along rays until blocked
    ///
    /// The first occupied square ends the ray; it is included only as a
    /// capture of an enemy piece.
    fn slider_moves(
        &self,
        from: BoardSquare,
        color: Color,
        rays: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(ranks, files) in rays {
            let mut to = from.offset(ranks, files);
            while to.is_valid() {
                match self.get(to) {
                    None => moves.push(Move::new(from, to, MoveFlags::empty())),
                    Some(piece) => {
                        if piece.color != color {
                            moves.push(Move::new(from, to, MoveFlags::CAPTURE));
                        }
                        break;
                    }
                }
                to = to.offset(ranks, files);
            }
        }
    }

    /// Pawn pushes, double pushes, diagonal captures, and en passant
    fn pawn_moves(&self, from: BoardSquare, color: Color, moves: &mut Vec<Move>) {
        let direction = color.pawn_direction();
        let Some((rank, _)) = from.to_rank_file() else {
            return;
        };

        let ahead = from.offset(direction, 0);
        if ahead.is_valid() && self.get(ahead).is_none() {
            push_pawn_move(from, ahead, color, MoveFlags::empty(), moves);
            if rank == color.pawn_rank() {
                let double = ahead.offset(direction, 0);
                if double.is_valid() && self.get(double).is_none() {
                    moves.push(Move::new(from, double, MoveFlags::DOUBLE_PAWN_PUSH));
                }
            }
        }

        for files in [-1, 1] {
            let to = from.offset(direction, files);
            if !to.is_valid() {
                continue;
            }
            match self.get(to) {
                Some(piece) if piece.color != color => {
                    push_pawn_move(from, to, color, MoveFlags::CAPTURE, moves)
                }
                None if self.en_passant_target == Some(to) => moves.push(Move::new(
                    from,
                    to,
                    MoveFlags::CAPTURE.union(MoveFlags::EN_PASSANT),
                )),
                _ => {}
            }
        }
    }

    /// Castling, generated as king moves two files towards a rook
    fn castle_moves(&self, from: BoardSquare, color: Color, moves: &mut Vec<Move>) {
        let home = color.home_rank();
        if from != BoardSquare::from_rank_file(home, 4) {
            return;
        }
        let enemy = color.other();
        // Castling out of check is not allowed, and neither king transit
        // square may be attacked.
        if self.is_square_attacked(from, enemy) {
            return;
        }
        let (kingside, queenside) = match color {
            Color::White => (CastleRights::WHITE_KINGSIDE, CastleRights::WHITE_QUEENSIDE),
            Color::Black => (CastleRights::BLACK_KINGSIDE, CastleRights::BLACK_QUEENSIDE),
        };
        let rook = Some(Piece::new(PieceKind::Rook, color));

        if self.castles.contains(kingside)
            && self.get(BoardSquare::from_rank_file(home, 7)) == rook
            && self.get(BoardSquare::from_rank_file(home, 5)).is_none()
            && self.get(BoardSquare::from_rank_file(home, 6)).is_none()
            && !self.is_square_attacked(BoardSquare::from_rank_file(home, 5), enemy)
            && !self.is_square_attacked(BoardSquare::from_rank_file(home, 6), enemy)
        {
            moves.push(Move::new(
                from,
                BoardSquare::from_rank_file(home, 6),
                MoveFlags::CASTLE_KINGSIDE,
            ));
        }

        // The b-file square must be empty but may be attacked: only the
        // king's own path has to be safe.
        if self.castles.contains(queenside)
            && self.get(BoardSquare::from_rank_file(home, 0)) == rook
            && self.get(BoardSquare::from_rank_file(home, 1)).is_none()
            && self.get(BoardSquare::from_rank_file(home, 2)).is_none()
            && self.get(BoardSquare::from_rank_file(home, 3)).is_none()
            && !self.is_square_attacked(BoardSquare::from_rank_file(home, 3), enemy)
            && !self.is_square_attacked(BoardSquare::from_rank_file(home, 2), enemy)
        {
            moves.push(Move::new(
                from,
                BoardSquare::from_rank_file(home, 2),
                MoveFlags::CASTLE_QUEENSIDE,
            ));
        }
    }
}

/// Record a pawn arrival, fanning out into the four promotion choices when
/// the destination is the final rank
fn push_pawn_move(
    from: BoardSquare,
    to: BoardSquare,
    color: Color,
    flags: MoveFlags,
    moves: &mut Vec<Move>,
) {
    let Some((to_rank, _)) = to.to_rank_file() else {
        return;
    };
    if to_rank == color.promotion_rank() {
        for kind in PieceKind::PROMOTION_CHOICES {
            moves.push(Move::promoting(from, to, kind, flags));
        }
    } else {
        moves.push(Move::new(from, to, flags));
    }
}
