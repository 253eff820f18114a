//! Attack detection: can a given side reach a given square?

use board::{geometry, BoardSquare, Color, Piece, PieceKind};

use crate::MailboxRepresentation;

impl MailboxRepresentation {
    /// Whether any piece of `by` could pseudo-legally move onto `square`
    ///
    /// This is pure geometric and occupancy reachability: it ignores whether
    /// moving would leave `by`'s own king in check. Pawns count only their
    /// diagonal capture pattern here, never their forward pushes.
    pub fn is_square_attacked(&self, square: BoardSquare, by: Color) -> bool {
        for (ranks, files) in geometry::KNIGHT_JUMPS {
            if self.get(square.offset(ranks, files)) == Some(Piece::new(PieceKind::Knight, by)) {
                return true;
            }
        }
        for (ranks, files) in geometry::KING_STEPS {
            if self.get(square.offset(ranks, files)) == Some(Piece::new(PieceKind::King, by)) {
                return true;
            }
        }
        // A pawn attacks this square from the squares a pawn of the other
        // color would attack, so look along the mirrored deltas.
        let pawn_sources = match by {
            Color::White => geometry::BLACK_PAWN_CAPTURES,
            Color::Black => geometry::WHITE_PAWN_CAPTURES,
        };
        for (ranks, files) in pawn_sources {
            if self.get(square.offset(ranks, files)) == Some(Piece::new(PieceKind::Pawn, by)) {
                return true;
            }
        }
        self.ray_attacked(square, by, &geometry::ROOK_RAYS, PieceKind::Rook)
            || self.ray_attacked(square, by, &geometry::BISHOP_RAYS, PieceKind::Bishop)
    }

    /// Walk each ray away from `square` to the first occupied cell; report
    /// whether that piece is a matching slider or queen of `by`.
    fn ray_attacked(
        &self,
        square: BoardSquare,
        by: Color,
        rays: &[(i8, i8)],
        slider: PieceKind,
    ) -> bool {
        for &(ranks, files) in rays {
            let mut current = square.offset(ranks, files);
            while current.is_valid() {
                if let Some(piece) = self.get(current) {
                    if piece.color == by
                        && (piece.kind == slider || piece.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                current = current.offset(ranks, files);
            }
        }
        false
    }

    /// Returns `true` if the given color's king is in check
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };
        self.is_square_attacked(king, color.other())
    }
}
