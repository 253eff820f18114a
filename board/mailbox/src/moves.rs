//! Moves as the generator produces them and the applier consumes them

use core::fmt;

use board::{BoardSquare, LongAlgebraicNotationMove, PieceKind};

bitflags::bitflags! {
    /// What is special about a move, beyond its source and destination
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MoveFlags: u8 {
        /// An enemy piece is removed from the board
        const CAPTURE = 0b0000_0001;
        /// A pawn capturing onto the en-passant target; the victim is the
        /// pawn beside the destination, not on it
        const EN_PASSANT = 0b0000_0010;
        const CASTLE_KINGSIDE = 0b0000_0100;
        const CASTLE_QUEENSIDE = 0b0000_1000;
        /// A pawn advancing two squares from its starting rank
        const DOUBLE_PAWN_PUSH = 0b0001_0000;
    }
}

/// One move, described fully enough to apply without re-deriving anything
///
/// A `Move` is a value: produced by the move generator, consumed once by the
/// applier. Constructing one by hand skips the generator's vouching, so the
/// constructors stay in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: BoardSquare,
    pub to: BoardSquare,
    /// The kind the moving pawn becomes, for promotion moves
    pub promotion: Option<PieceKind>,
    pub flags: MoveFlags,
}

impl Move {
    pub(crate) const fn new(from: BoardSquare, to: BoardSquare, flags: MoveFlags) -> Self {
        Self {
            from,
            to,
            promotion: None,
            flags,
        }
    }

    pub(crate) const fn promoting(
        from: BoardSquare,
        to: BoardSquare,
        kind: PieceKind,
        flags: MoveFlags,
    ) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
            flags,
        }
    }

    /// Whether an enemy piece comes off the board
    pub fn is_capture(self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    /// Whether this move is a castle, to either side
    pub fn is_castle(self) -> bool {
        self.flags
            .intersects(MoveFlags::CASTLE_KINGSIDE | MoveFlags::CASTLE_QUEENSIDE)
    }
}

impl From<Move> for LongAlgebraicNotationMove {
    fn from(value: Move) -> Self {
        Self {
            source: value.from,
            target: value.to,
            promotion: value.promotion,
        }
    }
}

/// Displays in coordinate notation, e.g. `e2e4` or `a7a8q`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        LongAlgebraicNotationMove::from(*self).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_displays_as_coordinates() {
        let mv = Move::new(BoardSquare::E1, BoardSquare::G1, MoveFlags::CASTLE_KINGSIDE);
        assert_eq!(mv.to_string(), "e1g1");
        let promo = Move::promoting(
            BoardSquare::from_rank_file(6, 0),
            BoardSquare::A8,
            PieceKind::Knight,
            MoveFlags::empty(),
        );
        assert_eq!(promo.to_string(), "a7a8n");
    }

    #[test]
    fn test_flag_queries() {
        let mv = Move::new(
            BoardSquare::E1,
            BoardSquare::C1,
            MoveFlags::CASTLE_QUEENSIDE,
        );
        assert!(mv.is_castle());
        assert!(!mv.is_capture());
        let ep = Move::new(
            BoardSquare::from_rank_file(4, 4),
            BoardSquare::from_rank_file(5, 3),
            MoveFlags::CAPTURE | MoveFlags::EN_PASSANT,
        );
        assert!(ep.is_capture());
        assert!(!ep.is_castle());
    }
}
