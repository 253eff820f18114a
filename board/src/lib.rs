//! The shared vocabulary for chess boards: squares, pieces, coordinate
//! notation, and the [`Board`] trait implemented by concrete representations.

use core::{fmt, str::FromStr};

pub mod geometry;

/// The types of pieces there are
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All the kinds of pieces there are
    pub const KINDS: [PieceKind; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    /// The kinds a pawn may promote into, in the order promotions are
    /// enumerated by move generation.
    pub const PROMOTION_CHOICES: [PieceKind; 4] =
        [Self::Queen, Self::Rook, Self::Bishop, Self::Knight];

    /// The capitalized version of the letter used for this piece in FEN
    pub const fn fen_letter(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// The kind denoted by the given FEN letter, either case
    pub const fn from_fen_letter(letter: char) -> Option<Self> {
        match letter {
            'P' | 'p' => Some(Self::Pawn),
            'N' | 'n' => Some(Self::Knight),
            'B' | 'b' => Some(Self::Bishop),
            'R' | 'r' => Some(Self::Rook),
            'Q' | 'q' => Some(Self::Queen),
            'K' | 'k' => Some(Self::King),
            _ => None,
        }
    }

    /// The lowercase letter appended to a coordinate move for this promotion
    pub const fn promotion_letter(self) -> char {
        self.fen_letter().to_ascii_lowercase()
    }

    /// Whether a pawn can promote into this kind of piece
    pub const fn is_promotable(self) -> bool {
        match self {
            PieceKind::Pawn | PieceKind::King => false,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => true,
        }
    }
}

/// The colors a piece can have
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The rank this side's pieces start on
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// The rank this side's pawns start on
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// The rank on which this side's pawns promote
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// The direction this side's pawns advance, as a rank delta
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

/// A piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// The letter used for this piece in FEN (uppercase white, lowercase black)
    pub const fn fen_letter(self) -> char {
        match self.color {
            Color::White => self.kind.fen_letter(),
            Color::Black => self.kind.fen_letter().to_ascii_lowercase(),
        }
    }

    /// The piece denoted by the given FEN letter (uppercase white, lowercase black)
    pub const fn from_fen_letter(letter: char) -> Option<Self> {
        let Some(kind) = PieceKind::from_fen_letter(letter) else {
            return None;
        };
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { kind, color })
    }

    /// The glyph used when rendering a board as text.
    ///
    /// White pieces take the filled symbols, black pieces the outlined ones.
    pub const fn glyph(self) -> char {
        match (self.kind, self.color) {
            (PieceKind::Pawn, Color::White) => '\u{265F}',
            (PieceKind::Knight, Color::White) => '\u{265E}',
            (PieceKind::Bishop, Color::White) => '\u{265D}',
            (PieceKind::Rook, Color::White) => '\u{265C}',
            (PieceKind::Queen, Color::White) => '\u{265B}',
            (PieceKind::King, Color::White) => '\u{265A}',
            (PieceKind::Pawn, Color::Black) => '\u{2659}',
            (PieceKind::Knight, Color::Black) => '\u{2658}',
            (PieceKind::Bishop, Color::Black) => '\u{2657}',
            (PieceKind::Rook, Color::Black) => '\u{2656}',
            (PieceKind::Queen, Color::Black) => '\u{2655}',
            (PieceKind::King, Color::Black) => '\u{2654}',
        }
    }
}

/// Whether the side to move is in check or has been mated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    None,
    Check,
    Checkmate,
}

/// How a game stands, from the point of view of the side to move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// The side to move has at least one legal move
    InProgress,
    /// The side to move has been checkmated; the winner is recorded
    Won(Color),
    /// The side to move has no legal moves but is not in check
    Stalemate,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("game in progress"),
            Self::Won(Color::White) => f.write_str("checkmate, white wins"),
            Self::Won(Color::Black) => f.write_str("checkmate, black wins"),
            Self::Stalemate => f.write_str("draw by stalemate"),
        }
    }
}

/// An index on the board
///
/// Stored in 0x88 form: rank in the high nibble, file in the low nibble.
/// Bits `0x88` are clear on every valid square, so one mask test answers
/// whether rank/file arithmetic stayed on the board.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSquare(pub u8);

impl BoardSquare {
    /// An invalid square
    ///
    /// Please use this instead of making your own so it's obvious if a
    /// deliberately-invalid square appeared.
    pub const INVALID: Self = Self(0xEE);

    pub const A1: Self = Self(0x00);
    pub const B1: Self = Self(0x01);
    pub const C1: Self = Self(0x02);
    pub const D1: Self = Self(0x03);
    pub const E1: Self = Self(0x04);
    pub const F1: Self = Self(0x05);
    pub const G1: Self = Self(0x06);
    pub const H1: Self = Self(0x07);
    pub const A8: Self = Self(0x70);
    pub const B8: Self = Self(0x71);
    pub const C8: Self = Self(0x72);
    pub const D8: Self = Self(0x73);
    pub const E8: Self = Self(0x74);
    pub const F8: Self = Self(0x75);
    pub const G8: Self = Self(0x76);
    pub const H8: Self = Self(0x77);

    /// Returns if this square is valid
    ///
    /// ```
    /// # use board::BoardSquare;
    /// assert!(!BoardSquare::INVALID.is_valid());
    /// assert!(BoardSquare::E1.is_valid());
    /// ```
    pub const fn is_valid(self) -> bool {
        self.0 & 0x88 == 0
    }

    /// Produce a board square from the rank and file, returning
    /// [`Self::INVALID`] if the rank and file are not a valid square.
    pub const fn from_rank_file(rank: u8, file: u8) -> Self {
        if rank < 8 && file < 8 {
            Self(rank << 4 | file)
        } else {
            Self::INVALID
        }
    }

    /// Returns the `(rank, file)` tuple if this position is valid
    pub const fn to_rank_file(self) -> Option<(u8, u8)> {
        if self.is_valid() {
            Some((self.0 >> 4, self.0 & 0x07))
        } else {
            None
        }
    }

    /// Offset the given number of ranks and files.
    ///
    /// Positive rank moves from rank 1 towards rank 8, positive file from
    /// the a-file towards the h-file. Walking off the board, or offsetting
    /// an invalid square, yields an invalid square.
    ///
    /// ```rust
    /// use board::BoardSquare;
    /// assert_eq!(BoardSquare::D1.offset(1, 1), BoardSquare::from_rank_file(1, 4));
    /// assert_eq!(BoardSquare::A8.offset(-7, 0), BoardSquare::A1);
    /// assert!(!BoardSquare::D1.offset(-1, 0).is_valid());
    /// assert!(!BoardSquare::H8.offset(0, 1).is_valid());
    /// ```
    pub const fn offset(self, ranks: i8, files: i8) -> Self {
        let Some((rank, file)) = self.to_rank_file() else {
            return Self::INVALID;
        };
        let rank = rank as i8 + ranks;
        let file = file as i8 + files;
        if rank < 0 || rank > 7 || file < 0 || file > 7 {
            Self::INVALID
        } else {
            Self::from_rank_file(rank as u8, file as u8)
        }
    }

    /// An iterator over all valid squares, a1 through h8
    ///
    /// ```
    /// assert_eq!(board::BoardSquare::all_squares().count(), 64);
    /// ```
    pub fn all_squares() -> impl Iterator<Item = Self> {
        (0..64u8).map(|idx| Self::from_rank_file(idx >> 3, idx & 0x07))
    }
}

impl fmt::Display for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        match self.to_rank_file() {
            Some((rank, file)) => {
                f.write_char((b'a' + file) as char)?;
                f.write_char((b'1' + rank) as char)
            }
            None => f.write_str("XX"),
        }
    }
}

impl fmt::Debug for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardSquare({:#04X} = {})", self.0, self)
    }
}

/// The square text was not a file letter 'a'-'h' followed by a rank digit
/// '1'-'8'.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: expected a file letter 'a'-'h' and a rank digit '1'-'8'")]
pub struct InvalidCoordinate;

impl FromStr for BoardSquare {
    type Err = InvalidCoordinate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[file, rank] = s.as_bytes() else {
            return Err(InvalidCoordinate);
        };
        let file = file.wrapping_sub(b'a');
        let rank = rank.wrapping_sub(b'1');
        if file < 8 && rank < 8 {
            Ok(Self::from_rank_file(rank, file))
        } else {
            Err(InvalidCoordinate)
        }
    }
}

/// The reasons coordinate move text can fail to parse
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("move text must be 4 or 5 characters long")]
    BadLength,
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),
    #[error("invalid promotion letter: expected one of 'q', 'r', 'b', 'n'")]
    BadPromotion,
}

/// A move in the minimal coordinate format: source square, destination
/// square, and an optional promotion letter (e.g. `e2e4`, `a7a8q`).
///
/// This carries no more than what was written down; whether the move is
/// legal is for a board representation to decide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongAlgebraicNotationMove {
    pub source: BoardSquare,
    pub target: BoardSquare,
    pub promotion: Option<PieceKind>,
}

impl fmt::Display for LongAlgebraicNotationMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.target)?;
        if let Some(promotion) = self.promotion {
            use fmt::Write;
            f.write_char(promotion.promotion_letter())?;
        }
        Ok(())
    }
}

impl FromStr for LongAlgebraicNotationMove {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || !matches!(s.len(), 4 | 5) {
            return Err(MoveParseError::BadLength);
        }
        let source = s[0..2].parse::<BoardSquare>()?;
        let target = s[2..4].parse::<BoardSquare>()?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some('q') => Some(PieceKind::Queen),
            Some('r') => Some(PieceKind::Rook),
            Some('b') => Some(PieceKind::Bishop),
            Some('n') => Some(PieceKind::Knight),
            Some(_) => return Err(MoveParseError::BadPromotion),
        };
        Ok(Self {
            source,
            target,
            promotion,
        })
    }
}

/// Functionality belonging to all board representations
pub trait Board: Sized {
    /// An error type that can be returned
    type Err: fmt::Debug;

    /// Get the state at the start of a chess game
    fn initial_state() -> Self;

    /// Parse a board from the given FEN
    fn from_fen(fen: &str) -> Result<Self, Self::Err>;

    /// Convert to a FEN string
    fn to_fen(&self) -> String;

    /// Make the given move, in place
    ///
    /// The board is left unchanged if the move is not legal.
    fn make_move(&mut self, mv: LongAlgebraicNotationMove) -> Result<(), Self::Err>;

    /// Make the board after the given sequence of moves
    fn from_move_sequence(
        moves: impl Iterator<Item = LongAlgebraicNotationMove>,
    ) -> Result<Self, Self::Err> {
        let mut state = Self::initial_state();
        for m in moves {
            state.make_move(m)?;
        }
        Ok(state)
    }

    /// Returns if the side to move is currently in check or checkmate
    fn check_status(&self) -> CheckStatus;

    /// Returns how the game stands for the side to move
    fn game_outcome(&self) -> GameOutcome;
}
