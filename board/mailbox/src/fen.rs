//! Forsyth-Edwards notation for importing and exporting positions

use board::{BoardSquare, Color, InvalidCoordinate, Piece};

use crate::{CastleRights, MailboxRepresentation, Result};

/// The reasons position text can fail to parse
#[derive(Debug, thiserror::Error)]
pub enum FenError {
    #[error("FEN is missing its {0} field")]
    MissingField(&'static str),
    #[error("unexpected character {0:?} in piece placement")]
    BadPlacement(char),
    #[error("piece placement must describe 8 ranks of 8 files each")]
    BadPlacementShape,
    #[error("side to move must be 'w' or 'b', got {0:?}")]
    BadSideToMove(String),
    #[error("unexpected character {0:?} in castling rights")]
    BadCastling(char),
    #[error("invalid en passant target: {0}")]
    BadEnPassant(InvalidCoordinate),
    #[error("invalid move counter: {0}")]
    BadCounter(core::num::ParseIntError),
}

/// Parse a board out of the six whitespace-separated FEN fields
///
/// The two trailing clock fields are optional, as plenty of published
/// positions leave them off; they default to 0 and 1.
pub(crate) fn parse(fen: &str) -> Result<MailboxRepresentation> {
    let mut board = MailboxRepresentation::EMPTY;
    let mut terms = fen.split_ascii_whitespace();

    let placement = terms
        .next()
        .ok_or(FenError::MissingField("piece placement"))?;
    let mut rows = placement.split('/');
    for rank in (0u8..8).rev() {
        let row = rows.next().ok_or(FenError::BadPlacementShape)?;
        let mut file: u8 = 0;
        for c in row.chars() {
            if let Some(run) = c.to_digit(10) {
                file = file.saturating_add(run as u8);
            } else if let Some(piece) = Piece::from_fen_letter(c) {
                if file >= 8 {
                    return Err(FenError::BadPlacementShape.into());
                }
                board.set(BoardSquare::from_rank_file(rank, file), Some(piece));
                file += 1;
            } else {
                return Err(FenError::BadPlacement(c).into());
            }
        }
        if file != 8 {
            return Err(FenError::BadPlacementShape.into());
        }
    }
    if rows.next().is_some() {
        return Err(FenError::BadPlacementShape.into());
    }

    board.side_to_move = match terms.next().ok_or(FenError::MissingField("side to move"))? {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::BadSideToMove(other.to_string()).into()),
    };

    let castling = terms
        .next()
        .ok_or(FenError::MissingField("castling rights"))?;
    if castling != "-" {
        for c in castling.chars() {
            board.castles |= match c {
                'K' => CastleRights::WHITE_KINGSIDE,
                'Q' => CastleRights::WHITE_QUEENSIDE,
                'k' => CastleRights::BLACK_KINGSIDE,
                'q' => CastleRights::BLACK_QUEENSIDE,
                other => return Err(FenError::BadCastling(other).into()),
            };
        }
    }

    let en_passant = terms
        .next()
        .ok_or(FenError::MissingField("en passant target"))?;
    board.en_passant_target = if en_passant == "-" {
        None
    } else {
        Some(
            en_passant
                .parse::<BoardSquare>()
                .map_err(FenError::BadEnPassant)?,
        )
    };

    board.halfmove_clock = match terms.next() {
        Some(text) => text.parse().map_err(FenError::BadCounter)?,
        None => 0,
    };
    board.fullmove_number = match terms.next() {
        Some(text) => text.parse().map_err(FenError::BadCounter)?,
        None => 1,
    };

    Ok(board)
}

/// Render the six FEN fields for the given board
pub(crate) fn render(board: &MailboxRepresentation) -> String {
    let mut fen = String::with_capacity(90);
    for rank in (0u8..8).rev() {
        let mut empty_run = 0;
        for file in 0..8 {
            match board.get(BoardSquare::from_rank_file(rank, file)) {
                Some(piece) => {
                    if empty_run > 0 {
                        fen.push(char::from_digit(empty_run, 10).unwrap());
                        empty_run = 0;
                    }
                    fen.push(piece.fen_letter());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            fen.push(char::from_digit(empty_run, 10).unwrap());
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match board.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    fen.push(' ');
    if board.castles.is_empty() {
        fen.push('-');
    } else {
        for (flag, letter) in [
            (CastleRights::WHITE_KINGSIDE, 'K'),
            (CastleRights::WHITE_QUEENSIDE, 'Q'),
            (CastleRights::BLACK_KINGSIDE, 'k'),
            (CastleRights::BLACK_QUEENSIDE, 'q'),
        ] {
            if board.castles.contains(flag) {
                fen.push(letter);
            }
        }
    }

    fen.push(' ');
    match board.en_passant_target {
        Some(square) => fen.push_str(&square.to_string()),
        None => fen.push('-'),
    }

    fen.push_str(&format!(
        " {} {}",
        board.halfmove_clock, board.fullmove_number
    ));
    fen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use board::Board;

    #[test]
    fn test_fen_round_trips() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
            "8/8/8/8/8/8/8/K6k w - - 31 77",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "4k3/8/8/8/8/8/8/4K2R w K - 0 1",
        ] {
            let board = MailboxRepresentation::from_fen(fen).unwrap();
            assert_eq!(board.to_fen(), fen, "{fen} did not round trip");
        }
    }

    #[test]
    fn test_fen_defaults_missing_clocks() {
        let board =
            MailboxRepresentation::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -")
                .unwrap();
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);
    }

    #[test]
    fn test_fen_rejects_malformed_text() {
        for fen in [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - zero 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPZ/RNBQKBNR w KQkq - 0 1",
        ] {
            assert!(
                matches!(MailboxRepresentation::from_fen(fen), Err(Error::Fen(_))),
                "{fen:?} parsed",
            );
        }
    }
}
