//! Forsyth-Edwards Notation parsing and printing.

use std::str::FromStr;

use crate::board::{CastlingRights, Position};
use crate::error::FenError;
use crate::types::*;

impl Position {
    /// Parses a FEN string. The two move counters are optional and default
    /// to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields { found: parts.len() });
        }

        let board = parse_board(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    field: other.to_string(),
                });
            }
        };

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::InvalidCastling { ch: c }),
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            field => Some(coord_to_sq(field).ok_or_else(|| FenError::InvalidEnPassant {
                field: field.to_string(),
            })?),
        };

        let halfmove_clock = parse_counter(parts.get(4).copied().unwrap_or("0"))?;
        let fullmove_number = parse_counter(parts.get(5).copied().unwrap_or("1"))?;

        let mut pos = Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        };
        pos.castling = pos.supported_castling();
        let en_passant = pos.en_passant.filter(|&target| pos.en_passant_plausible(target));
        pos.en_passant = en_passant;
        Ok(pos)
    }

    /// Castling rights whose king and rook still stand on their home squares.
    fn supported_castling(&self) -> CastlingRights {
        let has = |square: u8, color: Color, kind: PieceKind| {
            self.piece_at(square) == Some(Piece::new(color, kind))
        };
        let white_king = has(4, Color::White, PieceKind::King);
        let black_king = has(60, Color::Black, PieceKind::King);
        CastlingRights {
            wk: self.castling.wk && white_king && has(7, Color::White, PieceKind::Rook),
            wq: self.castling.wq && white_king && has(0, Color::White, PieceKind::Rook),
            bk: self.castling.bk && black_king && has(63, Color::Black, PieceKind::Rook),
            bq: self.castling.bq && black_king && has(56, Color::Black, PieceKind::Rook),
        }
    }

    /// Whether a double push by the side not to move can have produced
    /// `target`: it sits on the right rank, it and the pawn's start square
    /// are empty, and the pushed pawn stands just past it.
    fn en_passant_plausible(&self, target: u8) -> bool {
        let pusher = self.side_to_move.other();
        let (rank, ahead, behind) = match pusher {
            Color::White => (2, 1i8, -1i8),
            Color::Black => (5, -1, 1),
        };
        if rank_of(target) != rank || self.piece_at(target).is_some() {
            return false;
        }
        let file = file_of(target);
        let pawn_sq = sq(file, rank + ahead);
        let start_sq = sq(file, rank + behind);
        let pawn_there = pawn_sq
            .and_then(|s| self.piece_at(s))
            .is_some_and(|pc| pc == Piece::new(pusher, PieceKind::Pawn));
        let start_empty = start_sq.is_some_and(|s| self.piece_at(s).is_none());
        pawn_there && start_empty
    }

    /// Full six-field FEN.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {}",
            self.epd_with(self.en_passant),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Canonical identity of the position: placement, side to move, castling
    /// rights and en-passant square. The en-passant square is only written
    /// when a legal en-passant capture exists, so two positions that play
    /// identically produce the same key.
    pub fn epd_key(&self) -> String {
        let ep = self.en_passant.filter(|&target| {
            crate::movegen::legal_moves(self)
                .iter()
                .any(|mv| mv.is_en_passant && mv.to == target)
        });
        self.epd_with(ep)
    }

    pub fn board_fen(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in (0..8i8).rev() {
            let mut empty = 0;
            for file in 0..8i8 {
                let piece = sq(file, rank).and_then(|s| self.piece_at(s));
                match piece {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }

    fn epd_with(&self, ep: Option<u8>) -> String {
        let stm = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (flag, ch) in [
            (self.castling.wk, 'K'),
            (self.castling.wq, 'Q'),
            (self.castling.bk, 'k'),
            (self.castling.bq, 'q'),
        ] {
            if flag {
                castling.push(ch);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = ep.map(sq_to_coord).unwrap_or_else(|| "-".to_string());
        format!("{} {} {} {}", self.board_fen(), stm, castling, ep)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

fn parse_board(field: &str) -> Result<[Option<Piece>; 64], FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount { found: ranks.len() });
    }

    let mut board = [None; 64];
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
        let width_error = FenError::RankWidth {
            rank: rank as u8 + 1,
        };
        let mut file: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                file += d as i8;
            } else {
                let piece = Piece::from_symbol(ch).ok_or(FenError::InvalidPiece { ch })?;
                let s = sq(file, rank).ok_or_else(|| width_error.clone())?;
                board[s as usize] = Some(piece);
                file += 1;
            }
            if file > 8 {
                return Err(width_error);
            }
        }
        if file != 8 {
            return Err(width_error);
        }
    }
    Ok(board)
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidCounter {
        field: field.to_string(),
    })
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
