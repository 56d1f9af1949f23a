//! Copy-make move application.
//!
//! `make_move` applies a move to a clone of the position and returns the
//! child; the parent is never mutated, so sibling recursion in the search
//! cannot interfere. The incremental hash is updated alongside every board
//! mutation and always equals the from-scratch hash.

use crate::zobrist::ZOBRIST;

use super::{
    bit_for_square, Board, Color, Move, Piece, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q,
    CASTLE_WHITE_K, CASTLE_WHITE_Q,
};

// Rook origin/destination squares touched by moves clear the matching right.
const ROOK_SQUARE_RIGHTS: [(usize, u8); 4] = [
    (0, CASTLE_WHITE_Q),
    (7, CASTLE_WHITE_K),
    (56, CASTLE_BLACK_Q),
    (63, CASTLE_BLACK_K),
];

impl Board {
    /// Apply `m` to a clone of this position and return the resulting child.
    #[must_use]
    pub fn make_move(&self, m: &Move) -> Board {
        let mut b = self.clone();
        b.apply_move(m);
        b
    }

    fn apply_move(&mut self, m: &Move) {
        let color = self.side_to_move();
        let c_idx = color.index();
        let opp_idx = 1 - c_idx;
        let from_idx = m.from.index();
        let to_idx = m.to.index();
        let from_bb = bit_for_square(m.from);
        let to_bb = bit_for_square(m.to);
        let prev_ep = self.en_passant_target;

        self.hash ^= ZOBRIST.castling[self.castling_rights as usize];
        if let Some(ep) = prev_ep {
            self.hash ^= ZOBRIST.en_passant[ep.index()];
        }

        if m.piece == Piece::King {
            if color == Color::White {
                self.castling_rights &= !(CASTLE_WHITE_K | CASTLE_WHITE_Q);
            } else {
                self.castling_rights &= !(CASTLE_BLACK_K | CASTLE_BLACK_Q);
            }
        }
        for (sq, right) in ROOK_SQUARE_RIGHTS {
            if from_idx == sq || to_idx == sq {
                self.castling_rights &= !right;
            }
        }

        self.en_passant_target = None;

        self.pieces[c_idx][m.piece.index()].0 ^= from_bb | to_bb;
        self.hash ^= ZOBRIST.pieces[c_idx][m.piece.index()][from_idx];
        self.hash ^= ZOBRIST.pieces[c_idx][m.piece.index()][to_idx];

        for p_idx in 0..6 {
            if self.pieces[opp_idx][p_idx].0 & to_bb != 0 {
                self.pieces[opp_idx][p_idx].0 ^= to_bb;
                self.hash ^= ZOBRIST.pieces[opp_idx][p_idx][to_idx];
                break;
            }
        }

        if m.piece == Piece::Pawn {
            if Some(m.to) == prev_ep {
                // En passant: the captured pawn sits behind the target square
                let captured_sq = if color == Color::White {
                    to_idx - 8
                } else {
                    to_idx + 8
                };
                self.pieces[opp_idx][Piece::Pawn.index()].0 ^= 1u64 << captured_sq;
                self.hash ^= ZOBRIST.pieces[opp_idx][Piece::Pawn.index()][captured_sq];
            }
            if (from_idx as isize - to_idx as isize).abs() == 16 {
                let ep_idx = (from_idx + to_idx) / 2;
                self.en_passant_target = Some(Square::from_index(ep_idx));
            }
            if let Some(promo) = m.promotion {
                self.pieces[c_idx][Piece::Pawn.index()].0 ^= to_bb;
                self.pieces[c_idx][promo.index()].0 ^= to_bb;
                self.hash ^= ZOBRIST.pieces[c_idx][Piece::Pawn.index()][to_idx];
                self.hash ^= ZOBRIST.pieces[c_idx][promo.index()][to_idx];
            }
        } else if m.piece == Piece::King && (from_idx as isize - to_idx as isize).abs() == 2 {
            // Castling: move the rook from its corner next to the king
            let (rook_from, rook_to) = match to_idx {
                6 => (7, 5),
                2 => (0, 3),
                62 => (63, 61),
                _ => (56, 59),
            };
            self.pieces[c_idx][Piece::Rook.index()].0 ^= (1u64 << rook_from) | (1u64 << rook_to);
            self.hash ^= ZOBRIST.pieces[c_idx][Piece::Rook.index()][rook_from];
            self.hash ^= ZOBRIST.pieces[c_idx][Piece::Rook.index()][rook_to];
        }

        self.hash ^= ZOBRIST.castling[self.castling_rights as usize];
        if let Some(ep) = self.en_passant_target {
            self.hash ^= ZOBRIST.en_passant[ep.index()];
        }
        self.white_to_move = !self.white_to_move;
        self.hash ^= ZOBRIST.side_to_move;

        self.update_occupancy();
    }

    /// A null move: flip the side to move and clear the en-passant target,
    /// hashing both so the transposition table stays correctly keyed during
    /// null-move searches.
    #[must_use]
    pub(crate) fn make_null_move(&self) -> Board {
        let mut b = self.clone();
        if let Some(ep) = b.en_passant_target {
            b.hash ^= ZOBRIST.en_passant[ep.index()];
            b.en_passant_target = None;
        }
        b.white_to_move = !b.white_to_move;
        b.hash ^= ZOBRIST.side_to_move;
        b
    }
}
