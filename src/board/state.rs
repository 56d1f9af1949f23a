//! Board state: piece bitboards, derived occupancy, castling rights,
//! en-passant target and the incremental Zobrist hash.

use crate::zobrist::ZOBRIST;

use super::{
    bit_for_square, castle_bit, Bitboard, Color, Piece, Square, ALL_CASTLING_RIGHTS,
};

#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) white_to_move: bool,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: u8, // bitmask
    pub(crate) hash: u64,           // Zobrist hash
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square::new(0, file), Color::White, *piece);
            board.set_piece(Square::new(7, file), Color::Black, *piece);
            board.set_piece(Square::new(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square::new(6, file), Color::Black, Piece::Pawn);
        }

        board.castling_rights = ALL_CASTLING_RIGHTS;
        board.white_to_move = true;
        board.hash = board.calculate_initial_hash();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            white_to_move: true,
            en_passant_target: None,
            castling_rights: 0,
            hash: 0,
        }
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn castling_rights(&self) -> u8 {
        self.castling_rights
    }

    #[must_use]
    pub(crate) fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    pub(crate) fn has_castling_right(&self, color: Color, side: char) -> bool {
        self.castling_rights & castle_bit(color, side) != 0
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq);
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()].0 |= bit;
        self.occupied[c_idx].0 |= bit;
        self.all_occupied.0 |= bit;
    }

    pub(crate) fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let bit = bit_for_square(sq);
        if self.all_occupied.0 & bit == 0 {
            return None;
        }

        let color = if self.occupied[0].0 & bit != 0 {
            Color::White
        } else {
            Color::Black
        };
        let c_idx = color.index();
        for p_idx in 0..6 {
            if self.pieces[c_idx][p_idx].0 & bit != 0 {
                return Some((color, Piece::from_index(p_idx)));
            }
        }

        None
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    pub(crate) fn is_square_empty(&self, sq: Square) -> bool {
        self.all_occupied.0 & bit_for_square(sq) == 0
    }

    /// The king's square for `color`, or `None` if the king is absent.
    pub(crate) fn king_square(&self, color: Color) -> Option<Square> {
        let king = self.pieces[color.index()][Piece::King.index()];
        if king.is_empty() {
            None
        } else {
            Some(Square::from_index(king.0.trailing_zeros() as usize))
        }
    }

    /// Recompute the per-color and combined occupancy from the 12 piece
    /// bitboards.
    pub(crate) fn update_occupancy(&mut self) {
        self.occupied = [Bitboard::EMPTY; 2];
        for p_idx in 0..6 {
            self.occupied[0].0 |= self.pieces[0][p_idx].0;
            self.occupied[1].0 |= self.pieces[1][p_idx].0;
        }
        self.all_occupied.0 = self.occupied[0].0 | self.occupied[1].0;
    }

    /// Compute the Zobrist hash from scratch over all pieces, castling
    /// rights, en-passant square and side to move.
    #[must_use]
    pub fn calculate_initial_hash(&self) -> u64 {
        let mut hash: u64 = 0;

        for c_idx in 0..2 {
            for p_idx in 0..6 {
                for sq in self.pieces[c_idx][p_idx].iter() {
                    hash ^= ZOBRIST.pieces[c_idx][p_idx][sq.index()];
                }
            }
        }

        hash ^= ZOBRIST.castling[self.castling_rights as usize];
        if let Some(ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant[ep.index()];
        }
        if !self.white_to_move {
            hash ^= ZOBRIST.side_to_move;
        }

        hash
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
