use super::super::{Board, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let dir = color.pawn_push_delta();
        let promotion_rank = color.pawn_promotion_rank();
        let from_idx = from.index() as isize;

        let single = from_idx + dir;
        if (0..64).contains(&single) {
            let to = Square::from_index(single as usize);
            if self.is_square_empty(to) {
                if to.rank() == promotion_rank {
                    moves.push(Move::new(from, to, Piece::Pawn, None, Some(Piece::Queen)));
                } else {
                    moves.push(Move::new(from, to, Piece::Pawn, None, None));
                    if from.rank() == color.pawn_start_rank() {
                        let double = Square::from_index((from_idx + 2 * dir) as usize);
                        if self.is_square_empty(double) {
                            moves.push(Move::new(from, double, Piece::Pawn, None, None));
                        }
                    }
                }
            }
        }

        self.generate_pawn_attacks(from, false, moves);
    }

    /// Diagonal pawn moves: captures, capture-promotions and (in full
    /// generation only) en passant. `captures_only` mirrors the quiescence
    /// generator, which skips en passant.
    pub(crate) fn generate_pawn_attacks(
        &self,
        from: Square,
        captures_only: bool,
        moves: &mut MoveList,
    ) {
        let color = self.side_to_move();
        let dir = color.pawn_push_delta();
        let promotion_rank = color.pawn_promotion_rank();
        let from_idx = from.index() as isize;
        let opp_occ = self.occupied[color.opponent().index()].0;

        for d in [dir - 1, dir + 1] {
            let to_idx = from_idx + d;
            if !(0..64).contains(&to_idx) {
                continue;
            }
            // Board-wrap guard
            if (from.file() as isize - (to_idx % 8)).abs() > 1 {
                continue;
            }
            let to = Square::from_index(to_idx as usize);

            if opp_occ & (1u64 << to_idx) != 0 {
                let captured = self.piece_at(to).map(|(_, p)| p);
                let promo = if to.rank() == promotion_rank {
                    Some(Piece::Queen)
                } else {
                    None
                };
                moves.push(Move::new(from, to, Piece::Pawn, captured, promo));
            } else if !captures_only && Some(to) == self.en_passant_target {
                moves.push(Move::new(from, to, Piece::Pawn, Some(Piece::Pawn), None));
            }
        }
    }
}
