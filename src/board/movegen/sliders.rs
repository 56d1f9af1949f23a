use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, Board, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        piece: Piece,
        captures_only: bool,
        moves: &mut MoveList,
    ) {
        let color = self.side_to_move();
        let from_idx = from.index();

        let attacks = match piece {
            Piece::Bishop => bishop_attacks(from_idx, self.all_occupied.0),
            Piece::Rook => rook_attacks(from_idx, self.all_occupied.0),
            _ => queen_attacks(from_idx, self.all_occupied.0),
        };
        let mask = if captures_only {
            self.occupied[color.opponent().index()].0
        } else {
            !self.occupied[color.index()].0
        };

        for to in Bitboard(attacks & mask).iter() {
            moves.push(self.create_move(from, to, piece, None));
        }
    }
}
