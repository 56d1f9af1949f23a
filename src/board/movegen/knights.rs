use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Square,
        captures_only: bool,
        moves: &mut MoveList,
    ) {
        let color = self.side_to_move();
        let mask = if captures_only {
            self.occupied[color.opponent().index()].0
        } else {
            !self.occupied[color.index()].0
        };
        let targets = Bitboard(KNIGHT_ATTACKS[from.index()] & mask);

        for to in targets.iter() {
            moves.push(self.create_move(from, to, Piece::Knight, None));
        }
    }
}
