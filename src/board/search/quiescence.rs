//! Quiescence search: captures-only with stand-pat and delta pruning.

use super::super::{Board, Piece};
use super::ordering::order_moves;
use super::{SearchContext, MAX_QUIESCENCE_DEPTH};

// Expected gain margins for delta pruning
const PAWN_CAPTURE_GAIN: i32 = 200;
const PIECE_CAPTURE_GAIN: i32 = 900;

impl SearchContext<'_> {
    /// Fail-hard quiescence. `depth` starts at 0 and decrements; the search
    /// stands pat once it reaches the floor.
    pub(crate) fn quiesce(&mut self, board: &Board, mut alpha: i32, beta: i32, depth: i32) -> i32 {
        self.state.stats.qnodes += 1;

        let stand_pat = board.evaluate();
        if stand_pat >= beta {
            return beta;
        }
        if alpha < stand_pat {
            alpha = stand_pat;
        }
        if depth <= -MAX_QUIESCENCE_DEPTH {
            return stand_pat;
        }

        let captures = board.generate_captures();
        let scored = order_moves(board, &captures, None, 0, &self.state.tables);

        for entry in scored.iter() {
            let m = entry.mv;

            // Delta pruning: skip captures that cannot raise alpha even
            // with an optimistic gain
            let gain = if m.piece == Piece::Pawn {
                PAWN_CAPTURE_GAIN
            } else {
                PIECE_CAPTURE_GAIN
            };
            if depth < -1 && stand_pat + gain < alpha {
                continue;
            }

            let child = board.make_move(&m);
            let score = -self.quiesce(&child, -beta, -alpha, depth - 1);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
