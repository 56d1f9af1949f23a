//! Move ordering for search.
//!
//! Priority stack: TT move, MVV-LVA captures, killers, history, with a
//! bonus for queen promotions. Higher scores are searched first.

use crate::tt::PackedMove;

use super::super::{Board, MoveList, Piece, ScoredMoveList};
use super::SearchTables;

const TT_MOVE_SCORE: i32 = 1_000_000;
const CAPTURE_BASE_SCORE: i32 = 100_000;
const KILLER_SCORE: i32 = 90_000;
const QUEEN_PROMO_BONUS: i32 = 80_000;

/// Piece values used for MVV-LVA capture ordering.
pub(crate) fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight | Piece::Bishop => 300,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 10_000,
    }
}

/// Score and sort moves in descending order.
pub(crate) fn order_moves(
    board: &Board,
    moves: &MoveList,
    tt_move: Option<PackedMove>,
    ply: usize,
    tables: &SearchTables,
) -> ScoredMoveList {
    let side = board.side_to_move();
    let opp_occ = board.occupied[side.opponent().index()].0;
    let mut scored = ScoredMoveList::new();

    for m in moves.iter() {
        if tt_move.is_some_and(|tt| tt.matches(&m)) {
            scored.push(m, TT_MOVE_SCORE);
            continue;
        }

        let mut score = if opp_occ & (1u64 << m.to.index()) != 0 {
            // MVV-LVA: prefer valuable victims taken by cheap attackers
            let victim = board
                .piece_at(m.to)
                .map_or(0, |(_, piece)| piece_value(piece));
            CAPTURE_BASE_SCORE + victim * 10 - piece_value(m.piece)
        } else if tables.killers.is_killer(ply, &m) {
            KILLER_SCORE
        } else {
            tables.history.get(side, m.from.index(), m.to.index())
        };

        if m.promotion == Some(Piece::Queen) {
            score += QUEEN_PROMO_BONUS;
        }
        scored.push(m, score);
    }

    scored.sort_by_score_desc();
    scored
}
