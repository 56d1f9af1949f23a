//! Fail-hard alpha-beta search with check extensions, transposition
//! cutoffs, null-move pruning, PVS, late move reductions and shallow
//! futility pruning.

use crate::tt::{BoundType, PackedMove};

use super::ordering::order_moves;
use super::{SearchContext, INF, MATE};

use super::super::Board;

const NULL_MOVE_MIN_DEPTH: i32 = 3;
const LMR_MIN_DEPTH: i32 = 3;
const LMR_MIN_MOVE: usize = 4;
const LMR_HISTORY_RELIEF: i32 = 5000;
const FUTILITY_MAX_DEPTH: i32 = 2;
const FUTILITY_MIN_MOVE: usize = 8;
const FUTILITY_MARGIN_PER_DEPTH: i32 = 100;

impl SearchContext<'_> {
    /// Search `board` to `depth` plies inside the fail-hard window
    /// (`alpha`, `beta`). At ply 0 the best root move is tracked in
    /// `self.root_best`.
    pub(crate) fn search(
        &mut self,
        board: &Board,
        mut depth: i32,
        mut alpha: i32,
        beta: i32,
        ply: i32,
        allow_null: bool,
    ) -> i32 {
        self.state.stats.nodes += 1;

        let in_check = board.in_check();
        if in_check {
            depth += 1;
        }

        let mut tt_move: Option<PackedMove> = None;
        if let Some(entry) = self.state.tables.tt.probe(board.hash()) {
            if entry.depth() >= depth {
                match entry.bound() {
                    BoundType::Exact => {
                        if ply == 0 {
                            if let Some(packed) = entry.best_move() {
                                self.root_best = Some(packed.to_move());
                            }
                        }
                        return entry.score();
                    }
                    BoundType::UpperBound => {
                        if entry.score() <= alpha {
                            return alpha;
                        }
                    }
                    BoundType::LowerBound => {
                        if entry.score() >= beta {
                            return beta;
                        }
                    }
                }
            }
            tt_move = entry.best_move();
        }

        if depth <= 0 {
            return self.quiesce(board, alpha, beta, 0);
        }

        if allow_null && !in_check && depth >= NULL_MOVE_MIN_DEPTH && ply > 0 {
            let r = if depth > 6 { 3 } else { 2 };
            let child = board.make_null_move();
            let score = -self.search(&child, depth - 1 - r, -beta, -beta + 1, ply + 1, false);
            if score >= beta {
                return beta;
            }
        }

        let moves = board.generate_moves();
        if moves.is_empty() {
            return if in_check { -MATE + ply } else { 0 };
        }

        let scored = order_moves(board, &moves, tt_move, ply as usize, &self.state.tables);
        if ply == 0 {
            // Safety net: always have some root move before the first score
            self.root_best = scored.iter().next().map(|s| s.mv);
        }

        let side = board.side_to_move();
        let opp_occ = board.occupied[side.opponent().index()].0;
        let orig_alpha = alpha;
        let mut best_score = -INF;
        let mut best_move = None;
        let mut move_count = 0usize;

        for entry in scored.iter() {
            let m = entry.mv;
            move_count += 1;

            let is_quiet = opp_occ & (1u64 << m.to.index()) == 0;

            // Late move reductions for quiet moves ordered late
            let mut reduction = 0;
            if move_count > LMR_MIN_MOVE
                && depth >= LMR_MIN_DEPTH
                && !in_check
                && is_quiet
                && m.promotion.is_none()
            {
                reduction = if move_count > 12 {
                    3
                } else if move_count > 6 {
                    2
                } else {
                    1
                };
                let hist = self
                    .state
                    .tables
                    .history
                    .get(side, m.from.index(), m.to.index());
                if self.state.tables.killers.is_killer(ply as usize, &m)
                    || hist > LMR_HISTORY_RELIEF
                {
                    reduction = (reduction - 1).max(0);
                }
            }

            let child = board.make_move(&m);

            let mut score;
            if move_count == 1 {
                score = -self.search(&child, depth - 1 - reduction, -beta, -alpha, ply + 1, true);
            } else {
                // PVS: null window first, re-search inside the window on
                // improvement
                score = -self.search(
                    &child,
                    depth - 1 - reduction,
                    -alpha - 1,
                    -alpha,
                    ply + 1,
                    true,
                );
                if score > alpha && score < beta {
                    score = -self.search(&child, depth - 1, -beta, -alpha, ply + 1, true);
                }
            }

            // Reduced search raised alpha: re-search at full depth
            if reduction > 0 && score > alpha {
                score = -self.search(&child, depth - 1, -beta, -alpha, ply + 1, true);
            }

            if score > best_score {
                best_score = score;
                best_move = Some(m);
                if ply == 0 {
                    self.root_best = Some(m);
                }
            }

            if score > alpha {
                alpha = score;
                if is_quiet {
                    self.state
                        .tables
                        .history
                        .update(side, m.from.index(), m.to.index(), depth);
                }
            }

            if alpha >= beta {
                if is_quiet {
                    self.state.tables.killers.update(ply as usize, m);
                }
                break;
            }

            // Shallow futility: late quiet moves in a hopeless position
            // cannot rescue the node
            if depth <= FUTILITY_MAX_DEPTH
                && !in_check
                && move_count > FUTILITY_MIN_MOVE
                && is_quiet
                && board.evaluate() + depth * FUTILITY_MARGIN_PER_DEPTH < alpha
            {
                break;
            }
        }

        let bound = if best_score <= orig_alpha {
            BoundType::UpperBound
        } else if best_score >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.state
            .tables
            .tt
            .store(board.hash(), depth, best_score, bound, best_move.as_ref());

        best_score
    }
}
