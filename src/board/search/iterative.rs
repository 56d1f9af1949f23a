//! Iterative deepening driver with aspiration windows.

use super::super::Board;
use super::{SearchContext, SearchIterationInfo, INF, MATE};

const ASPIRATION_WINDOW: i32 = 50;
const ASPIRATION_WINDOW_NARROW: i32 = 25;
const ASPIRATION_MIN_DEPTH: i32 = 4;
const MATE_FOUND_MARGIN: i32 = 1000;

impl SearchContext<'_> {
    /// Search depths 1..=`max_depth`, narrowing the window around the
    /// previous score from depth 4 on. On a fail outside the window the
    /// depth is re-searched with the full window. Returns the final score;
    /// the best move is left in `self.root_best`.
    pub fn iterative_deepening(&mut self, board: &Board, max_depth: i32) -> i32 {
        let mut score = 0;
        let mut alpha = -INF;
        let mut beta = INF;
        let mut window = ASPIRATION_WINDOW;

        self.state.stats.reset();

        for depth in 1..=max_depth {
            if depth >= ASPIRATION_MIN_DEPTH {
                alpha = score - window;
                beta = score + window;
            }

            let mut iteration_score = self.search(board, depth, alpha, beta, 0, true);

            if iteration_score <= alpha || iteration_score >= beta {
                // Fail outside the aspiration window: full-window re-search
                iteration_score = self.search(board, depth, -INF, INF, 0, true);
                window = ASPIRATION_WINDOW;
            } else {
                window = ASPIRATION_WINDOW_NARROW;
            }

            score = iteration_score;

            if let Some(budget) = self.time_budget {
                let elapsed = self.state.stats.start_time.elapsed();
                if elapsed.as_millis() as u64 > budget.as_millis() as u64 * 2 / 5 && depth > 4 {
                    break;
                }
            }

            self.report_iteration(depth, score);

            if score.abs() >= MATE - MATE_FOUND_MARGIN {
                break;
            }
        }

        score
    }

    fn report_iteration(&self, depth: i32, score: i32) {
        let Some(callback) = &self.info_callback else {
            return;
        };

        let mate_in = if score.abs() >= MATE - MATE_FOUND_MARGIN {
            let moves = (MATE - score.abs() + 1) / 2;
            Some(if score < 0 { -moves } else { moves })
        } else {
            None
        };

        let info = SearchIterationInfo {
            depth,
            score,
            mate_in,
            nodes: self.state.stats.nodes,
            nps: self.state.stats.nps(),
            pv: self
                .root_best
                .map_or_else(|| "0000".to_string(), |m| m.to_string()),
        };
        callback(&info);
    }
}
