//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening with aspiration windows
//! - Fail-hard alpha-beta with check extensions, null-move pruning,
//!   PVS, late move reductions and shallow futility pruning
//! - Quiescence search with stand-pat and delta pruning
//! - Move ordering (TT move, MVV-LVA, killers, history)
//! - Transposition table for cutoffs and move ordering

mod alphabeta;
mod iterative;
pub(crate) mod ordering;
mod quiescence;

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::tt::TranspositionTable;

use super::{Board, Color, Move, MAX_PLY};

pub(crate) const INF: i32 = 999_999;
/// Mate score at the root; mate-in-N scores count down from here by ply.
pub const MATE: i32 = 100_000;
pub(crate) const MAX_QUIESCENCE_DEPTH: i32 = 6;

/// Two killer slots per ply, compared structurally on (from, to, promotion).
pub struct KillerTable {
    slots: [[Option<Move>; 2]; MAX_PLY],
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: [[None; 2]; MAX_PLY],
        }
    }

    pub fn update(&mut self, ply: usize, mv: Move) {
        if ply >= MAX_PLY {
            return;
        }
        if self.slots[ply][0] != Some(mv) {
            self.slots[ply][1] = self.slots[ply][0];
            self.slots[ply][0] = Some(mv);
        }
    }

    #[must_use]
    pub fn is_killer(&self, ply: usize, mv: &Move) -> bool {
        ply < MAX_PLY
            && (self.slots[ply][0] == Some(*mv) || self.slots[ply][1] == Some(*mv))
    }

    pub fn reset(&mut self) {
        self.slots = [[None; 2]; MAX_PLY];
    }
}

impl Default for KillerTable {
    fn default() -> Self {
        KillerTable::new()
    }
}

/// History heuristic indexed by (side, from, to). Quiet moves that raise
/// alpha gain depth^2; when any entry exceeds the aging threshold the whole
/// table is halved.
pub struct HistoryTable {
    scores: [[i32; 64 * 64]; 2],
}

const HISTORY_AGING_THRESHOLD: i32 = 100_000;

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        HistoryTable {
            scores: [[0; 64 * 64]; 2],
        }
    }

    #[must_use]
    pub fn get(&self, side: Color, from: usize, to: usize) -> i32 {
        self.scores[side.index()][from * 64 + to]
    }

    pub fn update(&mut self, side: Color, from: usize, to: usize, depth: i32) {
        let entry = &mut self.scores[side.index()][from * 64 + to];
        *entry += depth * depth;
        if *entry > HISTORY_AGING_THRESHOLD {
            for side_scores in &mut self.scores {
                for score in side_scores.iter_mut() {
                    *score /= 2;
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.scores = [[0; 64 * 64]; 2];
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        HistoryTable::new()
    }
}

/// Node statistics for a search.
pub struct SearchStats {
    pub nodes: u64,
    pub qnodes: u64,
    pub start_time: Instant,
}

impl SearchStats {
    #[must_use]
    pub fn new() -> Self {
        SearchStats {
            nodes: 0,
            qnodes: 0,
            start_time: Instant::now(),
        }
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
        self.qnodes = 0;
        self.start_time = Instant::now();
    }

    /// Nodes per second including quiescence nodes.
    #[must_use]
    pub fn nps(&self) -> u64 {
        let ms = self.start_time.elapsed().as_millis() as u64;
        if ms == 0 {
            return 0;
        }
        (self.nodes + self.qnodes) * 1000 / ms
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        SearchStats::new()
    }
}

/// Tables used during search (TT, killers, history).
pub struct SearchTables {
    pub tt: TranspositionTable,
    pub killers: KillerTable,
    pub history: HistoryTable,
}

/// Search state persisted across searches within a game.
pub struct SearchState {
    pub stats: SearchStats,
    pub tables: SearchTables,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        SearchState {
            stats: SearchStats::new(),
            tables: SearchTables {
                tt: TranspositionTable::new(),
                killers: KillerTable::new(),
                history: HistoryTable::new(),
            },
        }
    }

    /// Reset all tables for a new game.
    pub fn new_game(&mut self) {
        self.tables.tt.clear();
        self.tables.killers.reset();
        self.tables.history.reset();
        self.stats.reset();
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new()
    }
}

/// Information about a completed search iteration.
#[derive(Debug, Clone)]
pub struct SearchIterationInfo {
    pub depth: i32,
    pub score: i32,
    /// Signed mate distance in moves, when the score is a mate score
    pub mate_in: Option<i32>,
    pub nodes: u64,
    pub nps: u64,
    /// Best move in long algebraic notation
    pub pv: String,
}

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo)>;

/// Search context for a single `go`.
pub struct SearchContext<'a> {
    pub state: &'a mut SearchState,
    /// Best move at the root, updated as the search progresses
    pub root_best: Option<Move>,
    /// Time budget for the iterative-deepening driver, if any
    pub time_budget: Option<Duration>,
    /// Optional callback for reporting iteration info
    pub info_callback: Option<SearchInfoCallback>,
}

impl<'a> SearchContext<'a> {
    #[must_use]
    pub fn new(state: &'a mut SearchState) -> Self {
        SearchContext {
            state,
            root_best: None,
            time_budget: None,
            info_callback: None,
        }
    }
}

/// Find the best move with a fixed depth limit.
pub fn find_best_move(board: &Board, state: &mut SearchState, max_depth: i32) -> Option<Move> {
    let mut ctx = SearchContext::new(state);
    ctx.iterative_deepening(board, max_depth);
    ctx.root_best
}

/// Find the best move under an optional time budget, reporting iteration
/// info through the callback. Returns the final score and the best move.
pub fn find_best_move_with_time(
    board: &Board,
    state: &mut SearchState,
    max_depth: i32,
    time_budget: Option<Duration>,
    info_callback: Option<SearchInfoCallback>,
) -> (i32, Option<Move>) {
    let mut ctx = SearchContext::new(state);
    ctx.time_budget = time_budget;
    ctx.info_callback = info_callback;
    let score = ctx.iterative_deepening(board, max_depth);
    (score, ctx.root_best)
}
