mod attack_tables;
mod error;
mod eval;
mod fen;
mod make_move;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError};
pub use search::{
    find_best_move, find_best_move_with_time, HistoryTable, KillerTable, SearchContext,
    SearchInfoCallback, SearchIterationInfo, SearchState, SearchStats, SearchTables, MATE,
};
pub use state::Board;
pub use types::{Bitboard, Color, Move, MoveList, Piece, ScoredMove, ScoredMoveList, Square};

pub(crate) use types::{
    bit_for_square, castle_bit, file_to_index, rank_to_index, ALL_CASTLING_RIGHTS,
    CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q, MAX_PLY,
};
