//! UCI chess engine library.
//!
//! Provides a complete single-threaded chess engine with:
//! - Bitboard-based board representation with incremental Zobrist hashing
//! - Legal move generation (copy-make legality filter)
//! - Iterative-deepening alpha-beta search with aspiration windows,
//!   transposition table, null-move pruning, PVS, LMR and quiescence
//! - UCI protocol support for GUI integration
//!
//! # Quick Start
//!
//! ```
//! use nanochess::board::{Board, SearchState, find_best_move};
//!
//! let board = Board::new();
//!
//! // Generate all legal moves
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! // Find the best move (depth 4)
//! let mut state = SearchState::new();
//! if let Some(best) = find_best_move(&board, &mut state, 4) {
//!     println!("Best move: {}", best);
//! }
//! ```
//!
//! # Building Positions
//!
//! ```
//! use nanochess::board::Board;
//!
//! let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
//! assert!(!board.white_to_move());
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Piece`, `Color` and `Square`

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Bitboard hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Index casts are ubiquitous and safe in chess (board indices, square indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod tt;
pub mod uci;
pub mod zobrist;
