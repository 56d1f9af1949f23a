//! Engine-level search tests against known positions.

use nanochess::board::{find_best_move, find_best_move_with_time, Board, SearchState, MATE};
use nanochess::uci::format_uci_move;

/// The engine finds a simple back-rank mate in one.
#[test]
fn finds_mate_in_one_back_rank() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let mut state = SearchState::new();

    let best = find_best_move(&board, &mut state, 4).expect("should find a move");
    assert_eq!(format_uci_move(&best), "e1e8", "expected Qe8# back-rank mate");
}

/// The engine finds the scholar's mate delivery.
#[test]
fn finds_mate_in_one_queen_takes_f7() {
    let board = Board::from_fen(
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4",
    );
    let mut state = SearchState::new();

    let best = find_best_move(&board, &mut state, 4).expect("should find a move");
    assert_eq!(format_uci_move(&best), "h5f7", "expected Qxf7#");
}

/// Mate scores are reported with the mate-distance convention.
#[test]
fn reports_mate_score() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let mut state = SearchState::new();

    let (score, best) = find_best_move_with_time(&board, &mut state, 6, None, None);
    assert_eq!(score, MATE - 1);
    assert!(best.is_some());
}

/// The engine grabs a hanging piece.
#[test]
fn captures_free_piece() {
    // The c6 bishop is undefended
    let board = Board::from_fen(
        "rnbqk1nr/pppp1ppp/2b5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 4",
    );
    let mut state = SearchState::new();

    let best = find_best_move(&board, &mut state, 4).expect("should find a move");
    assert!(
        best.captured.is_some() || format_uci_move(&best) == "c4f7",
        "expected a capture or a direct threat, got {}",
        format_uci_move(&best)
    );
}

/// The engine does not hang its queen for a pawn's worth of play.
#[test]
fn avoids_hanging_queen() {
    let board = Board::from_fen(
        "r1bqkbnr/pppppppp/2n5/8/4P3/5Q2/PPPP1PPP/RNB1KBNR w KQkq - 0 3",
    );
    let mut state = SearchState::new();

    let best = find_best_move(&board, &mut state, 4).expect("should find a move");
    assert_ne!(format_uci_move(&best), "f3c6", "queen must not be hung on c6");
}

/// With no legal moves there is no best move.
#[test]
fn no_move_when_checkmated() {
    let mut board = Board::new();
    for uci in ["e2e4", "e7e5", "d1h5", "b8c6", "f1c4", "g8f6", "h5f7"] {
        board = board.make_move_uci(uci).unwrap();
    }

    let mut state = SearchState::new();
    assert!(find_best_move(&board, &mut state, 4).is_none());
}

/// Deeper searches never lose an already-found mate.
#[test]
fn iterative_deepening_keeps_mate() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let mut state = SearchState::new();

    for depth in [2, 4, 6] {
        let (score, _) = find_best_move_with_time(&board, &mut state, depth, None, None);
        assert_eq!(score, MATE - 1, "mate lost at depth {depth}");
    }
}
