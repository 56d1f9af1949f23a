//! Make-move tests: hash incrementality, occupancy consistency and the
//! special moves (castling, en passant, promotion).

use crate::board::{Board, Color, Piece, Square};

fn play(board: &Board, moves: &[&str]) -> Board {
    let mut board = board.clone();
    for uci in moves {
        board = board.make_move_uci(uci).unwrap_or_else(|e| {
            panic!("move {uci} failed: {e}");
        });
    }
    board
}

fn assert_consistent(board: &Board) {
    // Incremental hash equals the from-scratch hash
    assert_eq!(board.hash(), board.calculate_initial_hash());

    // Color occupancies are disjoint and union to the combined mask
    assert_eq!(board.occupied[0].0 & board.occupied[1].0, 0);
    assert_eq!(
        board.occupied[0].0 | board.occupied[1].0,
        board.all_occupied.0
    );

    // At most one piece kind per square and color
    for c_idx in 0..2 {
        for a in 0..6 {
            for b in (a + 1)..6 {
                assert_eq!(
                    board.pieces[c_idx][a].0 & board.pieces[c_idx][b].0,
                    0,
                    "piece kinds {a} and {b} overlap for color {c_idx}"
                );
            }
        }
    }
}

#[test]
fn test_hash_consistency_over_opening_moves() {
    let mut board = Board::new();
    assert_consistent(&board);

    for uci in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"] {
        board = board.make_move_uci(uci).unwrap();
        assert_consistent(&board);
    }
}

#[test]
fn test_copy_make_leaves_parent_untouched() {
    let board = Board::new();
    let hash_before = board.hash();
    let mv = board.parse_move("e2e4").unwrap();

    let child = board.make_move(&mv);

    assert_eq!(board.hash(), hash_before);
    assert!(board.white_to_move());
    assert!(!child.white_to_move());
    assert_ne!(child.hash(), hash_before);
}

#[test]
fn test_double_push_sets_en_passant_target() {
    let board = play(&Board::new(), &["e2e4"]);
    assert_eq!(board.en_passant_target(), Some(Square::new(2, 4))); // e3
    assert_consistent(&board);

    // A quiet reply clears it
    let board = play(&board, &["g8f6"]);
    assert_eq!(board.en_passant_target(), None);
    assert_consistent(&board);
}

#[test]
fn test_en_passant_capture_removes_pawn() {
    // After e4 a6 e5 d5, exd6 must be legal and remove the d5 pawn
    let board = play(&Board::new(), &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(board.en_passant_target(), Some(Square::new(5, 3))); // d6

    let board = play(&board, &["e5d6"]);
    assert_eq!(board.piece_on(Square::new(4, 3)), None); // d5 pawn gone
    assert_eq!(board.piece_on(Square::new(5, 3)), Some(Piece::Pawn)); // pawn on d6
    assert_eq!(board.en_passant_target(), None);
    assert_consistent(&board);
}

#[test]
fn test_promotion_places_queen() {
    let board = Board::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1");
    let board = play(&board, &["a7a8q"]);

    assert_eq!(board.piece_on(Square::new(7, 0)), Some(Piece::Queen));
    assert!(board.pieces[Color::White.index()][Piece::Pawn.index()].is_empty());
    assert_consistent(&board);
}

#[test]
fn test_kingside_castling_moves_rook() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let board = play(&board, &["e1g1"]);

    assert_eq!(board.piece_on(Square::new(0, 6)), Some(Piece::King)); // g1
    assert_eq!(board.piece_on(Square::new(0, 5)), Some(Piece::Rook)); // f1
    assert_eq!(board.piece_on(Square::new(0, 4)), None);
    assert_eq!(board.piece_on(Square::new(0, 7)), None);
    assert_eq!(board.castling_rights() & 0b0011, 0); // white rights gone
    assert_consistent(&board);
}

#[test]
fn test_queenside_castling_moves_rook() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let board = play(&board, &["e8c8"]);

    assert_eq!(board.piece_on(Square::new(7, 2)), Some(Piece::King)); // c8
    assert_eq!(board.piece_on(Square::new(7, 3)), Some(Piece::Rook)); // d8
    assert_eq!(board.castling_rights() & 0b1100, 0); // black rights gone
    assert_consistent(&board);
}

#[test]
fn test_rook_move_clears_one_right() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let board = play(&board, &["h1g1"]);
    // White kingside right gone, queenside kept
    assert_eq!(board.castling_rights() & 0b0001, 0);
    assert_ne!(board.castling_rights() & 0b0010, 0);
    assert_consistent(&board);
}

#[test]
fn test_rook_capture_clears_opponent_right() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let board = play(&board, &["a1a8"]);
    // Black queenside right cleared by the capture on a8
    assert_eq!(board.castling_rights() & 0b1000, 0);
    assert_ne!(board.castling_rights() & 0b0100, 0);
    assert_consistent(&board);
}

#[test]
fn test_capture_updates_bitboards() {
    let board = play(&Board::new(), &["e2e4", "d7d5", "e4d5"]);
    assert_eq!(board.piece_on(Square::new(4, 3)), Some(Piece::Pawn)); // white pawn on d5
    assert_eq!(
        board.pieces[Color::Black.index()][Piece::Pawn.index()].popcount(),
        7
    );
    assert_consistent(&board);
}

#[test]
fn test_null_move_flips_side_and_clears_ep() {
    let board = play(&Board::new(), &["e2e4"]);
    let null = board.make_null_move();

    assert!(null.white_to_move());
    assert_eq!(null.en_passant_target(), None);
    // The hash reflects both the side flip and the cleared ep square
    assert_eq!(null.hash(), null.calculate_initial_hash());
    assert_ne!(null.hash(), board.hash());
}
