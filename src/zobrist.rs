//! Zobrist keys for incremental position hashing.
//!
//! Keys are generated once from a fixed-seed PRNG so that hashes are
//! reproducible across runs and processes.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ZOBRIST_SEED: u64 = 0x9E3779B97F4A7C15;

/// The full set of Zobrist keys: one per (color, piece, square), one per
/// castling-rights value, one per en-passant square, and a side-to-move key.
pub struct ZobristKeys {
    /// Indexed `[color][piece][square]`
    pub pieces: [[[u64; 64]; 6]; 2],
    /// Indexed by the castling-rights nibble (0..16)
    pub castling: [u64; 16],
    /// Indexed by the en-passant target square
    pub en_passant: [u64; 64],
    pub side_to_move: u64,
}

pub static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
    let mut keys = ZobristKeys {
        pieces: [[[0; 64]; 6]; 2],
        castling: [0; 16],
        en_passant: [0; 64],
        side_to_move: 0,
    };
    for color in &mut keys.pieces {
        for piece in color.iter_mut() {
            for key in piece.iter_mut() {
                *key = rng.gen();
            }
        }
    }
    for key in &mut keys.castling {
        *key = rng.gen();
    }
    for key in &mut keys.en_passant {
        *key = rng.gen();
    }
    keys.side_to_move = rng.gen();
    keys
});
