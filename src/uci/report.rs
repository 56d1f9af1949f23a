//! UCI output formatting.

use crate::board::{Move, SearchIterationInfo};

pub fn print_ready() {
    println!("readyok");
}

/// Print the per-iteration info line.
pub fn print_info(info: &SearchIterationInfo) {
    if let Some(mate_in) = info.mate_in {
        println!(
            "info depth {} score mate {} nodes {} nps {} pv {}",
            info.depth, mate_in, info.nodes, info.nps, info.pv
        );
    } else {
        println!(
            "info depth {} score cp {} nodes {} nps {} pv {}",
            info.depth, info.score, info.nodes, info.nps, info.pv
        );
    }
}

/// Print the final best move; `0000` stands for "no legal move".
pub fn print_bestmove(best_move: Option<Move>) {
    match best_move {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove 0000"),
    }
}
