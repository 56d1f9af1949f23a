//! UCI entry point: a single-threaded command loop. `go` blocks until the
//! search finishes and `bestmove` is emitted.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use nanochess::board::{find_best_move_with_time, Board, SearchState};
use nanochess::uci::command::{parse_go_params, parse_setoption, parse_uci_command, UciCommand};
use nanochess::uci::options::{UciOptions, MAX_DEPTH, MIN_DEPTH};
use nanochess::uci::time::compute_time_budget;
use nanochess::uci::{parse_position_command, report};

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut board = Board::new();
    let mut state = SearchState::new();
    let mut options = UciOptions::new();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(cmd) = parse_uci_command(&line) else {
            continue;
        };

        match cmd {
            UciCommand::Uci => {
                options.print();
            }
            UciCommand::IsReady => {
                report::print_ready();
            }
            UciCommand::UciNewGame => {
                board = Board::new();
                state.new_game();
            }
            UciCommand::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                if let Some((name, value)) = parse_setoption(&parts) {
                    options.apply_setoption(&name, value.as_deref());
                }
            }
            UciCommand::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                parse_position_command(&mut board, &parts);
            }
            UciCommand::Go(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let params = parse_go_params(&parts);

                let depth = params
                    .depth
                    .map_or(options.depth, |d| d.clamp(MIN_DEPTH, MAX_DEPTH));
                let budget = compute_time_budget(&params, board.white_to_move());

                let (_, best) = find_best_move_with_time(
                    &board,
                    &mut state,
                    depth,
                    budget,
                    Some(Arc::new(|info| report::print_info(info))),
                );

                // Fall back to the first legal move if the search produced
                // nothing, and to 0000 when there is no legal move at all
                let best = best.or_else(|| board.generate_moves().first());
                report::print_bestmove(best);
            }
            UciCommand::Quit => break,
            UciCommand::Unknown(_) => {}
        }

        let _ = stdout.flush();
    }
}
