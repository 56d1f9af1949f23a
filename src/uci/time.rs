//! Time allocation for the `go` command.

use std::time::Duration;

use super::command::GoParams;

pub const DEFAULT_MOVES_TO_GO: u64 = 40;

/// Compute the time budget for one move.
///
/// `movetime` budgets 95% of the requested time, even alongside
/// `infinite`; otherwise `infinite` is unbudgeted, the side's remaining
/// clock is split over the moves to go plus most of the increment, capped
/// at a third of the remaining time, and with no clock information there
/// is no budget (depth bound only).
#[must_use]
pub fn compute_time_budget(params: &GoParams, white_to_move: bool) -> Option<Duration> {
    if let Some(movetime) = params.movetime {
        return Some(Duration::from_millis(movetime * 95 / 100));
    }

    if params.infinite {
        return None;
    }

    let time_left = (if white_to_move {
        params.wtime
    } else {
        params.btime
    })?;
    let inc = (if white_to_move {
        params.winc
    } else {
        params.binc
    })
    .unwrap_or(0);

    let moves_to_go = params.movestogo.unwrap_or(DEFAULT_MOVES_TO_GO).max(1);
    let allocated = time_left / moves_to_go + inc * 8 / 10;
    Some(Duration::from_millis(allocated.min(time_left / 3)))
}
