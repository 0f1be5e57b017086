//! Random tile spawner.

use crate::board::Board;
use crate::rng::RngSource;

/// Weight denominator for the spawn value roll: one roll in ten is a "4".
const FOUR_TILE_ODDS: u32 = 10;

/// Spawns a tile on a uniformly chosen empty cell.
///
/// The new tile holds exponent `1` (a "2") with 90% probability and exponent
/// `2` (a "4") with 10% probability. Returns the flat index of the spawned
/// cell, or `None` when the board is full. Never overwrites an occupied cell.
///
/// Callers are expected not to invoke this on a full board; the engine's
/// loss detection fires before that state can persist.
pub fn spawn_random_tile(board: &mut Board, rng: &mut dyn RngSource) -> Option<usize> {
    let empty = board.empty_count();
    if empty == 0 {
        return None;
    }

    let pick = rng.next_u32() as usize % empty;
    let index = board.empty_indices().nth(pick)?;

    let exponent = if rng.next_u32() % FOUR_TILE_ODDS == 0 {
        2
    } else {
        1
    };
    board.set_index(index, exponent);

    Some(index)
}
