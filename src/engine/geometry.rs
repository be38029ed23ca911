//! Jump geometry on row-major linear indices.
//!
//! A jump covers exactly 2 horizontally or `2 * BOARD_SIZE` vertically.
//! Distance alone lets a 2-step jump wrap from the end of one row to the
//! start of the next, so the row and column changes are checked as well:
//! exactly one of them may be nonzero.

use crate::board::{BOARD_SIZE, SlotIndex};
use crate::error::{MoveResult, Rejection};

/// Horizontal jump distance.
pub const HORIZONTAL_JUMP: usize = 2;

/// Vertical jump distance.
pub const VERTICAL_JUMP: usize = 2 * BOARD_SIZE;

/// Find the slot jumped over by a move from `source` to `destination`.
///
/// Looks at positions only, never at board state.
///
/// # Errors
///
/// Returns the [`Rejection`] for the first geometric check that fails.
pub fn jump_geometry(source: SlotIndex, destination: SlotIndex) -> MoveResult<SlotIndex> {
    let distance = source.get().abs_diff(destination.get());
    if distance != HORIZONTAL_JUMP && distance != VERTICAL_JUMP {
        return Err(Rejection::BadDistance { distance });
    }

    let row_changed = source.row() != destination.row();
    let col_changed = distance % BOARD_SIZE != 0;
    if row_changed == col_changed {
        return Err(Rejection::NotStraight);
    }

    let over = source.get().min(destination.get()) + distance / 2;
    SlotIndex::new(over).ok_or(Rejection::JumpedOffBoard)
}
