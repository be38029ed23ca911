//! Jump legality and the board transition it performs.

use log::trace;
use serde::Serialize;

use crate::board::{Board, PegColor, SlotIndex, SlotState};
use crate::engine::jump_geometry;
use crate::error::{MoveResult, Rejection};

/// A legal jump, as found by [`check_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Jump {
    /// Slot the peg leaves.
    pub source: SlotIndex,
    /// Slot whose peg is removed.
    pub over: SlotIndex,
    /// Slot the peg lands on.
    pub destination: SlotIndex,
    /// Color of the moving peg.
    pub color: PegColor,
}

/// Check whether moving the peg at `source` to `destination` is a legal jump.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. source and destination differ
/// 2. the destination is playable
/// 3. the source holds a peg
/// 4. to 6. the geometry is a straight two-step jump (see [`jump_geometry`])
/// 7. the jumped-over slot holds a peg
/// 8. the destination is empty
///
/// Never changes the board.
///
/// # Errors
///
/// Returns the [`Rejection`] for the first failing check.
pub fn check_move<R>(
    board: &Board<R>,
    source: SlotIndex,
    destination: SlotIndex,
) -> MoveResult<Jump> {
    if source == destination {
        return Err(Rejection::SameSlot);
    }

    let landing = board.slot(destination).state();
    if landing == SlotState::Invalid {
        return Err(Rejection::InvalidDestination);
    }

    let SlotState::Occupied(color) = board.slot(source).state() else {
        return Err(Rejection::NoPegAtSource);
    };

    let over = jump_geometry(source, destination)?;

    if !board.slot(over).state().has_peg() {
        return Err(Rejection::NothingToJump);
    }

    if landing != SlotState::Empty {
        return Err(Rejection::DestinationOccupied);
    }

    Ok(Jump {
        source,
        over,
        destination,
        color,
    })
}

/// Check a jump and, if it is legal, perform it.
///
/// On success the jumped-over peg is removed and the moving peg lands on
/// the destination with its color. On failure nothing changes.
///
/// # Errors
///
/// Returns the [`Rejection`] from [`check_move`].
pub fn perform_move<R>(
    board: &mut Board<R>,
    source: SlotIndex,
    destination: SlotIndex,
) -> MoveResult<Jump> {
    let jump = check_move(board, source, destination).inspect_err(|rejection| {
        trace!("jump {source} -> {destination} refused: {rejection}");
    })?;

    *board.state_mut(jump.over) = SlotState::Empty;
    *board.state_mut(jump.destination) = SlotState::Occupied(jump.color);
    *board.state_mut(jump.source) = SlotState::Empty;

    Ok(jump)
}

/// Try one jump from `source` to `destination`.
///
/// Returns whether the jump happened; a `false` leaves the board untouched.
pub fn try_move<R>(board: &mut Board<R>, source: SlotIndex, destination: SlotIndex) -> bool {
    perform_move(board, source, destination).is_ok()
}
