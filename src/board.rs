//! Board layer for Solit.
//!
//! The data model of the game:
//! - Slots with fixed identity on a 7x7 grid
//! - The cross shape (four 2x2 corner blocks are never playable)
//! - Peg colors drawn from an injected random source
//! - Invariant checks over the whole board

mod grid;
mod invariants;
mod rng;
mod slot;

pub use grid::Board;
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use rng::{DEFAULT_SEED, RandomSource, XorShift64};
pub use slot::{
    BOARD_SIZE, CENTER, Coord, INVALID_SLOT_COUNT, PALETTE, PegColor, SLOT_COUNT, STARTING_PEGS,
    Slot, SlotIndex, SlotState,
};
