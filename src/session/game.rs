//! One live game: a board, the pending selection and the kill counter.

use log::{debug, info};

use crate::board::{
    Board, RandomSource, STARTING_PEGS, SlotIndex, XorShift64, assert_invariants,
};
use crate::engine::{Jump, perform_move};
use crate::error::Rejection;
use crate::session::{SessionConfig, Snapshot};

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click hit no slot; nothing changed.
    Ignored,
    /// The slot became the pending selection.
    Selected(SlotIndex),
    /// The selected peg jumped to the clicked slot.
    Moved(Jump),
    /// The jump was refused; the selection was dropped.
    Rejected {
        /// The slot that was selected.
        source: SlotIndex,
        /// The slot that was clicked.
        destination: SlotIndex,
        /// Why the jump was refused.
        reason: Rejection,
    },
}

/// A game in progress.
///
/// Clicks alternate between two states: with nothing selected, a click
/// selects; with a slot selected, a click attempts a jump from it and
/// clears the selection whatever the result.
#[derive(Debug, Clone)]
pub struct Session<R = XorShift64> {
    board: Board<R>,
    /// Pending source slot. An index, so it survives resets unchanged.
    selected: Option<SlotIndex>,
    /// Pegs removed since the last reset.
    kill_count: usize,
}

impl Session<XorShift64> {
    /// Start a game seeded from `config`.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(XorShift64::new(config.seed))
    }
}

impl<R: RandomSource> Session<R> {
    /// Start a game whose board draws colors from `rng`.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            board: Board::new(rng),
            selected: None,
            kill_count: 0,
        }
    }

    /// Start over: fresh board, no selection, no kills.
    pub fn reset(&mut self) {
        self.board.initialize();
        self.selected = None;
        self.kill_count = 0;
        assert_invariants(&self.board);
        info!("board reset");
    }
}

impl<R> Session<R> {
    /// Handle a click that resolved to `slot`, or to nothing.
    pub fn select_or_move(&mut self, slot: Option<SlotIndex>) -> ClickOutcome {
        let Some(slot) = slot else {
            return ClickOutcome::Ignored;
        };

        let Some(source) = self.selected.take() else {
            debug!("selected {slot}");
            self.selected = Some(slot);
            return ClickOutcome::Selected(slot);
        };

        match perform_move(&mut self.board, source, slot) {
            Ok(jump) => {
                self.kill_count += 1;
                assert_invariants(&self.board);
                debug!(
                    "jumped {} -> {} over {}, kills {}",
                    jump.source, jump.destination, jump.over, self.kill_count
                );
                ClickOutcome::Moved(jump)
            }
            Err(reason) => ClickOutcome::Rejected {
                source,
                destination: slot,
                reason,
            },
        }
    }

    /// The board.
    #[must_use]
    pub const fn board(&self) -> &Board<R> {
        &self.board
    }

    /// The pending selection, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<SlotIndex> {
        self.selected
    }

    /// Pegs removed since the last reset.
    #[must_use]
    pub const fn kill_count(&self) -> usize {
        self.kill_count
    }

    /// Pegs left on the board, counted from the kills.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        STARTING_PEGS.saturating_sub(self.kill_count)
    }

    /// Read-only view of everything a front end draws.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.board, self.selected, self.kill_count, self.remaining())
    }
}
