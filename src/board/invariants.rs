//! Board invariants - sanity checks that detect bugs.
//!
//! No sequence of jumps or resets can break these. If they trigger, the
//! engine mutated something it should not have.

use crate::board::{Board, STARTING_PEGS, SlotState};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants<R>(board: &Board<R>) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for (position, slot) in board.iter().enumerate() {
        if slot.index().get() != position {
            violations.push(InvariantViolation {
                message: format!(
                    "Slot stored at {position} claims index {}",
                    slot.index().get()
                ),
            });
        }

        // Validity is fixed by shape alone
        let coord = slot.coord();
        let invalid = slot.state() == SlotState::Invalid;
        if invalid == coord.in_cross() {
            violations.push(InvariantViolation {
                message: format!(
                    "Slot at {coord:?} is {:?} but in_cross is {}",
                    slot.state(),
                    coord.in_cross()
                ),
            });
        }
    }

    // Jumps only ever remove pegs
    let pegs = board.occupied_count();
    if pegs > STARTING_PEGS {
        violations.push(InvariantViolation {
            message: format!("Board holds {pegs} pegs > starting {STARTING_PEGS}"),
        });
    }

    violations
}

/// Assert all board invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants<R>(board: &Board<R>) {
    let violations = check_invariants(board);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Board invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants<R>(_board: &Board<R>) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PegColor, SlotIndex, XorShift64};

    #[test]
    fn test_fresh_board_passes() {
        let board = Board::new(XorShift64::default());
        assert!(check_invariants(&board).is_empty());
    }

    #[test]
    fn test_peg_on_corner_detected() {
        let mut board = Board::new(XorShift64::default());
        *board.state_mut(SlotIndex::new(0).unwrap()) = SlotState::Occupied(PegColor::Navy);

        let violations = check_invariants(&board);
        assert_eq!(violations.len(), 2, "{violations:?}");
        assert!(violations[0].message.contains("in_cross"));
        assert!(violations[1].message.contains("pegs"));
    }

    #[test]
    fn test_invalidated_cross_slot_detected() {
        let mut board = Board::new(XorShift64::default());
        *board.state_mut(SlotIndex::CENTER) = SlotState::Invalid;

        let violations = check_invariants(&board);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Invalid"));
    }

    #[test]
    fn test_emptied_board_passes() {
        // Fewer pegs is always fine
        let mut board = Board::new(XorShift64::default());
        for index in SlotIndex::all() {
            if board.slot(index).state().has_peg() {
                *board.state_mut(index) = SlotState::Empty;
            }
        }
        assert!(check_invariants(&board).is_empty());
    }

    #[test]
    #[should_panic(expected = "Board invariant violations")]
    #[cfg(debug_assertions)]
    fn test_assert_invariants_panics() {
        let mut board = Board::new(XorShift64::default());
        *board.state_mut(SlotIndex::new(48).unwrap()) = SlotState::Empty;
        assert_invariants(&board);
    }
}
