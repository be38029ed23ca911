//! Property-based tests for the move engine and session.
//!
//! Random click streams drive the session the way a player would, and the
//! board is checked for consistency after every click.
//! Run with: cargo test --release prop_engine

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use solit::board::{INVALID_SLOT_COUNT, SLOT_COUNT, STARTING_PEGS, check_invariants};
use solit::{ClickOutcome, Session, SlotIndex, SlotState, XorShift64, check_move, try_move};

/// A click on a slot index, or beside the board.
fn click() -> impl Strategy<Value = Option<usize>> {
    prop_oneof![
        1 => Just(None),
        9 => (0..SLOT_COUNT).prop_map(Some),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Any click stream keeps the board consistent and the counters in step.
    #[test]
    fn prop_clicks_keep_invariants(
        seed in any::<u64>(),
        clicks in prop::collection::vec(click(), 0..200)
    ) {
        let mut session = Session::new(XorShift64::new(seed));

        for click in clicks {
            let slot = click.and_then(SlotIndex::new);
            session.select_or_move(slot);

            prop_assert!(check_invariants(session.board()).is_empty());
            prop_assert_eq!(session.board().invalid_count(), INVALID_SLOT_COUNT);
            prop_assert_eq!(
                session.kill_count() + session.board().occupied_count(),
                STARTING_PEGS
            );
            prop_assert_eq!(session.remaining(), session.board().occupied_count());
        }
    }

    /// A jump removes exactly one peg and moves the jumper's color.
    #[test]
    fn prop_successful_move_removes_one_peg(
        seed in any::<u64>(),
        source in 0..SLOT_COUNT,
        destination in 0..SLOT_COUNT
    ) {
        let session = Session::new(XorShift64::new(seed));
        let mut board = session.board().clone();
        let source = SlotIndex::new(source).unwrap();
        let destination = SlotIndex::new(destination).unwrap();
        let before = board.occupied_count();
        let color = board.slot(source).state().color();

        if try_move(&mut board, source, destination) {
            prop_assert_eq!(board.occupied_count(), before - 1);
            prop_assert_eq!(board.invalid_count(), INVALID_SLOT_COUNT);
            prop_assert_eq!(board.slot(source).state(), SlotState::Empty);
            prop_assert_eq!(board.slot(destination).state().color(), color);
        }
    }

    /// A rejected move leaves every slot exactly as it was.
    #[test]
    fn prop_rejected_move_changes_nothing(
        seed in any::<u64>(),
        warmup in prop::collection::vec(click(), 0..60),
        source in 0..SLOT_COUNT,
        destination in 0..SLOT_COUNT
    ) {
        let mut session = Session::new(XorShift64::new(seed));
        for click in warmup {
            session.select_or_move(click.and_then(SlotIndex::new));
        }

        let mut board = session.board().clone();
        let source = SlotIndex::new(source).unwrap();
        let destination = SlotIndex::new(destination).unwrap();
        let legal = check_move(&board, source, destination).is_ok();

        prop_assert_eq!(try_move(&mut board, source, destination), legal);
        if !legal {
            prop_assert_eq!(board.states(), session.board().states());
        }
    }

    /// Rejected clicks never move the kill count, and always drop the selection.
    #[test]
    fn prop_rejection_clears_selection(
        seed in any::<u64>(),
        clicks in prop::collection::vec(click(), 0..100)
    ) {
        let mut session = Session::new(XorShift64::new(seed));

        for click in clicks {
            let kills = session.kill_count();
            match session.select_or_move(click.and_then(SlotIndex::new)) {
                ClickOutcome::Rejected { .. } => {
                    prop_assert_eq!(session.kill_count(), kills);
                    prop_assert_eq!(session.selected(), None);
                }
                ClickOutcome::Moved(_) => {
                    prop_assert_eq!(session.kill_count(), kills + 1);
                    prop_assert_eq!(session.selected(), None);
                }
                ClickOutcome::Selected(slot) => {
                    prop_assert_eq!(session.selected(), Some(slot));
                }
                ClickOutcome::Ignored => {}
            }
        }
    }

    /// Reset always returns to a full board, whatever came before.
    #[test]
    fn prop_reset_restores_full_board(
        seed in any::<u64>(),
        clicks in prop::collection::vec(click(), 0..100)
    ) {
        let mut session = Session::new(XorShift64::new(seed));
        for click in clicks {
            session.select_or_move(click.and_then(SlotIndex::new));
        }

        session.reset();

        prop_assert_eq!(session.kill_count(), 0);
        prop_assert_eq!(session.selected(), None);
        prop_assert_eq!(session.remaining(), STARTING_PEGS);
        prop_assert_eq!(session.board().occupied_count(), STARTING_PEGS);
        prop_assert_eq!(session.board().empty_count(), 1);
        prop_assert_eq!(session.board().slot(SlotIndex::CENTER).state(), SlotState::Empty);
    }
}
