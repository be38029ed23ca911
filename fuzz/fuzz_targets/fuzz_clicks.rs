#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use solit::board::{STARTING_PEGS, check_invariants};
use solit::{ClickOutcome, Session, SlotIndex, XorShift64};

/// One player input.
#[derive(Arbitrary, Debug)]
enum Input {
    /// Click a slot by raw index (out-of-range means beside the board).
    Click(u8),
    /// Start a new game.
    Reset,
}

/// Structured input for click-stream fuzzing.
#[derive(Arbitrary, Debug)]
struct ClickInput {
    /// Seed for peg colors.
    seed: u64,
    /// Inputs in order.
    inputs: Vec<Input>,
}

fuzz_target!(|input: ClickInput| {
    let mut session = Session::new(XorShift64::new(input.seed));

    // Cap inputs to keep runs short
    for step in input.inputs.iter().take(512) {
        let kills = session.kill_count();
        match step {
            Input::Click(raw) => {
                let outcome = session.select_or_move(SlotIndex::new(usize::from(*raw)));
                if let ClickOutcome::Moved(jump) = outcome {
                    assert_eq!(session.kill_count(), kills + 1);
                    assert!(!session.board().slot(jump.over).state().has_peg());
                    assert!(session.board().slot(jump.destination).state().has_peg());
                } else {
                    assert_eq!(session.kill_count(), kills);
                }
            }
            Input::Reset => {
                session.reset();
                assert_eq!(session.kill_count(), 0);
                assert_eq!(session.selected(), None);
            }
        }

        let violations = check_invariants(session.board());
        assert!(violations.is_empty(), "invariants broken: {violations:?}");
        assert_eq!(
            session.kill_count() + session.board().occupied_count(),
            STARTING_PEGS
        );
    }
});
