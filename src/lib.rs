// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Solit: peg solitaire on the 7x7 cross board.
//!
//! Pegs fill the cross except for the center slot. A peg moves by jumping
//! over a neighbouring peg, in a straight line, into an empty slot two
//! steps away; the jumped peg is removed.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Front end (terminal UI, CLI)      │
//! ├─────────────────────────────────────┤
//! │   Session (selection, kill count)   │
//! ├─────────────────────────────────────┤
//! │   Engine (jump legality + effect)   │
//! ├─────────────────────────────────────┤
//! │   Board (slots, cross shape)        │
//! └─────────────────────────────────────┘
//! ```
//!
//! Everything below the front end is synchronous and single-threaded;
//! front ends poll [`Session::snapshot`] after each input.

pub mod board;
pub mod engine;
pub mod error;
pub mod layout;
pub mod session;

pub use error::{MoveResult, Rejection};

// Re-export key types at crate root for convenience
pub use board::{Board, Coord, PegColor, RandomSource, Slot, SlotIndex, SlotState, XorShift64};
pub use engine::{Jump, check_move, try_move};
pub use layout::{Layout, Point};
pub use session::{ClickOutcome, Session, SessionConfig, Snapshot};
