//! Session layer for Solit.
//!
//! Glues the board and the move engine to a front end:
//! - Two-click selection (select a peg, then click where it should land)
//! - Kill counter and remaining-peg count
//! - A serializable snapshot of everything there is to draw

mod config;
mod game;
mod snapshot;

pub use config::SessionConfig;
pub use game::{ClickOutcome, Session};
pub use snapshot::{SlotKind, SlotView, Snapshot};
