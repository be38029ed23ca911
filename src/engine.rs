//! Move engine for Solit.
//!
//! Pure functions over a [`Board`](crate::board::Board):
//! - Jump geometry on linear indices, independent of board state
//! - Legality checks in a fixed order
//! - The single mutating transition of a legal jump

mod geometry;
mod moves;

pub use geometry::{HORIZONTAL_JUMP, VERTICAL_JUMP, jump_geometry};
pub use moves::{Jump, check_move, perform_move, try_move};
