//! Error types for the move engine.

use std::fmt;

/// Why a proposed jump was refused.
///
/// Variants follow the order in which the checks run; the first failing
/// check wins. Refusals are routine (most clicks propose illegal jumps) and
/// never leave the board changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Source and destination are the same slot.
    SameSlot,
    /// The destination lies outside the cross.
    InvalidDestination,
    /// The source holds no peg.
    NoPegAtSource,
    /// The slots are not exactly two apart along a row or column.
    BadDistance {
        /// Distance between the two linear indices.
        distance: usize,
    },
    /// The index distance matches a jump but the move would wrap a row edge.
    NotStraight,
    /// The jumped-over index is off the board.
    JumpedOffBoard,
    /// There is no peg between source and destination.
    NothingToJump,
    /// The destination already holds a peg.
    DestinationOccupied,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::SameSlot => write!(f, "source and destination are the same slot"),
            Rejection::InvalidDestination => write!(f, "destination is outside the board"),
            Rejection::NoPegAtSource => write!(f, "no peg to move"),
            Rejection::BadDistance { distance } => {
                write!(f, "slots are {distance} apart, a jump needs exactly two")
            }
            Rejection::NotStraight => write!(f, "jump must stay in one row or column"),
            Rejection::JumpedOffBoard => write!(f, "jumped-over slot is off the board"),
            Rejection::NothingToJump => write!(f, "no peg to jump over"),
            Rejection::DestinationOccupied => write!(f, "destination is occupied"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Result type for move checks.
pub type MoveResult<T> = Result<T, Rejection>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        assert_eq!(
            Rejection::DestinationOccupied.to_string(),
            "destination is occupied"
        );
        let bad = Rejection::BadDistance { distance: 9 };
        assert!(bad.to_string().contains('9'));
    }
}
