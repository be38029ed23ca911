//! Output formatting utilities for CLI.

use serde::Serialize;
use solit::board::BOARD_SIZE;
use solit::session::{SlotKind, Snapshot};
use solit::{ClickOutcome, Jump};

/// JSON-serializable result of a scripted run.
#[derive(Debug, Serialize)]
pub(super) struct JsonRunReport {
    /// Random seed used.
    pub(super) seed: u64,
    /// What each click did, in order.
    pub(super) clicks: Vec<JsonClick>,
    /// Final state.
    pub(super) board: Snapshot,
}

/// JSON-serializable click outcome.
#[derive(Debug, Serialize)]
pub(super) struct JsonClick {
    /// One of `ignored`, `selected`, `moved`, `rejected`.
    pub(super) outcome: &'static str,
    /// Human-readable description.
    pub(super) detail: String,
    /// The jump, when one happened.
    pub(super) jump: Option<Jump>,
}

impl JsonClick {
    /// Create from a click outcome.
    pub(super) fn from_outcome(outcome: &ClickOutcome) -> Self {
        let (kind, jump) = match outcome {
            ClickOutcome::Ignored => ("ignored", None),
            ClickOutcome::Selected(_) => ("selected", None),
            ClickOutcome::Moved(jump) => ("moved", Some(*jump)),
            ClickOutcome::Rejected { .. } => ("rejected", None),
        };
        Self {
            outcome: kind,
            detail: describe_outcome(outcome),
            jump,
        }
    }
}

/// One-line description of a click outcome.
pub(super) fn describe_outcome(outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Ignored => "no slot there".to_string(),
        ClickOutcome::Selected(slot) => format!("selected {slot}"),
        ClickOutcome::Moved(jump) => format!(
            "jumped {} -> {}, removed {}",
            jump.source, jump.destination, jump.over
        ),
        ClickOutcome::Rejected {
            source,
            destination,
            reason,
        } => format!("cannot jump {source} -> {destination}: {reason}"),
    }
}

/// Format a snapshot as human-readable text.
///
/// Pegs show as their color letter, empty slots as `.`, and the selected
/// slot is bracketed.
pub(super) fn format_board(snapshot: &Snapshot) -> String {
    let mut output = String::new();

    output.push_str(&format!("Killcount : {}\n", snapshot.kill_count));
    output.push_str(&format!("Remaining : {}\n\n", snapshot.remaining));

    for row in snapshot.slots.chunks(BOARD_SIZE) {
        let mut line = String::new();
        for view in row {
            let mark = match (view.state, view.color) {
                (SlotKind::Invalid, _) => ' ',
                (SlotKind::Occupied, Some(color)) => color.letter(),
                (SlotKind::Empty | SlotKind::Occupied, _) => '.',
            };
            if snapshot.selected == Some(view.index) {
                line.push('[');
                line.push(mark);
                line.push(']');
            } else {
                line.push(' ');
                line.push(mark);
                line.push(' ');
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}
