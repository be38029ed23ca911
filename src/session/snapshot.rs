//! Read-only view of a session for front ends.

use serde::Serialize;

use crate::board::{Board, PegColor, Slot, SlotIndex, SlotState};

/// Kind of slot, without the peg color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    /// Outside the cross.
    Invalid,
    /// Playable, no peg.
    Empty,
    /// Holding a peg.
    Occupied,
}

/// One slot as a front end sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotView {
    /// Linear index.
    pub index: SlotIndex,
    /// Row.
    pub row: usize,
    /// Column.
    pub col: usize,
    /// What the slot holds.
    pub state: SlotKind,
    /// Peg color when occupied.
    pub color: Option<PegColor>,
}

impl SlotView {
    fn from_slot(slot: &Slot) -> Self {
        let state = match slot.state() {
            SlotState::Invalid => SlotKind::Invalid,
            SlotState::Empty => SlotKind::Empty,
            SlotState::Occupied(_) => SlotKind::Occupied,
        };
        Self {
            index: slot.index(),
            row: slot.coord().row,
            col: slot.coord().col,
            state,
            color: slot.state().color(),
        }
    }
}

/// Everything there is to draw after an input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Every slot in row-major order.
    pub slots: Vec<SlotView>,
    /// Pegs removed since the last reset.
    pub kill_count: usize,
    /// Pegs left on the board.
    pub remaining: usize,
    /// The pending selection.
    pub selected: Option<SlotIndex>,
}

impl Snapshot {
    pub(crate) fn capture<R>(
        board: &Board<R>,
        selected: Option<SlotIndex>,
        kill_count: usize,
        remaining: usize,
    ) -> Self {
        Self {
            slots: board.iter().map(SlotView::from_slot).collect(),
            kill_count,
            remaining,
            selected,
        }
    }

    /// View of the slot at `index`.
    #[must_use]
    pub fn slot(&self, index: SlotIndex) -> Option<&SlotView> {
        self.slots.get(index.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{INVALID_SLOT_COUNT, SLOT_COUNT, STARTING_PEGS, XorShift64};
    use crate::session::Session;

    #[test]
    fn test_snapshot_covers_every_slot() {
        let session = Session::new(XorShift64::default());
        let snapshot = session.snapshot();

        assert_eq!(snapshot.slots.len(), SLOT_COUNT);
        let invalid = snapshot
            .slots
            .iter()
            .filter(|s| s.state == SlotKind::Invalid)
            .count();
        assert_eq!(invalid, INVALID_SLOT_COUNT);
        assert_eq!(snapshot.remaining, STARTING_PEGS);
        assert_eq!(
            snapshot.slot(SlotIndex::CENTER).map(|s| s.state),
            Some(SlotKind::Empty)
        );
    }

    #[test]
    fn test_color_only_on_occupied_slots() {
        let snapshot = Session::new(XorShift64::new(5)).snapshot();
        for view in &snapshot.slots {
            assert_eq!(view.color.is_some(), view.state == SlotKind::Occupied);
        }
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = Session::new(XorShift64::default());
        session.select_or_move(SlotIndex::new(10));
        let json = serde_json::to_value(session.snapshot()).unwrap();

        assert_eq!(json["kill_count"], 0);
        assert_eq!(json["remaining"], 32);
        assert_eq!(json["selected"], 10);
        assert_eq!(json["slots"][0]["state"], "invalid");
        assert_eq!(json["slots"][24]["state"], "empty");
        assert_eq!(json["slots"][24]["row"], 3);
        assert!(json["slots"][24]["color"].is_null());
    }
}
