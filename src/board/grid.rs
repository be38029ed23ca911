//! The board: a fixed 7x7 grid of slots.

use crate::board::{
    Coord, PALETTE, RandomSource, SLOT_COUNT, Slot, SlotIndex, SlotState, XorShift64,
};
use crate::layout::{Layout, Point};

/// The game board.
///
/// Owns every slot and the random source used to color pegs. Slots are
/// created once; only their states change afterwards.
#[derive(Debug, Clone)]
pub struct Board<R = XorShift64> {
    /// Slots stored in row-major order.
    slots: [Slot; SLOT_COUNT],
    /// Source for peg colors, drawn from on every initialization.
    rng: R,
}

impl<R: RandomSource> Board<R> {
    /// Create a board drawing its colors from `rng`, initialized for play.
    #[must_use]
    pub fn new(rng: R) -> Self {
        let mut board = Self {
            slots: std::array::from_fn(Slot::blank),
            rng,
        };
        board.initialize();
        board
    }

    /// Put the board in its starting position.
    ///
    /// Slots outside the cross become `Invalid`, the center becomes `Empty`
    /// and every other slot gets a peg with a color from the palette.
    pub fn initialize(&mut self) {
        for slot in &mut self.slots {
            let state = if slot.index() == SlotIndex::CENTER {
                SlotState::Empty
            } else if slot.coord().in_cross() {
                SlotState::Occupied(PALETTE[self.rng.next_below(PALETTE.len())])
            } else {
                SlotState::Invalid
            };
            *slot.state_mut() = state;
        }
    }
}

impl<R> Board<R> {
    /// Get the slot at a grid position, `None` off the grid.
    #[must_use]
    pub fn slot_at(&self, row: usize, col: usize) -> Option<&Slot> {
        SlotIndex::from_coord(Coord::new(row, col)).map(|index| self.slot(index))
    }

    /// Get the slot at a raw linear index, `None` outside `0..SLOT_COUNT`.
    #[must_use]
    pub fn slot_by_index(&self, index: usize) -> Option<&Slot> {
        SlotIndex::new(index).map(|index| self.slot(index))
    }

    /// Get the slot at a checked index.
    #[must_use]
    #[inline]
    pub fn slot(&self, index: SlotIndex) -> &Slot {
        &self.slots[index.get()]
    }

    /// Get the playable slot whose on-screen bounds under `layout` contain
    /// `point`. Slots outside the cross have no bounds and never match.
    #[must_use]
    pub fn slot_at_point(&self, layout: &Layout, point: Point) -> Option<&Slot> {
        self.slots
            .iter()
            .filter(|slot| slot.state().is_playable())
            .find(|slot| layout.slot_rect(slot.index()).contains(point))
    }

    /// All slots in row-major order.
    #[must_use]
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Iterate over all slots in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Copy of every slot state, for comparing whole boards.
    #[must_use]
    pub fn states(&self) -> [SlotState; SLOT_COUNT] {
        std::array::from_fn(|i| self.slots[i].state())
    }

    /// Number of slots holding a peg.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.count_where(SlotState::has_peg)
    }

    /// Number of playable slots without a peg.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.count_where(|state| state == SlotState::Empty)
    }

    /// Number of slots outside the cross.
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.count_where(|state| state == SlotState::Invalid)
    }

    fn count_where(&self, predicate: impl Fn(SlotState) -> bool) -> usize {
        self.slots.iter().filter(|slot| predicate(slot.state())).count()
    }

    pub(crate) fn state_mut(&mut self, index: SlotIndex) -> &mut SlotState {
        self.slots[index.get()].state_mut()
    }
}

impl<'a, R> IntoIterator for &'a Board<R> {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CENTER, INVALID_SLOT_COUNT, PegColor, STARTING_PEGS};

    /// Cycles through a fixed list of values.
    #[derive(Debug, Clone)]
    struct FixedSource {
        values: Vec<u64>,
        next: usize,
    }

    impl RandomSource for FixedSource {
        fn next_u64(&mut self) -> u64 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value
        }
    }

    #[test]
    fn test_corner_exclusion() {
        let board = Board::new(XorShift64::default());
        for slot in board.iter() {
            let coord = slot.coord();
            let outside = !(2..5).contains(&coord.row) && !(2..5).contains(&coord.col);
            assert_eq!(slot.state() == SlotState::Invalid, outside, "slot {coord:?}");
        }
        assert_eq!(board.invalid_count(), INVALID_SLOT_COUNT);
    }

    #[test]
    fn test_single_empty_center() {
        let board = Board::new(XorShift64::new(99));
        assert_eq!(board.empty_count(), 1);
        assert_eq!(board.slot(SlotIndex::CENTER).state(), SlotState::Empty);
        assert_eq!(board.occupied_count(), STARTING_PEGS);
    }

    #[test]
    fn test_colors_follow_the_source() {
        let board = Board::new(FixedSource {
            values: vec![1],
            next: 0,
        });
        for slot in board.iter().filter(|s| s.state().has_peg()) {
            assert_eq!(slot.state(), SlotState::Occupied(PegColor::Navy));
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = Board::new(XorShift64::new(42));
        let b = Board::new(XorShift64::new(42));
        assert_eq!(a.states(), b.states());
    }

    #[test]
    fn test_initialize_rerolls_colors() {
        let mut board = Board::new(XorShift64::new(42));
        let first = board.states();
        board.initialize();
        assert_ne!(first, board.states());
        assert_eq!(board.occupied_count(), STARTING_PEGS);
    }

    #[test]
    fn test_initialize_restores_layout_after_play() {
        let mut board = Board::new(XorShift64::default());
        *board.state_mut(SlotIndex::new(10).unwrap()) = SlotState::Empty;
        *board.state_mut(SlotIndex::CENTER) = SlotState::Occupied(PegColor::Mint);
        board.initialize();
        assert_eq!(board.empty_count(), 1);
        assert_eq!(board.slot(SlotIndex::CENTER).state(), SlotState::Empty);
    }

    #[test]
    fn test_slot_at_bounds() {
        let board = Board::new(XorShift64::default());
        assert_eq!(board.slot_at(3, 3).unwrap().coord(), CENTER);
        assert!(board.slot_at(7, 3).is_none());
        assert!(board.slot_at(3, 7).is_none());
        assert!(board.slot_at(usize::MAX, 0).is_none());
    }

    #[test]
    fn test_slot_by_index_bounds() {
        let board = Board::new(XorShift64::default());
        assert_eq!(board.slot_by_index(0).unwrap().index().get(), 0);
        assert_eq!(board.slot_by_index(48).unwrap().coord(), Coord::new(6, 6));
        assert!(board.slot_by_index(49).is_none());
    }

    #[test]
    fn test_slot_at_point() {
        let board = Board::new(XorShift64::default());
        let layout = Layout::pixels();

        // Inside the center slot's square
        let hit = board.slot_at_point(&layout, Point::new(200 + 3 * 50 + 10, 200 + 3 * 50 + 10));
        assert_eq!(hit.map(Slot::index), Some(SlotIndex::CENTER));

        // In the gap between two slots
        assert!(board.slot_at_point(&layout, Point::new(200 + 47, 200 + 3 * 50)).is_none());

        // Over a corner block
        assert!(board.slot_at_point(&layout, Point::new(205, 205)).is_none());

        // Off the board
        assert!(board.slot_at_point(&layout, Point::new(10, 10)).is_none());
    }
}
