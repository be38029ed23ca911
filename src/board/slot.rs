//! Slot identity, coordinates and occupancy.

use serde::Serialize;

/// Side length of the square board grid.
pub const BOARD_SIZE: usize = 7;

/// Number of slots in the grid, playable or not.
pub const SLOT_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of slots in the four 2x2 corner blocks outside the cross.
pub const INVALID_SLOT_COUNT: usize = 16;

/// Pegs on a freshly initialized board (every playable slot but the center).
pub const STARTING_PEGS: usize = SLOT_COUNT - INVALID_SLOT_COUNT - 1;

/// The slot left empty by initialization.
pub const CENTER: Coord = Coord::new(3, 3);

/// A grid position, row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if the coordinate lies on the grid.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Check if the coordinate lies on the cross, i.e. its row or its
    /// column is one of the three middle lines.
    #[must_use]
    pub const fn in_cross(self) -> bool {
        self.in_bounds() && (is_middle_line(self.row) || is_middle_line(self.col))
    }
}

const fn is_middle_line(line: usize) -> bool {
    matches!(line, 2..=4)
}

/// Row-major linear index of a slot: `row * BOARD_SIZE + col`.
///
/// Always in `0..SLOT_COUNT`; construction is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// Index of the center slot.
    pub const CENTER: Self = Self(CENTER.row * BOARD_SIZE + CENTER.col);

    /// Create an index, returning `None` outside `0..SLOT_COUNT`.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < SLOT_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Index of a grid position, `None` if either component is off the grid.
    #[must_use]
    pub const fn from_coord(coord: Coord) -> Option<Self> {
        if coord.in_bounds() {
            Some(Self(coord.row * BOARD_SIZE + coord.col))
        } else {
            None
        }
    }

    /// The raw linear index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Row of this slot.
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 / BOARD_SIZE
    }

    /// Column of this slot.
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 % BOARD_SIZE
    }

    /// Grid position of this slot.
    #[must_use]
    pub const fn coord(self) -> Coord {
        Coord::new(self.row(), self.col())
    }

    /// Iterate over every index in row-major order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..SLOT_COUNT).map(SlotIndex)
    }
}

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row(), self.col())
    }
}

/// Peg colors. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PegColor {
    /// Dark red.
    Crimson,
    /// Dark blue.
    Navy,
    /// Yellow.
    Yellow,
    /// Light green.
    Mint,
}

/// The palette pegs are drawn from at initialization.
pub const PALETTE: [PegColor; 4] = [
    PegColor::Crimson,
    PegColor::Navy,
    PegColor::Yellow,
    PegColor::Mint,
];

impl PegColor {
    /// Red, green and blue components.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            PegColor::Crimson => (0xB3, 0x00, 0x00),
            PegColor::Navy => (0x00, 0x00, 0x88),
            PegColor::Yellow => (0xFF, 0xFF, 0x00),
            PegColor::Mint => (0x66, 0xFF, 0x66),
        }
    }

    /// Single-letter tag used by text renderings.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PegColor::Crimson => 'R',
            PegColor::Navy => 'B',
            PegColor::Yellow => 'Y',
            PegColor::Mint => 'G',
        }
    }
}

/// What a slot currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotState {
    /// Outside the cross; never takes part in play.
    Invalid,
    /// Playable, no peg.
    Empty,
    /// Playable, holding a peg.
    Occupied(PegColor),
}

impl SlotState {
    /// Check if the slot is part of the cross.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, SlotState::Invalid)
    }

    /// Check if the slot holds a peg.
    #[must_use]
    pub const fn has_peg(self) -> bool {
        matches!(self, SlotState::Occupied(_))
    }

    /// Color of the peg, if any.
    #[must_use]
    pub const fn color(self) -> Option<PegColor> {
        match self {
            SlotState::Occupied(color) => Some(color),
            SlotState::Invalid | SlotState::Empty => None,
        }
    }
}

/// One cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    index: SlotIndex,
    state: SlotState,
}

impl Slot {
    /// A slot at `index` holding nothing yet.
    pub(crate) const fn blank(index: usize) -> Self {
        Self {
            index: SlotIndex(index),
            state: SlotState::Empty,
        }
    }

    /// Fixed identity of this slot.
    #[must_use]
    pub const fn index(&self) -> SlotIndex {
        self.index
    }

    /// Grid position of this slot.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        self.index.coord()
    }

    /// Current occupancy.
    #[must_use]
    pub const fn state(&self) -> SlotState {
        self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut SlotState {
        &mut self.state
    }
}
