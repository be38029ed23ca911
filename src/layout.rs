//! On-screen geometry of the board.
//!
//! The engine never looks at this; it exists so a front end can turn a
//! pointer position back into a slot (see [`Board::slot_at_point`]).
//!
//! [`Board::slot_at_point`]: crate::board::Board::slot_at_point

// Grid rows and columns are below BOARD_SIZE and zoom is clamped
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use crate::board::SlotIndex;

/// Smallest zoom level, in percent.
pub const MIN_ZOOM: u16 = 50;

/// Largest zoom level, in percent.
pub const MAX_ZOOM: u16 = 300;

/// Zoom change per step, in percent.
pub const ZOOM_STEP: u16 = 10;

/// A position in screen units (pixels or terminal cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width; the right edge is exclusive.
    pub width: i32,
    /// Height; the bottom edge is exclusive.
    pub height: i32,
}

impl Rect {
    /// Check if `point` lies inside. Left and top edges are inclusive.
    #[must_use]
    pub const fn contains(self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

/// Where each slot is drawn.
///
/// Slot `(row, col)` sits at `origin + (col, row) * pitch`, with size
/// `extent`. Pitch and extent scale with zoom, the origin does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    origin: Point,
    pitch: Size,
    extent: Size,
    zoom_percent: u16,
}

impl Layout {
    /// Create a layout at 100 % zoom.
    #[must_use]
    pub const fn new(origin: Point, pitch: Size, extent: Size) -> Self {
        Self {
            origin,
            pitch,
            extent,
            zoom_percent: 100,
        }
    }

    /// Pixel layout: 45 px squares every 50 px, 200 px from the corner.
    #[must_use]
    pub const fn pixels() -> Self {
        Self::new(Point::new(200, 200), Size::new(50, 50), Size::new(45, 45))
    }

    /// Terminal-cell layout used by the interactive front end.
    #[must_use]
    pub const fn terminal() -> Self {
        Self::new(Point::new(2, 6), Size::new(7, 3), Size::new(6, 3))
    }

    /// Same layout at another zoom level, clamped to the supported range.
    #[must_use]
    pub fn with_zoom(mut self, percent: u16) -> Self {
        self.zoom_percent = percent.clamp(MIN_ZOOM, MAX_ZOOM);
        self
    }

    /// Current zoom level in percent.
    #[must_use]
    pub const fn zoom_percent(&self) -> u16 {
        self.zoom_percent
    }

    /// Zoom in by one step.
    pub fn zoom_in(&mut self) {
        *self = self.with_zoom(self.zoom_percent.saturating_add(ZOOM_STEP));
    }

    /// Zoom out by one step.
    pub fn zoom_out(&mut self) {
        *self = self.with_zoom(self.zoom_percent.saturating_sub(ZOOM_STEP));
    }

    /// Screen bounds of a slot. Never empty: every side is at least 1.
    #[must_use]
    pub fn slot_rect(&self, index: SlotIndex) -> Rect {
        let pitch_x = self.scaled(self.pitch.width);
        let pitch_y = self.scaled(self.pitch.height);
        Rect {
            x: self.origin.x + index.col() as i32 * pitch_x,
            y: self.origin.y + index.row() as i32 * pitch_y,
            width: self.scaled(self.extent.width).max(1),
            height: self.scaled(self.extent.height).max(1),
        }
    }

    fn scaled(&self, value: i32) -> i32 {
        value * i32::from(self.zoom_percent) / 100
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::pixels()
    }
}
