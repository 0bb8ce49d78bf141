#![forbid(unsafe_code)]

//! Canonical pointer input events.
//!
//! The host adapts whatever input source it has into [`PointerEvent`] values.
//! Mouse and touch deliver the same phases and drive the same state machines;
//! touch-start/-move/-end map onto `Down`/`Move`/`Up`.
//!
//! # Design Notes
//!
//! - Coordinates are viewport pixels, matching the geometry snapshots the
//!   host supplies.
//! - [`EventOutcome::Consumed`] is the library's analog of suppressing the
//!   default action: the host must not let a consumed event trigger text
//!   selection or scroll capture.
//! - [`DocumentListeners`] makes listener hygiene observable: a controller
//!   reports exactly which document-scoped listeners it currently requires,
//!   so hosts (and tests) can verify nothing leaks across sessions.

use bitflags::bitflags;

use crate::geometry::Point;

/// Where a pointer event originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// The phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Button pressed or touch started.
    Down,
    /// Pointer moved while tracked.
    Move,
    /// Button released or touch ended.
    Up,
}

/// A single pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub source: PointerSource,
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(source: PointerSource, phase: PointerPhase, position: Point) -> Self {
        Self {
            source,
            phase,
            position,
        }
    }

    /// Mouse button pressed at the given coordinates.
    #[must_use]
    pub const fn mouse_down(x: f32, y: f32) -> Self {
        Self::new(PointerSource::Mouse, PointerPhase::Down, Point::new(x, y))
    }

    /// Mouse moved to the given coordinates.
    #[must_use]
    pub const fn mouse_move(x: f32, y: f32) -> Self {
        Self::new(PointerSource::Mouse, PointerPhase::Move, Point::new(x, y))
    }

    /// Mouse button released at the given coordinates.
    #[must_use]
    pub const fn mouse_up(x: f32, y: f32) -> Self {
        Self::new(PointerSource::Mouse, PointerPhase::Up, Point::new(x, y))
    }

    /// Touch started at the given coordinates.
    #[must_use]
    pub const fn touch_start(x: f32, y: f32) -> Self {
        Self::new(PointerSource::Touch, PointerPhase::Down, Point::new(x, y))
    }

    /// Touch moved to the given coordinates.
    #[must_use]
    pub const fn touch_move(x: f32, y: f32) -> Self {
        Self::new(PointerSource::Touch, PointerPhase::Move, Point::new(x, y))
    }

    /// Touch ended at the given coordinates.
    #[must_use]
    pub const fn touch_end(x: f32, y: f32) -> Self {
        Self::new(PointerSource::Touch, PointerPhase::Up, Point::new(x, y))
    }
}

/// Whether a controller handled an event.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event was not relevant; the host may process it normally.
    Ignored,
    /// The event was handled; the host must suppress its default action.
    Consumed,
}

impl EventOutcome {
    /// Check if the event was handled.
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

bitflags! {
    /// Document-scoped listener registrations a controller currently needs.
    ///
    /// A drag session must keep tracking when the pointer leaves the widget
    /// bounds, so move/release listeners live at document scope while a drag
    /// is active and are dropped the moment the session ends.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DocumentListeners: u8 {
        const MOUSE_MOVE = 1 << 0;
        const MOUSE_UP = 1 << 1;
        const TOUCH_MOVE = 1 << 2;
        const TOUCH_END = 1 << 3;
        /// All four listeners an active drag session holds.
        const DRAG_SET = Self::MOUSE_MOVE.bits()
            | Self::MOUSE_UP.bits()
            | Self::TOUCH_MOVE.bits()
            | Self::TOUCH_END.bits();
    }
}
