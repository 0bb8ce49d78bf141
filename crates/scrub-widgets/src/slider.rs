#![forbid(unsafe_code)]

//! Range-selection slider core.
//!
//! [`Slider`] is the composition surface the host wires up: it owns the
//! value↔position map and the drag session, and hands back plain values the
//! host applies through its own change callback. Rendering — the track, the
//! fill, the thumb, break markers — stays with the host; this type supplies
//! the percent positions for all of it.

use scrub_core::event::{DocumentListeners, EventOutcome, PointerEvent};
use scrub_core::geometry::Rect;

use crate::drag::DragController;
use crate::range_map::RangeMap;

/// A break marker ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakMarker {
    /// Percent position of the marker along the track.
    pub position: f64,
    /// Whether the thumb has reached or passed the marker.
    pub reached: bool,
}

/// Slider widget logic: range mapping plus drag handling.
#[derive(Debug)]
pub struct Slider {
    map: RangeMap,
    drag: DragController,
}

impl Slider {
    /// Create a slider over the given range map.
    pub fn new(map: RangeMap) -> Self {
        Self {
            map,
            drag: DragController::new(),
        }
    }

    /// The underlying range map.
    pub fn map(&self) -> &RangeMap {
        &self.map
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether the slider ignores pointer input.
    pub fn is_disabled(&self) -> bool {
        self.drag.is_disabled()
    }

    /// Enable or disable the slider. Disabling mid-drag ends the session.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.drag.set_disabled(disabled);
    }

    /// Document-scoped listeners the active drag session holds.
    pub fn document_listeners(&self) -> DocumentListeners {
        self.drag.document_listeners()
    }

    /// Thumb/fill percent position for the given value.
    pub fn position_of(&self, value: f64) -> f64 {
        self.map.value_to_position(value)
    }

    /// Route a pointer event through the drag machine.
    ///
    /// Returns the outcome plus the newly selected domain value, when the
    /// event produced one. The host invokes its change callback with that
    /// value.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        track: Option<Rect>,
    ) -> (EventOutcome, Option<f64>) {
        let (outcome, update) = self.drag.process(event, track, &self.map);
        (outcome, update.map(|update| update.value))
    }

    /// Break markers with their reached state for the given value.
    pub fn break_markers(&self, value: f64) -> Vec<BreakMarker> {
        let position = self.map.value_to_position(value);
        self.map
            .gaps()
            .iter()
            .map(|&gap| BreakMarker {
                position: gap.end,
                reached: RangeMap::gap_reached(position, gap),
            })
            .collect()
    }

    /// End any active drag session and drop document listeners. For host
    /// teardown while a drag is in flight.
    pub fn release(&mut self) {
        self.drag.release();
    }
}
