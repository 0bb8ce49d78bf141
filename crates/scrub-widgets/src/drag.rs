#![forbid(unsafe_code)]

//! Pointer-drag state machine for the slider track.
//!
//! [`DragController`] is a stateful processor: the host feeds it every
//! relevant [`PointerEvent`] together with a fresh track-geometry snapshot,
//! and it reports newly selected positions and domain values.
//!
//! # State Machine
//!
//! - `Idle -> Dragging`: pointer down on the track (widget scope), unless
//!   disabled. The down coordinate immediately produces an update, so a
//!   click without movement still selects a value.
//! - `Dragging -> Dragging`: every move event, at document scope — the drag
//!   keeps tracking after the pointer leaves the widget bounds.
//! - `Dragging -> Idle`: pointer up or touch end, anywhere in the document.
//!
//! # Invariants
//!
//! 1. A disabled controller never leaves `Idle`.
//! 2. Document listeners are held exactly while `Dragging`; attach and
//!    release happen once per transition, even under rapid cycles.
//! 3. A missing or zero-width track snapshot skips the value computation
//!    but does not tear down an active session.
//! 4. Every reported position is within `[0.0, 100.0]`.

use scrub_core::event::{DocumentListeners, EventOutcome, PointerEvent, PointerPhase};
use scrub_core::geometry::Rect;

use crate::range_map::RangeMap;

/// Drag session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// A newly computed selection produced by a drag event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    /// Percent position along the track, clamped to `[0.0, 100.0]`.
    pub position: f64,
    /// The domain value at that position.
    pub value: f64,
}

/// Stateful pointer-drag processor. See the module docs for the state
/// machine and its invariants.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    listeners: DocumentListeners,
    disabled: bool,
}

impl DragController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// The document-scoped listeners currently required. Empty while idle,
    /// [`DocumentListeners::DRAG_SET`] while dragging.
    pub fn document_listeners(&self) -> DocumentListeners {
        self.listeners
    }

    /// Whether the controller ignores pointer input.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the controller. Disabling mid-drag ends the
    /// session immediately.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.release();
        }
    }

    /// Process one pointer event.
    ///
    /// `track` is the current bounding rectangle of the slider track, or
    /// `None` when the track is not mounted. Down events are widget-scoped:
    /// the host routes only hits on the track/thumb here. Move and up events
    /// are document-scoped and must be routed whenever
    /// [`document_listeners`](Self::document_listeners) is non-empty.
    pub fn process(
        &mut self,
        event: &PointerEvent,
        track: Option<Rect>,
        map: &RangeMap,
    ) -> (EventOutcome, Option<DragUpdate>) {
        match (self.state, event.phase) {
            (DragState::Idle, PointerPhase::Down) => {
                if self.disabled {
                    return (EventOutcome::Ignored, None);
                }
                self.state = DragState::Dragging;
                self.listeners = DocumentListeners::DRAG_SET;
                #[cfg(feature = "tracing")]
                tracing::trace!(x = event.position.x, "drag session started");
                (
                    EventOutcome::Consumed,
                    update_from(event.position.x, track, map),
                )
            }
            (DragState::Dragging, PointerPhase::Move) => (
                EventOutcome::Consumed,
                update_from(event.position.x, track, map),
            ),
            (DragState::Dragging, PointerPhase::Up) => {
                self.release();
                (EventOutcome::Consumed, None)
            }
            _ => (EventOutcome::Ignored, None),
        }
    }

    /// Force the controller back to `Idle`, dropping document listeners.
    ///
    /// Called on pointer up, on disable, and by hosts tearing down a widget
    /// mid-drag; no handler may leak past this point.
    pub fn release(&mut self) {
        #[cfg(feature = "tracing")]
        if self.state == DragState::Dragging {
            tracing::trace!("drag session ended");
        }
        self.state = DragState::Idle;
        self.listeners = DocumentListeners::empty();
    }
}

/// Map a raw pointer x-coordinate onto the track, if it is measurable.
fn update_from(x: f32, track: Option<Rect>, map: &RangeMap) -> Option<DragUpdate> {
    let track = track?;
    if track.width <= 0.0 {
        return None;
    }
    let position = ((f64::from(x) - f64::from(track.left())) / f64::from(track.width) * 100.0)
        .clamp(0.0, 100.0);
    Some(DragUpdate {
        position,
        value: map.position_to_value(position),
    })
}
