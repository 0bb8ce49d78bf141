#![forbid(unsafe_code)]

//! Slider and anchored-tooltip widget logic for scrub.
//!
//! # Role in scrub
//! `scrub-widgets` holds the interaction cores: the value↔position range
//! map and drag machine behind a slider, and the placement math plus
//! hover/delay machine behind a viewport-aware tooltip. Everything consumes
//! geometry snapshots from `scrub-core` and reports plain values; rendering
//! belongs to the host.
//!
//! # Primary responsibilities
//! - [`range_map`]: clamped, NaN-free value↔position conversion.
//! - [`drag`] / [`slider`]: the pointer-drag session and its facade.
//! - [`placement`]: pure collision-aware tooltip placement.
//! - [`tooltip`]: hover/delay visibility state machine.
//! - [`portal`]: the process-wide shared overlay surface.
//!
//! # Example
//!
//! ```
//! use scrub_core::event::PointerEvent;
//! use scrub_core::geometry::Rect;
//! use scrub_widgets::{RangeMap, Slider};
//!
//! let map = RangeMap::from_samples(&[0.0, 25.0, 50.0, 75.0, 100.0]);
//! let mut slider = Slider::new(map);
//! let track = Rect::new(0.0, 0.0, 200.0, 6.0);
//!
//! let (_, value) = slider.handle_pointer(&PointerEvent::mouse_down(100.0, 3.0), Some(track));
//! assert_eq!(value, Some(50.0));
//! ```

pub mod drag;
pub mod placement;
pub mod portal;
pub mod range_map;
pub mod slider;
pub mod tooltip;

pub use drag::{DragController, DragState, DragUpdate};
pub use placement::{Align, Placement, Side, place};
pub use portal::{MountId, Portal, PortalEntry};
pub use range_map::{Gap, RangeMap, Span, sample_timestamps};
pub use slider::{BreakMarker, Slider};
pub use tooltip::{TooltipConfig, TooltipController, TooltipState};
