#![forbid(unsafe_code)]

//! Core primitives for the scrub widget library.
//!
//! # Role in scrub
//! `scrub-core` is the substrate layer: continuous pixel geometry, canonical
//! pointer events, and the cancellable delay timer the tooltip controller is
//! built on. The widget crate (`scrub-widgets`) consumes these types.
//!
//! # Primary responsibilities
//! - **Geometry**: `Point`, `Size`, and `Rect` in browser-style pixel space.
//! - **Event**: normalized pointer events (mouse and touch), the
//!   consumed/ignored outcome, and the document-listener set a drag session
//!   holds.
//! - **Timer**: a poll-driven one-shot deadline with idempotent cancellation.
//!
//! # How it fits in the system
//! The host adapts its input source (DOM events, winit, a test harness) into
//! `scrub-core` events and geometry snapshots, feeds them to the controllers
//! in `scrub-widgets`, and renders the plain values they report. Nothing in
//! this crate touches rendering or blocks.

pub mod event;
pub mod geometry;
pub mod timer;

pub use event::{DocumentListeners, EventOutcome, PointerEvent, PointerPhase, PointerSource};
pub use geometry::{Point, Rect, Size};
pub use timer::DelayTimer;
