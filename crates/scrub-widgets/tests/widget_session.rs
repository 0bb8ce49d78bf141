//! End-to-end widget sessions: a host driving the slider and tooltip
//! controllers together, the way the rendering layer would.

use std::time::Duration;

use scrub_core::event::{DocumentListeners, PointerEvent};
use scrub_core::geometry::{Rect, Size};
use scrub_widgets::{
    Portal, RangeMap, Side, Slider, TooltipConfig, TooltipController, sample_timestamps,
};
use web_time::Instant;

const ONE_DAY_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

fn timestamp_slider() -> (Slider, f64) {
    let now_ms = 1_700_000_000_000.0;
    let samples = sample_timestamps(5, now_ms);
    (Slider::new(RangeMap::from_samples(&samples)), now_ms)
}

#[test]
fn scrubbing_a_timestamp_range() {
    let (mut slider, now_ms) = timestamp_slider();
    let track = Some(Rect::new(40.0, 500.0, 400.0, 6.0));

    // Down in the middle of the track selects the middle of the range.
    let (_, value) = slider.handle_pointer(&PointerEvent::mouse_down(240.0, 503.0), track);
    assert_eq!(value, Some(now_ms - 2.0 * ONE_DAY_MS));

    // Drag to the right edge and past it: clamped to the newest sample.
    let (_, value) = slider.handle_pointer(&PointerEvent::mouse_move(440.0, 503.0), track);
    assert_eq!(value, Some(now_ms));
    let (_, value) = slider.handle_pointer(&PointerEvent::mouse_move(9_999.0, 10.0), track);
    assert_eq!(value, Some(now_ms));

    // Release anywhere in the document ends the session.
    let (_, value) = slider.handle_pointer(&PointerEvent::mouse_up(9_999.0, 10.0), track);
    assert!(value.is_none());
    assert!(!slider.is_dragging());
    assert!(slider.document_listeners().is_empty());
}

#[test]
fn drag_survives_layout_dropout() {
    let (mut slider, now_ms) = timestamp_slider();
    let track = Some(Rect::new(0.0, 0.0, 400.0, 6.0));

    let _ = slider.handle_pointer(&PointerEvent::mouse_down(200.0, 3.0), track);

    // The track briefly reports no geometry (reflow); updates skip silently.
    let (_, value) = slider.handle_pointer(&PointerEvent::mouse_move(300.0, 3.0), None);
    assert!(value.is_none());
    assert!(slider.is_dragging());

    // Geometry returns and the same session keeps reporting.
    let (_, value) = slider.handle_pointer(&PointerEvent::mouse_move(400.0, 3.0), track);
    assert_eq!(value, Some(now_ms));
}

#[test]
fn hover_show_scrub_hide_cycle() {
    let t = Instant::now();
    let delay = Duration::from_millis(200);
    let mut tooltip = TooltipController::new(TooltipConfig::default().delay(delay).offset(12.0));
    let portal = Portal::shared();
    let id = portal.mount();

    // Hover over the thumb near the top of the viewport: placement flips.
    let thumb = Rect::new(200.0, 10.0, 20.0, 20.0);
    tooltip.hover_enter(thumb, Size::new(120.0, 50.0), Size::new(800.0, 600.0), t);
    let placement = tooltip.placement().unwrap();
    assert_eq!(placement.side, Side::Bottom);
    portal.update(id, Some(placement), tooltip.is_visible());
    assert!(!portal.entry(id).unwrap().visible);

    // The delay elapses; the host mirrors visibility into the portal.
    assert!(tooltip.poll(t + delay));
    portal.update(id, Some(placement), tooltip.is_visible());
    assert!(portal.entry(id).unwrap().visible);

    // Leaving hides immediately.
    tooltip.hover_leave();
    portal.update(id, tooltip.placement(), tooltip.is_visible());
    assert!(!portal.entry(id).unwrap().visible);

    portal.unmount(id);
}

#[test]
fn released_session_ignores_synthetic_document_events() {
    let (mut slider, _) = timestamp_slider();
    let track = Some(Rect::new(0.0, 0.0, 400.0, 6.0));

    let _ = slider.handle_pointer(&PointerEvent::mouse_down(200.0, 3.0), track);
    assert_eq!(slider.document_listeners(), DocumentListeners::DRAG_SET);
    let _ = slider.handle_pointer(&PointerEvent::mouse_up(200.0, 3.0), track);

    // All four global listeners are gone; synthetic move events from any
    // source report nothing.
    assert!(slider.document_listeners().is_empty());
    for event in [
        PointerEvent::mouse_move(10.0, 3.0),
        PointerEvent::touch_move(10.0, 3.0),
    ] {
        let (_, value) = slider.handle_pointer(&event, track);
        assert!(value.is_none());
    }
}
