#![forbid(unsafe_code)]

//! Tooltip visibility controller.
//!
//! [`TooltipController`] owns the hover/delay state machine: hover-enter
//! captures a fresh anchor snapshot, computes a placement, and arms the
//! show-delay timer; hover-leave cancels the timer and hides immediately.
//! Poll-driven like the rest of the library — the host calls
//! [`poll`](TooltipController::poll) from its event loop.
//!
//! # State Machine
//!
//! - `Hidden -> PendingShow`: hover-enter, when content exists and the
//!   tooltip is not disabled.
//! - `PendingShow -> Visible`: the delay elapses with no intervening leave.
//! - `PendingShow -> Hidden`, `Visible -> Hidden`: hover-leave, immediately.
//! - Re-entering hover while pending or visible restarts the delay from the
//!   latest anchor rectangle; stale geometry is never reused.
//!
//! Without content, or when disabled, the controller is inert and the host
//! renders the wrapped content unmodified.

use std::time::Duration;

use web_time::Instant;

use scrub_core::geometry::{Rect, Size};
use scrub_core::timer::DelayTimer;

use crate::placement::{Align, Placement, Side, place};

/// Tooltip behavior configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipConfig {
    /// Requested side of the anchor.
    pub side: Side,
    /// Cross-axis alignment.
    pub align: Align,
    /// Gap between the anchor edge and the tooltip, in pixels.
    pub offset: f32,
    /// How long the pointer must rest on the anchor before the tooltip
    /// shows.
    pub delay: Duration,
    /// Inert when set; the wrapped content renders unmodified.
    pub disabled: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            side: Side::Top,
            align: Align::Center,
            offset: 5.0,
            delay: Duration::from_millis(700),
            disabled: false,
        }
    }
}

impl TooltipConfig {
    /// Set the requested side.
    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Set the cross-axis alignment.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the anchor offset.
    #[must_use]
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the show delay.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Enable or disable the tooltip.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    /// The delay timer is armed but the tooltip is not yet visible.
    PendingShow,
    Visible,
}

/// Hover/delay visibility state machine. See the module docs.
#[derive(Debug)]
pub struct TooltipController {
    config: TooltipConfig,
    state: TooltipState,
    timer: DelayTimer,
    placement: Option<Placement>,
    has_content: bool,
}

impl TooltipController {
    /// Create a hidden controller with the given configuration.
    ///
    /// Content is assumed present until
    /// [`set_has_content`](Self::set_has_content) says otherwise.
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            state: TooltipState::Hidden,
            timer: DelayTimer::new(),
            placement: None,
            has_content: true,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Current visibility state.
    pub fn state(&self) -> TooltipState {
        self.state
    }

    /// Whether the tooltip is currently shown.
    pub fn is_visible(&self) -> bool {
        self.state == TooltipState::Visible
    }

    /// The placement computed on the most recent hover-enter, if any.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Mark whether the tooltip has content to show. Without content the
    /// controller is inert; clearing content hides immediately.
    pub fn set_has_content(&mut self, has_content: bool) {
        self.has_content = has_content;
        if !has_content {
            self.hover_leave();
        }
    }

    /// Enable or disable the tooltip. Disabling hides immediately.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.hover_leave();
        }
    }

    /// The pointer entered the anchor.
    ///
    /// Captures the snapshot, recomputes the placement, and (re)arms the
    /// show delay. `anchor` must be measured fresh for this hover; an
    /// unmeasurable anchor skips the interaction entirely.
    pub fn hover_enter(&mut self, anchor: Rect, tooltip: Size, viewport: Size, now: Instant) {
        if self.config.disabled || !self.has_content {
            return;
        }
        if anchor.is_empty() {
            return;
        }
        self.placement = Some(place(
            anchor,
            self.config.side,
            self.config.align,
            self.config.offset,
            tooltip,
            viewport,
        ));
        self.timer.arm(now, self.config.delay);
        if self.state == TooltipState::Hidden {
            self.state = TooltipState::PendingShow;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(state = ?self.state, "tooltip hover enter");
    }

    /// The pointer left the anchor: cancel any pending show and hide
    /// immediately.
    pub fn hover_leave(&mut self) {
        self.timer.cancel();
        self.state = TooltipState::Hidden;
    }

    /// Drive the delay timer. Returns `true` when the tooltip became
    /// visible on this call.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.timer.poll(now) && self.state == TooltipState::PendingShow {
            self.state = TooltipState::Visible;
            #[cfg(feature = "tracing")]
            tracing::trace!("tooltip shown");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(700);

    fn anchor() -> Rect {
        Rect::new(100.0, 300.0, 40.0, 20.0)
    }

    fn boxes() -> (Size, Size) {
        (Size::new(80.0, 50.0), Size::new(800.0, 600.0))
    }

    fn controller() -> TooltipController {
        TooltipController::new(TooltipConfig::default().delay(DELAY))
    }

    #[test]
    fn shows_after_the_delay_elapses() {
        let t = Instant::now();
        let (tip, viewport) = boxes();
        let mut tooltip = controller();

        tooltip.hover_enter(anchor(), tip, viewport, t);
        assert_eq!(tooltip.state(), TooltipState::PendingShow);
        assert!(!tooltip.poll(t + Duration::from_millis(100)));

        assert!(tooltip.poll(t + DELAY));
        assert!(tooltip.is_visible());
        assert!(tooltip.placement().is_some());
    }

    #[test]
    fn leave_before_delay_never_shows() {
        let t = Instant::now();
        let (tip, viewport) = boxes();
        let mut tooltip = controller();

        tooltip.hover_enter(anchor(), tip, viewport, t);
        tooltip.hover_leave();
        assert_eq!(tooltip.state(), TooltipState::Hidden);

        // The armed deadline passes; nothing fires.
        assert!(!tooltip.poll(t + DELAY + DELAY));
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn leave_while_visible_hides_immediately() {
        let t = Instant::now();
        let (tip, viewport) = boxes();
        let mut tooltip = controller();

        tooltip.hover_enter(anchor(), tip, viewport, t);
        assert!(tooltip.poll(t + DELAY));
        tooltip.hover_leave();
        assert_eq!(tooltip.state(), TooltipState::Hidden);
    }

    #[test]
    fn reenter_restarts_the_delay_with_fresh_geometry() {
        let t = Instant::now();
        let (tip, viewport) = boxes();
        let mut tooltip = controller();

        tooltip.hover_enter(anchor(), tip, viewport, t);
        let first = tooltip.placement().unwrap();

        // Re-enter halfway through with the anchor elsewhere.
        let moved = Rect::new(300.0, 100.0, 40.0, 20.0);
        let t_reenter = t + Duration::from_millis(350);
        tooltip.hover_enter(moved, tip, viewport, t_reenter);
        let second = tooltip.placement().unwrap();
        assert_ne!(first, second);

        // Original deadline passes without effect; the restarted one fires.
        assert!(!tooltip.poll(t + DELAY));
        assert!(tooltip.poll(t_reenter + DELAY));
    }

    #[test]
    fn disabled_controller_is_inert() {
        let t = Instant::now();
        let (tip, viewport) = boxes();
        let mut tooltip = TooltipController::new(TooltipConfig::default().disabled(true));

        tooltip.hover_enter(anchor(), tip, viewport, t);
        assert_eq!(tooltip.state(), TooltipState::Hidden);
        assert!(tooltip.placement().is_none());
        assert!(!tooltip.poll(t + DELAY));
    }

    #[test]
    fn missing_content_is_inert() {
        let t = Instant::now();
        let (tip, viewport) = boxes();
        let mut tooltip = controller();
        tooltip.set_has_content(false);

        tooltip.hover_enter(anchor(), tip, viewport, t);
        assert_eq!(tooltip.state(), TooltipState::Hidden);
        assert!(!tooltip.poll(t + DELAY));
    }

    #[test]
    fn clearing_content_while_visible_hides() {
        let t = Instant::now();
        let (tip, viewport) = boxes();
        let mut tooltip = controller();

        tooltip.hover_enter(anchor(), tip, viewport, t);
        assert!(tooltip.poll(t + DELAY));
        tooltip.set_has_content(false);
        assert_eq!(tooltip.state(), TooltipState::Hidden);
    }

    #[test]
    fn unmeasurable_anchor_skips_the_interaction() {
        let t = Instant::now();
        let (tip, viewport) = boxes();
        let mut tooltip = controller();

        tooltip.hover_enter(Rect::new(0.0, 0.0, 0.0, 0.0), tip, viewport, t);
        assert_eq!(tooltip.state(), TooltipState::Hidden);
        assert!(tooltip.placement().is_none());
    }

    #[test]
    fn defaults_match_the_component_contract() {
        let config = TooltipConfig::default();
        assert_eq!(config.side, Side::Top);
        assert_eq!(config.align, Align::Center);
        assert_eq!(config.offset, 5.0);
        assert_eq!(config.delay, Duration::from_millis(700));
        assert!(!config.disabled);
    }

    #[test]
    fn reenter_while_visible_updates_placement_without_hiding() {
        let t = Instant::now();
        let (tip, viewport) = boxes();
        let mut tooltip = controller();

        tooltip.hover_enter(anchor(), tip, viewport, t);
        assert!(tooltip.poll(t + DELAY));

        let moved = Rect::new(300.0, 100.0, 40.0, 20.0);
        tooltip.hover_enter(moved, tip, viewport, t + DELAY);
        assert!(tooltip.is_visible());
        let placement = tooltip.placement().unwrap();
        assert_eq!(placement.top, 100.0 - 50.0 - 5.0);
    }
}
