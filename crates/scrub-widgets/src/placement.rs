#![forbid(unsafe_code)]

//! Collision-aware tooltip placement.
//!
//! [`place`] computes where a tooltip box should render relative to an
//! anchor rectangle: offset from the requested side, flipped once to the
//! opposite side when it would overflow the viewport on the primary axis,
//! then aligned and clamped on the cross axis.
//!
//! The function is pure and snapshot-based: it has no memory between calls
//! and produces the same output for the same input tuple every time.
//!
//! # Collision rules
//!
//! - **Flip**: at most one flip, to the direct opposite side. If the
//!   opposite side also overflows, the overflow stands — there is no
//!   cascading search.
//! - **Cross-axis clamp**: after flip and alignment, the cross coordinate is
//!   pushed inside `[0, viewport_extent - tooltip_extent]` so the tooltip
//!   never renders partially off-screen on that axis.
//! - **Primary axis is never clamped** — only flipped.

use scrub_core::geometry::{Rect, Size};

/// The side of the anchor a tooltip is requested on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// The side used when flipping out of an overflow.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether the side places on the horizontal axis (left/right of the
    /// anchor).
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Cross-axis alignment against the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Flush with the anchor's leading edge.
    Start,
    /// Centered on the anchor.
    #[default]
    Center,
    /// Flush with the anchor's trailing edge.
    End,
}

/// Resolved tooltip coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Absolute top, in viewport pixels.
    pub top: f32,
    /// Absolute left, in viewport pixels.
    pub left: f32,
    /// The side actually used, after at most one flip.
    pub side: Side,
}

/// Compute an absolute placement for a tooltip box.
///
/// `anchor` is a fresh snapshot of the element the tooltip belongs to,
/// `offset` the gap between the anchor edge and the tooltip on the primary
/// axis, `tooltip` the measured content box, and `viewport` the visible
/// area's dimensions.
pub fn place(
    anchor: Rect,
    side: Side,
    align: Align,
    offset: f32,
    tooltip: Size,
    viewport: Size,
) -> Placement {
    let mut top;
    let mut left;
    let mut final_side = side;

    match side {
        Side::Top => {
            top = anchor.top() - tooltip.height - offset;
            left = anchor.center_x() - tooltip.width / 2.0;
            if top < 0.0 {
                top = anchor.bottom() + offset;
                final_side = side.opposite();
            }
        }
        Side::Bottom => {
            top = anchor.bottom() + offset;
            left = anchor.center_x() - tooltip.width / 2.0;
            if top + tooltip.height > viewport.height {
                top = anchor.top() - tooltip.height - offset;
                final_side = side.opposite();
            }
        }
        Side::Left => {
            top = anchor.center_y() - tooltip.height / 2.0;
            left = anchor.left() - tooltip.width - offset;
            if left < 0.0 {
                left = anchor.right() + offset;
                final_side = side.opposite();
            }
        }
        Side::Right => {
            top = anchor.center_y() - tooltip.height / 2.0;
            left = anchor.right() + offset;
            if left + tooltip.width > viewport.width {
                left = anchor.left() - tooltip.width - offset;
                final_side = side.opposite();
            }
        }
    }

    if final_side.is_horizontal() {
        match align {
            Align::Start => top = anchor.top(),
            Align::End => top = anchor.bottom() - tooltip.height,
            Align::Center => {}
        }
        top = top.max(0.0).min(viewport.height - tooltip.height);
    } else {
        match align {
            Align::Start => left = anchor.left(),
            Align::End => left = anchor.right() - tooltip.width,
            Align::Center => {}
        }
        left = left.max(0.0).min(viewport.width - tooltip.width);
    }

    Placement {
        top,
        left,
        side: final_side,
    }
}
