// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flip: move the floating element to the opposite side when its side overflows.
//!
//! Flipping happens at most once per resolution. If the opposite side also
//! overflows, the flipped result stands and [`apply_shift`](crate::shift::apply_shift)
//! is left to pull it back into view.

use kurbo::{Point, Rect, Size};

use crate::primary::compute_primary;
use crate::types::{Placement, PositionResult, Side, Viewport};

bitflags::bitflags! {
    /// Viewport edges crossed by a document-space rectangle.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Overflow: u8 {
        /// Extends above the visible area.
        const TOP    = 0b0000_0001;
        /// Extends below the visible area.
        const BOTTOM = 0b0000_0010;
        /// Extends left of the visible area.
        const LEFT   = 0b0000_0100;
        /// Extends right of the visible area.
        const RIGHT  = 0b0000_1000;
    }
}

impl Overflow {
    /// The flag for a single side.
    pub const fn from_side(side: Side) -> Self {
        match side {
            Side::Top => Self::TOP,
            Side::Bottom => Self::BOTTOM,
            Side::Left => Self::LEFT,
            Side::Right => Self::RIGHT,
        }
    }

    /// Whether the rectangle crosses the viewport edge on `side`.
    pub fn contains_side(self, side: Side) -> bool {
        self.contains(Self::from_side(side))
    }
}

/// Which viewport edges `rect` (in document coordinates) crosses.
///
/// Touching an edge exactly is not overflow.
pub fn overflow(rect: Rect, viewport: &Viewport) -> Overflow {
    let visible = viewport.visible_rect();
    let mut out = Overflow::empty();
    if rect.y0 < visible.y0 {
        out |= Overflow::TOP;
    }
    if rect.y1 > visible.y1 {
        out |= Overflow::BOTTOM;
    }
    if rect.x0 < visible.x0 {
        out |= Overflow::LEFT;
    }
    if rect.x1 > visible.x1 {
        out |= Overflow::RIGHT;
    }
    out
}

/// Flip `placement` to the opposite side if `position` overflows on its own side.
///
/// Only the edge matching the placement's side is checked: a `top` placement
/// flips when it pokes above the viewport, never because it is too wide.
/// The flipped position comes from [`compute_primary`] with the same alignment
/// and is not checked again.
pub fn apply_flip(
    anchor: Rect,
    floating: Size,
    placement: Placement,
    offset: f64,
    viewport: &Viewport,
    position: Point,
) -> PositionResult {
    let placed = Rect::from_origin_size(position, floating);
    if !overflow(placed, viewport).contains_side(placement.side) {
        return PositionResult {
            origin: position,
            placement,
            flipped: false,
        };
    }

    let flipped = placement.flipped();
    #[cfg(feature = "tracing")]
    tracing::trace!(from = %placement, to = %flipped, "flipping placement");
    PositionResult {
        origin: compute_primary(anchor, floating, flipped, offset, viewport),
        placement: flipped,
        flipped: true,
    }
}
