// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shift: clamp the floating element into the viewport without changing its side.

use kurbo::{Point, Size};

use crate::types::Viewport;

/// Clamp `position` so the floating element stays `padding` inside the viewport.
///
/// Each axis is clamped on its own into
/// `[scroll + padding, scroll + viewport - floating - padding]`.
/// If the element fits the viewport but not the padding, the padding on that
/// axis shrinks to split the spare room evenly, so a fitting element never
/// overflows. When the element is larger than the viewport the range is
/// inverted and the lower bound wins: the element is pinned at `padding` from
/// the start edge.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_placement::{Viewport, apply_shift};
///
/// let vp = Viewport::from_size(200.0, 600.0);
/// let p = apply_shift(Point::new(-50.0, 100.0), Size::new(300.0, 20.0), &vp, 8.0);
/// assert_eq!(p, Point::new(8.0, 100.0));
/// ```
pub fn apply_shift(position: Point, floating: Size, viewport: &Viewport, padding: f64) -> Point {
    let x = clamp_axis(
        position.x,
        viewport.scroll.x,
        viewport.size.width,
        floating.width,
        padding,
    );
    let y = clamp_axis(
        position.y,
        viewport.scroll.y,
        viewport.size.height,
        floating.height,
        padding,
    );
    #[cfg(feature = "tracing")]
    {
        if x != position.x || y != position.y {
            tracing::trace!(dx = x - position.x, dy = y - position.y, "shifted into viewport");
        }
    }
    Point::new(x, y)
}

fn clamp_axis(value: f64, scroll: f64, extent: f64, size: f64, padding: f64) -> f64 {
    let padding = if size <= extent {
        padding.min((extent - size) / 2.0)
    } else {
        padding
    };
    let lo = scroll + padding;
    let hi = scroll + extent - size - padding;
    // Not `f64::clamp`: it panics when `hi < lo`.
    value.min(hi).max(lo)
}
