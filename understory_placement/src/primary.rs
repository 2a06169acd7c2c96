// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primary placement: the ideal, unconstrained position for a concrete placement.

use kurbo::{Point, Rect, Size};

use crate::types::{Align, Placement, Side, Viewport};

/// Compute where the floating element goes for `placement`, ignoring overflow.
///
/// `anchor` is viewport-relative; it is moved into document space with
/// `viewport.scroll`, and the returned top-left corner is in document space.
/// `offset` is the gap between the anchor and the floating element along the
/// side axis.
///
/// ```
/// use kurbo::{Point, Rect, Size};
/// use understory_placement::{Placement, Viewport, compute_primary};
///
/// let anchor = Rect::new(100.0, 100.0, 200.0, 120.0);
/// let vp = Viewport::from_size(1024.0, 768.0);
/// let pos = compute_primary(anchor, Size::new(40.0, 10.0), Placement::BOTTOM, 8.0, &vp);
/// assert_eq!(pos, Point::new(130.0, 128.0));
/// ```
pub fn compute_primary(
    anchor: Rect,
    floating: Size,
    placement: Placement,
    offset: f64,
    viewport: &Viewport,
) -> Point {
    let doc = anchor + viewport.scroll;
    match placement.side {
        Side::Top => Point::new(
            cross(doc.x0, doc.x1, floating.width, placement.align),
            doc.y0 - offset - floating.height,
        ),
        Side::Bottom => Point::new(
            cross(doc.x0, doc.x1, floating.width, placement.align),
            doc.y1 + offset,
        ),
        Side::Left => Point::new(
            doc.x0 - offset - floating.width,
            cross(doc.y0, doc.y1, floating.height, placement.align),
        ),
        Side::Right => Point::new(
            doc.x1 + offset,
            cross(doc.y0, doc.y1, floating.height, placement.align),
        ),
    }
}

/// Cross-axis coordinate for a floating extent of `size` against the anchor span `[start, end]`.
fn cross(start: f64, end: f64, size: f64, align: Align) -> f64 {
    match align {
        Align::Start => start,
        Align::Center => start + ((end - start) - size) / 2.0,
        Align::End => end - size,
    }
}
