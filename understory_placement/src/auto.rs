// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto placement: pick the side of the anchor with the most room.

use kurbo::Rect;

use crate::types::{Side, Viewport};

/// Room between each anchor edge and the matching viewport edge.
///
/// Measured in viewport space (scroll is not applied), so values can be
/// negative when the anchor is partially off screen.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SideSpace {
    /// Space above the anchor.
    pub top: f64,
    /// Space below the anchor.
    pub bottom: f64,
    /// Space left of the anchor.
    pub left: f64,
    /// Space right of the anchor.
    pub right: f64,
}

impl SideSpace {
    /// Space on a given side.
    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Measure the room around a viewport-relative `anchor`.
pub fn available_space(anchor: Rect, viewport: &Viewport) -> SideSpace {
    SideSpace {
        top: anchor.y0,
        bottom: viewport.size.height - anchor.y1,
        left: anchor.x0,
        right: viewport.size.width - anchor.x1,
    }
}

/// Choose the side with the most available space.
///
/// Ties go to the earlier side in [`Side::ALL`] order: top, bottom, left, right.
///
/// ```
/// use kurbo::Rect;
/// use understory_placement::{Side, Viewport, select_auto_placement};
///
/// // Anchor hugging the top edge: the most room is below it.
/// let vp = Viewport::from_size(800.0, 600.0);
/// let side = select_auto_placement(Rect::new(100.0, 0.0, 200.0, 20.0), &vp);
/// assert_eq!(side, Side::Bottom);
/// ```
pub fn select_auto_placement(anchor: Rect, viewport: &Viewport) -> Side {
    let space = available_space(anchor, viewport);
    let mut best = Side::Top;
    for side in Side::ALL {
        // Strict comparison keeps the earliest maximum.
        if space.get(side) > space.get(best) {
            best = side;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::from_size(1000.0, 1000.0)
    }

    #[test]
    fn centered_anchor_in_square_viewport_prefers_top() {
        let anchor = Rect::new(450.0, 450.0, 550.0, 550.0);
        let space = available_space(anchor, &vp());
        assert_eq!(space.top, space.bottom);
        assert_eq!(space.left, space.right);
        assert_eq!(space.top, space.left);
        assert_eq!(select_auto_placement(anchor, &vp()), Side::Top);
    }

    #[test]
    fn picks_each_side_when_it_has_most_room() {
        // Near the bottom edge: room above.
        let a = Rect::new(450.0, 900.0, 550.0, 950.0);
        assert_eq!(select_auto_placement(a, &vp()), Side::Top);
        // Near the top edge: room below.
        let a = Rect::new(450.0, 10.0, 550.0, 60.0);
        assert_eq!(select_auto_placement(a, &vp()), Side::Bottom);
        // Tall anchor near the right edge: room to the left.
        let a = Rect::new(900.0, 10.0, 950.0, 990.0);
        assert_eq!(select_auto_placement(a, &vp()), Side::Left);
        // Tall anchor near the left edge: room to the right.
        let a = Rect::new(10.0, 10.0, 60.0, 990.0);
        assert_eq!(select_auto_placement(a, &vp()), Side::Right);
    }

    #[test]
    fn bottom_beats_left_and_right_on_tie() {
        // bottom == left == right > top
        let a = Rect::new(300.0, 100.0, 700.0, 700.0);
        let space = available_space(a, &vp());
        assert_eq!(space.bottom, 300.0);
        assert_eq!(space.left, 300.0);
        assert_eq!(space.right, 300.0);
        assert_eq!(select_auto_placement(a, &vp()), Side::Bottom);
    }

    #[test]
    fn left_beats_right_on_tie() {
        let a = Rect::new(400.0, 50.0, 600.0, 960.0);
        assert_eq!(select_auto_placement(a, &vp()), Side::Left);
    }

    #[test]
    fn scroll_offset_is_ignored() {
        let anchor = Rect::new(450.0, 10.0, 550.0, 60.0);
        let scrolled = Viewport::new(vp().size, kurbo::Vec2::new(0.0, 5000.0));
        assert_eq!(
            select_auto_placement(anchor, &scrolled),
            select_auto_placement(anchor, &vp())
        );
    }
}
