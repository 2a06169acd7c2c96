// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow alignment: where the caret goes on the floating element.
//!
//! The arrow sits on the floating element's edge that faces the anchor, which is
//! the opposite of the placement's side. Its style is described with the
//! border-triangle technique: one colored border and three transparent ones.
//! [`ArrowStyle::border`] names borders by the edge the arrow sits on;
//! [`ArrowStyle::write_css`] maps that onto the box border whose triangle
//! points at the anchor. Renderers without CSS can use
//! [`ArrowStyle::tip_triangle`] instead.
//!
//! ```
//! use understory_placement::{ArrowBorder, Placement, Side, compute_arrow_style};
//!
//! let arrow = compute_arrow_style(Placement::BOTTOM, 12.0);
//! assert_eq!(arrow.edge, Side::Top);
//! assert_eq!(arrow.border(Side::Top), ArrowBorder::Colored);
//! assert_eq!(arrow.border(Side::Bottom), ArrowBorder::Transparent);
//! ```

use core::fmt;

use kurbo::{Point, Size};

use crate::types::{Align, Placement, Side};

/// Default half-width of the arrow base (and its height), in pixels.
pub const DEFAULT_ARROW_SIZE: f64 = 6.0;

/// Default distance from the starting or ending corner for `-start`/`-end` placements.
pub const DEFAULT_ARROW_EDGE_OFFSET: f64 = 12.0;

/// Whether a border of the arrow box carries the arrow color.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ArrowBorder {
    /// The border forming the visible triangle.
    Colored,
    /// One of the three hidden borders.
    Transparent,
}

/// Position of the arrow along the edge it sits on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ArrowOffset {
    /// Midpoint of the edge.
    Center,
    /// Fixed distance from the starting corner (left or top).
    FromStart(f64),
    /// Fixed distance from the ending corner (right or bottom).
    FromEnd(f64),
}

/// Arrow placement and style for a resolved placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrowStyle {
    /// Edge of the floating element the arrow sits on; it faces the anchor.
    pub edge: Side,
    /// Position along that edge.
    pub offset: ArrowOffset,
    /// Half-width of the arrow base, also its height.
    pub size: f64,
}

/// Compute the arrow style for a resolved `placement`.
///
/// `offset_from_edge` only matters for `-start` and `-end` placements, where the
/// arrow keeps that distance from the corner the floating element is aligned to.
pub fn compute_arrow_style(placement: Placement, offset_from_edge: f64) -> ArrowStyle {
    let offset = match placement.align {
        Align::Start => ArrowOffset::FromStart(offset_from_edge),
        Align::Center => ArrowOffset::Center,
        Align::End => ArrowOffset::FromEnd(offset_from_edge),
    };
    ArrowStyle {
        edge: placement.side.opposite(),
        offset,
        size: DEFAULT_ARROW_SIZE,
    }
}

impl ArrowStyle {
    /// Same style with a different arrow size.
    pub fn with_size(self, size: f64) -> Self {
        Self { size, ..self }
    }

    /// Border treatment of one side of the arrow box.
    ///
    /// Exactly one side is colored: the one named by [`edge`](Self::edge).
    pub fn border(&self, side: Side) -> ArrowBorder {
        if side == self.edge {
            ArrowBorder::Colored
        } else {
            ArrowBorder::Transparent
        }
    }

    /// Where the arrow's base midpoint sits, in the floating element's local coordinates.
    pub fn base_center(&self, floating: Size) -> Point {
        let along = if self.edge.is_vertical() {
            floating.width
        } else {
            floating.height
        };
        let t = match self.offset {
            ArrowOffset::Center => along / 2.0,
            ArrowOffset::FromStart(d) => d + self.size,
            ArrowOffset::FromEnd(d) => along - d - self.size,
        };
        match self.edge {
            Side::Top => Point::new(t, 0.0),
            Side::Bottom => Point::new(t, floating.height),
            Side::Left => Point::new(0.0, t),
            Side::Right => Point::new(floating.width, t),
        }
    }

    /// Triangle vertices in floating-local coordinates: the two base corners,
    /// then the tip, which points away from the floating element toward the anchor.
    pub fn tip_triangle(&self, floating: Size) -> [Point; 3] {
        let c = self.base_center(floating);
        let s = self.size;
        match self.edge {
            Side::Top => [
                Point::new(c.x - s, c.y),
                Point::new(c.x + s, c.y),
                Point::new(c.x, c.y - s),
            ],
            Side::Bottom => [
                Point::new(c.x - s, c.y),
                Point::new(c.x + s, c.y),
                Point::new(c.x, c.y + s),
            ],
            Side::Left => [
                Point::new(c.x, c.y - s),
                Point::new(c.x, c.y + s),
                Point::new(c.x - s, c.y),
            ],
            Side::Right => [
                Point::new(c.x, c.y - s),
                Point::new(c.x, c.y + s),
                Point::new(c.x + s, c.y),
            ],
        }
    }

    /// Write the arrow as CSS declarations for an absolutely positioned,
    /// zero-sized box inside the floating element.
    ///
    /// The box sits just outside [`edge`](Self::edge), touching it. A CSS border
    /// triangle points away from its colored border, so the colored CSS border
    /// is the one nearest the floating element, opposite `edge`, and the tip
    /// lands where [`tip_triangle`](Self::tip_triangle) puts it.
    ///
    /// ```
    /// use understory_placement::{Placement, compute_arrow_style};
    ///
    /// let mut css = String::new();
    /// compute_arrow_style(Placement::TOP_START, 12.0)
    ///     .write_css(&mut css)
    ///     .unwrap();
    /// assert!(css.contains("bottom: -12px;"));
    /// assert!(css.contains("left: 12px;"));
    /// // Box below the element; top border colored so the tip points down.
    /// assert!(css.contains("border-top-color: currentColor;"));
    /// ```
    pub fn write_css<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let s = self.size;
        out.write_str("position: absolute; width: 0; height: 0; ")?;
        write!(out, "{}: {}px; ", self.edge, -2.0 * s)?;
        let (start, end, margin) = if self.edge.is_vertical() {
            ("left", "right", "margin-left")
        } else {
            ("top", "bottom", "margin-top")
        };
        match self.offset {
            ArrowOffset::Center => write!(out, "{start}: 50%; {margin}: {}px; ", -s)?,
            ArrowOffset::FromStart(d) => write!(out, "{start}: {d}px; ")?,
            ArrowOffset::FromEnd(d) => write!(out, "{end}: {d}px; ")?,
        }
        write!(out, "border: {s}px solid transparent; ")?;
        write!(out, "border-{}-color: currentColor;", self.edge.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    /// Direction the tip points, relative to the base midpoint.
    fn tip_direction(arrow: &ArrowStyle, floating: Size) -> Side {
        let d = arrow.tip_triangle(floating)[2] - arrow.base_center(floating);
        if d.y < 0.0 {
            Side::Top
        } else if d.y > 0.0 {
            Side::Bottom
        } else if d.x < 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[test]
    fn arrow_edge_mirrors_every_placement() {
        for p in Placement::ALL {
            let arrow = compute_arrow_style(p, DEFAULT_ARROW_EDGE_OFFSET);
            assert_eq!(arrow.edge, p.side.opposite(), "{p}");
            let colored = Side::ALL
                .iter()
                .filter(|s| arrow.border(**s) == ArrowBorder::Colored)
                .count();
            assert_eq!(colored, 1, "{p}");
            assert_eq!(arrow.border(p.side.opposite()), ArrowBorder::Colored);
            assert_eq!(arrow.border(p.side), ArrowBorder::Transparent);
        }
    }

    #[test]
    fn bottom_placement_colors_top_border() {
        let arrow = compute_arrow_style(Placement::BOTTOM, 12.0);
        assert_eq!(arrow.border(Side::Top), ArrowBorder::Colored);
        assert_eq!(arrow.border(Side::Left), ArrowBorder::Transparent);
        assert_eq!(arrow.border(Side::Right), ArrowBorder::Transparent);
        assert_eq!(arrow.border(Side::Bottom), ArrowBorder::Transparent);
    }

    #[test]
    fn alignment_selects_offset() {
        assert_eq!(
            compute_arrow_style(Placement::TOP, 12.0).offset,
            ArrowOffset::Center
        );
        assert_eq!(
            compute_arrow_style(Placement::LEFT_START, 10.0).offset,
            ArrowOffset::FromStart(10.0)
        );
        assert_eq!(
            compute_arrow_style(Placement::RIGHT_END, 10.0).offset,
            ArrowOffset::FromEnd(10.0)
        );
    }

    #[test]
    fn base_center_along_edge() {
        let floating = Size::new(100.0, 40.0);
        let center = compute_arrow_style(Placement::BOTTOM, 12.0);
        assert_eq!(center.base_center(floating), Point::new(50.0, 0.0));
        let start = compute_arrow_style(Placement::TOP_START, 12.0);
        assert_eq!(start.base_center(floating), Point::new(18.0, 40.0));
        let end = compute_arrow_style(Placement::LEFT_END, 12.0).with_size(4.0);
        assert_eq!(end.base_center(floating), Point::new(100.0, 24.0));
    }

    #[test]
    fn triangle_tip_points_at_anchor() {
        let floating = Size::new(100.0, 40.0);
        // Floating below the anchor: tip goes up, above the floating element.
        let tri = compute_arrow_style(Placement::BOTTOM, 12.0).tip_triangle(floating);
        assert_eq!(tri[2], Point::new(50.0, -DEFAULT_ARROW_SIZE));
        // Floating left of the anchor: tip goes right, past the floating element.
        let tri = compute_arrow_style(Placement::LEFT, 12.0).tip_triangle(floating);
        assert_eq!(tri[2], Point::new(100.0 + DEFAULT_ARROW_SIZE, 20.0));
    }

    #[test]
    fn css_triangle_points_at_anchor() {
        let floating = Size::new(100.0, 40.0);
        for p in Placement::ALL {
            let arrow = compute_arrow_style(p, 12.0);
            let mut css = String::new();
            arrow.write_css(&mut css).unwrap();

            let is_colored = |s: &Side| css.contains(&format!("border-{s}-color"));
            assert_eq!(Side::ALL.iter().filter(|s| is_colored(*s)).count(), 1, "{p}: {css}");
            let colored = Side::ALL.into_iter().find(|s| is_colored(s)).unwrap();
            // A border triangle points away from its colored border.
            let css_tip = colored.opposite();
            assert_eq!(css_tip, tip_direction(&arrow, floating), "{p}: {css}");
            assert_eq!(css_tip, p.side.opposite(), "{p}");
            // The box hangs outside the edge and touches it.
            assert!(css.contains(&format!("{}: -12px;", arrow.edge)), "{p}: {css}");
        }
    }

    #[test]
    fn css_center_offset_uses_negative_margin() {
        let mut css = String::new();
        compute_arrow_style(Placement::RIGHT, 12.0)
            .write_css(&mut css)
            .unwrap();
        assert!(css.contains("left: -12px;"));
        assert!(css.contains("top: 50%; margin-top: -6px;"));
        assert!(css.contains("border-right-color: currentColor;"));
    }

    #[test]
    fn css_end_offset_uses_trailing_property() {
        let mut css = String::new();
        compute_arrow_style(Placement::BOTTOM_END, 16.0)
            .write_css(&mut css)
            .unwrap();
        assert!(css.contains("top: -12px;"));
        assert!(css.contains("right: 16px;"));
        assert!(css.contains("border-bottom-color: currentColor;"));
    }
}
