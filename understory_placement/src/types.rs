// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: sides, alignments, placements, the viewport, and results.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size, Vec2};

/// One side of the anchor that the floating element can sit on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

impl Side {
    /// All sides in auto-placement preference order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// The side across the anchor (`Top` ↔ `Bottom`, `Left` ↔ `Right`).
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// True for `Top` and `Bottom`, whose cross axis is horizontal.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Lowercase CSS-style name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alignment of the floating element along the anchor's cross axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Align {
    /// Leading edges line up (left for vertical sides, top for horizontal sides).
    Start,
    /// Centers line up.
    #[default]
    Center,
    /// Trailing edges line up.
    End,
}

/// A concrete placement: a [`Side`] plus an [`Align`].
///
/// There are twelve of these. Names follow the usual CSS-ish convention:
/// a bare side (`"bottom"`) means [`Align::Center`], and `"-start"` / `"-end"`
/// suffixes select the other alignments.
///
/// ```
/// use understory_placement::{Align, Placement, Side};
///
/// let p: Placement = "left-end".parse().unwrap();
/// assert_eq!(p, Placement::new(Side::Left, Align::End));
/// assert_eq!(p.flipped().to_string(), "right-end");
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Placement {
    /// Side of the anchor the floating element sits on.
    pub side: Side,
    /// Cross-axis alignment against the anchor.
    pub align: Align,
}

impl Placement {
    /// `top`
    pub const TOP: Self = Self::centered(Side::Top);
    /// `top-start`
    pub const TOP_START: Self = Self::new(Side::Top, Align::Start);
    /// `top-end`
    pub const TOP_END: Self = Self::new(Side::Top, Align::End);
    /// `bottom`
    pub const BOTTOM: Self = Self::centered(Side::Bottom);
    /// `bottom-start`
    pub const BOTTOM_START: Self = Self::new(Side::Bottom, Align::Start);
    /// `bottom-end`
    pub const BOTTOM_END: Self = Self::new(Side::Bottom, Align::End);
    /// `left`
    pub const LEFT: Self = Self::centered(Side::Left);
    /// `left-start`
    pub const LEFT_START: Self = Self::new(Side::Left, Align::Start);
    /// `left-end`
    pub const LEFT_END: Self = Self::new(Side::Left, Align::End);
    /// `right`
    pub const RIGHT: Self = Self::centered(Side::Right);
    /// `right-start`
    pub const RIGHT_START: Self = Self::new(Side::Right, Align::Start);
    /// `right-end`
    pub const RIGHT_END: Self = Self::new(Side::Right, Align::End);

    /// Every concrete placement.
    pub const ALL: [Self; 12] = [
        Self::TOP,
        Self::TOP_START,
        Self::TOP_END,
        Self::BOTTOM,
        Self::BOTTOM_START,
        Self::BOTTOM_END,
        Self::LEFT,
        Self::LEFT_START,
        Self::LEFT_END,
        Self::RIGHT,
        Self::RIGHT_START,
        Self::RIGHT_END,
    ];

    /// Create a placement from a side and alignment.
    pub const fn new(side: Side, align: Align) -> Self {
        Self { side, align }
    }

    /// The center-aligned placement on `side`.
    pub const fn centered(side: Side) -> Self {
        Self::new(side, Align::Center)
    }

    /// Same alignment on the opposite side.
    pub const fn flipped(self) -> Self {
        Self::new(self.side.opposite(), self.align)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.side.as_str())?;
        match self.align {
            Align::Start => f.write_str("-start"),
            Align::Center => Ok(()),
            Align::End => f.write_str("-end"),
        }
    }
}

/// Error returned when a placement name is not recognized.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParsePlacementError {
    /// The side part was not one of `top`, `bottom`, `left`, `right`.
    #[error("unknown placement side")]
    UnknownSide,
    /// The suffix after the side was not `-start` or `-end`.
    #[error("unknown placement alignment")]
    UnknownAlign,
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (side, rest) = s.split_once('-').unwrap_or((s, ""));
        let side = match side {
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            _ => return Err(ParsePlacementError::UnknownSide),
        };
        let align = match (s.len() == side.as_str().len(), rest) {
            (true, _) => Align::Center,
            (false, "start") => Align::Start,
            (false, "end") => Align::End,
            _ => return Err(ParsePlacementError::UnknownAlign),
        };
        Ok(Self::new(side, align))
    }
}

/// A requested placement: either a concrete [`Placement`] or `Auto`.
///
/// `Auto` picks the side with the most room (see
/// [`select_auto_placement`](crate::auto::select_auto_placement)) and always
/// centers along it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PlacementRequest {
    /// Let the resolver choose the roomiest side.
    Auto,
    /// Use this placement (subject to flipping).
    Exact(Placement),
}

impl Default for PlacementRequest {
    fn default() -> Self {
        Self::Exact(Placement::TOP)
    }
}

impl From<Placement> for PlacementRequest {
    fn from(placement: Placement) -> Self {
        Self::Exact(placement)
    }
}

impl fmt::Display for PlacementRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Exact(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl FromStr for PlacementRequest {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "auto" {
            Ok(Self::Auto)
        } else {
            s.parse().map(Self::Exact)
        }
    }
}

/// The visible scrolling window.
///
/// `size` is the visible area; `scroll` is how far the document is scrolled,
/// which is also the document-space origin of the visible area.
/// Read this fresh for every computation; a scroll or resize invalidates it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Visible width and height.
    pub size: Size,
    /// Horizontal and vertical scroll offset.
    pub scroll: Vec2,
}

impl Viewport {
    /// Create a viewport from its visible size and scroll offset.
    pub const fn new(size: Size, scroll: Vec2) -> Self {
        Self { size, scroll }
    }

    /// An unscrolled viewport of the given size.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(Size::new(width, height), Vec2::ZERO)
    }

    /// The visible area in document coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.scroll.to_point(), self.size)
    }
}

/// Output of the resolver: where to put the floating element and which
/// placement was actually used.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionResult {
    /// Document-space top-left corner of the floating element.
    pub origin: Point,
    /// The concrete placement after auto resolution and any flip.
    pub placement: Placement,
    /// Whether the flip strategy swapped the requested side.
    pub flipped: bool,
}

impl PositionResult {
    /// CSS `top` in document coordinates.
    pub fn top(&self) -> f64 {
        self.origin.y
    }

    /// CSS `left` in document coordinates.
    pub fn left(&self) -> f64 {
        self.origin.x
    }

    /// The placed floating rectangle in document coordinates.
    pub fn rect(&self, floating: Size) -> Rect {
        Rect::from_origin_size(self.origin, floating)
    }
}

/// Debug-only check that geometry is finite and sizes are non-negative.
///
/// Release builds pass such inputs through untouched.
#[inline]
pub(crate) fn debug_check_geometry(anchor: Rect, floating: Size, viewport: &Viewport) {
    debug_assert!(
        anchor.x0.is_finite()
            && anchor.y0.is_finite()
            && anchor.x1.is_finite()
            && anchor.y1.is_finite(),
        "anchor rect must be finite: {anchor:?}"
    );
    debug_assert!(
        anchor.width() >= 0.0 && anchor.height() >= 0.0,
        "anchor rect must have non-negative size: {anchor:?}"
    );
    debug_assert!(
        floating.is_finite() && floating.width >= 0.0 && floating.height >= 0.0,
        "floating size must be finite and non-negative: {floating:?}"
    );
    debug_assert!(
        viewport.size.is_finite() && viewport.scroll.is_finite(),
        "viewport must be finite: {viewport:?}"
    );
}
