// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement resolver: auto → primary → flip → shift.
//!
//! ## Pipeline
//!
//! 1) If the request is [`PlacementRequest::Auto`], pick the roomiest side with
//!    [`select_auto_placement`] and center on it.
//! 2) Compute the unconstrained position with [`compute_primary`].
//! 3) If `flip` is on, [`apply_flip`] may swap to the opposite side (once).
//! 4) If `shift` is on, [`apply_shift`] clamps the position into the viewport.
//!
//! The resolver never fails. Degenerate input (zero-sized rects, a viewport
//! smaller than the floating element) still produces a clamped, best-effort
//! position.

use kurbo::{Rect, Size};

use crate::auto::select_auto_placement;
use crate::flip::apply_flip;
use crate::primary::compute_primary;
use crate::shift::apply_shift;
use crate::types::{Placement, PlacementRequest, PositionResult, Viewport, debug_check_geometry};

/// Default gap between anchor and floating element.
pub const DEFAULT_OFFSET: f64 = 8.0;

/// Default margin kept between the floating element and the viewport edges.
pub const DEFAULT_PADDING: f64 = 8.0;

/// Options for a single resolution.
///
/// The defaults place the element on top, 8px away, with flip and shift on
/// and 8px of viewport padding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionOptions {
    /// Requested placement, or `Auto`.
    pub placement: PlacementRequest,
    /// Gap between anchor and floating element along the side axis.
    pub offset: f64,
    /// Swap to the opposite side when the requested side overflows.
    pub flip: bool,
    /// Clamp the final position into the viewport.
    pub shift: bool,
    /// Margin kept from the viewport edges when shifting.
    pub padding: f64,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            placement: PlacementRequest::default(),
            offset: DEFAULT_OFFSET,
            flip: true,
            shift: true,
            padding: DEFAULT_PADDING,
        }
    }
}

impl PositionOptions {
    /// Set the requested placement.
    pub fn with_placement(mut self, placement: impl Into<PlacementRequest>) -> Self {
        self.placement = placement.into();
        self
    }

    /// Set the anchor gap.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Enable or disable flipping.
    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Enable or disable shifting.
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// Set the viewport padding used by shift.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }
}

/// Resolve where the floating element goes.
///
/// `anchor` is viewport-relative (as returned by a bounding-box query);
/// the result is in document coordinates.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_placement::{Placement, PositionOptions, Viewport, resolve};
///
/// let anchor = Rect::new(100.0, 5.0, 200.0, 25.0);
/// let vp = Viewport::from_size(1024.0, 768.0);
/// let opts = PositionOptions::default().with_placement(Placement::TOP);
///
/// // No room above: flips below the anchor.
/// let r = resolve(anchor, Size::new(40.0, 50.0), &vp, &opts);
/// assert_eq!(r.placement, Placement::BOTTOM);
/// assert_eq!(r.top(), 33.0);
/// ```
pub fn resolve(
    anchor: Rect,
    floating: Size,
    viewport: &Viewport,
    options: &PositionOptions,
) -> PositionResult {
    debug_check_geometry(anchor, floating, viewport);

    let placement = match options.placement {
        PlacementRequest::Exact(p) => p,
        PlacementRequest::Auto => {
            let side = select_auto_placement(anchor, viewport);
            #[cfg(feature = "tracing")]
            tracing::trace!(%side, "auto placement");
            Placement::centered(side)
        }
    };

    let origin = compute_primary(anchor, floating, placement, options.offset, viewport);
    let mut result = if options.flip {
        apply_flip(anchor, floating, placement, options.offset, viewport, origin)
    } else {
        PositionResult {
            origin,
            placement,
            flipped: false,
        }
    };

    if options.shift {
        result.origin = apply_shift(result.origin, floating, viewport, options.padding);
    }
    result
}

/// Like [`resolve`], taking the floating element's current rect; only its size is used.
pub fn resolve_rect(
    anchor: Rect,
    floating: Rect,
    viewport: &Viewport,
    options: &PositionOptions,
) -> PositionResult {
    resolve(anchor, floating.size(), viewport, options)
}

/// Lifecycle of a [`Positioner`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum PositionerState {
    /// Nothing placed (floating element hidden).
    #[default]
    Idle,
    /// Placed with the given result.
    Placed(PositionResult),
}

/// Tracks the placement of one floating element across recomputations.
///
/// Call [`update`](Self::update) on show, scroll and resize. It returns the new
/// result only when it differs from the last one, so callers can skip
/// redundant style writes. Call [`reset`](Self::reset) when the element hides.
///
/// ```
/// use kurbo::{Rect, Size, Vec2};
/// use understory_placement::{PositionOptions, Positioner, Viewport};
///
/// let mut p = Positioner::new(PositionOptions::default());
/// let anchor = Rect::new(100.0, 100.0, 200.0, 120.0);
/// let floating = Size::new(40.0, 10.0);
/// let vp = Viewport::from_size(800.0, 600.0);
///
/// assert!(p.update(anchor, floating, &vp).is_some());
/// // Same inputs: nothing to do.
/// assert!(p.update(anchor, floating, &vp).is_none());
/// // Scrolled: the anchor moved in document space.
/// let scrolled = Viewport::new(vp.size, Vec2::new(0.0, 40.0));
/// assert!(p.update(anchor, floating, &scrolled).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Positioner {
    options: PositionOptions,
    state: PositionerState,
}

impl Positioner {
    /// Create an idle positioner with the given options.
    pub fn new(options: PositionOptions) -> Self {
        Self {
            options,
            state: PositionerState::Idle,
        }
    }

    /// Current options.
    pub fn options(&self) -> &PositionOptions {
        &self.options
    }

    /// Replace the options. The next [`update`](Self::update) always reports a result.
    pub fn set_options(&mut self, options: PositionOptions) {
        self.options = options;
        self.state = PositionerState::Idle;
    }

    /// Current state.
    pub fn state(&self) -> PositionerState {
        self.state
    }

    /// The last placed result, if any.
    pub fn current(&self) -> Option<PositionResult> {
        match self.state {
            PositionerState::Idle => None,
            PositionerState::Placed(r) => Some(r),
        }
    }

    /// Re-resolve with fresh geometry. Returns the result if it changed.
    pub fn update(
        &mut self,
        anchor: Rect,
        floating: Size,
        viewport: &Viewport,
    ) -> Option<PositionResult> {
        let next = resolve(anchor, floating, viewport, &self.options);
        if self.current() == Some(next) {
            return None;
        }
        self.state = PositionerState::Placed(next);
        Some(next)
    }

    /// Forget the last placement.
    pub fn reset(&mut self) {
        self.state = PositionerState::Idle;
    }
}
