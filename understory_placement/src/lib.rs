// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: Kurbo-native positioning for tooltips and popovers.
//!
//! Given an anchor rectangle, the size of a floating element, and the current
//! viewport, this crate decides where the floating element goes so that it stays
//! attached to the anchor and inside the visible area.
//!
//! - Twelve concrete placements (`top`, `top-start`, …, `right-end`) plus `auto`.
//! - **Flip**: swap to the opposite side when the requested side overflows.
//! - **Shift**: clamp into the viewport with a padding margin.
//! - **Arrow**: align a caret on the edge facing the anchor.
//!
//! Everything is pure, synchronous computation over `Copy` values. There is no
//! allocation, no I/O and no shared state, so the functions can be called from
//! anywhere, any number of times, with the same result for the same inputs.
//!
//! ## Coordinate spaces
//!
//! Anchor rectangles are **viewport-relative** (what a bounding-box query
//! returns). The [`Viewport`] carries the scroll offset, which the engine adds to
//! produce **document-space** results suitable for absolute positioning.
//! The floating element only contributes its [`Size`](kurbo::Size).
//!
//! ## Pipeline
//!
//! [`resolve`] runs the stages in order:
//!
//! 1) [`select_auto_placement`]: only for [`PlacementRequest::Auto`]; picks the
//!    side with the most room (ties: top, bottom, left, right) and centers on it.
//! 2) [`compute_primary`]: ideal position for the concrete placement.
//! 3) [`apply_flip`]: at most one swap to the opposite side on overflow.
//! 4) [`apply_shift`]: clamp each axis into the padded viewport.
//!
//! The result is a [`PositionResult`] with the document-space origin and the
//! placement actually used, which then feeds [`compute_arrow_style`].
//!
//! ## Not a layout engine
//!
//! This crate does not measure text, read rectangles from a live layout tree,
//! animate, or stack multiple overlays. Upstream code supplies rectangles;
//! downstream code applies the result.
//!
//! ## Trigger lifecycle
//!
//! The [`trigger`] module is an optional, geometry-free state machine for
//! show/hide delays (`Idle | PendingShow | Visible | PendingHide`) with mutual
//! cancellation. It owns no timers; callers pass the current time.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_placement::{
//!     Placement, PositionOptions, Side, Viewport, compute_arrow_style, resolve,
//! };
//!
//! let anchor = Rect::new(100.0, 100.0, 200.0, 120.0);
//! let floating = Size::new(40.0, 10.0);
//! let viewport = Viewport::from_size(1024.0, 768.0);
//!
//! let opts = PositionOptions::default().with_placement(Placement::BOTTOM);
//! let placed = resolve(anchor, floating, &viewport, &opts);
//! assert_eq!((placed.left(), placed.top()), (130.0, 128.0));
//!
//! let arrow = compute_arrow_style(placed.placement, 12.0);
//! assert_eq!(arrow.edge, Side::Top);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: emit `trace!` events for auto selection, flips, shifts and
//!   trigger transitions.
//!
//! ### Float semantics
//!
//! Inputs are assumed finite with non-negative sizes. Debug builds assert this;
//! release builds pass such values through without panicking.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod arrow;
pub mod auto;
pub mod flip;
pub mod primary;
pub mod resolve;
pub mod shift;
pub mod trigger;
pub mod types;

pub use arrow::{ArrowBorder, ArrowOffset, ArrowStyle, compute_arrow_style};
pub use auto::{SideSpace, available_space, select_auto_placement};
pub use flip::{Overflow, apply_flip, overflow};
pub use primary::compute_primary;
pub use resolve::{PositionOptions, Positioner, PositionerState, resolve, resolve_rect};
pub use shift::apply_shift;
pub use types::{
    Align, ParsePlacementError, Placement, PlacementRequest, PositionResult, Side, Viewport,
};
