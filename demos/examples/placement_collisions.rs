// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision handling: flip, shift, and auto.
//!
//! Shows how the resolver reacts near viewport edges and on a scrolled page.
//!
//! Run:
//! - `cargo run -p understory_demos --example placement_collisions`

use kurbo::{Rect, Size, Vec2};
use understory_placement::{
    Placement, PlacementRequest, PositionOptions, Side, Viewport, overflow, resolve,
};

fn main() {
    let viewport = Viewport::from_size(1024.0, 768.0);

    // Near the top edge: `top` has no room and flips to `bottom`.
    let anchor = Rect::new(100.0, 5.0, 200.0, 25.0);
    let floating = Size::new(40.0, 50.0);
    let opts = PositionOptions::default().with_placement(Placement::TOP);
    let placed = resolve(anchor, floating, &viewport, &opts);
    println!("== Flip ==\n  {placed:?}");
    assert_eq!(placed.placement, Placement::BOTTOM);
    assert_eq!(placed.top(), 33.0);

    // Same anchor with flip off: stays on top, shift pulls it down to the padding.
    let placed = resolve(anchor, floating, &viewport, &opts.with_flip(false));
    println!("== No flip, shift only ==\n  {placed:?}");
    assert_eq!(placed.placement, Placement::TOP);
    assert_eq!(placed.top(), 8.0);

    // Wider than the viewport: pinned to the start edge plus padding.
    let narrow = Viewport::from_size(200.0, 600.0);
    let opts = PositionOptions::default().with_placement(Placement::BOTTOM);
    let placed = resolve(
        Rect::new(0.0, 100.0, 40.0, 120.0),
        Size::new(300.0, 40.0),
        &narrow,
        &opts,
    );
    println!("== Shift (oversized) ==\n  {placed:?}");
    assert_eq!(placed.left(), 8.0);

    // Auto picks the roomiest side.
    let opts = PositionOptions::default().with_placement(PlacementRequest::Auto);
    let tall_left = Rect::new(10.0, 20.0, 60.0, 740.0);
    let placed = resolve(tall_left, Size::new(120.0, 40.0), &viewport, &opts);
    println!("== Auto ==\n  {placed:?}");
    assert_eq!(placed.placement.side, Side::Right);

    // Scrolled page: anchor rects stay viewport-relative, results are document space.
    let scrolled = Viewport::new(viewport.size, Vec2::new(0.0, 1500.0));
    let anchor = Rect::new(300.0, 700.0, 380.0, 730.0);
    let floating = Size::new(180.0, 60.0);
    let opts = PositionOptions::default().with_placement(Placement::BOTTOM_START);
    let placed = resolve(anchor, floating, &scrolled, &opts);
    println!("== Scrolled ==\n  {placed:?}");
    assert_eq!(placed.placement, Placement::TOP_START);
    assert!(overflow(placed.rect(floating), &scrolled).is_empty());
}
