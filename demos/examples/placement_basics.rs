// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics.
//!
//! Resolve every concrete placement around one anchor, then compute the arrow
//! style for each and print the CSS a web renderer would apply.
//!
//! Run:
//! - `cargo run -p understory_demos --example placement_basics`

use kurbo::{Rect, Size};
use understory_placement::{Placement, PositionOptions, Viewport, compute_arrow_style, resolve};

fn main() {
    let viewport = Viewport::from_size(1024.0, 768.0);
    let anchor = Rect::new(400.0, 300.0, 520.0, 332.0);
    let floating = Size::new(160.0, 48.0);

    println!("== Placements around {anchor:?} ==");
    for placement in Placement::ALL {
        let opts = PositionOptions::default().with_placement(placement);
        let placed = resolve(anchor, floating, &viewport, &opts);
        // Plenty of room everywhere: nothing flips.
        assert_eq!(placed.placement, placement);

        let mut css = String::new();
        compute_arrow_style(placed.placement, 12.0)
            .write_css(&mut css)
            .unwrap();
        println!(
            "  {:<12} left={:>6.1} top={:>6.1}  arrow: {}",
            placement.to_string(),
            placed.left(),
            placed.top(),
            css
        );
    }

    // The reference case: bottom/center with an 8px gap.
    let opts = PositionOptions::default().with_placement(Placement::BOTTOM);
    let placed = resolve(
        Rect::new(100.0, 100.0, 200.0, 120.0),
        Size::new(40.0, 10.0),
        &viewport,
        &opts,
    );
    assert_eq!((placed.left(), placed.top()), (130.0, 128.0));
}
