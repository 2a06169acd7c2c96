// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip lifecycle.
//!
//! Drives the show/hide delay state machine with a scripted timeline of pointer
//! events, and repositions with a `Positioner` while visible (including during
//! a scroll).
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_lifecycle`

use std::time::Duration;

use kurbo::{Rect, Size, Vec2};
use understory_placement::trigger::{TriggerConfig, TriggerEvent, TriggerState};
use understory_placement::{Placement, PositionOptions, Positioner, Viewport};

#[derive(Copy, Clone, Debug)]
enum Input {
    Enter,
    Leave,
    Scroll(f64),
}

fn main() {
    let ms = Duration::from_millis;
    let mut trigger = TriggerState::new(TriggerConfig {
        show_delay: ms(300),
        hide_delay: ms(100),
    });
    let mut positioner =
        Positioner::new(PositionOptions::default().with_placement(Placement::BOTTOM));

    // Document-space anchor rect; converted to viewport-relative before each update.
    let anchor_doc = Rect::new(500.0, 400.0, 580.0, 430.0);
    let floating = Size::new(200.0, 60.0);
    let mut viewport = Viewport::from_size(1024.0, 768.0);

    let script = [
        (ms(0), Input::Enter),
        (ms(120), Input::Leave), // leaves before the show delay: nothing shows
        (ms(200), Input::Enter),
        (ms(700), Input::Scroll(250.0)),
        (ms(900), Input::Leave),
        (ms(950), Input::Enter), // comes back within the hide delay: stays visible
        (ms(1500), Input::Leave),
    ];

    let mut shows = 0;
    let mut hides = 0;
    let mut events = script.iter().peekable();
    let mut now = ms(0);
    while now <= ms(2000) {
        while let Some(&&(at, input)) = events.peek() {
            if at > now {
                break;
            }
            events.next();
            let ev = match input {
                Input::Enter => trigger.request_show(now),
                Input::Leave => trigger.request_hide(now),
                Input::Scroll(y) => {
                    viewport.scroll = Vec2::new(0.0, y);
                    if trigger.is_visible() {
                        let anchor = anchor_doc - viewport.scroll;
                        if let Some(r) = positioner.update(anchor, floating, &viewport) {
                            println!("{:>5}ms  reposition after scroll: {r:?}", now.as_millis());
                        }
                    }
                    None
                }
            };
            println!("{:>5}ms  {input:?} -> {:?}", now.as_millis(), trigger.phase());
            handle(ev, now, &mut shows, &mut hides);
        }

        let ev = trigger.tick(now);
        if ev == Some(TriggerEvent::Show) {
            let anchor = anchor_doc - viewport.scroll;
            let r = positioner.update(anchor, floating, &viewport);
            println!("{:>5}ms  placed: {r:?}", now.as_millis());
        }
        if ev == Some(TriggerEvent::Hide) {
            positioner.reset();
        }
        handle(ev, now, &mut shows, &mut hides);
        now += ms(50);
    }

    // Teardown with nothing pending is a no-op.
    assert_eq!(trigger.teardown(), None);
    assert_eq!((shows, hides), (1, 1));
}

fn handle(ev: Option<TriggerEvent>, now: Duration, shows: &mut u32, hides: &mut u32) {
    match ev {
        Some(TriggerEvent::Show) => {
            *shows += 1;
            println!("{:>5}ms  SHOW", now.as_millis());
        }
        Some(TriggerEvent::Hide) => {
            *hides += 1;
            println!("{:>5}ms  HIDE", now.as_millis());
        }
        None => {}
    }
}
