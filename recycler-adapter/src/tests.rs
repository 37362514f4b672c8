use crate::*;

use recycler::{JumpPolicy, ScrollOffset, Scroller, ScrollerOptions, Size, ViewHost};
use std::vec::Vec;

/// Counts live views; handles are just the index they were created for.
#[derive(Debug, Default)]
struct CountingHost {
    live: usize,
    scrolled_to: Vec<recycler::NormalizedPosition>,
}

impl ViewHost for CountingHost {
    type Handle = usize;

    fn create_view(&mut self, index: usize) -> usize {
        self.live += 1;
        index
    }

    fn dispose_view(&mut self, _handle: usize) {
        self.live -= 1;
    }

    fn scroll_to_normalized(&mut self, position: recycler::NormalizedPosition) {
        self.scrolled_to.push(position);
    }
}

fn list(total: usize) -> Controller<CountingHost> {
    let options = ScrollerOptions::new(Size::new(100, 10));
    let mut c = Controller::new(options, CountingHost::default()).unwrap();
    let _ = c.on_viewport_size(Size::new(100, 100));
    let _ = c.scroller_mut().generate(total);
    c
}

#[test]
fn tween_lands_on_target() {
    let tween = Tween::new(
        ScrollOffset::new(0, 100),
        ScrollOffset::new(50, 0),
        10,
        100,
        Easing::EaseInOutCubic,
    );
    assert_eq!(tween.sample(0), ScrollOffset::new(0, 100));
    assert_eq!(tween.sample(60), ScrollOffset::new(25, 50));
    assert_eq!(tween.sample(110), ScrollOffset::new(50, 0));
    assert!(tween.is_done(110));
    assert!(!tween.is_done(109));
}

#[test]
fn default_easing_is_smooth_step() {
    let tween = Tween::new(
        ScrollOffset::default(),
        ScrollOffset::new(0, 1000),
        0,
        100,
        Easing::default(),
    );
    assert_eq!(Easing::default(), Easing::SmoothStep);
    // 0.25^2 * (3 - 0.5) = 0.15625
    assert_eq!(tween.sample(25), ScrollOffset::new(0, 156));
    assert_eq!(tween.sample(50), ScrollOffset::new(0, 500));
}

#[test]
fn controller_animated_jump_drives_scroller() {
    let mut c = list(1000);
    let to = c
        .start_jump(500, JumpPolicy::Center, 0, 100, Easing::default())
        .unwrap();
    assert_eq!(to, ScrollOffset::new(0, 5005 - 50));
    assert!(c.is_animating());

    let mut last = 0u64;
    for now_ms in [0u64, 10, 20, 40, 80, 100, 120] {
        if let Some(update) = c.tick(now_ms) {
            let off = c.scroller().offset().y;
            assert!(off >= last);
            assert_eq!(update.window, c.scroller().window());
            last = off;
        }
    }
    assert!(!c.is_animating());
    assert_eq!(c.scroller().offset(), to);
    assert!(c.scroller().handle(500).is_some());
}

#[test]
fn user_scroll_cancels_animation() {
    let mut c = list(1000);
    let _ = c.start_jump(900, JumpPolicy::BringOnScreen, 0, 100, Easing::Linear);
    let _ = c.tick(50);
    let _ = c.on_scroll(ScrollOffset::new(0, 30));
    assert!(!c.is_animating());
    assert_eq!(c.tick(60), None);
    assert_eq!(c.scroller().offset().y, 30);
}

#[test]
fn start_jump_to_visible_item_does_nothing() {
    let mut c = list(1000);
    assert_eq!(
        c.start_jump(3, JumpPolicy::BringOnScreen, 0, 100, Easing::Linear),
        None
    );
    assert!(!c.is_animating());
}

#[test]
fn immediate_jump_asks_host_to_scroll() {
    let mut c = list(1000);
    let update = c.jump_to(200, JumpPolicy::BringOnScreen);
    assert!(update.rebuilt);
    assert_eq!(c.scroller().host().scrolled_to.len(), 1);
    assert_eq!(c.scroller().window().unwrap().last_row, 200);
}

#[test]
fn anchor_survives_prepend() {
    let mut s = Scroller::new(
        ScrollerOptions::new(Size::new(100, 10)),
        CountingHost::default(),
    )
    .unwrap();
    let _ = s.set_viewport(Size::new(100, 100));
    let _ = s.generate(100);
    let _ = s.scroll(ScrollOffset::new(0, 503));

    let anchor = capture_first_visible_anchor(&s).unwrap();
    assert_eq!(anchor.index, 50);
    assert_eq!(anchor.offset_in_cell, ScrollOffset::new(0, 3));

    // Ten items inserted above: the old item 50 is now 60.
    let _ = s.resize(110);
    let update = apply_anchor(&mut s, &anchor, |i| Some(i + 10)).unwrap();
    assert_eq!(s.offset().y, 603);
    assert_eq!(update.window.unwrap().first_row, 60);
    assert!(apply_anchor(&mut s, &anchor, |_| None).is_none());
}

#[test]
fn resize_anchored_keeps_first_visible_item() {
    let options = ScrollerOptions::grid(Size::new(10, 10), 4);
    let mut c = Controller::new(options, CountingHost::default()).unwrap();
    let _ = c.on_viewport_size(Size::new(40, 50));
    let _ = c.scroller_mut().generate(200);
    let _ = c.on_scroll(ScrollOffset::new(0, 205));

    let before = c.capture_first_visible_anchor().unwrap();
    assert_eq!(before.index, 80);

    let update = c.resize_anchored(300);
    assert!(update.rebuilt);
    assert_eq!(c.capture_first_visible_anchor(), Some(before));

    // Shrinking below the anchor: the last item is anchored, clamped to the end of the content.
    let _ = c.resize_anchored(30);
    assert_eq!(c.scroller().offset().y, 80 - 50);
    assert!(c.scroller().handle(29).is_some());
    assert_eq!(c.capture_first_visible_anchor().unwrap().index, 12);

    // Everything fits: back to the top.
    let _ = c.resize_anchored(10);
    assert_eq!(c.scroller().offset(), ScrollOffset::default());
    assert_eq!(c.scroller().active_indices().count(), 10);
}

#[test]
fn into_scroller_host_disposes_everything() {
    let mut c = list(1000);
    let _ = c.on_scroll(ScrollOffset::new(0, 5000));
    let host = c.into_scroller().into_host();
    assert_eq!(host.live, 0);
}
