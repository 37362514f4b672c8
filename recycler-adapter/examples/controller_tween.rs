use recycler::{JumpPolicy, ScrollerOptions, Size, ViewHost};
use recycler_adapter::{Controller, Easing};

struct Labels;

impl ViewHost for Labels {
    type Handle = String;

    fn create_view(&mut self, index: usize) -> String {
        format!("row {index}")
    }

    fn dispose_view(&mut self, _handle: String) {}
}

fn main() {
    // Example: controller driving an animated jump without holding any UI objects.
    //
    // An adapter would:
    // - start a jump (e.g. in response to a "scroll to item" command)
    // - call tick(now_ms) in a frame loop / timer
    // - apply scroller().offset() to the real scroll container
    // - lay out the views listed in the returned update
    let mut c = match Controller::new(ScrollerOptions::new(Size::new(300, 24)), Labels) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let _ = c.on_viewport_size(Size::new(300, 480));
    let _ = c.scroller_mut().generate(10_000);

    let target = c.start_jump(2_000, JumpPolicy::Center, 0, 240, Easing::SmoothStep);
    println!("target_offset={target:?}");

    let mut now_ms = 0u64;
    while let Some(update) = c.tick(now_ms) {
        if now_ms % 80 == 0 {
            println!(
                "t={now_ms} off={:?} window={:?} rebuilt={}",
                c.scroller().offset(),
                update.window,
                update.rebuilt
            );
        }
        now_ms += 16;
    }

    println!(
        "done: off={:?} first={:?}",
        c.scroller().offset(),
        c.scroller().active_indices().next()
    );
}
