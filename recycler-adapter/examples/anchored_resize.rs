use recycler::{ScrollOffset, ScrollerOptions, Size, ViewHost};
use recycler_adapter::Controller;

struct Messages;

impl ViewHost for Messages {
    type Handle = usize;

    fn create_view(&mut self, index: usize) -> usize {
        index
    }

    fn dispose_view(&mut self, _handle: usize) {}
}

fn main() {
    // Example: a feed that grows while the reader is scrolled into it.
    let mut c = match Controller::new(ScrollerOptions::new(Size::new(400, 60)), Messages) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let _ = c.on_viewport_size(Size::new(400, 600));
    let _ = c.scroller_mut().generate(200);
    let _ = c.on_scroll(ScrollOffset::new(0, 4_230));

    let before = c.capture_first_visible_anchor();
    println!("before: anchor={before:?} offset={:?}", c.scroller().offset());

    let update = c.resize_anchored(500);
    println!(
        "after:  anchor={:?} offset={:?} created={} disposed={}",
        c.capture_first_visible_anchor(),
        c.scroller().offset(),
        update.created,
        update.disposed
    );
}
