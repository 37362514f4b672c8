// Example: a recycled list driven by scroll events, printing the view lifecycle.
use recycler::{JumpPolicy, ScrollOffset, Scroller, ScrollerOptions, Side, Size, ViewHost};

struct PrintHost {
    next_id: u32,
}

impl ViewHost for PrintHost {
    type Handle = u32;

    fn create_view(&mut self, index: usize) -> u32 {
        self.next_id += 1;
        println!("create   #{} for item {index}", self.next_id);
        self.next_id
    }

    fn dispose_view(&mut self, handle: u32) {
        println!("dispose  #{handle}");
    }

    fn on_become_visible(&mut self, handle: &mut u32, index: usize, side: Side) {
        println!("visible  #{handle} as item {index} ({side:?})");
    }

    fn on_become_invisible(&mut self, handle: &mut u32, index: usize, side: Side) {
        println!("hidden   #{handle} was item {index} ({side:?})");
    }
}

fn main() {
    let options = ScrollerOptions::new(Size::new(320, 50)).with_cache_capacity(4);
    let mut s = match Scroller::new(options, PrintHost { next_id: 0 }) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    let _ = s.set_viewport(Size::new(320, 200));
    let update = s.generate(1_000);
    println!("generated: {update:?}");

    for y in [30, 100, 180] {
        let update = s.scroll(ScrollOffset::new(0, y));
        println!(
            "scroll y={y}: window={:?} created={} reused={} padding={:?}",
            update.window, update.created, update.reused, update.padding
        );
    }

    let update = s.jump_to(999, JumpPolicy::Center);
    println!("jump: rebuilt={} offset={:?}", update.rebuilt, s.offset());
    println!("stats: {:?}", s.cache_stats());

    let _ = s.into_host();
}
