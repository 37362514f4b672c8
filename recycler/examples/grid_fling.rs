// Example: a photo-grid that fits its column count to the viewport, flung around.
use recycler::{
    HorizontalAlignment, Padding, ScrollOffset, Scroller, ScrollerOptions, Size, Spacing, ViewHost,
};

#[derive(Default)]
struct Thumbnails {
    live: usize,
    created: usize,
}

impl ViewHost for Thumbnails {
    type Handle = usize;

    fn create_view(&mut self, index: usize) -> usize {
        self.live += 1;
        self.created += 1;
        index
    }

    fn dispose_view(&mut self, _handle: usize) {
        self.live -= 1;
    }
}

fn main() {
    let options = ScrollerOptions::new(Size::new(96, 96))
        .with_match_container_width(true)
        .with_spacing(Spacing::new(8, 8))
        .with_padding(Padding::uniform(12))
        .with_horizontal_alignment(HorizontalAlignment::Center)
        .with_cache_capacity(32)
        .with_on_scroll(Some(|e: &recycler::ScrollEvent| {
            println!("on_scroll: y={:?} window={:?}", e.normalized.y, e.window);
        }));
    let mut s = match Scroller::new(options, Thumbnails::default()) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    let _ = s.set_viewport(Size::new(720, 1280));
    let _ = s.generate(10_000);
    println!(
        "items_per_row={} extent={:?} padding={:?}",
        s.items_per_row(),
        s.content_extent(),
        s.effective_padding()
    );

    let mut y = 0u64;
    for _ in 0..20 {
        y += 333;
        let _ = s.scroll(ScrollOffset::new(0, y));
    }
    let fling = s.scroll(ScrollOffset::new(0, 500_000));
    println!("fling rebuilt={} retired={}", fling.rebuilt, fling.retired);

    // Rotate the device: the column count changes and the grid is regenerated.
    let rotated = s.set_viewport(Size::new(1280, 720));
    println!(
        "rotated items_per_row={} created={} disposed={}",
        s.items_per_row(),
        rotated.created,
        rotated.disposed
    );
    println!(
        "live={} created={} stats={:?}",
        s.host().live,
        s.host().created,
        s.cache_stats()
    );
}
