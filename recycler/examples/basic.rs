// Example: drive the engine directly and watch slots being recycled.
use recycler::{FnDataSource, Recycler, RecyclerOptions, Size};

fn main() {
    let source = FnDataSource::new(1_000_000, |i| format!("Row #{i}"));
    let mut r = Recycler::new(RecyclerOptions::default());

    let outcome = r.reset(Size::new(320.0, 400.0), Some(&source));
    println!(
        "pool_size={} content_size={:?}",
        outcome.pool_size, outcome.content_size
    );
    println!("window={:?}", r.active_window());

    // Small scrolls accumulate until a whole row has passed.
    for (old, new) in [(0.0, 12.5), (12.5, 30.0), (30.0, 85.0)] {
        let t = r.apply_offset_delta(new, old, &source);
        println!("{old} -> {new}: {t:?} window={:?}", r.active_window());
    }

    // A fling far down the list reassigns every slot at once.
    let t = r.apply_offset_delta(2_000_000.0, 85.0, &source);
    println!("fling: {t:?} window={:?}", r.active_window());
    if let Some(slot) = r.slots().find(|s| !s.is_hidden()) {
        println!("first visible: {:?} {:?} at {:?}", slot.id(), slot.text(), slot.frame());
    }
}
