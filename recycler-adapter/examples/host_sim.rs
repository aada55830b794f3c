use std::sync::Arc;

use recycler::{DataSource, Size};
use recycler_adapter::Controller;

fn main() {
    // Example: a host scroll container forwarding layout and scroll notifications.
    //
    // The host would:
    // - call set_frame on layout
    // - call set_content_offset on every scroll event
    // - create one view per slot id and move/retitle/hide it after each call
    let rows: Vec<String> = (0..500).map(|i| format!("Item {i}")).collect();
    let source: Arc<dyn DataSource> = Arc::new(rows);

    let mut c = Controller::default();
    c.set_frame(Size::new(375.0, 667.0));
    c.set_data_source(Some(&source));
    println!(
        "content_size={:?} pool_size={}",
        c.content_size(),
        c.engine().pool_size()
    );

    for offset in [10.0, 45.0, 120.0, 90.0, 15_000.0] {
        let t = c.set_content_offset(offset);
        println!(
            "offset={offset} transfer={t:?} visible={:?}",
            c.engine().visible_rows()
        );
    }

    c.for_each_cell(|cell| {
        if !cell.is_hidden() && cell.row() % 5 == 0 {
            println!("{:?} y={} {}", cell.id(), cell.frame().y, cell.text());
        }
    });

    // Rotation changes the frame and rebuilds the pool around the current offset.
    c.set_frame(Size::new(667.0, 375.0));
    println!("after rotation: window={:?}", c.engine().active_window());
}
