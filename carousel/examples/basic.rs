// Example: measure a track, scroll it, and page with the previous/next targets.
use carousel::{
    CarouselOptions, ContainerGeometry, Measurement, ScrollDirection, ScrollEvent, ViewportState,
};

fn main() {
    let widths = [50.0, 30.0, 70.0, 20.0, 90.0, 40.0, 60.0];

    let mut state: ViewportState = ViewportState::new(CarouselOptions::new());
    state.set_entries(0..widths.len() as u64);
    state.initialize(ContainerGeometry { content_extent: 100.0 }, |i| {
        widths.get(i).map(|&w| Measurement::new(w, 120.0))
    });
    println!(
        "track_extent={} cross_extent={}",
        state.track_extent(),
        state.cross_extent()
    );

    let event = ScrollEvent::new(state.viewport_extent(), 95.0, state.track_extent());
    state.update_offset(event);
    println!("offset={} range={:?}", state.offset(), state.range());

    let mut items = Vec::new();
    state.collect_virtual_items(&mut items);
    for it in &items {
        println!("  #{} at {} (size {})", it.index, it.offset, it.size);
    }

    println!("previous={:?}", state.scroll_to(ScrollDirection::Backward));
    println!("next={:?}", state.scroll_to(ScrollDirection::Forward));
    println!("controls={:?}", state.control_visibility());
}
