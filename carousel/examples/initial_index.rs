// Example: start the carousel at a given item once its measurement is known.
use carousel::{CarouselOptions, ContainerGeometry, Measurement, ViewportState};

fn main() {
    let widths = [80.0; 12];
    let options = CarouselOptions::new()
        .with_initial_index(Some(5))
        .with_on_initialize(Some(|p: carousel::InitializePayload| {
            println!(
                "on_initialize: content_extent={} cross_extent={}",
                p.content_extent, p.cross_extent
            );
        }));

    let mut state: ViewportState = ViewportState::new(options);
    state.set_entries(0..widths.len() as u64);

    // First layout: only three items are realized yet, so no jump.
    let geometry = ContainerGeometry { content_extent: 200.0 };
    let jump = state.initialize(geometry, |i| (i < 3).then(|| Measurement::new(widths[i], 60.0)));
    println!("first pass: measured={} jump={jump:?}", state.cache().len());

    // Everything realized: the jump is emitted exactly once.
    let jump = state.initialize(geometry, |i| widths.get(i).map(|&w| Measurement::new(w, 60.0)));
    println!("second pass: measured={} jump={jump:?}", state.cache().len());
    if let Some(jump) = jump {
        state.set_offset_clamped(jump.target_offset);
    }
    println!("offset={} range={:?}", state.offset(), state.range());

    let jump = state.initialize(geometry, |_| None);
    println!("third pass: jump={jump:?}");
}
