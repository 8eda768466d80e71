use carousel::{CarouselOptions, ContainerGeometry, Measurement, ScrollEvent};
use carousel_adapter::Controller;

fn main() {
    // Example: a simulated host driving the controller without holding any UI objects.
    //
    // A host would:
    // - call on_resize after layout, with a probe reporting each item's realized width
    // - forward every scroll event to on_scroll
    // - call tick() once per frame and render the entries
    // - hand previous()/next() results to its smooth-scroll primitive
    let cards: Vec<String> = (0..40).map(|i| format!("card {i}")).collect();
    let mut c = Controller::new_with_key(CarouselOptions::new(), |s: &String| s.clone());
    c.set_items(cards);

    let width_of = |i: usize| 60.0 + (i % 4) as f64 * 15.0;
    c.on_resize(ContainerGeometry { content_extent: 320.0 }, |i| {
        (i < 40).then(|| Measurement::new(width_of(i), 180.0))
    });

    let track = c.state().track_extent();
    let mut raw = 0.0;
    for frame in 0..6 {
        // Several scroll events per frame; only the last one is applied.
        for _ in 0..3 {
            raw += 45.0;
            c.on_scroll(ScrollEvent::new(320.0, raw, track));
        }
        let offset = c.tick();
        let mut visible = Vec::new();
        c.for_each_entry(|e| visible.push(e.item.as_str()));
        println!("frame={frame} offset={offset:?} rendered={visible:?}");
    }

    println!("controls={:?}", c.controls());
    println!("next={:?}", c.next());
    println!("previous={:?}", c.previous());
}
