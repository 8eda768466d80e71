use crate::*;

use alloc::string::String;
use alloc::vec::Vec;
use carousel::{
    CarouselOptions, ContainerGeometry, ControlVisibility, Measurement, ScrollEvent, ScrollTo,
};
use std::collections::HashMap;

const SIZES: [f64; 4] = [50.0, 30.0, 70.0, 20.0];

fn geometry(content_extent: f64) -> ContainerGeometry {
    ContainerGeometry { content_extent }
}

fn probe(sizes: &[f64]) -> impl FnMut(usize) -> Option<Measurement> + '_ {
    |i| sizes.get(i).map(|&size| Measurement::new(size, 120.0))
}

fn scroll_event(c: &Controller<&'static str>, raw_offset: f64) -> ScrollEvent {
    ScrollEvent::new(
        c.state().viewport_extent(),
        raw_offset,
        c.state().track_extent(),
    )
}

fn rendered<T: Copy>(c: &Controller<T>) -> Vec<T> {
    let mut out = Vec::new();
    c.for_each_entry(|e| out.push(*e.item));
    out
}

#[test]
fn scroll_events_are_coalesced_per_frame() {
    let mut c = Controller::new(CarouselOptions::new());
    c.set_items(alloc::vec!["a", "b", "c", "d"]);
    c.on_resize(geometry(100.0), probe(&SIZES));

    for raw in [10.0, 25.0, 60.0] {
        let event = scroll_event(&c, raw);
        c.on_scroll(event);
    }
    assert!(c.has_pending_scroll());
    // Nothing is applied until the frame tick.
    assert_eq!(c.state().offset(), 0.0);

    assert_eq!(c.tick(), Some(60.0));
    assert_eq!(c.state().offset(), 60.0);
    assert_eq!(c.tick(), None);
}

#[test]
fn tick_clamps_elastic_overscroll() {
    let mut c = Controller::<&'static str>::new(CarouselOptions::new());
    c.set_items(alloc::vec!["a", "b", "c", "d"]);
    c.on_resize(geometry(100.0), probe(&SIZES));

    c.on_scroll(ScrollEvent::new(100.0, -20.0, 200.0));
    assert_eq!(c.tick(), Some(0.0));
    c.on_scroll(ScrollEvent::new(100.0, 500.0, 200.0));
    assert_eq!(c.tick(), Some(100.0));
}

#[test]
fn end_to_end_carousel_session() {
    let mut c = Controller::new(CarouselOptions::new());
    c.set_items(alloc::vec!["a", "b", "c", "d"]);
    assert!(c.on_resize(geometry(100.0), probe(&SIZES)).is_none());

    assert_eq!(rendered(&c), ["a", "b", "c", "d"]);
    assert_eq!(
        c.controls(),
        ControlVisibility {
            previous_visible: false,
            next_visible: true,
        }
    );
    assert_eq!(
        c.next(),
        Some(ScrollTo {
            target_offset: 80.0,
            animated: true,
        })
    );

    let event = scroll_event(&c, 80.0);
    c.on_scroll(event);
    c.tick();
    let range = c.state().range().unwrap();
    assert_eq!((range.visible_start, range.visible_stop), (1, 3));

    assert_eq!(c.previous().map(|s| s.target_offset), Some(0.0));
    assert_eq!(
        c.controls(),
        ControlVisibility {
            previous_visible: true,
            next_visible: false,
        }
    );
}

#[test]
fn long_track_renders_only_the_window() {
    let sizes: Vec<f64> = (0..1000).map(|i| 40.0 + (i % 3) as f64 * 10.0).collect();
    let mut c = Controller::new(CarouselOptions::new());
    c.set_items((0..1000usize).collect());
    c.on_resize(geometry(300.0), probe(&sizes));

    let event = ScrollEvent::new(300.0, 10_000.0, c.state().track_extent());
    c.on_scroll(event);
    c.tick();

    let mut entries = Vec::new();
    c.collect_entries(&mut entries);
    assert!(entries.len() < 12);
    assert!(entries.first().unwrap().offset < 10_000.0);
    assert!(entries.last().unwrap().offset + entries.last().unwrap().size >= 10_300.0);
    for pair in entries.windows(2) {
        assert_eq!(pair[1].index, pair[0].index + 1);
        assert_eq!(pair[1].offset, pair[0].offset + pair[0].size);
    }
}

#[test]
fn initial_index_jump_is_adopted_immediately() {
    let options = CarouselOptions::new().with_initial_index(Some(2));
    let mut c = Controller::new(options);
    c.set_items(alloc::vec!["a", "b", "c", "d"]);

    let jump = c.on_resize(geometry(100.0), probe(&SIZES));
    // Item 2 starts at 80, past the end (170 - 100): host and state both settle at 70.
    assert_eq!(
        jump,
        Some(ScrollTo {
            target_offset: 70.0,
            animated: false,
        })
    );
    assert_eq!(c.state().offset(), 70.0);
    assert_eq!(c.state().range().map(|r| r.visible_start), Some(1));

    // A resize does not jump again.
    assert!(c.on_resize(geometry(100.0), probe(&SIZES)).is_none());
    assert_eq!(c.state().offset(), 70.0);
}

#[test]
fn entries_flag_first_and_last_items() {
    let mut c = Controller::new(CarouselOptions::new());
    c.set_items(alloc::vec!["a", "b", "c"]);
    c.on_resize(geometry(1000.0), probe(&SIZES));

    let mut entries = Vec::new();
    c.collect_entries(&mut entries);
    let flags: Vec<(bool, bool)> = entries.iter().map(|e| (e.first, e.last)).collect();
    assert_eq!(flags, [(true, false), (false, false), (false, true)]);
}

#[test]
fn keyed_items_remeasure_after_replacement() {
    let mut widths = HashMap::new();
    widths.insert("apple", 50.0);
    widths.insert("kiwi", 30.0);
    widths.insert("melon", 70.0);
    widths.insert("fig", 20.0);

    let mut c = Controller::new_with_key(CarouselOptions::new(), |s: &String| s.clone());
    let names = |list: &[&str]| list.iter().map(|s| String::from(*s)).collect::<Vec<_>>();

    c.set_items(names(&["apple", "kiwi", "melon"]));
    {
        let items = c.items().to_vec();
        c.on_resize(geometry(100.0), |i| {
            items
                .get(i)
                .map(|s| Measurement::new(widths[s.as_str()], 10.0))
        });
    }
    assert_eq!(c.state().track_extent(), 150.0);

    // "kiwi" replaced by "fig": index 1 onwards is stale.
    c.set_items(names(&["apple", "fig", "melon"]));
    let items = c.items().to_vec();
    c.on_resize(geometry(100.0), |i| {
        items
            .get(i)
            .map(|s| Measurement::new(widths[s.as_str()], 10.0))
    });
    let sizes: Vec<f64> = c.state().cache().entries().iter().map(|e| e.size).collect();
    assert_eq!(sizes, [50.0, 20.0, 70.0]);
    assert_eq!(c.state().track_extent(), 140.0);
}

#[test]
fn index_keyed_items_reuse_measurements() {
    let mut c = Controller::new(CarouselOptions::new());
    c.set_items(alloc::vec![1u8, 2, 3]);
    c.on_resize(geometry(100.0), probe(&SIZES));

    c.set_items(alloc::vec![3u8, 2, 1]);
    c.on_resize(geometry(100.0), |_| Some(Measurement::new(999.0, 1.0)));
    assert_eq!(c.state().track_extent(), 150.0);
}

#[test]
fn navigation_before_layout_is_a_no_op() {
    let mut c = Controller::new(CarouselOptions::new());
    c.set_items(alloc::vec!["a"]);
    assert_eq!(c.next(), None);
    assert_eq!(c.previous(), None);
    assert!(rendered(&c).is_empty());
}
