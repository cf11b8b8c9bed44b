// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wraparound navigation over a five-item carousel.
//!
//! Drives the controller through a short interaction sequence and prints
//! the indicator strip after each step.
//!
//! Run:
//! - `cargo run -p zoetrope_demos --example controller_basics`

use zoetrope_controller::controller::{Carousel, CarouselOptions};
use zoetrope_controller::types::CarouselItem;
use zoetrope_engine::StepEngine;

fn pump(carousel: &mut Carousel<StepEngine>) {
    for _event in carousel.engine_mut().drain_events() {
        carousel.on_engine_select();
    }
}

fn strip(carousel: &Carousel<StepEngine>, items: &[CarouselItem<&'static str, ()>]) -> String {
    carousel
        .render_model(items)
        .indicators
        .iter()
        .map(|i| if i.is_active { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    let items = [
        CarouselItem::new("banner", ()),
        CarouselItem::new("mission", ()),
        CarouselItem::new("projects", ()),
        CarouselItem::new("sponsors", ()),
        CarouselItem::new("donate", ()),
    ];
    let mut carousel = Carousel::new(
        StepEngine::new(items.len()),
        items.len(),
        CarouselOptions::default(),
        0,
    );

    println!("start      {}", strip(&carousel, &items));

    let mut visited = Vec::new();
    let mut step = |carousel: &mut Carousel<StepEngine>, label: &str| {
        pump(carousel);
        visited.push(carousel.active_index().unwrap());
        println!("{label:<10} {}", strip(carousel, &items));
    };

    carousel.next(0);
    step(&mut carousel, "next");
    carousel.next(0);
    step(&mut carousel, "next");
    carousel.prev(0);
    step(&mut carousel, "prev");
    carousel.go_to(4, 0);
    step(&mut carousel, "go_to(4)");
    carousel.next(0);
    step(&mut carousel, "next");
    drop(step);

    // Wraparound visits 1, 2, 1, 4 and closes the circle back at 0.
    assert_eq!(visited, [1, 2, 1, 4, 0]);

    // Negative and overshooting jumps wrap the same way.
    carousel.go_to(-2, 0);
    pump(&mut carousel);
    assert_eq!(carousel.active_index(), Some(3));
    println!("go_to(-2)  {}", strip(&carousel, &items));
}
