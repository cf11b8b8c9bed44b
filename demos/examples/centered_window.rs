// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-item viewports: the active item is the centered element of the
//! in-view window.
//!
//! A three-up logo strip over nine items; scrolling moves the window and
//! the indicator follows the window's middle, not its leading edge.
//!
//! Run:
//! - `cargo run -p zoetrope_demos --example centered_window`

use zoetrope_controller::controller::{Carousel, CarouselOptions};
use zoetrope_engine::{Engine, StepEngine};

fn pump(carousel: &mut Carousel<StepEngine>) {
    for _event in carousel.engine_mut().drain_events() {
        carousel.on_engine_select();
    }
}

fn main() {
    let options = CarouselOptions {
        viewport_size: 3,
        ..CarouselOptions::default()
    };
    let mut engine = StepEngine::new(9);
    engine.set_viewport(3);
    let mut carousel = Carousel::new(engine, 9, options, 0);

    for target in [0_i64, 2, 4, 8] {
        carousel.go_to(target, 0);
        pump(&mut carousel);
        let window = carousel.engine().visible_indices();
        println!(
            "scrolled to {target}: window {window:?} -> active {:?}",
            carousel.active_index()
        );
    }

    // The window [4, 5, 6] centers on 5 ...
    carousel.go_to(4, 0);
    pump(&mut carousel);
    assert_eq!(carousel.active_index(), Some(5));

    // ... and at the end of the strip the engine keeps the window full,
    // so [6, 7, 8] centers on 7.
    carousel.go_to(8, 0);
    pump(&mut carousel);
    assert_eq!(carousel.engine().visible_indices(), [6, 7, 8]);
    assert_eq!(carousel.active_index(), Some(7));
}
