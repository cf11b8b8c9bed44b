// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of the reference engine: scroll, step, and drain events.

use zoetrope_engine::{Engine, StepEngine};

fn main() {
    let mut engine = StepEngine::new(6);
    engine.set_viewport(3);

    engine.scroll_to(2);
    engine.scroll_next();
    println!(
        "selected={}, window={:?}",
        engine.selected_index(),
        engine.visible_indices()
    );

    // Without looping, the native step clamps at the last item.
    engine.scroll_to(5);
    engine.scroll_next();
    println!("clamped at {}", engine.selected_index());

    let indices: Vec<_> = engine.drain_events().iter().map(|e| e.index).collect();
    println!("notifications, in order: {indices:?}");
}
