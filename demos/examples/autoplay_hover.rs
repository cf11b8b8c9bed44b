// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay under simulated time: scheduled advances, hover suspension,
//! and the reset-on-manual-navigation policy.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p zoetrope_demos --example autoplay_hover`

use zoetrope_controller::controller::{Carousel, CarouselOptions};
use zoetrope_engine::StepEngine;

fn pump(carousel: &mut Carousel<StepEngine>) {
    for _event in carousel.engine_mut().drain_events() {
        carousel.on_engine_select();
    }
}

fn main() {
    env_logger::init();

    let options = CarouselOptions {
        autoplay_interval_ms: Some(4000),
        ..CarouselOptions::default()
    };
    let mut carousel = Carousel::new(StepEngine::new(4), 4, options, 0);

    let mut advances = Vec::new();
    // One simulated second per frame, with scripted interaction:
    // hover from t=5s to t=7s, a manual click at t=10s.
    for second in 1..=20_u64 {
        let now_ms = second * 1000;
        match second {
            5 => {
                log::info!("pointer enters at t={second}s");
                carousel.pointer_enter();
            }
            7 => {
                log::info!("pointer leaves at t={second}s");
                carousel.pointer_leave(now_ms);
            }
            10 => {
                log::info!("manual next at t={second}s");
                carousel.next(now_ms);
            }
            _ => {}
        }
        if carousel.tick(now_ms).is_some() {
            advances.push(second);
        }
        pump(&mut carousel);
    }

    println!("automatic advances at t(s) = {advances:?}");
    // t=4s fires on schedule; the 8s tick is gone because hover ended at
    // 7s restarted the interval (next due 11s), and the 10s click pushed
    // it again, so the timer fires at 14s and then 18s.
    assert_eq!(advances, [4, 14, 18]);

    carousel.dispose();
    assert_eq!(carousel.tick(60_000), None);
    println!("disposed cleanly; no timer survives teardown");
}
