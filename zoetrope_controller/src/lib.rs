// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoetrope_controller --heading-base-level=0

//! Zoetrope Controller: a deterministic, `no_std` carousel controller.
//!
//! ## Overview
//!
//! Image banners, testimonial sliders, logo strips, and content carousels
//! all wrap the same scroll-snap engine and all need the same four pieces
//! of logic: mirror the engine's selection into an active index, turn
//! previous/next/go-to intents into engine calls with circular wraparound,
//! bind `(items, active index)` to an indicator model, and run an autoplay
//! timer that yields to manual interaction. This crate implements those
//! four pieces once, parameterized per instance, over the engine contract
//! in [`zoetrope_engine`].
//!
//! - [`sync::SelectionSync`] — derives the canonical active index from
//!   engine notifications, including the centered item of a multi-item
//!   in-view window.
//! - [`nav::Dispatcher`] — resolves [`types::NavigationIntent`]s with
//!   modulo arithmetic independent of engine looping, defers across
//!   mount races, and degrades cleanly on empty or singleton collections.
//! - [`indicators::bind`] — the pure render-model mapping.
//! - [`autoplay::Autoplay`] — a deadline-polled advance timer with
//!   accumulate-and-clear pause reasons and reset-not-resume semantics.
//! - [`controller::Carousel`] — the per-instance facade wiring the four
//!   to one engine passed in as a dependency.
//!
//! ## Data flow
//!
//! User interaction or a timer tick → dispatcher → engine; the engine's
//! "selection changed" notification → synchronizer → canonical state →
//! indicator binder → UI. The active index is a derived projection of
//! engine scroll position, never the source of truth, so a stale
//! indicator self-corrects on the next notification.
//!
//! ## Ordering and logical races
//!
//! Everything is single-threaded and host-driven: notifications are
//! forwarded in emission order, timer deadlines are polled with a
//! caller-supplied `now_ms`, and there are no callbacks out of this crate.
//! The one logical race — an autoplay tick falling due just as the user
//! navigates — is resolved by policy: an accepted manual intent restarts
//! the timer interval from zero, so the automatic advance lands a full
//! interval later.
//!
//! ## Host loop sketch
//!
//! ```
//! use zoetrope_controller::controller::{Carousel, CarouselOptions};
//! use zoetrope_controller::types::CarouselItem;
//! use zoetrope_engine::StepEngine;
//!
//! let items = [
//!     CarouselItem::new("first", ()),
//!     CarouselItem::new("second", ()),
//!     CarouselItem::new("third", ()),
//! ];
//! let options = CarouselOptions {
//!     autoplay_interval_ms: Some(4000),
//!     ..CarouselOptions::default()
//! };
//! let mut carousel = Carousel::new(StepEngine::new(3), items.len(), options, 0);
//!
//! // Each host frame: poll autoplay, forward engine notifications,
//! // re-derive the render model.
//! let mut now_ms = 0;
//! for _frame in 0..5 {
//!     now_ms += 1000;
//!     carousel.tick(now_ms);
//!     for _event in carousel.engine_mut().drain_events() {
//!         carousel.on_engine_select();
//!     }
//!     let model = carousel.render_model(&items);
//!     assert_eq!(model.indicators.iter().filter(|i| i.is_active).count(), 1);
//! }
//!
//! // One automatic advance happened at t=4000.
//! assert_eq!(carousel.active_index(), Some(1));
//!
//! // Teardown is idempotent and final.
//! carousel.dispose();
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod autoplay;
pub mod controller;
pub mod indicators;
pub mod nav;
pub mod sync;
pub mod types;
