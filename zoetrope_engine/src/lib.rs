// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoetrope_engine --heading-base-level=0

//! Zoetrope Engine: the scroll-snap engine contract for carousel controllers.
//!
//! A carousel controller needs very little from the engine that owns true
//! scroll position: issue a scroll command, read the current selection, read
//! the in-view window, and (optionally) drive an engine-native autoplay
//! plugin. This crate captures exactly that surface as the [`Engine`] trait
//! so controller logic stays testable against a fake with no toolkit or DOM
//! dependency.
//!
//! - [`Engine`]: scroll commands, selection and in-view reads, readiness.
//! - [`AutoplayPlugin`]: the `play`/`stop`/`reset` handle an engine may
//!   expose for its own autoplay feature.
//! - [`SelectEvent`]: a selection-changed notification record.
//! - [`StepEngine`]: a deterministic in-memory reference engine with a
//!   drainable notification queue, used by tests, demos, and benches.
//!
//! Real engines push "selection changed" notifications through whatever
//! callback mechanism their platform provides. This crate models the stream
//! in the deterministic, host-driven idiom instead: the engine records
//! [`SelectEvent`]s, the host drains them in order and forwards each one to
//! the controller. No reordering, no hidden callbacks.
//!
//! # Example
//!
//! ```rust
//! use zoetrope_engine::{Engine, StepEngine};
//!
//! // Five items, one visible at a time, engine-level looping off.
//! let mut engine = StepEngine::new(5);
//!
//! engine.scroll_to(3);
//! engine.scroll_next();
//! assert_eq!(engine.selected_index(), 4);
//!
//! // Without looping, the native step clamps at the edge.
//! engine.scroll_next();
//! assert_eq!(engine.selected_index(), 4);
//!
//! // Each selection change was recorded in order.
//! let events: Vec<_> = engine.drain_events().iter().map(|e| e.index).collect();
//! assert_eq!(events, [3, 4]);
//! ```

#![no_std]

extern crate alloc;

pub mod engine;
pub mod step;

pub use engine::{AutoplayPlugin, Engine, SelectEvent};
pub use step::{NoopAutoplay, StepEngine};
