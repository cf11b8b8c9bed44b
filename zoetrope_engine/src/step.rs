// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic in-memory reference engine.
//!
//! ## Overview
//!
//! [`StepEngine`] implements the [`Engine`] contract over a plain counter:
//! no animation, no layout, no timing. It exists so controller logic, demos,
//! and benches can run against real engine semantics — readiness, clamp vs.
//! loop edge behavior, in-view windows, ordered selection notifications —
//! without a toolkit in the loop.
//!
//! ## Notification model
//!
//! Every selection change appends a [`SelectEvent`]. The host drains the
//! queue with [`StepEngine::drain_events`] and forwards each event to its
//! controller, preserving emission order.

use alloc::vec::Vec;

use crate::engine::{AutoplayPlugin, Engine, SelectEvent};

/// No-op autoplay handle that records how it was driven.
///
/// Stands in for an engine-native autoplay plugin. The counters let tests
/// assert that a controller forwarded `play`/`stop`/`reset` at the right
/// moments without any timer actually running.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct NoopAutoplay {
    /// Number of `play` calls received.
    pub plays: u32,
    /// Number of `stop` calls received.
    pub stops: u32,
    /// Number of `reset` calls received.
    pub resets: u32,
}

impl AutoplayPlugin for NoopAutoplay {
    fn play(&mut self) {
        self.plays += 1;
    }

    fn stop(&mut self) {
        self.stops += 1;
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}

/// Deterministic reference engine over a fixed item count.
///
/// ## Semantics
///
/// - Commands issued while not ready are ignored, matching real engines
///   that drop input during initialization.
/// - `scroll_to` clamps out-of-range indices into `[0, count)`.
/// - Native stepping clamps at the edges unless engine-level looping is
///   enabled, in which case it wraps.
/// - The in-view window starts at the selected index and holds
///   `min(viewport, count)` items; without looping the window shifts back
///   near the end so it stays full, the way a scroll container that cannot
///   scroll past its content behaves.
#[derive(Clone, Debug)]
pub struct StepEngine {
    count: usize,
    viewport: usize,
    selected: usize,
    ready: bool,
    looping: bool,
    events: Vec<SelectEvent>,
    autoplay: Option<NoopAutoplay>,
}

impl StepEngine {
    /// Create a ready engine over `count` items, one item per view,
    /// looping off, no autoplay plugin.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            viewport: 1,
            selected: 0,
            ready: true,
            looping: false,
            events: Vec::new(),
            autoplay: None,
        }
    }

    /// Set how many items are visible at once (minimum 1).
    pub fn set_viewport(&mut self, viewport: usize) {
        self.viewport = viewport.max(1);
    }

    /// Enable or disable engine-level looping for native stepping.
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Flip the readiness latch.
    ///
    /// Engines come up not-ready and flip once; the setter is bidirectional
    /// so tests can stage mount races explicitly.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Install a [`NoopAutoplay`] plugin handle.
    pub fn enable_autoplay(&mut self) {
        self.autoplay = Some(NoopAutoplay::default());
    }

    /// Inspect the recording autoplay plugin, if installed.
    pub fn autoplay_state(&self) -> Option<&NoopAutoplay> {
        self.autoplay.as_ref()
    }

    /// Number of items the engine scrolls over.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Drain all recorded selection notifications, in emission order.
    pub fn drain_events(&mut self) -> Vec<SelectEvent> {
        core::mem::take(&mut self.events)
    }

    fn select(&mut self, index: usize) {
        if index != self.selected {
            self.selected = index;
            self.events.push(SelectEvent { index });
        }
    }
}

impl Engine for StepEngine {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn scroll_to(&mut self, index: usize) {
        if !self.ready || self.count == 0 {
            return;
        }
        self.select(index.min(self.count - 1));
    }

    fn scroll_next(&mut self) {
        if !self.ready || self.count == 0 {
            return;
        }
        let next = if self.looping {
            (self.selected + 1) % self.count
        } else {
            (self.selected + 1).min(self.count - 1)
        };
        self.select(next);
    }

    fn scroll_prev(&mut self) {
        if !self.ready || self.count == 0 {
            return;
        }
        let prev = if self.looping {
            (self.selected + self.count - 1) % self.count
        } else {
            self.selected.saturating_sub(1)
        };
        self.select(prev);
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn visible_indices(&self) -> Vec<usize> {
        if !self.ready || self.count == 0 {
            return Vec::new();
        }
        let len = self.viewport.min(self.count);
        if self.looping {
            (0..len).map(|i| (self.selected + i) % self.count).collect()
        } else {
            // Keep the window full near the end of the item strip.
            let start = self.selected.min(self.count - len);
            (start..start + len).collect()
        }
    }

    fn autoplay(&mut self) -> Option<&mut dyn AutoplayPlugin> {
        self.autoplay
            .as_mut()
            .map(|plugin| plugin as &mut dyn AutoplayPlugin)
    }
}
